//! Command line parsing and evaluation
//!
//! The only recognised command is
//! `Availability(<hotelId>, <YYYYMMDD[-YYYYMMDD]>, <roomType>)`. Arguments
//! are split on exactly `", "` so existing command scripts keep working.

use crate::availability::availability;
use crate::catalog::Catalog;
use crate::error::{AvailError, AvailResult};
use std::fmt;

/// Literal command name, matched case-sensitively
pub const AVAILABILITY_PREFIX: &str = "Availability";

/// Text printed for anything that is not an availability command
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "Unknown command. Use Availability(hotelId, dateRange, roomType).";

/// Arguments of an `Availability(...)` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub hotel_id: String,
    pub date_range: String,
    pub room_type: String,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Availability(AvailabilityQuery),
    Unknown,
}

/// Outcome of evaluating one line, ready for printing
#[derive(Debug)]
pub enum Response {
    Available(i64),
    Failed(AvailError),
    Unknown,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Available(count) => write!(f, "{}", count),
            Response::Failed(e) => write!(f, "Error: {}", e),
            Response::Unknown => f.write_str(UNKNOWN_COMMAND_MESSAGE),
        }
    }
}

/// Parse one input line
///
/// Lines that do not have the `Availability(...)` shape are
/// [`Command::Unknown`]; a well-shaped command with the wrong number of
/// arguments is an error.
pub fn parse_command(line: &str) -> AvailResult<Command> {
    let args = match line
        .strip_prefix(AVAILABILITY_PREFIX)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(args) => args,
        None => return Ok(Command::Unknown),
    };

    let parts: Vec<&str> = args.split(", ").collect();
    if parts.len() != 3 {
        return Err(AvailError::ArgumentCount(parts.len()));
    }

    Ok(Command::Availability(AvailabilityQuery {
        hotel_id: parts[0].to_string(),
        date_range: parts[1].to_string(),
        room_type: parts[2].to_string(),
    }))
}

/// Parse and run one line against the catalog
pub fn evaluate(catalog: &Catalog, line: &str) -> Response {
    match parse_command(line) {
        Ok(Command::Availability(q)) => {
            match availability(catalog, &q.hotel_id, &q.date_range, &q.room_type) {
                Ok(count) => Response::Available(count),
                Err(e) => Response::Failed(e),
            }
        }
        Ok(Command::Unknown) => Response::Unknown,
        Err(e) => Response::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Hotel, Room};

    fn query(hotel_id: &str, date_range: &str, room_type: &str) -> Command {
        Command::Availability(AvailabilityQuery {
            hotel_id: hotel_id.to_string(),
            date_range: date_range.to_string(),
            room_type: room_type.to_string(),
        })
    }

    #[test]
    fn test_parse_availability() {
        assert_eq!(
            parse_command("Availability(H1, 20240404, SGL)").unwrap(),
            query("H1", "20240404", "SGL")
        );
        assert_eq!(
            parse_command("Availability(H1, 20240404-20240406, DBL)").unwrap(),
            query("H1", "20240404-20240406", "DBL")
        );
    }

    #[test]
    fn test_parse_unknown() {
        for line in [
            "availability(H1, 20240404, SGL)",
            "Search(H1, 365, SGL)",
            "Availability H1 20240404 SGL",
            "Availability(H1, 20240404, SGL",
            "hello",
        ] {
            assert_eq!(parse_command(line).unwrap(), Command::Unknown, "{:?}", line);
        }
    }

    #[test]
    fn test_separator_is_strict() {
        assert!(matches!(
            parse_command("Availability(H1,20240404,SGL)"),
            Err(AvailError::ArgumentCount(1))
        ));
        assert!(matches!(
            parse_command("Availability(H1, 20240404)"),
            Err(AvailError::ArgumentCount(2))
        ));
        assert!(matches!(
            parse_command("Availability(H1, 20240404, SGL, extra)"),
            Err(AvailError::ArgumentCount(4))
        ));
        // a doubled space ends up inside the token
        assert_eq!(
            parse_command("Availability(H1,  20240404, SGL)").unwrap(),
            query("H1", " 20240404", "SGL")
        );
    }

    #[test]
    fn test_response_rendering() {
        let catalog = Catalog::new(
            vec![Hotel {
                id: "H1".to_string(),
                name: None,
                rooms: vec![Room {
                    room_type: "SGL".to_string(),
                    room_id: None,
                }],
            }],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(
            evaluate(&catalog, "Availability(H1, 20240404, SGL)").to_string(),
            "1"
        );
        assert_eq!(
            evaluate(&catalog, "Availability(H2, 20240404, SGL)").to_string(),
            "Error: Hotel not found"
        );
        assert_eq!(
            evaluate(&catalog, "Availability(H1, 20240404, DBL)").to_string(),
            "Error: Room type not found in hotel"
        );
        assert_eq!(
            evaluate(&catalog, "Availability(H1, 20240410-20240401, SGL)").to_string(),
            "Error: Invalid date range"
        );
        assert_eq!(
            evaluate(&catalog, "Availability(H1, 2024-04-04, SGL)").to_string(),
            "Error: Invalid date format: '2024-04-04' (expected YYYYMMDD)"
        );
        assert_eq!(evaluate(&catalog, "quit").to_string(), UNKNOWN_COMMAND_MESSAGE);
    }
}
