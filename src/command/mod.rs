//! Command parsing and the interactive session

mod parser;
mod session;

pub use parser::{
    evaluate, parse_command, AvailabilityQuery, Command, Response, AVAILABILITY_PREFIX,
    UNKNOWN_COMMAND_MESSAGE,
};
pub(crate) use session::read_line_lossy;
pub use session::{run_session, SessionStats, PROMPT};
