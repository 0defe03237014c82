//! Hotel, room and booking records as they appear in the catalog files

use chrono::NaiveDate;
use serde::Deserialize;

/// A hotel and the rooms it declares
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Number of declared rooms of the given type
    pub fn room_count(&self, room_type: &str) -> usize {
        self.rooms.iter().filter(|r| r.room_type == room_type).count()
    }
}

/// A single room; only its type takes part in counting
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_type: String,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// A booking against a hotel's room-type capacity
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub hotel_id: String,
    pub room_type: String,
    #[serde(deserialize_with = "crate::date::compact::deserialize")]
    pub arrival: NaiveDate,
    #[serde(deserialize_with = "crate::date::compact::deserialize")]
    pub departure: NaiveDate,
    #[serde(default)]
    pub room_rate: Option<String>,
}

impl Booking {
    /// Whether this booking consumes capacity of `room_type` at `hotel_id`
    pub fn matches(&self, hotel_id: &str, room_type: &str) -> bool {
        self.hotel_id == hotel_id && self.room_type == room_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": "H1",
            "name": "Hotel California",
            "roomTypes": [{ "code": "SGL", "description": "Single Room" }],
            "rooms": [
                { "roomType": "SGL", "roomId": "101" },
                { "roomType": "SGL", "roomId": "102" },
                { "roomType": "DBL", "roomId": "201" }
            ]
        }"#;
        let hotel: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.id, "H1");
        assert_eq!(hotel.name.as_deref(), Some("Hotel California"));
        assert_eq!(hotel.room_count("SGL"), 2);
        assert_eq!(hotel.room_count("DBL"), 1);
        assert_eq!(hotel.room_count("sgl"), 0);
    }

    #[test]
    fn test_hotel_without_rooms_rejected() {
        for json in [
            r#"{ "id": "H1" }"#,
            r#"{ "id": "H1", "Rooms": [ { "roomType": "SGL" } ] }"#,
        ] {
            assert!(serde_json::from_str::<Hotel>(json).is_err(), "accepted {}", json);
        }

        let empty: Hotel = serde_json::from_str(r#"{ "id": "H1", "rooms": [] }"#).unwrap();
        assert_eq!(empty.room_count("SGL"), 0);
    }

    #[test]
    fn test_booking_dates_parsed() {
        let json = r#"{ "hotelId": "H1", "arrival": "20240901", "departure": "20240903",
                        "roomType": "DBL", "roomRate": "Prepaid" }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.arrival, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(booking.departure, NaiveDate::from_ymd_opt(2024, 9, 3).unwrap());
        assert!(booking.matches("H1", "DBL"));
        assert!(!booking.matches("H1", "SGL"));
        assert!(!booking.matches("H2", "DBL"));
    }

    #[test]
    fn test_booking_bad_date_rejected() {
        let json = r#"{ "hotelId": "H1", "arrival": "2024-09-01", "departure": "20240903",
                        "roomType": "DBL" }"#;
        let err = serde_json::from_str::<Booking>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }

    #[test]
    fn test_booking_missing_field_rejected() {
        let json = r#"{ "hotelId": "H1", "arrival": "20240901", "departure": "20240903" }"#;
        assert!(serde_json::from_str::<Booking>(json).is_err());
    }
}
