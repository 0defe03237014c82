//! Availability computation
//!
//! Free rooms of a type are the declared rooms of that type minus the
//! bookings for the same hotel and type that overlap the query range.
//! The result is not clamped, so an overbooked type reports a negative count.

use super::range::DateRange;
use crate::catalog::Catalog;
use crate::error::{AvailError, AvailResult};
use log::debug;

impl Catalog {
    /// Number of bookings for `hotel_id`/`room_type` that overlap `range`
    pub fn occupied_count(&self, hotel_id: &str, room_type: &str, range: &DateRange) -> usize {
        self.bookings()
            .iter()
            .filter(|b| b.matches(hotel_id, room_type))
            .filter(|b| range.is_occupied_by(b.arrival, b.departure))
            .count()
    }
}

/// Free rooms of `room_type` at `hotel_id` over `date_range`
///
/// Validation order: hotel, room type, date format, date order.
pub fn availability(
    catalog: &Catalog,
    hotel_id: &str,
    date_range: &str,
    room_type: &str,
) -> AvailResult<i64> {
    let hotel = catalog
        .hotel(hotel_id)
        .ok_or_else(|| AvailError::HotelNotFound(hotel_id.to_string()))?;

    let total = hotel.room_count(room_type);
    if total == 0 {
        return Err(AvailError::RoomTypeNotFound {
            hotel_id: hotel_id.to_string(),
            room_type: room_type.to_string(),
        });
    }

    let range = DateRange::parse(date_range)?;
    let occupied = catalog.occupied_count(&hotel.id, room_type, &range);

    debug!(
        "{} {} {}: total {}, occupied {}",
        hotel_id, range, room_type, total, occupied
    );

    Ok(total as i64 - occupied as i64)
}
