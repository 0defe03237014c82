//! Catalog loading
//!
//! Reads the hotel and booking JSON files once at startup and bundles them
//! into a read-only [`Catalog`] that every query borrows.

use super::model::{Booking, Hotel};
use crate::error::{AvailError, AvailResult};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Hotels and bookings loaded at startup, never mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
}

impl Catalog {
    /// Build a catalog from already-parsed records
    ///
    /// Hotel ids must be unique. Bookings with departure before arrival or
    /// pointing at an unknown hotel are kept but logged.
    pub fn new(hotels: Vec<Hotel>, bookings: Vec<Booking>) -> AvailResult<Self> {
        let mut seen = HashSet::new();
        for hotel in &hotels {
            if !seen.insert(hotel.id.as_str()) {
                return Err(AvailError::DuplicateHotel(hotel.id.clone()));
            }
        }

        for (idx, booking) in bookings.iter().enumerate() {
            if booking.departure < booking.arrival {
                warn!(
                    "Booking {}: departure {} is before arrival {}",
                    idx + 1,
                    booking.departure,
                    booking.arrival
                );
            }
            if !seen.contains(booking.hotel_id.as_str()) {
                warn!("Booking {}: unknown hotel {:?}", idx + 1, booking.hotel_id);
            }
        }

        Ok(Self { hotels, bookings })
    }

    /// Load both catalog files
    pub fn load(hotels_path: &Path, bookings_path: &Path) -> AvailResult<Self> {
        let hotels = load_hotels(hotels_path)?;
        let bookings = load_bookings(bookings_path)?;
        info!(
            "Loaded {} hotels and {} bookings",
            hotels.len(),
            bookings.len()
        );
        Self::new(hotels, bookings)
    }

    /// Look up a hotel by exact, case-sensitive id
    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

/// Read a JSON list of hotels
pub fn load_hotels(path: &Path) -> AvailResult<Vec<Hotel>> {
    read_json_list(path)
}

/// Read a JSON list of bookings
pub fn load_bookings(path: &Path) -> AvailResult<Vec<Booking>> {
    read_json_list(path)
}

fn read_json_list<T: DeserializeOwned>(path: &Path) -> AvailResult<Vec<T>> {
    debug!("Reading {:?}", path);
    let content = fs::read_to_string(path).map_err(|source| AvailError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AvailError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}
