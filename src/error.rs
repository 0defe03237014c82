//! Error types for hotel-avail

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog loading and availability queries
#[derive(Error, Debug)]
pub enum AvailError {
    /// No hotel with the requested identifier
    #[error("Hotel not found")]
    HotelNotFound(String),

    /// Hotel exists but has no rooms of the requested type
    #[error("Room type not found in hotel")]
    RoomTypeNotFound { hotel_id: String, room_type: String },

    /// Date token is not an eight-digit YYYYMMDD calendar date
    #[error("Invalid date format: '{0}' (expected YYYYMMDD)")]
    InvalidDateFormat(String),

    /// Range start falls after its end
    #[error("Invalid date range")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Availability command with the wrong number of arguments
    #[error("Expected 3 arguments (hotelId, dateRange, roomType), got {0}")]
    ArgumentCount(usize),

    /// Catalog file could not be read
    #[error("Failed to read {path:?}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not the expected JSON shape
    #[error("Failed to parse {path:?}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two hotels share an identifier
    #[error("Duplicate hotel id in catalog: {0}")]
    DuplicateHotel(String),

    /// Worker pool for script evaluation could not be built
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for hotel-avail operations
pub type AvailResult<T> = Result<T, AvailError>;
