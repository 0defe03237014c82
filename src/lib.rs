//! hotel-avail Library
//!
//! Answers "how many rooms of type R are free at hotel H over dates D"
//! against a hotel catalog and booking list loaded from JSON files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  command /      │────▶│  availability    │────▶│  catalog        │
//! │  batch          │     │  (engine)        │ &   │  (hotels,       │
//! │  (stdin/script) │     │                  │     │   bookings)     │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//! ```
//!
//! The catalog is loaded once and only ever borrowed immutably.
//!
//! # Modules
//!
//! - [`catalog`] - Hotel/booking records and JSON loading
//! - [`availability`] - Date ranges and the free-room count
//! - [`command`] - Command parsing and the interactive session
//! - [`batch`] - Script evaluation, optionally parallel
//! - [`date`] - `YYYYMMDD` parsing
//! - [`error`] - Error types

pub mod availability;
pub mod batch;
pub mod catalog;
pub mod command;
pub mod date;
pub mod error;

pub use availability::{availability, DateRange};
pub use batch::process_script_file;
pub use catalog::{Booking, Catalog, Hotel, Room};
pub use command::{evaluate, parse_command, run_session, Command, Response, SessionStats};
pub use error::{AvailError, AvailResult};
