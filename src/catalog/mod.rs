//! Hotel catalog and booking list

mod loader;
mod model;

pub use loader::{load_bookings, load_hotels, Catalog};
pub use model::{Booking, Hotel, Room};
