//! Availability engine

mod engine;
mod range;

pub use engine::availability;
pub use range::DateRange;
