//! Core types and constants for path analysis

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::GeoPoint;
