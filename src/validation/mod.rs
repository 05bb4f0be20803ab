//! Input validation and error taxonomy

pub mod data;
pub mod error;

pub use data::{is_valid_latitude, is_valid_longitude, normalize_longitude, validate_point};
pub use error::{PathError, PathResult};
