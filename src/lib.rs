//! VHF/UHF path planning core
//!
//! Pure geospatial and radio-propagation math for point-to-point amateur
//! radio path estimation: great-circle bearing and distance, Maidenhead
//! grid-square locators, and a simplified link-budget model.
//!
//! The crate holds no state between calls; everything takes explicit numeric
//! inputs and returns explicit values. Map rendering and geocoding belong to
//! the UI shell, which drives the [`map::MapView`] capability trait.

pub mod api;
pub mod core;
pub mod geodesy;
pub mod grid;
pub mod link;
pub mod map;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::api::formatting::{
    format_coordinate, format_point, CoordinateAxis, CsvFormatter, JsonFormatter, TextFormatter,
};
pub use crate::api::{AppState, PathAnalyzer, PathReport};
pub use crate::core::{GeoPoint, EARTH_RADIUS_KM};
pub use crate::geodesy::{bearing_deg, compass_direction, distance_km, CompassPoint};
pub use crate::grid::{decode, encode, grid_distance_km, GridLocator};
pub use crate::link::{
    LinearTerrain, LinkBudget, LinkBudgetInput, LinkBudgetResult, TerrainModel,
};
pub use crate::map::{MapView, MarkerKind, RecordingMapView};
pub use crate::utils::config::RadioConfig;
pub use crate::validation::{PathError, PathResult};
