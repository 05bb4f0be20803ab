//! Coordinate range checks shared by the grid and API layers

use crate::core::GeoPoint;
use crate::validation::error::{PathError, PathResult};

pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}

/// Check both coordinates of a point against global bounds
pub fn validate_point(point: &GeoPoint) -> PathResult<()> {
    if !is_valid_latitude(point.latitude) {
        return Err(PathError::out_of_range(
            "latitude",
            point.latitude,
            "[-90, 90]",
        ));
    }
    if !is_valid_longitude(point.longitude) {
        return Err(PathError::out_of_range(
            "longitude",
            point.longitude,
            "[-180, 180]",
        ));
    }
    Ok(())
}

/// Wrap a longitude into [-180, 180); +180 maps to -180 (same meridian)
pub fn normalize_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
