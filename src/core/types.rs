//! Core data types

use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
    /// Display name when the point came from a place search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn named(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_construction() {
        let p = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(p.latitude, 40.7128);
        assert_eq!(p.longitude, -74.0060);
        assert!(p.name.is_none());

        let q = GeoPoint::named(51.5074, -0.1278, "London");
        assert_eq!(q.name.as_deref(), Some("London"));
    }

    #[test]
    fn test_point_serialization_skips_missing_name() {
        let p = GeoPoint::new(40.7128, -74.0060);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("name"));

        let q: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, q);
    }
}
