//! Great-circle bearing, distance and compass direction
//!
//! All angles are decimal degrees; distances are kilometers on a sphere of
//! radius [`EARTH_RADIUS_KM`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GeoPoint, EARTH_RADIUS_KM};

/// 16-point compass rose label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    /// Clockwise from north, one entry per 22.5 degree sector
    const ORDER: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial great-circle bearing from `from` to `to`, degrees in [0, 360).
///
/// Identical points return 0.0 by convention; the underlying arctangent is
/// undefined there and must not leak through.
pub fn bearing_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    if y == 0.0 && x == 0.0 {
        return 0.0;
    }

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Haversine great-circle distance in kilometers.
///
/// The square-root argument is clamped to [0, 1]; rounding can push it just
/// outside near antipodal or coincident points.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Map a bearing to its 16-point compass label.
///
/// Sector boundaries fall halfway between labels, so 11.24 is still N and
/// 11.26 is NNE; 354 wraps back to N.
pub fn compass_direction(bearing_deg: f64) -> CompassPoint {
    let index = ((bearing_deg / 22.5).round() as i64).rem_euclid(16) as usize;
    CompassPoint::ORDER[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_york() -> GeoPoint {
        GeoPoint::new(40.7128, -74.0060)
    }

    fn london() -> GeoPoint {
        GeoPoint::new(51.5074, -0.1278)
    }

    #[test]
    fn test_ny_to_london_distance() {
        let d = distance_km(&new_york(), &london());
        assert!((d - 5570.2).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn test_ny_to_london_bearing() {
        let b = bearing_deg(&new_york(), &london());
        assert!((b - 51.2).abs() < 1.0, "got {}", b);
        assert_eq!(compass_direction(b), CompassPoint::NE);
    }

    #[test]
    fn test_distance_symmetry() {
        let d1 = distance_km(&new_york(), &london());
        let d2 = distance_km(&london(), &new_york());
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_distance_coincident_is_zero() {
        let p = new_york();
        assert_eq!(distance_km(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_antipodal() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = distance_km(&a, &b);
        // Half the circumference of a 6371 km sphere
        assert!((d - 20015.1).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_bearing_range_and_degenerate() {
        let p = new_york();
        assert_eq!(bearing_deg(&p, &p), 0.0);

        let samples = [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 0.0)),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(-10.0, 0.0)),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, -10.0)),
            (GeoPoint::new(45.0, 45.0), GeoPoint::new(-45.0, -135.0)),
        ];
        for (from, to) in &samples {
            let b = bearing_deg(from, to);
            assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
        }
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!((bearing_deg(&origin, &GeoPoint::new(10.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_deg(&origin, &GeoPoint::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_deg(&origin, &GeoPoint::new(-10.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_deg(&origin, &GeoPoint::new(0.0, -10.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_compass_sector_boundaries() {
        assert_eq!(compass_direction(0.0), CompassPoint::N);
        assert_eq!(compass_direction(11.24), CompassPoint::N);
        assert_eq!(compass_direction(11.26), CompassPoint::NNE);
        assert_eq!(compass_direction(90.0), CompassPoint::E);
        assert_eq!(compass_direction(180.0), CompassPoint::S);
        assert_eq!(compass_direction(270.0), CompassPoint::W);
        assert_eq!(compass_direction(354.0), CompassPoint::N);
        assert_eq!(compass_direction(348.75), CompassPoint::N);
        assert_eq!(compass_direction(348.74), CompassPoint::NNW);
    }
}
