//! Maidenhead grid-square locators
//!
//! 6-character locators of the form `[A-R][A-R][0-9][0-9][a-x][a-x]`:
//! field (20 x 10 degrees), square (2 x 1 degrees), subsquare
//! (1/12 x 1/24 degrees). Decoding returns the lower-left corner of the
//! subsquare cell, so decoding is deliberately lossy; the corner re-encodes
//! to the same locator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::GeoPoint;
use crate::geodesy::distance_km;
use crate::validation::{normalize_longitude, validate_point, PathError, PathResult};

/// Nudge applied before flooring so that subsquare corners (whose
/// coordinates involve inexact 1/12 and 1/24 degree fractions) land in
/// their own cell rather than the one below. Well under a millimeter on
/// the ground.
const FLOOR_GUARD_DEG: f64 = 1e-9;

/// Validated 6-character Maidenhead locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GridLocator(String);

impl GridLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-left corner of this locator's subsquare cell
    pub fn to_point(&self) -> GeoPoint {
        let b = self.0.as_bytes();
        let field_lon = (b[0] - b'A') as f64;
        let field_lat = (b[1] - b'A') as f64;
        let square_lon = (b[2] - b'0') as f64;
        let square_lat = (b[3] - b'0') as f64;
        let sub_lon = (b[4] - b'a') as f64;
        let sub_lat = (b[5] - b'a') as f64;

        let longitude = field_lon * 20.0 + square_lon * 2.0 + sub_lon / 12.0 - 180.0;
        let latitude = field_lat * 10.0 + square_lat + sub_lat / 24.0 - 90.0;
        GeoPoint::new(latitude, longitude)
    }
}

impl FromStr for GridLocator {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(PathError::invalid_format(
                s,
                format!("expected 6 characters, got {}", bytes.len()),
            ));
        }
        for (index, &byte) in bytes.iter().enumerate() {
            let ok = match index {
                0 | 1 => byte.is_ascii_uppercase() && byte <= b'R',
                2 | 3 => byte.is_ascii_digit(),
                _ => byte.is_ascii_lowercase() && byte <= b'x',
            };
            if !ok {
                let expected = match index {
                    0 | 1 => "A-R",
                    2 | 3 => "0-9",
                    _ => "a-x",
                };
                return Err(PathError::invalid_format(
                    s,
                    format!(
                        "character {} is {:?}, expected {}",
                        index + 1,
                        byte as char,
                        expected
                    ),
                ));
            }
        }
        Ok(GridLocator(s.to_string()))
    }
}

impl fmt::Display for GridLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GridLocator {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridLocator> for String {
    fn from(locator: GridLocator) -> Self {
        locator.0
    }
}

/// Encode a point as a 6-character locator.
///
/// Longitude +180 normalizes to -180 (same meridian); latitude +90 clamps
/// just inside the top field. Coordinates outside global bounds are
/// rejected with `OutOfRange`.
pub fn encode(point: &GeoPoint) -> PathResult<GridLocator> {
    validate_point(point)?;

    let adj_lon =
        (normalize_longitude(point.longitude) + 180.0 + FLOOR_GUARD_DEG).rem_euclid(360.0);
    let adj_lat = (point.latitude + 90.0 + FLOOR_GUARD_DEG).min(180.0 - FLOOR_GUARD_DEG);

    let field_lon = (adj_lon / 20.0).floor();
    let field_lat = (adj_lat / 10.0).floor();
    let square_lon = ((adj_lon - field_lon * 20.0) / 2.0).floor();
    let square_lat = (adj_lat - field_lat * 10.0).floor();
    let sub_lon = ((adj_lon - field_lon * 20.0 - square_lon * 2.0) * 12.0).floor();
    let sub_lat = ((adj_lat - field_lat * 10.0 - square_lat) * 24.0).floor();

    // Validated inputs keep every index inside its alphabet
    let locator: String = [
        (b'A' + field_lon as u8) as char,
        (b'A' + field_lat as u8) as char,
        (b'0' + square_lon as u8) as char,
        (b'0' + square_lat as u8) as char,
        (b'a' + sub_lon as u8) as char,
        (b'a' + sub_lat as u8) as char,
    ]
    .iter()
    .collect();

    Ok(GridLocator(locator))
}

/// Decode a locator string to the lower-left corner of its cell
pub fn decode(locator: &str) -> PathResult<GeoPoint> {
    let parsed: GridLocator = locator.parse()?;
    Ok(parsed.to_point())
}

/// Haversine distance between the corner points of two locators.
///
/// A cell-corner approximation: true station separation can differ by up to
/// roughly one subsquare diagonal.
pub fn grid_distance_km(a: &GridLocator, b: &GridLocator) -> f64 {
    distance_km(&a.to_point(), &b.to_point())
}
