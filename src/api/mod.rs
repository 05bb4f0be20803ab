//! Composition layer
//!
//! [`PathAnalyzer`] chains geodesy, grid encoding and the link budget into
//! a single [`PathReport`]; [`AppState`] holds the explicit UI-facing state
//! record and drives a [`crate::map::MapView`].

pub mod formatting;
pub mod state;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GeoPoint;
use crate::geodesy::{bearing_deg, compass_direction, distance_km, CompassPoint};
use crate::grid::{encode, grid_distance_km, GridLocator};
use crate::link::{LinkBudget, LinkBudgetInput, LinkBudgetResult};
use crate::utils::config::RadioConfig;
use crate::validation::PathResult;

pub use state::AppState;

/// Everything derived from one pair of points and the dial settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub bearing_deg: f64,
    pub direction: CompassPoint,
    pub distance_km: f64,
    pub current_grid: GridLocator,
    pub destination_grid: GridLocator,
    pub grid_distance_km: f64,
    /// None when the budget is not applicable (coincident points)
    pub link: Option<LinkBudgetResult>,
}

/// Builds [`PathReport`]s from point pairs and a [`RadioConfig`]
pub struct PathAnalyzer {
    radio: RadioConfig,
    budget: LinkBudget,
}

impl PathAnalyzer {
    pub fn new(radio: RadioConfig) -> Self {
        Self {
            radio,
            budget: LinkBudget::new(),
        }
    }

    pub fn with_budget(radio: RadioConfig, budget: LinkBudget) -> Self {
        Self { radio, budget }
    }

    pub fn radio(&self) -> &RadioConfig {
        &self.radio
    }

    /// Analyze the path from `current` to `destination`.
    ///
    /// The distance feeds the link budget, so it is always computed first.
    /// Coincident points produce a report with `link: None` rather than an
    /// error; every other metric is still well-defined there.
    pub fn analyze(&self, current: &GeoPoint, destination: &GeoPoint) -> PathResult<PathReport> {
        let distance = distance_km(current, destination);
        let bearing = bearing_deg(current, destination);
        let current_grid = encode(current)?;
        let destination_grid = encode(destination)?;
        let grid_distance = grid_distance_km(&current_grid, &destination_grid);

        let link = if distance == 0.0 {
            None
        } else {
            Some(self.budget.compute(&LinkBudgetInput {
                frequency_mhz: self.radio.frequency_mhz,
                tx_power_watts: self.radio.tx_power_watts,
                antenna_height_m: self.radio.antenna_height_m,
                distance_km: distance,
            })?)
        };

        debug!(
            distance_km = distance,
            bearing_deg = bearing,
            current_grid = %current_grid,
            destination_grid = %destination_grid,
            "path analyzed"
        );

        Ok(PathReport {
            bearing_deg: bearing,
            direction: compass_direction(bearing),
            distance_km: distance,
            current_grid,
            destination_grid,
            grid_distance_km: grid_distance,
            link,
        })
    }
}

impl Default for PathAnalyzer {
    fn default() -> Self {
        Self::new(RadioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PathError;

    fn new_york() -> GeoPoint {
        GeoPoint::new(40.7128, -74.0060)
    }

    fn london() -> GeoPoint {
        GeoPoint::new(51.5074, -0.1278)
    }

    #[test]
    fn test_ny_to_london_report() {
        let analyzer = PathAnalyzer::default();
        let report = analyzer.analyze(&new_york(), &london()).unwrap();

        assert!((report.distance_km - 5570.2).abs() < 5.0);
        assert!((report.bearing_deg - 51.2).abs() < 1.0);
        assert_eq!(report.direction, CompassPoint::NE);
        assert_eq!(report.current_grid.as_str(), "FN20xr");
        assert_eq!(report.destination_grid.as_str(), "IO91wm");

        // 5 W on 2 m across the Atlantic: weakest probability bucket
        let link = report.link.unwrap();
        assert!(link.signal_strength_dbm < -120.0);
        assert_eq!(link.qso_probability_percent, 10);
    }

    #[test]
    fn test_coincident_points_have_no_link() {
        let analyzer = PathAnalyzer::default();
        let report = analyzer.analyze(&new_york(), &new_york()).unwrap();

        assert_eq!(report.distance_km, 0.0);
        assert_eq!(report.bearing_deg, 0.0);
        assert_eq!(report.direction, CompassPoint::N);
        assert_eq!(report.current_grid, report.destination_grid);
        assert!(report.link.is_none());
    }

    #[test]
    fn test_invalid_point_propagates() {
        let analyzer = PathAnalyzer::default();
        let result = analyzer.analyze(&GeoPoint::new(95.0, 0.0), &london());
        assert!(matches!(result, Err(PathError::OutOfRange { .. })));
    }

    #[test]
    fn test_report_serializes() {
        let analyzer = PathAnalyzer::default();
        let report = analyzer.analyze(&new_york(), &london()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
