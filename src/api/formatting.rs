//! Path report output formatting
//!
//! Human-readable text, JSON and CSV renderings of a [`PathReport`], plus
//! the degree/decimal-minute coordinate pretty-printer used by the text
//! output. Metrics that are not applicable render as `N/A`.

use crate::api::PathReport;
use crate::core::GeoPoint;

/// Which axis a coordinate value belongs to, for hemisphere suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

/// Render a coordinate as degrees and decimal minutes with a hemisphere
/// suffix, e.g. `40° 42.768' N`.
pub fn format_coordinate(value: f64, axis: CoordinateAxis) -> String {
    let hemisphere = match axis {
        CoordinateAxis::Latitude => {
            if value >= 0.0 {
                "N"
            } else {
                "S"
            }
        }
        CoordinateAxis::Longitude => {
            if value >= 0.0 {
                "E"
            } else {
                "W"
            }
        }
    };
    let magnitude = value.abs();
    let degrees = magnitude.floor();
    let minutes = (magnitude - degrees) * 60.0;
    format!("{}\u{b0} {:.3}' {}", degrees, minutes, hemisphere)
}

/// Render both coordinates of a point, comma-separated
pub fn format_point(point: &GeoPoint) -> String {
    format!(
        "{}, {}",
        format_coordinate(point.latitude, CoordinateAxis::Latitude),
        format_coordinate(point.longitude, CoordinateAxis::Longitude)
    )
}

/// Human-readable text formatter
pub struct TextFormatter {
    /// Use single-line compact format
    pub compact: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { compact: false }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Format a path report as text
    pub fn format(&self, report: &PathReport) -> String {
        if self.compact {
            return self.format_compact(report);
        }

        let mut output = String::new();
        output.push_str("Path:\n");
        output.push_str(&format!(
            "  Bearing:    {:.1}\u{b0} ({})\n",
            report.bearing_deg, report.direction
        ));
        output.push_str(&format!("  Distance:   {:.1} km\n", report.distance_km));
        output.push_str("Grid squares:\n");
        output.push_str(&format!("  Current:      {}\n", report.current_grid));
        output.push_str(&format!("  Destination:  {}\n", report.destination_grid));
        output.push_str(&format!(
            "  Grid distance: {:.1} km\n",
            report.grid_distance_km
        ));
        output.push_str("Link budget:\n");
        match &report.link {
            Some(link) => {
                output.push_str(&format!(
                    "  Free-space loss: {:.2} dB\n",
                    link.free_space_loss_db
                ));
                output.push_str(&format!("  Path loss:       {:.2} dB\n", link.path_loss_db));
                output.push_str(&format!(
                    "  Signal strength: {:.2} dBm\n",
                    link.signal_strength_dbm
                ));
                output.push_str(&format!(
                    "  QSO probability: {}%\n",
                    link.qso_probability_percent
                ));
            }
            None => output.push_str("  N/A\n"),
        }
        output
    }

    fn format_compact(&self, report: &PathReport) -> String {
        let signal = match &report.link {
            Some(link) => format!(
                "{:.1} dBm ({}%)",
                link.signal_strength_dbm, link.qso_probability_percent
            ),
            None => "N/A".to_string(),
        };
        format!(
            "{:.1} km {} ({:.0}\u{b0}) | {} -> {} | {}",
            report.distance_km,
            report.direction,
            report.bearing_deg,
            report.current_grid,
            report.destination_grid,
            signal
        )
    }
}

/// JSON formatter for a path report
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format(&self, report: &PathReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter for data logging
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "bearing_deg,direction,distance_km,current_grid,destination_grid,grid_distance_km,\
         free_space_loss_db,path_loss_db,signal_strength_dbm,qso_probability_percent"
            .to_string()
    }

    /// Format a report as a CSV row; link fields are empty when not applicable
    pub fn format(&self, report: &PathReport) -> String {
        let row = match &report.link {
            Some(link) => format!(
                "{:.2},{},{:.3},{},{},{:.3},{:.2},{:.2},{:.2},{}",
                report.bearing_deg,
                report.direction,
                report.distance_km,
                report.current_grid,
                report.destination_grid,
                report.grid_distance_km,
                link.free_space_loss_db,
                link.path_loss_db,
                link.signal_strength_dbm,
                link.qso_probability_percent
            ),
            None => format!(
                "{:.2},{},{:.3},{},{},{:.3},,,,",
                report.bearing_deg,
                report.direction,
                report.distance_km,
                report.current_grid,
                report.destination_grid,
                report.grid_distance_km
            ),
        };
        if self.include_header {
            format!("{}\n{}", self.header(), row)
        } else {
            row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PathAnalyzer;

    fn sample_report() -> PathReport {
        PathAnalyzer::default()
            .analyze(
                &GeoPoint::new(40.7128, -74.0060),
                &GeoPoint::new(51.5074, -0.1278),
            )
            .unwrap()
    }

    fn degenerate_report() -> PathReport {
        let p = GeoPoint::new(40.7128, -74.0060);
        PathAnalyzer::default().analyze(&p, &p).unwrap()
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(
            format_coordinate(40.7128, CoordinateAxis::Latitude),
            "40\u{b0} 42.768' N"
        );
        assert_eq!(
            format_coordinate(-74.0060, CoordinateAxis::Longitude),
            "74\u{b0} 0.360' W"
        );
        assert_eq!(
            format_coordinate(0.0, CoordinateAxis::Latitude),
            "0\u{b0} 0.000' N"
        );
    }

    #[test]
    fn test_text_full_format() {
        let text = TextFormatter::new().format(&sample_report());
        assert!(text.contains("Bearing"));
        assert!(text.contains("NE"));
        assert!(text.contains("FN20xr"));
        assert!(text.contains("IO91wm"));
        assert!(text.contains("QSO probability: 10%"));
    }

    #[test]
    fn test_text_renders_missing_link_as_na() {
        let text = TextFormatter::new().format(&degenerate_report());
        assert!(text.contains("N/A"));

        let compact = TextFormatter::compact().format(&degenerate_report());
        assert!(compact.contains("N/A"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = JsonFormatter::new().format(&report).unwrap();
        let back: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_csv_column_count() {
        let formatter = CsvFormatter::new();
        let header_cols = formatter.header().split(',').count();

        let full = formatter.format(&sample_report());
        let row = full.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), header_cols);

        let degenerate = formatter.format(&degenerate_report());
        let row = degenerate.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), header_cols);
        assert!(row.ends_with(",,,,"));
    }
}
