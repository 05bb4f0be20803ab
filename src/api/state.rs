//! Explicit application state record
//!
//! Replaces ad-hoc mutable session state with an immutable record: every
//! update returns a new `AppState`, and `sync_map` makes a map backend
//! reflect whatever the record currently holds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{PathAnalyzer, PathReport};
use crate::core::GeoPoint;
use crate::map::{MapView, MarkerKind};
use crate::utils::config::RadioConfig;
use crate::validation::PathResult;

/// Zoom used when centering on a single point
const CENTER_ZOOM: u8 = 12;

/// Current session state: the two endpoints and the dial settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub current: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub radio: RadioConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current(self, point: GeoPoint) -> Self {
        Self {
            current: Some(point),
            ..self
        }
    }

    pub fn with_destination(self, point: GeoPoint) -> Self {
        Self {
            destination: Some(point),
            ..self
        }
    }

    pub fn with_radio(self, radio: RadioConfig) -> Self {
        Self { radio, ..self }
    }

    pub fn clear_current(self) -> Self {
        Self {
            current: None,
            ..self
        }
    }

    pub fn clear_destination(self) -> Self {
        Self {
            destination: None,
            ..self
        }
    }

    /// Path report for the current endpoint pair.
    ///
    /// None while either endpoint is unset; Some(Err) when both are set but
    /// analysis fails (out-of-range coordinates).
    pub fn report(&self) -> Option<PathResult<PathReport>> {
        let current = self.current.as_ref()?;
        let destination = self.destination.as_ref()?;
        let analyzer = PathAnalyzer::new(self.radio.clone());
        Some(analyzer.analyze(current, destination))
    }

    /// Make a map backend reflect this state.
    ///
    /// Clears both markers and the line first so stale elements from a
    /// previous state never survive, then re-adds what the record holds.
    /// The line is drawn only when both endpoints are set.
    pub fn sync_map(&self, view: &mut dyn MapView) {
        view.clear_marker(MarkerKind::Current);
        view.clear_marker(MarkerKind::Destination);
        view.clear_line();

        if let Some(current) = &self.current {
            view.set_marker(MarkerKind::Current, current);
        }
        if let Some(destination) = &self.destination {
            view.set_marker(MarkerKind::Destination, destination);
        }
        if let (Some(current), Some(destination)) = (&self.current, &self.destination) {
            view.draw_line(current, destination);
        }

        debug!(
            has_current = self.current.is_some(),
            has_destination = self.destination.is_some(),
            "map synchronized"
        );
    }

    /// Center the viewport on the current position, if set
    pub fn center_map(&self, view: &mut dyn MapView) {
        if let Some(current) = &self.current {
            view.set_viewport(current, CENTER_ZOOM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{MapOperation, RecordingMapView};

    fn new_york() -> GeoPoint {
        GeoPoint::new(40.7128, -74.0060)
    }

    fn london() -> GeoPoint {
        GeoPoint::new(51.5074, -0.1278)
    }

    #[test]
    fn test_updates_return_new_state() {
        let empty = AppState::new();
        let with_current = empty.clone().with_current(new_york());

        assert!(empty.current.is_none());
        assert!(with_current.current.is_some());
        assert!(with_current.destination.is_none());
    }

    #[test]
    fn test_report_requires_both_endpoints() {
        let state = AppState::new().with_current(new_york());
        assert!(state.report().is_none());

        let state = state.with_destination(london());
        let report = state.report().unwrap().unwrap();
        assert!((report.distance_km - 5570.2).abs() < 5.0);
    }

    #[test]
    fn test_sync_map_single_marker() {
        let mut view = RecordingMapView::new();
        let state = AppState::new().with_current(new_york());
        state.sync_map(&mut view);

        let visible = view.visible_markers();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, MarkerKind::Current);
        assert!(!view.line_visible());
    }

    #[test]
    fn test_sync_map_draws_line_with_both_endpoints() {
        let mut view = RecordingMapView::new();
        let state = AppState::new()
            .with_current(new_york())
            .with_destination(london());
        state.sync_map(&mut view);

        assert_eq!(view.visible_markers().len(), 2);
        assert!(view.line_visible());
    }

    #[test]
    fn test_sync_map_clears_stale_elements() {
        let mut view = RecordingMapView::new();
        let both = AppState::new()
            .with_current(new_york())
            .with_destination(london());
        both.sync_map(&mut view);

        // Dropping the destination must remove its marker and the line
        let one = both.clear_destination();
        one.sync_map(&mut view);

        let visible = view.visible_markers();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, MarkerKind::Current);
        assert!(!view.line_visible());
    }

    #[test]
    fn test_center_map_uses_current_position() {
        let mut view = RecordingMapView::new();
        AppState::new().center_map(&mut view);
        assert!(view.operations.is_empty());

        let state = AppState::new().with_current(new_york());
        state.center_map(&mut view);
        assert!(matches!(
            view.operations.last(),
            Some(MapOperation::SetViewport(p, 12)) if *p == new_york()
        ));
    }
}
