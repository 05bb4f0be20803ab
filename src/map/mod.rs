//! Map rendering capability interface
//!
//! The library never talks to a mapping stack directly. A UI shell
//! implements [`MapView`] and [`crate::api::AppState::sync_map`] drives it;
//! [`RecordingMapView`] captures the operation stream for tests.

use crate::core::GeoPoint;

/// The two markers a path view manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Current,
    Destination,
}

/// Rendering operations a map backend must support
pub trait MapView {
    fn set_marker(&mut self, kind: MarkerKind, point: &GeoPoint);
    fn clear_marker(&mut self, kind: MarkerKind);
    fn draw_line(&mut self, from: &GeoPoint, to: &GeoPoint);
    fn clear_line(&mut self);
    fn set_viewport(&mut self, center: &GeoPoint, zoom: u8);
}

/// One recorded [`MapView`] call
#[derive(Debug, Clone, PartialEq)]
pub enum MapOperation {
    SetMarker(MarkerKind, GeoPoint),
    ClearMarker(MarkerKind),
    DrawLine(GeoPoint, GeoPoint),
    ClearLine,
    SetViewport(GeoPoint, u8),
}

/// In-memory map backend recording every operation, for tests
#[derive(Debug, Default)]
pub struct RecordingMapView {
    pub operations: Vec<MapOperation>,
}

impl RecordingMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Markers currently visible after replaying the recorded operations
    pub fn visible_markers(&self) -> Vec<(MarkerKind, GeoPoint)> {
        let mut current: Option<GeoPoint> = None;
        let mut destination: Option<GeoPoint> = None;
        for op in &self.operations {
            match op {
                MapOperation::SetMarker(MarkerKind::Current, p) => current = Some(p.clone()),
                MapOperation::SetMarker(MarkerKind::Destination, p) => {
                    destination = Some(p.clone())
                }
                MapOperation::ClearMarker(MarkerKind::Current) => current = None,
                MapOperation::ClearMarker(MarkerKind::Destination) => destination = None,
                _ => {}
            }
        }
        let mut visible = Vec::new();
        if let Some(p) = current {
            visible.push((MarkerKind::Current, p));
        }
        if let Some(p) = destination {
            visible.push((MarkerKind::Destination, p));
        }
        visible
    }

    /// Whether a path line is visible after replaying the recorded operations
    pub fn line_visible(&self) -> bool {
        let mut visible = false;
        for op in &self.operations {
            match op {
                MapOperation::DrawLine(..) => visible = true,
                MapOperation::ClearLine => visible = false,
                _ => {}
            }
        }
        visible
    }
}

impl MapView for RecordingMapView {
    fn set_marker(&mut self, kind: MarkerKind, point: &GeoPoint) {
        self.operations.push(MapOperation::SetMarker(kind, point.clone()));
    }

    fn clear_marker(&mut self, kind: MarkerKind) {
        self.operations.push(MapOperation::ClearMarker(kind));
    }

    fn draw_line(&mut self, from: &GeoPoint, to: &GeoPoint) {
        self.operations
            .push(MapOperation::DrawLine(from.clone(), to.clone()));
    }

    fn clear_line(&mut self) {
        self.operations.push(MapOperation::ClearLine);
    }

    fn set_viewport(&mut self, center: &GeoPoint, zoom: u8) {
        self.operations
            .push(MapOperation::SetViewport(center.clone(), zoom));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_view_replays_marker_state() {
        let mut view = RecordingMapView::new();
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(51.0, 0.0);

        view.set_marker(MarkerKind::Current, &a);
        view.set_marker(MarkerKind::Destination, &b);
        view.clear_marker(MarkerKind::Current);

        let visible = view.visible_markers();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, MarkerKind::Destination);
    }

    #[test]
    fn test_recording_view_tracks_line() {
        let mut view = RecordingMapView::new();
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(51.0, 0.0);

        assert!(!view.line_visible());
        view.draw_line(&a, &b);
        assert!(view.line_visible());
        view.clear_line();
        assert!(!view.line_visible());
    }
}
