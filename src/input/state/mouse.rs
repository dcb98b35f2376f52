use crate::geo::GeoPoint;
use crate::input::events::{PointerEvent, PointerKind};
use crate::markers::{Marker, MarkerId, NewMarker};
use log::{debug, info};

use super::{Effect, InputState};

/// Outcome of routing one pointer event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerResponse {
    /// The map's own double-click zoom must be suppressed
    pub prevent_default: bool,
    /// Marker created by this click, when marker mode is on
    pub marker: Option<MarkerId>,
    /// Tool state machine effects, in order
    pub effects: Vec<Effect>,
}

impl InputState {
    /// Routes a pointer event to the marker layer and the active tool.
    pub fn on_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        match event.kind {
            PointerKind::Click => self.on_click(event.point),
            PointerKind::DoubleClick => self.on_double_click(event.point),
        }
    }

    /// Processes a single click.
    ///
    /// # Behavior
    /// - Marker mode on: a marker is added at the click
    /// - Tool active: the click is forwarded to the tool
    ///
    /// Both happen when marker mode is on while a tool is active.
    pub fn on_click(&mut self, point: GeoPoint) -> PointerResponse {
        let marker = self.marker_mode.then(|| self.markers.add_at(point).id);

        let effects = if self.active_tool().is_some() {
            self.handle_point(point)
        } else {
            Vec::new()
        };

        PointerResponse {
            prevent_default: false,
            marker,
            effects,
        }
    }

    /// Processes a double click.
    ///
    /// Only line and polygon react (finish the buffer); the map's zoom is suppressed for
    /// them even when the buffer is too short to finish.
    pub fn on_double_click(&mut self, point: GeoPoint) -> PointerResponse {
        let Some(tool) = self.active_tool().filter(|tool| tool.finalizes_on_double_click()) else {
            debug!("Double click at {} left to the map", point);
            return PointerResponse::default();
        };

        debug!("Double click finishing {}", tool);
        PointerResponse {
            prevent_default: true,
            marker: None,
            effects: self.finalize(),
        }
    }

    /// Flips marker mode and returns the new value.
    pub fn toggle_marker_mode(&mut self) -> bool {
        self.marker_mode = !self.marker_mode;
        info!(
            "Marker mode {}",
            if self.marker_mode { "enabled" } else { "disabled" }
        );
        self.marker_mode
    }

    /// Removes one marker; `None` when the id is unknown.
    pub fn delete_marker(&mut self, id: MarkerId) -> Option<Marker> {
        self.markers.delete(id)
    }

    /// Adds a batch of parsed markers and returns their ids.
    pub fn import_markers(&mut self, batch: Vec<NewMarker>) -> Vec<MarkerId> {
        let ids = self.markers.extend(batch);
        info!("Imported {} marker(s)", ids.len());
        ids
    }
}
