use crate::draw::{Overlay, Preview, PreviewKind, render_overlays};
use crate::input::tool::Tool;

use super::InputState;

impl InputState {
    /// Returns the preview for the buffer currently being collected.
    ///
    /// `None` when idle or when a single-click tool is armed.
    pub fn preview(&self) -> Option<Preview<'_>> {
        let kind = match self.active_tool()? {
            Tool::Line => PreviewKind::Line,
            Tool::Polygon => PreviewKind::Polygon,
            Tool::Measure => PreviewKind::Measure,
            Tool::Circle | Tool::Rectangle => return None,
        };
        Some(Preview {
            points: self.buffer(),
            style: self.current_style(),
            kind,
        })
    }

    /// Renders finalized drawings in store order plus the live preview on top.
    pub fn overlays(&self) -> Vec<Overlay> {
        render_overlays(self.drawings(), self.preview())
    }
}
