//! Scripted session input.
//!
//! A script is a JSON array of commands, e.g.
//! ```json
//! [{"op": "select", "tool": "line"},
//!  {"op": "click", "lat": 0.0, "lng": 0.0},
//!  {"op": "click", "lat": 0.0, "lng": 1.0},
//!  {"op": "dblclick", "lat": 0.0, "lng": 1.0}]
//! ```

use super::MapSession;
use crate::config::BaseLayer;
use crate::draw::StylePatch;
use crate::geo::GeoPoint;
use crate::input::{PointerEvent, Tool};
use crate::markers::MarkerId;
use serde::Deserialize;
use std::path::PathBuf;

/// One user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum SessionCommand {
    /// Press a tool button (toggles off when already active)
    Select { tool: Tool },
    Click {
        #[serde(flatten)]
        point: GeoPoint,
    },
    Dblclick {
        #[serde(flatten)]
        point: GeoPoint,
    },
    /// Live style edit for the active tool
    Style {
        #[serde(flatten)]
        patch: StylePatch,
    },
    /// Clear all drawings
    Clear,
    /// Toggle marker placement on clicks
    MarkerMode,
    DeleteMarker { id: MarkerId },
    Layer { layer: BaseLayer },
    Import { path: PathBuf },
    Search { query: String },
    /// Jump to a result of the last search
    SelectResult { index: usize },
    Route { start: String, end: String },
}

/// Parses a JSON command list.
pub fn parse_script(text: &str) -> serde_json::Result<Vec<SessionCommand>> {
    serde_json::from_str(text)
}

impl MapSession {
    /// Applies one command.
    pub fn execute(&mut self, command: SessionCommand) {
        log::debug!("Executing {:?}", command);
        match command {
            SessionCommand::Select { tool } => self.select_tool(tool),
            SessionCommand::Click { point } => {
                self.pointer(PointerEvent::click(point));
            }
            SessionCommand::Dblclick { point } => {
                self.pointer(PointerEvent::double_click(point));
            }
            SessionCommand::Style { patch } => self.apply_style(&patch),
            SessionCommand::Clear => self.clear_drawings(),
            SessionCommand::MarkerMode => self.toggle_marker_mode(),
            SessionCommand::DeleteMarker { id } => self.delete_marker(id),
            SessionCommand::Layer { layer } => self.switch_layer(layer),
            SessionCommand::Import { path } => self.import_file(&path),
            SessionCommand::Search { query } => self.request_search(&query),
            SessionCommand::SelectResult { index } => self.select_search_result(index),
            SessionCommand::Route { start, end } => self.request_route(&start, &end),
        }
    }

    /// Applies every command in order.
    pub fn run_script(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        for command in commands {
            self.execute(command);
        }
    }
}
