//! Pointer events delivered by the map surface.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Kind of pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Single click (places points, markers and single-click shapes)
    Click,
    /// Double click (finishes line and polygon buffers)
    #[serde(rename = "dblclick")]
    DoubleClick,
}

/// A click on the map, already projected to geographic coordinates.
///
/// Wire form: `{"type": "click" | "dblclick", "point": {"lat": .., "lng": ..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(rename = "type")]
    pub kind: PointerKind,
    pub point: GeoPoint,
}

impl PointerEvent {
    pub fn click(point: GeoPoint) -> Self {
        Self {
            kind: PointerKind::Click,
            point,
        }
    }

    pub fn double_click(point: GeoPoint) -> Self {
        Self {
            kind: PointerKind::DoubleClick,
            point,
        }
    }
}
