use super::MapSession;
use super::view::{MapView, TileSource};
use crate::draw::{Drawing, Overlay};
use crate::markers::Marker;
use crate::notification::Notice;
use crate::services::{Place, PlannedRoute};
use serde::Serialize;

/// Serializable copy of everything a session shows.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub drawings: Vec<Drawing>,
    /// Finalized drawings then the live preview, in draw order
    pub overlays: Vec<Overlay>,
    pub markers: Vec<Marker>,
    pub notices: Vec<Notice>,
    pub search_results: Vec<Place>,
    pub route: Option<PlannedRoute>,
    pub view: MapView,
    pub tiles: TileSource,
}

impl SessionSnapshot {
    pub fn from_session(session: &MapSession) -> Self {
        Self {
            drawings: session.input().drawings().as_slice().to_vec(),
            overlays: session.input().overlays(),
            markers: session.input().markers().iter().cloned().collect(),
            notices: session.notices().history().cloned().collect(),
            search_results: session.search_results().to_vec(),
            route: session.route().cloned(),
            view: session.view().clone(),
            tiles: session.view().tiles(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
