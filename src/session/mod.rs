//! Map session: the drawing core plus everything around it.
//!
//! A [`MapSession`] owns the [`InputState`], the notice queue, the requested map view,
//! the last search results and the current route. It turns state machine effects into
//! notices and applies collaborator results when they arrive.

mod commands;
mod feedback;
mod snapshot;
mod view;

pub use commands::{SessionCommand, parse_script};
pub use snapshot::SessionSnapshot;
pub use view::{LOCATION_ZOOM, MapView, TileSource};


use crate::config::{BaseLayer, Config};
use crate::draw::StylePatch;
use crate::import::{self, ImportFormat};
use crate::input::{InputState, PointerEvent, PointerResponse, Tool};
use crate::markers::MarkerId;
use crate::notification::NoticeQueue;
use crate::services::{Place, PlannedRoute, ServiceDispatcher, ServiceError, ServiceEvent};
use log::{debug, warn};
use std::path::Path;

/// Interactive map session.
pub struct MapSession {
    input: InputState,
    notices: NoticeQueue,
    view: MapView,
    search_results: Vec<Place>,
    route: Option<PlannedRoute>,
    services: Option<ServiceDispatcher>,
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl MapSession {
    /// Creates a session with no collaborators attached.
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            notices: NoticeQueue::new(config.notifications.max_visible),
            view: MapView::from_config(&config.map),
            search_results: Vec::new(),
            route: None,
            services: None,
        }
    }

    /// Attaches the dispatcher used for search and routing.
    pub fn with_services(mut self, dispatcher: ServiceDispatcher) -> Self {
        self.services = Some(dispatcher);
        self
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn search_results(&self) -> &[Place] {
        &self.search_results
    }

    pub fn route(&self) -> Option<&PlannedRoute> {
        self.route.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_session(self)
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    pub fn select_tool(&mut self, tool: Tool) {
        let effects = self.input.select_tool(tool);
        self.post_effects(&effects);
    }

    /// Routes a map click or double click.
    pub fn pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let response = self.input.on_pointer(event);
        if response.marker.is_some() {
            self.notices.success("Marker added!");
        }
        self.post_effects(&response.effects);
        response
    }

    pub fn apply_style(&mut self, patch: &StylePatch) {
        self.input.apply_style(patch);
    }

    pub fn clear_drawings(&mut self) {
        let effects = self.input.clear_all();
        self.post_effects(&effects);
    }

    fn post_effects(&mut self, effects: &[crate::input::Effect]) {
        for effect in effects {
            feedback::post_effect(&mut self.notices, effect);
        }
    }

    // ------------------------------------------------------------------
    // Markers and import
    // ------------------------------------------------------------------

    pub fn toggle_marker_mode(&mut self) {
        if self.input.toggle_marker_mode() {
            self.notices.info("Click on map to add marker");
        } else {
            self.notices.info("Marker mode disabled");
        }
    }

    pub fn delete_marker(&mut self, id: MarkerId) {
        match self.input.delete_marker(id) {
            Some(_) => self.notices.success("Marker deleted"),
            None => debug!("No marker {} to delete", id),
        }
    }

    /// Imports markers from a file; nothing is added if any part of it fails to parse.
    pub fn import_file(&mut self, path: &Path) {
        if ImportFormat::from_path(path) == Some(ImportFormat::Kml) {
            self.notices.info("KML parsing - extracting coordinates");
        }

        match import::load_file(path) {
            Ok(batch) => {
                let ids = self.input.import_markers(batch);
                if let Some(bounds) = self.input.markers().bounds_of(&ids) {
                    self.view.fit_bounds(bounds);
                }
                self.notices.success("File imported successfully!");
            }
            Err(err) => {
                warn!("Import of {} failed: {}", path.display(), err);
                self.notices.error("Failed to parse file");
            }
        }
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn switch_layer(&mut self, layer: BaseLayer) {
        self.view.layer = layer;
        self.notices.success(format!("Switched to {}", layer.name()));
    }

    /// Centers the view on one of the last search results.
    pub fn select_search_result(&mut self, index: usize) {
        let Some(place) = self.search_results.get(index) else {
            debug!("No search result at index {}", index);
            return;
        };
        self.view.set_view(place.position, LOCATION_ZOOM);
        self.notices.success("Location found!");
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// Starts a place search. Blank queries are ignored.
    pub fn request_search(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        match self.services.as_mut() {
            Some(dispatcher) => {
                dispatcher.request_search(query);
            }
            None => {
                warn!("Search requested but no geocoder is configured");
                self.notices.error("Search failed");
            }
        }
    }

    /// Starts a route calculation between two free-text locations.
    pub fn request_route(&mut self, start: &str, end: &str) {
        if start.trim().is_empty() || end.trim().is_empty() {
            self.notices
                .error("Please enter both start and end locations");
            return;
        }
        match self.services.as_mut() {
            Some(dispatcher) => {
                dispatcher.request_route(start, end);
            }
            None => {
                warn!("Route requested but no router is configured");
                self.notices.error("Route calculation failed");
            }
        }
    }

    /// Number of collaborator calls still running.
    pub fn pending_requests(&self) -> usize {
        self.services.as_ref().map_or(0, ServiceDispatcher::in_flight)
    }

    /// Applies every result that has already arrived. Returns how many were applied.
    pub fn poll_services(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.services.as_mut().and_then(ServiceDispatcher::try_next) {
            self.apply_service_event(event);
            applied += 1;
        }
        applied
    }

    /// Waits for every in-flight call and applies the results in completion order.
    pub async fn settle_services(&mut self) {
        loop {
            let Some(dispatcher) = self.services.as_mut() else {
                break;
            };
            let Some(event) = dispatcher.next_event().await else {
                break;
            };
            self.apply_service_event(event);
        }
    }

    /// Applies one collaborator result. Failures leave the previous results untouched.
    pub fn apply_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::SearchCompleted { query, result, .. } => match result {
                Ok(places) => {
                    debug!("{} result(s) for '{}'", places.len(), query);
                    self.search_results = places;
                }
                Err(ServiceError::NoResults(_)) => {
                    self.search_results.clear();
                    self.notices.error("No results found");
                }
                Err(err) => {
                    warn!("Search for '{}' failed: {}", query, err);
                    self.notices.error("Search failed");
                }
            },
            ServiceEvent::RouteCompleted { result, .. } => match result {
                Ok(planned) => {
                    if let Some(bounds) = planned.route.bounds() {
                        self.view.fit_bounds(bounds);
                    }
                    self.notices.success(format!(
                        "Route: {:.2} km, ~{} min",
                        planned.route.distance_km, planned.route.duration_min
                    ));
                    self.route = Some(planned);
                }
                Err(err) => {
                    warn!("Route calculation failed: {}", err);
                    self.notices.error(match err {
                        ServiceError::StartNotFound(_) => "Start location not found",
                        ServiceError::EndNotFound(_) => "End location not found",
                        ServiceError::MissingEndpoints => {
                            "Please enter both start and end locations"
                        }
                        _ => "Route calculation failed",
                    });
                }
            },
        }
    }
}
