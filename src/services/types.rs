use crate::geo::GeoPoint;
use crate::util::GeoBounds;
use serde::Serialize;
use thiserror::Error;

/// A geocoding hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Full human-readable name as returned by the geocoder
    pub display_name: String,
    pub position: GeoPoint,
}

/// A road route between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Route geometry in travel order
    pub geometry: Vec<GeoPoint>,
    pub distance_km: f64,
    /// Travel time rounded to whole minutes
    pub duration_min: u64,
}

impl Route {
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(&self.geometry)
    }
}

/// Route plus the geocoded endpoints it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    pub start: Place,
    pub end: Place,
    pub route: Route,
}

/// Errors from the geocoding and routing collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Both start and end locations are required")]
    MissingEndpoints,

    #[error("No results found for '{0}'")]
    NoResults(String),

    #[error("Start location not found: '{0}'")]
    StartNotFound(String),

    #[error("End location not found: '{0}'")]
    EndNotFound(String),

    #[error("Routing failed with code {code}: {message}")]
    RouteFailed { code: String, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Service returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid service URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Service worker stopped: {0}")]
    WorkerError(String),
}

impl From<ureq::Error> for ServiceError {
    fn from(err: ureq::Error) -> Self {
        ServiceError::HttpError(err.to_string())
    }
}
