use std::sync::Arc;

use crate::config::ServicesConfig;
use crate::geo::GeoPoint;

use super::{
    nominatim::NominatimClient,
    osrm::OsrmClient,
    types::{Place, Route, ServiceError},
};

/// Free-text place search.
pub trait Geocoder: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Place>, ServiceError>;
}

/// Road routing between two points.
pub trait Router: Send + Sync {
    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, ServiceError>;
}

/// Bundle of collaborators used by the dispatcher. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ServiceDependencies {
    pub geocoder: Arc<dyn Geocoder>,
    pub router: Arc<dyn Router>,
    /// Maximum number of search hits requested
    pub search_limit: usize,
}

impl ServiceDependencies {
    /// HTTP clients for the endpoints named in the configuration.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            geocoder: Arc::new(NominatimClient::new(
                &config.geocoder_url,
                &config.user_agent,
            )?),
            router: Arc::new(OsrmClient::new(
                &config.router_url,
                &config.routing_profile,
                &config.user_agent,
            )?),
            search_limit: config.search_limit,
        })
    }
}
