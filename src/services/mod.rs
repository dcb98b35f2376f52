//! Geocoding and routing collaborators.
//!
//! This module provides:
//! - [`Geocoder`] / [`Router`] traits with Nominatim and OSRM implementations
//! - [`planner::search`] and [`planner::plan_route`], the request flows built on them
//! - [`ServiceDispatcher`], which runs those flows on the tokio blocking pool and hands
//!   results back over a channel
//!
//! These calls never touch drawing state; the session applies their results.

pub mod dependencies;
pub mod dispatcher;
pub mod nominatim;
pub mod osrm;
pub mod planner;
pub mod types;

#[cfg(test)]
mod tests;

pub use dependencies::{Geocoder, Router, ServiceDependencies};
pub use dispatcher::{RequestId, ServiceDispatcher, ServiceEvent};
pub use nominatim::NominatimClient;
pub use osrm::OsrmClient;
pub use planner::{plan_route, search};
pub use types::{Place, PlannedRoute, Route, ServiceError};

/// Parses a base URL so that relative joins append to its path.
pub(crate) fn directory_url(base: &str) -> Result<url::Url, ServiceError> {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        Ok(url::Url::parse(trimmed)?)
    } else {
        Ok(url::Url::parse(&format!("{trimmed}/"))?)
    }
}
