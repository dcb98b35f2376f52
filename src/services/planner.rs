use super::{
    dependencies::{Geocoder, Router},
    types::{PlannedRoute, Place, ServiceError},
};

/// Runs a place search; an empty hit list is reported as [`ServiceError::NoResults`].
pub fn search(
    geocoder: &dyn Geocoder,
    query: &str,
    limit: usize,
) -> Result<Vec<Place>, ServiceError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ServiceError::NoResults(String::new()));
    }

    let places = geocoder.search(query, limit)?;
    if places.is_empty() {
        return Err(ServiceError::NoResults(query.to_string()));
    }
    log::info!("Search '{}' returned {} place(s)", query, places.len());
    Ok(places)
}

/// Geocodes both endpoints (first hit each) and asks the router for a route.
///
/// Stops at the first failure; nothing is returned for a partial result.
pub fn plan_route(
    geocoder: &dyn Geocoder,
    router: &dyn Router,
    start_query: &str,
    end_query: &str,
) -> Result<PlannedRoute, ServiceError> {
    let (start_query, end_query) = (start_query.trim(), end_query.trim());
    if start_query.is_empty() || end_query.is_empty() {
        return Err(ServiceError::MissingEndpoints);
    }

    let start = first_hit(geocoder, start_query)?
        .ok_or_else(|| ServiceError::StartNotFound(start_query.to_string()))?;
    let end = first_hit(geocoder, end_query)?
        .ok_or_else(|| ServiceError::EndNotFound(end_query.to_string()))?;

    let route = router.route(start.position, end.position)?;
    log::info!(
        "Route {} -> {}: {:.2} km, {} min",
        start_query,
        end_query,
        route.distance_km,
        route.duration_min
    );
    Ok(PlannedRoute { start, end, route })
}

fn first_hit(geocoder: &dyn Geocoder, query: &str) -> Result<Option<Place>, ServiceError> {
    Ok(geocoder.search(query, 1)?.into_iter().next())
}
