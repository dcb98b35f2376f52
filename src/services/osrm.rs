//! OSRM routing client.

use serde::Deserialize;
use url::Url;

use super::{
    dependencies::Router,
    directory_url,
    types::{Route, ServiceError},
};
use crate::geo::GeoPoint;

const OK_CODE: &str = "Ok";

/// Blocking client for an OSRM `/route/v1` endpoint.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    base_url: Url,
    profile: String,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
    geometry: LineGeometry,
}

#[derive(Debug, Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmClient {
    pub fn new(base_url: &str, profile: &str, user_agent: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            base_url: directory_url(base_url)?,
            profile: profile.to_string(),
            user_agent: user_agent.to_string(),
        })
    }

    /// Full request URL; OSRM takes `lng,lat` pairs.
    pub fn route_url(&self, start: GeoPoint, end: GeoPoint) -> Result<Url, ServiceError> {
        let path = format!(
            "route/v1/{}/{},{};{},{}",
            self.profile, start.lng, start.lat, end.lng, end.lat
        );
        let mut url = self.base_url.join(&path)?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");
        Ok(url)
    }
}

impl Router for OsrmClient {
    fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, ServiceError> {
        let url = self.route_url(start, end)?;
        log::debug!("Routing request: {}", url);

        let response = match ureq::get(url.as_str())
            .set("User-Agent", &self.user_agent)
            .call()
        {
            Ok(resp) => resp,
            // OSRM reports NoRoute and friends as 4xx with a JSON body.
            Err(ureq::Error::Status(status, resp)) => {
                log::warn!("Routing service answered HTTP {}", status);
                resp
            }
            Err(e) => return Err(e.into()),
        };

        let body: RouteResponse = response
            .into_json()
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;
        route_from_response(body)
    }
}

fn route_from_response(body: RouteResponse) -> Result<Route, ServiceError> {
    if body.code != OK_CODE {
        return Err(ServiceError::RouteFailed {
            code: body.code,
            message: body.message.unwrap_or_default(),
        });
    }
    let entry = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::InvalidResponse("no routes in response".to_string()))?;

    Ok(Route {
        geometry: entry
            .geometry
            .coordinates
            .into_iter()
            .map(GeoPoint::from_lng_lat)
            .collect(),
        distance_km: entry.distance / 1000.0,
        duration_min: (entry.duration / 60.0).round().max(0.0) as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_url_uses_lng_lat_order() {
        let client = OsrmClient::new("https://osrm.example.org", "driving", "test").unwrap();
        let url = client
            .route_url(GeoPoint::new(51.5, -0.1), GeoPoint::new(48.85, 2.35))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://osrm.example.org/route/v1/driving/-0.1,51.5;2.35,48.85?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn converts_geometry_distance_and_duration() {
        let body: RouteResponse = serde_json::from_str(
            r#"{"code": "Ok", "routes": [{"distance": 12345.0, "duration": 1290.0,
                "geometry": {"type": "LineString", "coordinates": [[-0.1, 51.5], [2.35, 48.85]]}}]}"#,
        )
        .unwrap();
        let route = route_from_response(body).unwrap();

        assert_eq!(route.geometry[0], GeoPoint::new(51.5, -0.1));
        assert!((route.distance_km - 12.345).abs() < 1e-9);
        assert_eq!(route.duration_min, 22);
    }

    #[test]
    fn non_ok_code_fails() {
        let body: RouteResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "message": "Impossible route"}"#).unwrap();
        let err = route_from_response(body).unwrap_err();
        assert!(matches!(err, ServiceError::RouteFailed { ref code, .. } if code == "NoRoute"));
    }
}
