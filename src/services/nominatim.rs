//! Nominatim geocoding client.

use serde::Deserialize;
use url::Url;

use super::{
    dependencies::Geocoder,
    directory_url,
    types::{Place, ServiceError},
};
use crate::geo::GeoPoint;

/// Blocking client for a Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    base_url: Url,
    user_agent: String,
}

/// One search hit. Nominatim sends coordinates as strings; numbers are accepted too.
#[derive(Debug, Deserialize)]
struct SearchHit {
    display_name: String,
    lat: Coordinate,
    lon: Coordinate,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Result<f64, ServiceError> {
        match self {
            Coordinate::Number(value) => Ok(*value),
            Coordinate::Text(text) => text.trim().parse().map_err(|_| {
                ServiceError::InvalidResponse(format!("bad coordinate '{text}'"))
            }),
        }
    }
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            base_url: directory_url(base_url)?,
            user_agent: user_agent.to_string(),
        })
    }

    /// Full request URL for a query.
    pub fn search_url(&self, query: &str, limit: usize) -> Result<Url, ServiceError> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

impl Geocoder for NominatimClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Place>, ServiceError> {
        let url = self.search_url(query, limit)?;
        log::debug!("Geocoding request: {}", url);

        let hits: Vec<SearchHit> = ureq::get(url.as_str())
            .set("User-Agent", &self.user_agent)
            .call()?
            .into_json()
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        hits_to_places(hits)
    }
}

fn hits_to_places(hits: Vec<SearchHit>) -> Result<Vec<Place>, ServiceError> {
    hits.into_iter()
        .map(|hit| {
            Ok(Place {
                position: GeoPoint::new(hit.lat.value()?, hit.lon.value()?),
                display_name: hit.display_name,
            })
        })
        .collect()
}
