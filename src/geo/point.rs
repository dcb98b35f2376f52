//! Geographic coordinate type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A WGS84 position in decimal degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    /// Latitude in degrees (positive north)
    pub lat: f64,
    /// Longitude in degrees (positive east)
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from a GeoJSON-ordered `[lng, lat]` pair.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// Returns the point shifted by the given number of degrees on both axes.
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Errors produced while parsing a `lat,lng` pair.
#[derive(Debug, Error, PartialEq)]
pub enum PointParseError {
    #[error("expected 'lat,lng', got '{0}'")]
    MissingComma(String),

    #[error("invalid latitude '{0}'")]
    BadLatitude(String),

    #[error("invalid longitude '{0}'")]
    BadLongitude(String),

    #[error("latitude {0} out of range -90..90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range -180..180")]
    LongitudeOutOfRange(f64),
}

/// Parses `"lat,lng"` (whitespace around either number is ignored).
impl FromStr for GeoPoint {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::MissingComma(s.to_string()))?;
        let (lat, lng) = (lat.trim(), lng.trim());
        let lat: f64 = lat
            .parse()
            .map_err(|_| PointParseError::BadLatitude(lat.to_string()))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| PointParseError::BadLongitude(lng.to_string()))?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PointParseError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(PointParseError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}
