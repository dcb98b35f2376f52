//! Minimal GeoJSON model: just enough to read feature collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FEATURE_COLLECTION: &str = "FeatureCollection";

/// A GeoJSON document root.
///
/// Other root types deserialize too (with no features) and simply yield nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// Geometry of a feature. Positions are `[lng, lat]` or `[lng, lat, alt]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    /// Any other geometry; ignored when extracting markers
    #[serde(other)]
    Unsupported,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FEATURE_COLLECTION.to_string(),
            features,
        }
    }

    pub fn is_feature_collection(&self) -> bool {
        self.kind == FEATURE_COLLECTION
    }
}

impl Feature {
    /// Feature with no properties.
    pub fn bare(geometry: Geometry) -> Self {
        Self {
            kind: feature_type(),
            geometry,
            properties: Some(Map::new()),
        }
    }

    /// Non-empty textual property, with numbers rendered as text.
    pub fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.as_ref()?.get(key)? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}
