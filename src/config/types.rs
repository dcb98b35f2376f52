//! Configuration type definitions.

use super::enums::BaseLayer;
use crate::geo::GeoPoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geocoding and routing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ServicesConfig {
    /// Base URL of a Nominatim-compatible geocoder
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// Base URL of an OSRM-compatible router
    #[serde(default = "default_router_url")]
    pub router_url: String,

    /// OSRM profile segment (driving, walking, cycling, ...)
    #[serde(default = "default_routing_profile")]
    pub routing_profile: String,

    /// Maximum number of search results (valid range: 1 - 20)
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// User-Agent header sent with every request (public Nominatim requires one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            geocoder_url: default_geocoder_url(),
            router_url: default_router_url(),
            routing_profile: default_routing_profile(),
            search_limit: default_search_limit(),
            user_agent: default_user_agent(),
        }
    }
}

/// Initial map view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MapConfig {
    /// Basemap shown at startup (osm, satellite, topo, dark)
    #[serde(default)]
    pub default_layer: BaseLayer,

    /// Initial view center as `[lat, lng]`
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    /// Initial zoom level (valid range: 1 - 19)
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl MapConfig {
    pub fn center_point(&self) -> GeoPoint {
        GeoPoint::new(self.center[0], self.center[1])
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_layer: BaseLayer::default(),
            center: default_center(),
            zoom: default_zoom(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NotificationsConfig {
    /// Maximum number of toasts on screen at once (valid range: 1 - 20)
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_router_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_routing_profile() -> String {
    "driving".to_string()
}

fn default_search_limit() -> usize {
    5
}

fn default_user_agent() -> String {
    format!("mapscriber/{}", env!("CARGO_PKG_VERSION"))
}

fn default_center() -> [f64; 2] {
    [51.505, -0.09]
}

fn default_zoom() -> u8 {
    13
}

fn default_max_visible() -> usize {
    5
}
