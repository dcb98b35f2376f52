use crate::config::{BaseLayer, MapConfig};
use crate::geo::GeoPoint;
use crate::util::GeoBounds;
use serde::Serialize;

/// Zoom used when jumping to a single searched location.
pub const LOCATION_ZOOM: u8 = 13;

/// Requested viewport of the map surface.
///
/// Either a center/zoom pair or, after imports and routes, a box the surface should fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub layer: BaseLayer,
    /// Box to fit on the next render; cleared by `set_view`
    pub fit: Option<GeoBounds>,
}

impl MapView {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: config.center_point(),
            zoom: config.zoom,
            layer: config.default_layer,
            fit: None,
        }
    }

    pub fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
        self.fit = None;
    }

    pub fn tiles(&self) -> TileSource {
        TileSource::for_layer(self.layer)
    }

    pub fn fit_bounds(&mut self, bounds: GeoBounds) {
        self.center = bounds.center();
        self.fit = Some(bounds);
    }
}

/// Tile source the surface loads for a base layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    pub name: &'static str,
    /// XYZ URL template
    pub url: &'static str,
    pub attribution: &'static str,
}

impl TileSource {
    pub fn for_layer(layer: BaseLayer) -> Self {
        Self {
            name: layer.name(),
            url: layer.tile_url(),
            attribution: layer.attribution(),
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}
