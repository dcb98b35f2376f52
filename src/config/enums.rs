//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basemap tile layer.
///
/// Tiles are rendered by the map surface; only the choice and its source URL live here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BaseLayer {
    /// OpenStreetMap standard tiles
    #[default]
    Osm,
    /// Esri World Imagery
    Satellite,
    /// OpenTopoMap
    Topo,
    /// CARTO dark basemap
    Dark,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 4] = [
        BaseLayer::Osm,
        BaseLayer::Satellite,
        BaseLayer::Topo,
        BaseLayer::Dark,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BaseLayer::Osm => "osm",
            BaseLayer::Satellite => "satellite",
            BaseLayer::Topo => "topo",
            BaseLayer::Dark => "dark",
        }
    }

    /// Display name shown in the layer picker.
    pub fn name(self) -> &'static str {
        match self {
            BaseLayer::Osm => "OpenStreetMap",
            BaseLayer::Satellite => "Satellite",
            BaseLayer::Topo => "Topographic",
            BaseLayer::Dark => "Dark",
        }
    }

    /// XYZ tile URL template.
    pub fn tile_url(self) -> &'static str {
        match self {
            BaseLayer::Osm => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            BaseLayer::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            BaseLayer::Topo => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            BaseLayer::Dark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            BaseLayer::Osm => "&copy; OpenStreetMap contributors",
            BaseLayer::Satellite => "&copy; Esri",
            BaseLayer::Topo => "&copy; OpenTopoMap",
            BaseLayer::Dark => "&copy; CARTO",
        }
    }
}

impl fmt::Display for BaseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BaseLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseLayer::ALL
            .into_iter()
            .find(|layer| layer.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown layer '{s}'"))
    }
}
