//! Geographic file import.
//!
//! This module turns GeoJSON feature collections and KML documents into markers:
//! - `.geojson` / `.json` files are read as a feature collection
//! - `.kml` files are reduced to their `<coordinates>` elements
//! - Only `Point` features become markers; everything else is skipped
//!
//! Imports are all-or-nothing: the first malformed feature aborts the whole file.

pub mod geojson;
pub mod kml;
pub mod types;


pub use geojson::{Feature, FeatureCollection, Geometry};
pub use kml::parse_kml;
pub use types::{ImportError, ImportFormat};

use crate::geo::GeoPoint;
use crate::markers::NewMarker;
use std::fs;
use std::path::Path;

const DEFAULT_DESCRIPTION: &str = "Imported from file";

/// Parses a GeoJSON document.
pub fn parse_geojson(text: &str) -> Result<FeatureCollection, ImportError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses `text` in the given format.
pub fn parse(text: &str, format: ImportFormat) -> Result<FeatureCollection, ImportError> {
    match format {
        ImportFormat::GeoJson => parse_geojson(text),
        ImportFormat::Kml => parse_kml(text),
    }
}

/// Builds markers from the `Point` features of a collection.
///
/// Untitled points are named `Imported N`, counting only point features. Returns no
/// markers for documents that are not feature collections.
pub fn extract_markers(collection: &FeatureCollection) -> Result<Vec<NewMarker>, ImportError> {
    if !collection.is_feature_collection() {
        log::warn!(
            "Ignoring GeoJSON root of type '{}', expected FeatureCollection",
            collection.kind
        );
        return Ok(Vec::new());
    }

    let points = collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| match &feature.geometry {
            Geometry::Point { coordinates } => Some((index, feature, coordinates)),
            _ => None,
        });

    let mut markers = Vec::new();
    for (point_index, (feature_index, feature, coordinates)) in points.enumerate() {
        let position = position_from(coordinates, feature_index)?;
        markers.push(NewMarker {
            position,
            title: feature
                .property_text("name")
                .unwrap_or_else(|| format!("Imported {}", point_index + 1)),
            description: feature
                .property_text("description")
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        });
    }

    Ok(markers)
}

/// Reads `path`, detects its format from the extension and extracts markers.
pub fn load_file(path: &Path) -> Result<Vec<NewMarker>, ImportError> {
    let format = ImportFormat::from_path(path)
        .ok_or_else(|| ImportError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| ImportError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let markers = extract_markers(&parse(&text, format)?)?;
    log::info!(
        "Parsed {} marker(s) from {}",
        markers.len(),
        path.display()
    );
    Ok(markers)
}

fn position_from(coordinates: &[f64], index: usize) -> Result<GeoPoint, ImportError> {
    let [lng, lat, ..] = coordinates else {
        return Err(ImportError::InvalidCoordinates {
            index,
            reason: format!("expected [lng, lat], got {} value(s)", coordinates.len()),
        });
    };
    if !lat.is_finite() || !lng.is_finite() {
        return Err(ImportError::InvalidCoordinates {
            index,
            reason: "non-finite coordinate".to_string(),
        });
    }
    Ok(GeoPoint::from_lng_lat([*lng, *lat]))
}
