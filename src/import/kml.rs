//! Coordinate-only KML conversion.
//!
//! Every `<coordinates>` element becomes one feature: a single tuple is a `Point`,
//! several tuples are a `LineString`. Names, styles and folder structure are not read.

use super::geojson::{Feature, FeatureCollection, Geometry};
use super::types::ImportError;

const OPEN_TAG: &str = "<coordinates";
const CLOSE_TAG: &str = "</coordinates>";

/// Converts a KML document into a feature collection.
pub fn parse_kml(text: &str) -> Result<FeatureCollection, ImportError> {
    let mut features = Vec::new();

    for (block_index, block) in coordinate_blocks(text)?.into_iter().enumerate() {
        let mut positions = Vec::new();
        for tuple in block.split_whitespace() {
            positions.push(parse_tuple(tuple, block_index)?);
        }

        let geometry = match positions.len() {
            0 => continue,
            1 => Geometry::Point {
                coordinates: positions.remove(0),
            },
            _ => Geometry::LineString {
                coordinates: positions,
            },
        };
        features.push(Feature::bare(geometry));
    }

    log::debug!("KML converted to {} feature(s)", features.len());
    Ok(FeatureCollection::new(features))
}

/// Text content of every `<coordinates>` element, in document order.
fn coordinate_blocks(text: &str) -> Result<Vec<&str>, ImportError> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN_TAG) {
        let after_name = &rest[start + OPEN_TAG.len()..];
        // Skip longer tag names such as <coordinatesX>.
        if !after_name.starts_with(['>', ' ', '\t', '\r', '\n', '/']) {
            rest = after_name;
            continue;
        }
        let tag_end = after_name
            .find('>')
            .ok_or_else(|| ImportError::KmlError("unterminated <coordinates> tag".to_string()))?;
        if after_name[..tag_end].ends_with('/') {
            rest = &after_name[tag_end + 1..];
            continue;
        }

        let body = &after_name[tag_end + 1..];
        let end = body
            .find(CLOSE_TAG)
            .ok_or_else(|| ImportError::KmlError("missing </coordinates>".to_string()))?;
        blocks.push(body[..end].trim());
        rest = &body[end + CLOSE_TAG.len()..];
    }

    Ok(blocks)
}

/// Parses `lng,lat[,alt]` into a GeoJSON position.
fn parse_tuple(tuple: &str, index: usize) -> Result<Vec<f64>, ImportError> {
    let invalid = |reason: String| ImportError::InvalidCoordinates { index, reason };

    let values = tuple
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|err| invalid(format!("'{tuple}': {err}")))?;

    if values.len() < 2 {
        return Err(invalid(format!("'{tuple}' needs at least lng,lat")));
    }
    Ok(values)
}
