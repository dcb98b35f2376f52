use std::path::PathBuf;
use thiserror::Error;

/// Supported import file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// `.geojson` or `.json` feature collection
    GeoJson,
    /// `.kml` place-mark document (coordinates only)
    Kml,
}

impl ImportFormat {
    /// Detects the format from a file name; `None` for anything else.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "geojson" | "json" => Some(ImportFormat::GeoJson),
            "kml" => Some(ImportFormat::Kml),
            _ => None,
        }
    }
}

/// Errors that can occur while importing a geographic file.
///
/// Any error aborts the whole import; no markers are added.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type: {0} (expected .geojson, .json or .kml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid GeoJSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid KML: {0}")]
    KmlError(String),

    #[error("Invalid coordinates in feature {index}: {reason}")]
    InvalidCoordinates { index: usize, reason: String },
}
