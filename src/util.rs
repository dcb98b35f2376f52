//! Utility functions for geographic bounds and metric labels.
//!
//! This module provides:
//! - [`GeoBounds`]: axis-aligned latitude/longitude box (rectangles, fit-to-view)
//! - [`IdSequence`]: monotonic identifier source for drawings and markers
//! - Human-readable formatting for distances and areas

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned latitude/longitude box.
///
/// Serializes as `[[south, west], [north, east]]`, the corner order map surfaces expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Box extending `half_span` degrees from `center` on both axes.
    pub fn around(center: GeoPoint, half_span: f64) -> Self {
        Self {
            south: center.lat - half_span,
            west: center.lng - half_span,
            north: center.lat + half_span,
            east: center.lng + half_span,
        }
    }

    /// Smallest box containing every point; `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for point in rest {
            bounds.expand_to_include(*point);
        }
        Some(bounds)
    }

    /// Grows the box to cover `point`.
    pub fn expand_to_include(&mut self, point: GeoPoint) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

impl From<[[f64; 2]; 2]> for GeoBounds {
    fn from(corners: [[f64; 2]; 2]) -> Self {
        Self {
            south: corners[0][0],
            west: corners[0][1],
            north: corners[1][0],
            east: corners[1][1],
        }
    }
}

impl From<GeoBounds> for [[f64; 2]; 2] {
    fn from(bounds: GeoBounds) -> Self {
        [[bounds.south, bounds.west], [bounds.north, bounds.east]]
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Monotonic counter handing out identifiers starting at 1.
///
/// Never reuses a value, even after the owning collection is cleared.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

// ============================================================================
// Metric Formatting
// ============================================================================

/// Formats kilometers with two decimals, e.g. `"111.19 km"`.
pub fn format_km(km: f64) -> String {
    format!("{km:.2} km")
}

/// Formats an area, switching to km² once it reaches one square kilometer.
///
/// # Examples
/// ```
/// use mapscriber::util::format_area;
/// assert_eq!(format_area(2_500_000.0), "2.50 km²");
/// assert_eq!(format_area(950.0), "950.00 m²");
/// ```
pub fn format_area(area_m2: f64) -> String {
    let area_km2 = area_m2 / 1_000_000.0;
    if area_km2 >= 1.0 {
        format!("{area_km2:.2} km²")
    } else {
        format!("{area_m2:.2} m²")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_around_center_use_half_span() {
        let bounds = GeoBounds::around(GeoPoint::new(40.0, -75.0), 0.01);
        let corners: [[f64; 2]; 2] = bounds.into();
        assert!((corners[0][0] - 39.99).abs() < 1e-9);
        assert!((corners[0][1] + 75.01).abs() < 1e-9);
        assert!((corners[1][0] - 40.01).abs() < 1e-9);
        assert!((corners[1][1] + 74.99).abs() < 1e-9);
    }

    #[test]
    fn bounds_from_points_cover_all_points() {
        let points = [
            GeoPoint::new(1.0, 5.0),
            GeoPoint::new(-2.0, 7.0),
            GeoPoint::new(3.0, -1.0),
        ];
        let bounds = GeoBounds::from_points(&points).expect("non-empty");
        assert_eq!((bounds.south, bounds.north), (-2.0, 3.0));
        assert_eq!((bounds.west, bounds.east), (-1.0, 7.0));
        assert_eq!(bounds.center(), GeoPoint::new(0.5, 3.0));
        assert!(GeoBounds::from_points(&[]).is_none());
    }

    #[test]
    fn bounds_serialize_as_corner_pairs() {
        let bounds = GeoBounds::from([[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
    }

    #[test]
    fn id_sequence_is_strictly_increasing() {
        let mut ids = IdSequence::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first, 1);
        assert!(second > first);
    }

    #[test]
    fn area_switches_units_at_one_square_kilometer() {
        assert_eq!(format_area(999_999.0), "999999.00 m²");
        assert_eq!(format_area(1_000_000.0), "1.00 km²");
        assert_eq!(format_km(1.234), "1.23 km");
    }
}
