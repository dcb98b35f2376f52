//! Finalized drawing entities.

use super::style::StyleSnapshot;
use crate::geo::{self, GeoPoint};
use crate::util::GeoBounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radius of every circle placed with the circle tool, in meters.
pub const CIRCLE_RADIUS_M: f64 = 500.0;

/// Half side of every rectangle placed with the rectangle tool, in degrees.
pub const RECTANGLE_HALF_SPAN_DEG: f64 = 0.01;

/// Minimum buffered points for a line or measure drawing.
pub const MIN_PATH_POINTS: usize = 2;

/// Minimum buffered points for a polygon drawing.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Identifier of a finalized drawing. Unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingId(pub u64);

impl fmt::Display for DrawingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drawing-{}", self.0)
    }
}

/// Geometry and metrics of a drawing, one variant per kind.
///
/// Each variant carries only the fields its kind needs; metrics are computed once when the
/// shape is built and never recomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Fixed-radius circle placed with a single click
    Circle {
        center: GeoPoint,
        /// Radius in meters
        radius_m: f64,
    },
    /// Fixed-size square placed with a single click
    Rectangle { bounds: GeoBounds },
    /// Open polyline finished with a double-click
    Line {
        points: Vec<GeoPoint>,
        /// Sum of segment lengths in kilometers
        total_distance_km: f64,
    },
    /// Closed ring (closure implicit) finished with a double-click
    Polygon {
        points: Vec<GeoPoint>,
        /// Geodesic area in square meters
        area_m2: f64,
        /// Same area in square kilometers
        area_km2: f64,
        /// Perimeter in kilometers, closing edge included
        perimeter_km: f64,
    },
    /// Measurement path; same metrics as a line, presented differently
    Measure {
        points: Vec<GeoPoint>,
        total_distance_km: f64,
    },
}

impl Shape {
    pub fn circle(center: GeoPoint) -> Self {
        Shape::Circle {
            center,
            radius_m: CIRCLE_RADIUS_M,
        }
    }

    pub fn rectangle(center: GeoPoint) -> Self {
        Shape::Rectangle {
            bounds: GeoBounds::around(center, RECTANGLE_HALF_SPAN_DEG),
        }
    }

    pub fn line(points: Vec<GeoPoint>) -> Self {
        let total_distance_km = geo::path_length_km(&points);
        Shape::Line {
            points,
            total_distance_km,
        }
    }

    pub fn measure(points: Vec<GeoPoint>) -> Self {
        let total_distance_km = geo::path_length_km(&points);
        Shape::Measure {
            points,
            total_distance_km,
        }
    }

    pub fn polygon(points: Vec<GeoPoint>) -> Self {
        let area_m2 = geo::polygon_area_m2(&points);
        let perimeter_km = geo::polygon_perimeter_km(&points);
        Shape::Polygon {
            points,
            area_m2,
            area_km2: area_m2 / 1_000_000.0,
            perimeter_km,
        }
    }

    /// Lowercase kind name (`circle`, `rectangle`, `line`, `polygon`, `measure`).
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Line { .. } => "line",
            Shape::Polygon { .. } => "polygon",
            Shape::Measure { .. } => "measure",
        }
    }

    /// Vertices for path-based kinds; empty for circles and rectangles.
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Shape::Line { points, .. }
            | Shape::Polygon { points, .. }
            | Shape::Measure { points, .. } => points,
            Shape::Circle { .. } | Shape::Rectangle { .. } => &[],
        }
    }
}

/// A finalized, immutable drawing: identity, frozen style and geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: DrawingId,
    pub style: StyleSnapshot,
    #[serde(flatten)]
    pub shape: Shape,
}
