//! Geodesic measurement primitives.
//!
//! This module defines the coordinate type every other subsystem works with and the
//! pure functions that turn coordinate sequences into metrics:
//! - [`GeoPoint`]: WGS84 latitude/longitude pair in degrees
//! - [`distance_km`] / [`path_length_km`]: great-circle distances
//! - [`polygon_area_m2`] / [`polygon_perimeter_km`]: closed-ring metrics
//!
//! Nothing here holds state; degenerate inputs yield zero rather than errors.

pub mod measure;
pub mod point;

pub use measure::{
    EARTH_MEAN_RADIUS_KM, WGS84_EQUATORIAL_RADIUS_M, distance_km, path_length_km,
    polygon_area_m2, polygon_perimeter_km,
};
pub use point::{GeoPoint, PointParseError};
