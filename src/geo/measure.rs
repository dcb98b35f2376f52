//! Great-circle distance and spherical polygon metrics.

use super::point::GeoPoint;

/// Mean Earth radius used for distances (kilometers).
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// WGS84 equatorial radius used for ring areas (meters).
pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Haversine distance between two points in kilometers.
///
/// Symmetric, and exactly `0.0` when `a == b`.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let half_chord = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs just past 1.0.
    let half_chord = half_chord.clamp(0.0, 1.0);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_MEAN_RADIUS_KM * angle
}

/// Sum of consecutive segment distances; `0.0` for fewer than two points.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum()
}

/// Unsigned geodesic area of the ring closed from `points` back to the first point.
///
/// Uses the spherical-excess line integral (Chamberlain & Duquette), so degree spans
/// shrink with latitude the way they do on the globe. Returns `0.0` below three points.
pub fn polygon_area_m2(points: &[GeoPoint]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let lower = points[i];
        let middle = points[(i + 1) % n];
        let upper = points[(i + 2) % n];
        total += (upper.lng.to_radians() - lower.lng.to_radians()) * middle.lat.to_radians().sin();
    }

    (total * WGS84_EQUATORIAL_RADIUS_M * WGS84_EQUATORIAL_RADIUS_M / 2.0).abs()
}

/// Path length plus the closing edge from the last point back to the first.
pub fn polygon_perimeter_km(points: &[GeoPoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(&first), Some(&last)) if points.len() >= 2 => {
            path_length_km(points) + distance_km(last, first)
        }
        _ => 0.0,
    }
}
