//! Overlay descriptions handed to the map surface.
//!
//! The map surface draws circles, rectangles, polylines and polygons; this module turns
//! finalized drawings and the in-progress point buffer into that vocabulary, in draw
//! order, together with the human-readable metrics labels.

use super::shape::{Drawing, DrawingId, Shape};
use super::store::DrawingStore;
use super::style::StyleSnapshot;
use crate::geo::GeoPoint;
use crate::util::{self, GeoBounds};
use serde::Serialize;

/// Dash pattern used for the transient measure preview.
const MEASURE_PREVIEW_DASH: &[u32] = &[5, 10];

/// Geometric primitive understood by the map surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "primitive", rename_all = "lowercase")]
pub enum Primitive {
    Circle { center: GeoPoint, radius_m: f64 },
    Rectangle { bounds: GeoBounds },
    Polyline { points: Vec<GeoPoint> },
    Polygon { points: Vec<GeoPoint> },
}

/// Where an overlay comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlaySource {
    /// A finalized drawing in the store
    Drawing(DrawingId),
    /// The point buffer of the active tool
    Preview,
}

/// One renderable overlay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay {
    pub source: OverlaySource,
    #[serde(flatten)]
    pub primitive: Primitive,
    pub style: StyleSnapshot,
    /// Dash/gap lengths in pixels, `None` for solid strokes
    pub dash_pattern: Option<Vec<u32>>,
    /// Metrics popup text for line, polygon and measure drawings
    pub label: Option<String>,
}

/// In-progress buffer to draw on top of the finalized drawings.
#[derive(Clone, Copy, Debug)]
pub struct Preview<'a> {
    pub points: &'a [GeoPoint],
    pub style: &'a StyleSnapshot,
    pub kind: PreviewKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Line,
    Polygon,
    Measure,
}

/// Builds the overlay for a single finalized drawing.
pub fn render_drawing(drawing: &Drawing) -> Overlay {
    let primitive = match &drawing.shape {
        Shape::Circle { center, radius_m } => Primitive::Circle {
            center: *center,
            radius_m: *radius_m,
        },
        Shape::Rectangle { bounds } => Primitive::Rectangle { bounds: *bounds },
        Shape::Line { points, .. } | Shape::Measure { points, .. } => Primitive::Polyline {
            points: points.clone(),
        },
        Shape::Polygon { points, .. } => Primitive::Polygon {
            points: points.clone(),
        },
    };

    Overlay {
        source: OverlaySource::Drawing(drawing.id),
        primitive,
        style: drawing.style.clone(),
        dash_pattern: drawing.style.dash_pattern().map(<[u32]>::to_vec),
        label: metrics_label(&drawing.shape),
    }
}

/// Renders every drawing in store order, then the preview (if it has anything to show).
pub fn render_overlays(store: &DrawingStore, preview: Option<Preview<'_>>) -> Vec<Overlay> {
    let mut overlays: Vec<Overlay> = store.iter().map(render_drawing).collect();
    if let Some(preview) = preview.and_then(render_preview) {
        overlays.push(preview);
    }
    overlays
}

/// Builds the transient overlay for a point buffer.
///
/// Polylines need one point to be visible as a vertex, polygons need two.
pub fn render_preview(preview: Preview<'_>) -> Option<Overlay> {
    let points = preview.points.to_vec();
    let (primitive, dash_pattern) = match preview.kind {
        PreviewKind::Line if !points.is_empty() => (
            Primitive::Polyline { points },
            preview.style.dash_pattern().map(<[u32]>::to_vec),
        ),
        PreviewKind::Measure if !points.is_empty() => (
            Primitive::Polyline { points },
            Some(MEASURE_PREVIEW_DASH.to_vec()),
        ),
        PreviewKind::Polygon if points.len() >= 2 => (
            Primitive::Polygon { points },
            Some(preview.style.dash_pattern().unwrap_or(&[5, 5]).to_vec()),
        ),
        _ => return None,
    };

    Some(Overlay {
        source: OverlaySource::Preview,
        primitive,
        style: preview.style.clone(),
        dash_pattern,
        label: None,
    })
}

/// Human-readable metrics for path and area drawings; `None` for circles and rectangles.
pub fn metrics_label(shape: &Shape) -> Option<String> {
    match shape {
        Shape::Line {
            total_distance_km, ..
        } => Some(format!("Distance: {}", util::format_km(*total_distance_km))),
        Shape::Measure {
            total_distance_km, ..
        } => Some(util::format_km(*total_distance_km)),
        Shape::Polygon {
            area_m2,
            perimeter_km,
            ..
        } => Some(format!(
            "Area: {}\nPerimeter: {}",
            util::format_area(*area_m2),
            util::format_km(*perimeter_km)
        )),
        Shape::Circle { .. } | Shape::Rectangle { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::LineStyle;
    use crate::draw::style::StylePatch;
    use crate::input::Tool;

    fn drawing(id: u64, shape: Shape, tool: Tool) -> Drawing {
        Drawing {
            id: DrawingId(id),
            style: StyleSnapshot::default_for(tool),
            shape,
        }
    }

    #[test]
    fn overlays_follow_store_order_then_preview() {
        let mut store = DrawingStore::new();
        store.append(drawing(
            1,
            Shape::circle(GeoPoint::new(0.0, 0.0)),
            Tool::Circle,
        ));
        store.append(drawing(
            2,
            Shape::rectangle(GeoPoint::new(1.0, 1.0)),
            Tool::Rectangle,
        ));

        let style = StyleSnapshot::default_for(Tool::Line);
        let points = [GeoPoint::new(0.0, 0.0)];
        let overlays = render_overlays(
            &store,
            Some(Preview {
                points: &points,
                style: &style,
                kind: PreviewKind::Line,
            }),
        );

        assert_eq!(overlays.len(), 3);
        assert_eq!(overlays[0].source, OverlaySource::Drawing(DrawingId(1)));
        assert!(matches!(overlays[1].primitive, Primitive::Rectangle { .. }));
        assert_eq!(overlays[2].source, OverlaySource::Preview);
        assert!(overlays[0].label.is_none());
    }

    #[test]
    fn polygon_preview_needs_two_points() {
        let style = StyleSnapshot::default_for(Tool::Polygon);
        let one = [GeoPoint::new(0.0, 0.0)];
        assert!(
            render_preview(Preview {
                points: &one,
                style: &style,
                kind: PreviewKind::Polygon,
            })
            .is_none()
        );
        let two = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)];
        let overlay = render_preview(Preview {
            points: &two,
            style: &style,
            kind: PreviewKind::Polygon,
        })
        .expect("two points render");
        assert_eq!(overlay.dash_pattern, Some(vec![5, 5]));
    }

    #[test]
    fn dash_pattern_follows_frozen_style() {
        let style = StyleSnapshot::default_for(Tool::Line).merged(&StylePatch {
            line_style: Some(LineStyle::Dashed),
            ..StylePatch::default()
        });
        let line = Drawing {
            id: DrawingId(3),
            style,
            shape: Shape::line(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]),
        };
        let overlay = render_drawing(&line);
        assert_eq!(overlay.dash_pattern, Some(vec![10, 10]));
        assert_eq!(overlay.label.as_deref(), Some("Distance: 111.20 km"));
    }

    #[test]
    fn polygon_label_switches_area_units() {
        let small = Shape::Polygon {
            points: Vec::new(),
            area_m2: 5_000.0,
            area_km2: 0.005,
            perimeter_km: 0.3,
        };
        assert_eq!(
            metrics_label(&small).unwrap(),
            "Area: 5000.00 m²\nPerimeter: 0.30 km"
        );

        let large = Shape::Polygon {
            points: Vec::new(),
            area_m2: 12_345_678.0,
            area_km2: 12.345678,
            perimeter_km: 14.0,
        };
        assert_eq!(
            metrics_label(&large).unwrap(),
            "Area: 12.35 km²\nPerimeter: 14.00 km"
        );
    }
}
