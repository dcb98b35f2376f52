//! Toast texts for state machine effects.

use crate::draw::Shape;
use crate::input::{Effect, Tool};
use crate::notification::NoticeQueue;
use crate::util::{format_area, format_km};

const MORE_POINTS_HINT: &str = "Click to add more points, double-click to finish";

/// Posts the notice (if any) that describes `effect`.
pub fn post_effect(notices: &mut NoticeQueue, effect: &Effect) {
    match effect {
        Effect::Activated(tool) => notices.info(tool.activation_hint()),
        Effect::Deactivated(_) => notices.info("Tool deactivated"),
        Effect::PointBuffered {
            tool,
            count,
            segment_km,
            total_km,
        } => post_buffered(notices, *tool, *count, *segment_km, *total_km),
        Effect::Commit(shape) => post_commit(notices, shape),
        // Buffer is kept; nothing to report.
        Effect::FinalizeRefused { .. } => {}
        Effect::ClearedAll => notices.success("Drawings cleared"),
    }
}

fn post_buffered(
    notices: &mut NoticeQueue,
    tool: Tool,
    count: usize,
    segment_km: Option<f64>,
    total_km: Option<f64>,
) {
    match (tool, count) {
        (Tool::Line | Tool::Polygon, 1) => notices.info(MORE_POINTS_HINT),
        (Tool::Line, _) => {
            if let Some(segment) = segment_km {
                notices.success(format!("Segment added: {}", format_km(segment)));
            }
        }
        (Tool::Polygon, 2) => notices.info("Add at least 3 points for a polygon"),
        (Tool::Polygon, n) => notices.success(format!("Point {n} added")),
        (Tool::Measure, 1) => notices.info("Click again to measure distance"),
        (Tool::Measure, _) => {
            if let (Some(segment), Some(total)) = (segment_km, total_km) {
                notices.success(format!(
                    "Segment: {} | Total: {}",
                    format_km(segment),
                    format_km(total)
                ));
            }
        }
        (Tool::Circle | Tool::Rectangle, _) => {}
    }
}

fn post_commit(notices: &mut NoticeQueue, shape: &Shape) {
    match shape {
        Shape::Circle { .. } => notices.success("Circle added!"),
        Shape::Rectangle { .. } => notices.success("Rectangle added!"),
        Shape::Line {
            total_distance_km, ..
        } => notices.success(format!(
            "Line completed! Total distance: {}",
            format_km(*total_distance_km)
        )),
        Shape::Polygon {
            area_m2,
            perimeter_km,
            ..
        } => notices.success(format!(
            "Polygon completed! Area: {}, Perimeter: {}",
            format_area(*area_m2),
            format_km(*perimeter_km)
        )),
        // Measurements are reported per click by the buffered-point notice.
        Shape::Measure { .. } => {}
    }
}
