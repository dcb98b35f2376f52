//! Pure transition function for the tool state machine.
//!
//! `transition(state, event)` returns the next state plus the effects the caller must
//! apply (style reset, drawing commit, store clear). Nothing here touches the store or
//! the editable style, so every handler runs against the state it was given.

use super::core::DrawingState;
use crate::draw::Shape;
use crate::draw::shape::{MIN_PATH_POINTS, MIN_POLYGON_POINTS};
use crate::geo::{self, GeoPoint};
use crate::input::Tool;

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    /// Tool button pressed; re-selecting the active tool toggles it off
    Select(Tool),
    /// Single click forwarded by the router
    Point(GeoPoint),
    /// Double click forwarded by the router
    Finalize,
    /// Clear every drawing and return to idle
    ClearAll,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `tool` became active; the editable style must be reset to its default
    Activated(Tool),
    /// The active tool was toggled off and its buffer discarded
    Deactivated(Tool),
    /// A point was appended to the buffer
    PointBuffered {
        tool: Tool,
        /// Buffer length after the append
        count: usize,
        /// Distance from the previous point, when there is one (line and measure)
        segment_km: Option<f64>,
        /// Length of the whole buffer (measure only, once it has 2+ points)
        total_km: Option<f64>,
    },
    /// A finished shape must be frozen with the current style and appended
    Commit(Shape),
    /// Finalize was requested with too few points; nothing changed
    FinalizeRefused {
        tool: Tool,
        count: usize,
        required: usize,
    },
    /// The store must be emptied
    ClearedAll,
}

/// Advances the machine by one event.
pub fn transition(state: DrawingState, event: ToolEvent) -> (DrawingState, Vec<Effect>) {
    match event {
        ToolEvent::Select(tool) => select(state, tool),
        ToolEvent::Point(point) => handle_point(state, point),
        ToolEvent::Finalize => finalize(state),
        ToolEvent::ClearAll => (DrawingState::Idle, vec![Effect::ClearedAll]),
    }
}

fn select(state: DrawingState, tool: Tool) -> (DrawingState, Vec<Effect>) {
    if state.active_tool() == Some(tool) {
        return (DrawingState::Idle, vec![Effect::Deactivated(tool)]);
    }
    (DrawingState::initial(tool), vec![Effect::Activated(tool)])
}

fn handle_point(state: DrawingState, point: GeoPoint) -> (DrawingState, Vec<Effect>) {
    match state {
        DrawingState::Idle => (DrawingState::Idle, Vec::new()),
        DrawingState::Placing { tool: Tool::Circle } => {
            (DrawingState::Idle, vec![Effect::Commit(Shape::circle(point))])
        }
        DrawingState::Placing { tool: Tool::Rectangle } => (
            DrawingState::Idle,
            vec![Effect::Commit(Shape::rectangle(point))],
        ),
        DrawingState::Placing { tool } => {
            // Multi-click tools never reach Placing; treat as a fresh buffer.
            handle_point(DrawingState::initial(tool), point)
        }
        DrawingState::Accumulating { tool, mut points } => {
            let segment_km = points.last().map(|&prev| geo::distance_km(prev, point));
            points.push(point);
            let count = points.len();

            let mut effects = Vec::with_capacity(2);
            match tool {
                Tool::Line => effects.push(Effect::PointBuffered {
                    tool,
                    count,
                    segment_km,
                    total_km: None,
                }),
                Tool::Polygon => effects.push(Effect::PointBuffered {
                    tool,
                    count,
                    segment_km: None,
                    total_km: None,
                }),
                Tool::Measure => {
                    let committed = count >= MIN_PATH_POINTS;
                    effects.push(Effect::PointBuffered {
                        tool,
                        count,
                        segment_km,
                        total_km: committed.then(|| geo::path_length_km(&points)),
                    });
                    if committed {
                        effects.push(Effect::Commit(Shape::measure(points.clone())));
                    }
                }
                Tool::Circle | Tool::Rectangle => {}
            }

            (DrawingState::Accumulating { tool, points }, effects)
        }
    }
}

fn finalize(state: DrawingState) -> (DrawingState, Vec<Effect>) {
    let DrawingState::Accumulating { tool, points } = state else {
        return (state, Vec::new());
    };

    let required = match tool {
        Tool::Line => MIN_PATH_POINTS,
        Tool::Polygon => MIN_POLYGON_POINTS,
        _ => return (DrawingState::Accumulating { tool, points }, Vec::new()),
    };

    if points.len() < required {
        let count = points.len();
        return (
            DrawingState::Accumulating { tool, points },
            vec![Effect::FinalizeRefused {
                tool,
                count,
                required,
            }],
        );
    }

    let shape = if tool == Tool::Line {
        Shape::line(points)
    } else {
        Shape::polygon(points)
    };
    (DrawingState::Idle, vec![Effect::Commit(shape)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut state: DrawingState, events: Vec<ToolEvent>) -> (DrawingState, Vec<Effect>) {
        let mut all = Vec::new();
        for event in events {
            let (next, effects) = transition(state, event);
            state = next;
            all.extend(effects);
        }
        (state, all)
    }

    #[test]
    fn point_while_idle_is_ignored() {
        let (state, effects) = transition(
            DrawingState::Idle,
            ToolEvent::Point(GeoPoint::new(1.0, 1.0)),
        );
        assert_eq!(state, DrawingState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn reselecting_toggles_off() {
        let (state, effects) = run(
            DrawingState::Idle,
            vec![
                ToolEvent::Select(Tool::Polygon),
                ToolEvent::Point(GeoPoint::new(0.0, 0.0)),
                ToolEvent::Select(Tool::Polygon),
            ],
        );
        assert_eq!(state, DrawingState::Idle);
        assert_eq!(effects.last(), Some(&Effect::Deactivated(Tool::Polygon)));
    }

    #[test]
    fn switching_tools_discards_buffer() {
        let (state, _) = run(
            DrawingState::Idle,
            vec![
                ToolEvent::Select(Tool::Line),
                ToolEvent::Point(GeoPoint::new(0.0, 0.0)),
                ToolEvent::Select(Tool::Polygon),
            ],
        );
        assert_eq!(
            state,
            DrawingState::Accumulating {
                tool: Tool::Polygon,
                points: Vec::new()
            }
        );
    }

    #[test]
    fn circle_commits_on_first_click() {
        let (state, effects) = run(
            DrawingState::Idle,
            vec![
                ToolEvent::Select(Tool::Circle),
                ToolEvent::Point(GeoPoint::new(40.0, -75.0)),
            ],
        );
        assert_eq!(state, DrawingState::Idle);
        assert_eq!(
            effects.last(),
            Some(&Effect::Commit(Shape::circle(GeoPoint::new(40.0, -75.0))))
        );
    }

    #[test]
    fn line_reports_segment_distance() {
        let (_, effects) = run(
            DrawingState::Idle,
            vec![
                ToolEvent::Select(Tool::Line),
                ToolEvent::Point(GeoPoint::new(0.0, 0.0)),
                ToolEvent::Point(GeoPoint::new(0.0, 1.0)),
            ],
        );
        let Some(Effect::PointBuffered {
            count, segment_km, ..
        }) = effects.last()
        else {
            panic!("expected buffered point, got {effects:?}");
        };
        assert_eq!(*count, 2);
        assert!((segment_km.unwrap() - 111.19).abs() < 1.0);
    }

    #[test]
    fn measure_commits_snapshot_each_click_after_first() {
        let (state, effects) = run(
            DrawingState::Idle,
            vec![
                ToolEvent::Select(Tool::Measure),
                ToolEvent::Point(GeoPoint::new(0.0, 0.0)),
                ToolEvent::Point(GeoPoint::new(0.0, 1.0)),
                ToolEvent::Point(GeoPoint::new(0.0, 2.0)),
            ],
        );
        let commits: Vec<usize> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Commit(shape) => Some(shape.points().len()),
                _ => None,
            })
            .collect();
        assert_eq!(commits, vec![2, 3]);
        assert_eq!(state.points().len(), 3);
        assert_eq!(state.active_tool(), Some(Tool::Measure));
    }

    #[test]
    fn finalize_polygon_requires_three_points() {
        let start = DrawingState::Accumulating {
            tool: Tool::Polygon,
            points: vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)],
        };
        let (state, effects) = transition(start.clone(), ToolEvent::Finalize);
        assert_eq!(state, start);
        assert_eq!(
            effects,
            vec![Effect::FinalizeRefused {
                tool: Tool::Polygon,
                count: 2,
                required: 3
            }]
        );
    }

    #[test]
    fn finalize_line_requires_two_points() {
        let start = DrawingState::Accumulating {
            tool: Tool::Line,
            points: vec![GeoPoint::new(0.0, 0.0)],
        };
        let (state, effects) = transition(start.clone(), ToolEvent::Finalize);
        assert_eq!(state, start);
        assert_eq!(
            effects,
            vec![Effect::FinalizeRefused {
                tool: Tool::Line,
                count: 1,
                required: 2
            }]
        );
    }

    #[test]
    fn finalize_is_ignored_for_measure() {
        let start = DrawingState::Accumulating {
            tool: Tool::Measure,
            points: vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)],
        };
        let (state, effects) = transition(start.clone(), ToolEvent::Finalize);
        assert_eq!(state, start);
        assert!(effects.is_empty());
    }

    #[test]
    fn clear_all_returns_to_idle_from_anywhere() {
        let start = DrawingState::Accumulating {
            tool: Tool::Line,
            points: vec![GeoPoint::new(0.0, 0.0)],
        };
        let (state, effects) = transition(start, ToolEvent::ClearAll);
        assert_eq!(state, DrawingState::Idle);
        assert_eq!(effects, vec![Effect::ClearedAll]);
    }
}
