//! Drawing state machine and input state management.

use super::transition::{Effect, ToolEvent, transition};
use crate::draw::{Drawing, DrawingId, DrawingStore, StylePatch, StyleResolver, StyleSnapshot};
use crate::geo::GeoPoint;
use crate::input::tool::Tool;
use crate::markers::MarkerStore;
use crate::util::IdSequence;
use log::{debug, info, warn};

/// Current tool state machine.
///
/// Cycles between `Idle` and a per-tool state for the lifetime of the session; there is no
/// terminal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawingState {
    /// No tool active, no buffer
    #[default]
    Idle,
    /// Single-click tool (circle, rectangle) armed; the next click places the shape
    Placing {
        tool: Tool,
    },
    /// Multi-click tool (line, polygon, measure) collecting points
    Accumulating {
        tool: Tool,
        /// Clicked points in order; discarded if the tool is switched or toggled off
        points: Vec<GeoPoint>,
    },
}

impl DrawingState {
    /// Entry state for a freshly selected tool (empty buffer).
    pub fn initial(tool: Tool) -> Self {
        if tool.accumulates_points() {
            DrawingState::Accumulating {
                tool,
                points: Vec::new(),
            }
        } else {
            DrawingState::Placing { tool }
        }
    }

    pub fn active_tool(&self) -> Option<Tool> {
        match self {
            DrawingState::Idle => None,
            DrawingState::Placing { tool } | DrawingState::Accumulating { tool, .. } => Some(*tool),
        }
    }

    /// Buffered points; empty unless accumulating.
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            DrawingState::Accumulating { points, .. } => points,
            _ => &[],
        }
    }
}

/// Main input state containing all drawing session state.
///
/// Owns the tool state machine, the editable style, the drawing store and the markers.
/// Every call runs to completion synchronously; the returned [`Effect`]s describe what
/// happened so callers can surface feedback.
#[derive(Debug)]
pub struct InputState {
    /// Current tool state machine
    state: DrawingState,
    /// Style being edited for the active tool
    pub(crate) style: StyleResolver,
    /// Finalized drawings
    store: DrawingStore,
    /// Source of drawing identifiers (not reset by clear-all)
    drawing_ids: IdSequence,
    /// Point markers, independent from drawings
    pub(crate) markers: MarkerStore,
    /// Whether single clicks also create markers
    pub(crate) marker_mode: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Creates an idle state with an empty store and no markers.
    pub fn new() -> Self {
        Self {
            state: DrawingState::Idle,
            style: StyleResolver::new(),
            store: DrawingStore::new(),
            drawing_ids: IdSequence::new(),
            markers: MarkerStore::new(),
            marker_mode: false,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.state.active_tool()
    }

    /// Points buffered by the active multi-click tool.
    pub fn buffer(&self) -> &[GeoPoint] {
        self.state.points()
    }

    pub fn drawings(&self) -> &DrawingStore {
        &self.store
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    pub fn marker_mode(&self) -> bool {
        self.marker_mode
    }

    pub fn current_style(&self) -> &StyleSnapshot {
        self.style.current()
    }

    /// Selects `tool`, or toggles it off if it is already active.
    pub fn select_tool(&mut self, tool: Tool) -> Vec<Effect> {
        self.dispatch(ToolEvent::Select(tool))
    }

    /// Feeds a clicked point to the active tool.
    pub fn handle_point(&mut self, point: GeoPoint) -> Vec<Effect> {
        self.dispatch(ToolEvent::Point(point))
    }

    /// Finishes the line or polygon buffer if it has enough points.
    pub fn finalize(&mut self) -> Vec<Effect> {
        self.dispatch(ToolEvent::Finalize)
    }

    /// Empties the store and the buffer and returns to idle. Markers are untouched.
    pub fn clear_all(&mut self) -> Vec<Effect> {
        self.dispatch(ToolEvent::ClearAll)
    }

    /// Merges a live style edit into the editable style.
    pub fn apply_style(&mut self, patch: &StylePatch) -> &StyleSnapshot {
        self.style.apply_override(patch)
    }

    /// Runs the transition function and applies the effects it requests.
    pub fn dispatch(&mut self, event: ToolEvent) -> Vec<Effect> {
        let previous = std::mem::take(&mut self.state);
        let (next, effects) = transition(previous, event);
        self.state = next;

        for effect in &effects {
            self.apply_effect(effect);
        }
        effects
    }

    fn apply_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::Activated(tool) => {
                self.style.reset_for(*tool);
                debug!("Tool {} activated", tool);
            }
            Effect::Deactivated(tool) => {
                debug!("Tool {} deactivated, buffer discarded", tool);
            }
            Effect::PointBuffered { tool, count, .. } => {
                debug!("{} buffer now holds {} point(s)", tool, count);
            }
            Effect::Commit(shape) => {
                let drawing = Drawing {
                    id: DrawingId(self.drawing_ids.next_id()),
                    style: self.style.snapshot(),
                    shape: shape.clone(),
                };
                info!("Finalized {} {}", drawing.shape.kind(), drawing.id);
                self.store.append(drawing);
            }
            Effect::FinalizeRefused {
                tool,
                count,
                required,
            } => {
                warn!(
                    "Ignoring finalize for {}: {} point(s), {} required",
                    tool, count, required
                );
            }
            Effect::ClearedAll => {
                let removed = self.store.count();
                self.store.clear();
                info!("Cleared {} drawing(s)", removed);
            }
        }
    }
}
