//! Input handling and tool state machine.
//!
//! This module translates map clicks into drawing actions. It maintains the active
//! tool, the editable style and the point buffer, and routes clicks between the
//! drawing tools and marker placement.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerKind};
pub use state::{DrawingState, Effect, InputState, PointerResponse, ToolEvent};
pub use tool::Tool;
