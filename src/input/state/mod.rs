mod core;
mod mouse;
mod render;
pub mod transition;

pub use core::{DrawingState, InputState};
pub use mouse::PointerResponse;
pub use transition::{Effect, ToolEvent, transition};
