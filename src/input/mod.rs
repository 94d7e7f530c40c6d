//! Input handling: pointer normalization and the tool state machine.
//!
//! This module translates raw mouse and touch events into paint operations.
//! The pointer tracker unifies both device kinds into one surface-local
//! position stream, the stroke session gates that stream on press/release,
//! and the tool state machine dispatches gated events to the surface.

pub mod events;
pub mod state;
pub mod tool;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{DeviceEvent, PointerEvent, PointerEventKind, Position, TouchContact};
pub use state::{InputState, StrokeState};
pub use tool::Tool;
pub use tracker::{Normalized, PointerTracker, SurfaceRect};
