//! Generic input event types for cross-backend compatibility.

/// A 2D coordinate in the surface's local space.
///
/// Always derived by subtracting the surface's on-screen origin from the
/// raw device coordinate (see [`crate::input::tracker::PointerTracker`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Horizontal offset from the surface's left edge, in pixels.
    pub x: i32,
    /// Vertical offset from the surface's top edge, in pixels.
    pub y: i32,
}

impl Position {
    /// Creates a position from surface-local coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single touch contact as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchContact {
    /// Platform-assigned identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Client X coordinate (viewport space, not surface-local).
    pub x: f64,
    /// Client Y coordinate (viewport space, not surface-local).
    pub y: f64,
}

/// Raw input events as delivered by a platform backend.
///
/// Backend implementations map their native mouse and touch events to these
/// variants; the [`crate::input::tracker::PointerTracker`] unifies them into
/// a device-agnostic [`PointerEvent`] stream. Coordinates are client
/// (viewport) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// Primary mouse button pressed.
    MouseDown { x: f64, y: f64 },
    /// Mouse moved (with or without a button held).
    MouseMove { x: f64, y: f64 },
    /// Primary mouse button released.
    MouseUp,
    /// Mouse left the surface area.
    MouseOut,
    /// One or more touch contacts began; only the first is tracked.
    TouchStart { contacts: Vec<TouchContact> },
    /// Active touch contacts moved.
    TouchMove { contacts: Vec<TouchContact> },
    /// The touch interaction ended.
    TouchEnd,
}

/// The phase of a unified pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Contact began within the surface (mouse-down or touch-start).
    Press,
    /// Contact moved while the device remains engaged.
    Move,
    /// Contact ended (mouse-up, mouse leaving the surface, touch-end).
    Release,
}

/// A unified, device-agnostic pointer event in surface-local coordinates.
///
/// Tool logic only ever sees this type; whether the input came from a mouse
/// or a touch screen is resolved at the tracker boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Press, move, or release.
    pub kind: PointerEventKind,
    /// Surface-local position; absent for releases without coordinates.
    pub position: Option<Position>,
}

impl PointerEvent {
    /// A press at the given surface-local position.
    pub fn press(position: Position) -> Self {
        Self {
            kind: PointerEventKind::Press,
            position: Some(position),
        }
    }

    /// A move to the given surface-local position.
    pub fn moved(position: Position) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position: Some(position),
        }
    }

    /// A release, with no position attached.
    pub fn release() -> Self {
        Self {
            kind: PointerEventKind::Release,
            position: None,
        }
    }
}
