//! Pointer tracker: normalizes mouse and single-touch input.
//!
//! Raw [`DeviceEvent`]s carry client (viewport) coordinates and a device
//! kind; the tracker folds both into one [`PointerEvent`] stream in
//! surface-local coordinates. Tool logic downstream never branches on
//! whether the input came from a mouse or a touch screen.

use log::debug;

use super::events::{DeviceEvent, PointerEvent, Position};

/// The surface's current on-screen bounding rectangle, in client coordinates.
///
/// Callers pass this fresh on every [`PointerTracker::normalize`] call so the
/// tracker never works from a stale rectangle (the surface may have moved or
/// resized since the last event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Left edge in client coordinates.
    pub left: f64,
    /// Top edge in client coordinates.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceRect {
    /// Whether a client coordinate falls within the rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    /// Converts a client coordinate to a surface-local position.
    fn to_local(&self, x: f64, y: f64) -> Position {
        Position::new((x - self.left).floor() as i32, (y - self.top).floor() as i32)
    }
}

/// Result of normalizing one raw device event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    /// The unified pointer event, if the raw event produced one.
    pub event: Option<PointerEvent>,
    /// Whether the platform's default gesture (e.g. page scroll) must be
    /// suppressed. True for every touch event on the surface.
    pub suppress_default: bool,
}

impl Normalized {
    fn none() -> Self {
        Self {
            event: None,
            suppress_default: false,
        }
    }

    fn mouse(event: PointerEvent) -> Self {
        Self {
            event: Some(event),
            suppress_default: false,
        }
    }

    fn touch(event: Option<PointerEvent>) -> Self {
        Self {
            event,
            suppress_default: true,
        }
    }
}

/// Normalizes raw mouse and touch events into a unified pointer stream.
///
/// Only a single contact point is tracked at a time: for touch input the
/// first contact at touch-start becomes the tracked contact and all others
/// are ignored until the interaction ends.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Identity of the tracked touch contact, if a touch interaction is live.
    active_touch: Option<u64>,
}

impl PointerTracker {
    /// Creates a tracker with no live contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one raw device event into the unified pointer stream.
    ///
    /// `rect` is the surface's current on-screen bounding rectangle, queried
    /// by the caller at delivery time. Presses outside the rectangle produce
    /// no pointer event; a mouse leaving the surface normalizes to a release
    /// (any pointer-out-of-surface ends the stroke).
    pub fn normalize(&mut self, event: &DeviceEvent, rect: SurfaceRect) -> Normalized {
        match event {
            DeviceEvent::MouseDown { x, y } => {
                if !rect.contains(*x, *y) {
                    return Normalized::none();
                }
                Normalized::mouse(PointerEvent::press(rect.to_local(*x, *y)))
            }
            DeviceEvent::MouseMove { x, y } => {
                Normalized::mouse(PointerEvent::moved(rect.to_local(*x, *y)))
            }
            DeviceEvent::MouseUp | DeviceEvent::MouseOut => {
                Normalized::mouse(PointerEvent::release())
            }
            DeviceEvent::TouchStart { contacts } => {
                if self.active_touch.is_some() {
                    // A second finger landed mid-interaction; ignore it.
                    return Normalized::touch(None);
                }
                let Some(first) = contacts.first() else {
                    return Normalized::touch(None);
                };
                if !rect.contains(first.x, first.y) {
                    return Normalized::touch(None);
                }
                debug!("Tracking touch contact {}", first.id);
                self.active_touch = Some(first.id);
                Normalized::touch(Some(PointerEvent::press(rect.to_local(first.x, first.y))))
            }
            DeviceEvent::TouchMove { contacts } => {
                let Some(id) = self.active_touch else {
                    return Normalized::touch(None);
                };
                match contacts.iter().find(|c| c.id == id) {
                    Some(contact) => Normalized::touch(Some(PointerEvent::moved(
                        rect.to_local(contact.x, contact.y),
                    ))),
                    // The tracked finger is not in this report; other
                    // contacts are not ours to follow.
                    None => Normalized::touch(None),
                }
            }
            DeviceEvent::TouchEnd => {
                if self.active_touch.take().is_some() {
                    debug!("Touch interaction ended");
                }
                Normalized::touch(Some(PointerEvent::release()))
            }
        }
    }
}
