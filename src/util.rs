//! Utility functions for colors and responsive surface sizing.

use crate::draw::{Color, color::*};

// ============================================================================
// Responsive Sizing
// ============================================================================

/// Maximum surface width in pixels regardless of viewport size.
pub const MAX_SURFACE_WIDTH: u32 = 500;

/// Horizontal space reserved for the palette and padding around the surface.
pub const VIEWPORT_MARGIN: u32 = 80;

/// Height-to-width ratio of the surface (fixed 400:500 aspect).
pub const ASPECT_RATIO: f64 = 400.0 / 500.0;

/// Computes the surface dimensions for a given viewport width.
///
/// Width is clamped to `min(500, viewport_width - 80)` to leave room for the
/// palette and padding; height is always `round(width * 0.8)`. Recomputed on
/// every viewport-size change, including once at startup.
///
/// # Examples
/// ```
/// use inkpad::util::surface_size;
/// assert_eq!(surface_size(1000), (500, 400));
/// assert_eq!(surface_size(300), (220, 176));
/// ```
pub fn surface_size(viewport_width: u32) -> (u32, u32) {
    let width = MAX_SURFACE_WIDTH.min(viewport_width.saturating_sub(VIEWPORT_MARGIN));
    let height = (width as f64 * ASPECT_RATIO).round() as u32;
    (width, height)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file, and by the palette to resolve swatch names.
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow", "orange", "pink", "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        _ => None,
    }
}
