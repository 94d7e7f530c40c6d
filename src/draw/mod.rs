//! Raster surface and color primitives.
//!
//! This module defines the core drawing types used by the pad:
//! - [`Color`]: RGBA color representation with the fixed palette constants
//! - [`Surface`]: the paintable pixel buffer and its paint primitives

pub mod color;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use surface::Surface;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PALETTE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
