//! Library exports for the inkpad drawing widget.
//!
//! Exposes the drawing core (surface, pointer tracking, tool state machine,
//! export) alongside the configuration types so the binary, integration
//! tests, and embedders share the same code paths.

pub mod backend;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod util;

pub use config::Config;
