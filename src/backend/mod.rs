use anyhow::Result;

pub mod window;

use crate::config::Config;

/// Run the windowed frontend with its full event loop.
///
/// # Arguments
/// * `config` - Loaded configuration (drawing defaults, export settings)
/// * `viewport_width` - Optional initial viewport width (overrides config)
pub fn run(config: &Config, viewport_width: Option<u32>) -> Result<()> {
    let mut backend = window::WindowBackend::new(config, viewport_width)?;
    backend.run()
}
