use std::path::PathBuf;

use clap::Parser;

use inkpad::{Config, backend};

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(version, about = "Freehand drawing pad with brush, eraser, and fill tools")]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial viewport width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    viewport_width: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    log::info!("Starting inkpad");
    log::info!("Controls:");
    log::info!("  - Paint: drag with the left mouse button");
    log::info!("  - Tools: B (brush), E (eraser), F (fill)");
    log::info!("  - Colors: click a swatch or press 1-8");
    log::info!("  - Brush size: + / -");
    log::info!("  - Clear: C");
    log::info!("  - Save PNG: S");
    log::info!("  - Exit: Escape or close the window");

    backend::run(&config, cli.viewport_width)?;

    log::info!("Drawing pad closed.");
    Ok(())
}
