mod background;
mod cli;
mod config;
mod font;
mod render;
mod save_helper;

use clap::Parser;

use crate::config::BackgroundConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init log
    env_logger::init();

    cli::Cli::parse();

    let config = BackgroundConfig::default();
    let output_path = background::run(&config)?;

    println!("✓ DMG background created: {}", output_path.display());
    println!("  Dimensions: {}x{}", config.width, config.height);

    Ok(())
}
