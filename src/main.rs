//! webpify - serve webp images from static html pages, with png/jpg fallbacks.

#![allow(dead_code)]

mod batch;
mod cli;
mod config;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::OptimizeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = OptimizeConfig::load(&cli)?;

    // Per-file failures are reported inside the batch and do not affect the
    // exit status.
    batch::run(&config)?;
    Ok(())
}
