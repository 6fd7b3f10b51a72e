//! gzassets - minify and gzip web assets before a filesystem image is packaged.
//!
//! Invoked by the firmware build tool as a pre-step of its "build
//! filesystem image" action, pointed at the image's data directory.

mod asset;
mod cli;
mod logger;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Hard dependency check: a broken minification backend aborts the
    // whole build step before any file is touched.
    asset::minify::probe().context("minification backends unavailable")?;

    asset::run(&cli.root)?;
    Ok(())
}
