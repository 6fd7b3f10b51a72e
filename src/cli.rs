//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Minify and gzip web assets before a filesystem image is packaged.
///
/// Walks the given data directory, minifies HTML/CSS/JS, gzips every file
/// at maximum compression and removes the originals, leaving only `.gz`
/// siblings for the image packer to pick up.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Assets root directory (the filesystem image data directory)
    #[arg(value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
