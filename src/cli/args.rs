//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::HeadGuard;

/// Rewrite html pages to serve webp images with png/jpg fallbacks
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the html files (not searched recursively)
    #[arg(default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Config file path, relative to DIR (default: webpify.toml)
    #[arg(short = 'C', long, default_value = "webpify.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// When to insert robots / dns-prefetch hints after the viewport tag
    #[arg(long, value_enum)]
    pub head_guard: Option<HeadGuard>,

    /// Write through a temporary file and rename it into place
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub atomic: Option<bool>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub dry_run: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
