//! `webpify.toml` sections.
//!
//! # Example
//!
//! ```toml
//! [head]
//! guard = "legacy"    # legacy | missing | off
//!
//! [write]
//! atomic = false      # write to a temp file, then rename over the page
//! dry_run = false     # report only, never write
//! ```

use serde::Deserialize;

// ============================================================================
// [head]
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// When to insert the robots / dns-prefetch hints.
    pub guard: HeadGuard,
}

/// Rule deciding whether head hints are inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeadGuard {
    /// Viewport tag present and the word `viewport` absent. Never true.
    #[default]
    Legacy,
    /// Canonical viewport tag present and the prefetch hint not yet there.
    Missing,
    /// Never insert.
    Off,
}

// ============================================================================
// [write]
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Replace pages through a temp file + rename instead of truncating.
    pub atomic: bool,

    /// Process and report, but leave files untouched.
    pub dry_run: bool,
}
