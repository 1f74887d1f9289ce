//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, printed only with `--verbose`
//! - `status_success` / `status_error` for per-file outcome lines
//!
//! # Example
//!
//! ```ignore
//! log!("webp"; "found {} html files", count);
//! status_success("optimized: index.html");
//! status_error("error optimizing about.html", "permission denied");
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_red().bold().to_string())
            .to_string(),
        "warning" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_magenta().bold().to_string())
            .to_string(),
        "done" => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_green().bold().to_string())
            .to_string(),
        _ => prefix
            .if_supports_color(Stream::Stdout, |p| p.bright_yellow().bold().to_string())
            .to_string(),
    }
}

// ============================================================================
// Status lines
// ============================================================================

/// `✓ message`, green marker.
pub fn status_success(message: &str) {
    let symbol = "✓".if_supports_color(Stream::Stdout, |s| s.green()).to_string();
    print_status(&symbol, message);
}

/// `✗ summary: detail`, red marker.
pub fn status_error(summary: &str, detail: &str) {
    let symbol = "✗".if_supports_color(Stream::Stdout, |s| s.red()).to_string();
    if detail.is_empty() {
        print_status(&symbol, summary);
    } else {
        print_status(&symbol, &format!("{summary}: {detail}"));
    }
}

/// Indented list entry under the previous log line.
pub fn list_item(item: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "  - {item}").ok();
    stdout.flush().ok();
}

fn print_status(symbol: &str, message: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{symbol} {message}").ok();
    stdout.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================
