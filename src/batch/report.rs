//! Batch outcome bookkeeping and the closing summary.

use std::path::PathBuf;

use super::error::FileError;
use crate::logger::list_item;
use crate::log;
use crate::pipeline::PageOutput;

/// Fixed benefit statements printed after every run.
pub const BENEFITS: [&str; 4] = [
    "Images now use WebP format when supported (99% smaller)",
    "Automatic fallback to PNG/JPG for older browsers",
    "Lazy loading implemented for better performance",
    "DNS prefetch added for faster font loading",
];

/// Outcome of one page.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<PageOutput, FileError>,
}

/// Outcomes of every discovered page, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, path: PathBuf, result: Result<PageOutput, FileError>) {
        self.files.push(FileOutcome { path, result });
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileError> {
        self.files.iter().filter_map(|f| f.result.as_ref().err())
    }

    /// Total `<img>` tags wrapped across all pages.
    pub fn converted(&self) -> usize {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().ok())
            .map(|out| out.converted)
            .sum()
    }
}

/// Print the completion banner and benefit list.
///
/// Static text: it does not depend on what actually happened.
pub fn print_summary() {
    println!();
    log!("done"; "html optimization complete");
    println!();
    log!("done"; "benefits:");
    for benefit in BENEFITS {
        list_item(benefit);
    }
}
