//! Page discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix of processed entries (case-sensitive).
pub const HTML_SUFFIX: &str = ".html";

/// List entries of `dir` whose name ends in `.html`, sorted by path.
///
/// Not recursive. Entries are not filtered by type, so a directory named
/// `*.html` is returned too and later fails to read.
pub fn discover(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(HTML_SUFFIX) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Path relative to `root` for display, falling back to the full path.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
