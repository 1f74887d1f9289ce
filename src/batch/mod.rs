//! Batch runner over the `*.html` pages of one directory.
//!
//! Pages are handled one at a time, in path order:
//! read -> [`Pipeline`] -> write back -> status line.
//! A failing page is reported and skipped; it never aborts the batch.

mod discover;
mod error;
mod process;
mod report;

pub use discover::{discover, display_path};
pub use process::process_file;
pub use report::{BatchReport, print_summary};

use anyhow::{Context, Result};

use crate::config::OptimizeConfig;
use crate::logger::{list_item, status_error, status_success};
use crate::pipeline::Pipeline;
use crate::utils::plural_count;
use crate::{debug, log};

/// Optimize every page in the configured directory.
///
/// Only listing the directory can fail; per-page errors end up in the report.
pub fn run(config: &OptimizeConfig) -> Result<BatchReport> {
    log!("webp"; "starting html optimization for webp support");

    let root = config.get_root();
    let files =
        discover(root).with_context(|| format!("failed to list `{}`", root.display()))?;

    log!("webp"; "found {} to optimize:", plural_count(files.len(), "html file"));
    for path in &files {
        list_item(&display_path(root, path));
    }

    println!();
    log!("webp"; "processing files");
    if config.write.dry_run {
        log!("webp"; "dry run, no files will be written");
    }

    let pipeline = Pipeline::from_config(config);
    let mut report = BatchReport::default();

    for path in files {
        let shown = display_path(root, &path);
        let result = process_file(&path, &pipeline, &config.write);

        match &result {
            Ok(output) => {
                status_success(&format!("optimized: {shown}"));
                debug!(
                    "webp";
                    "{shown}: {} converted, {} skipped, head hints {}",
                    plural_count(output.converted, "tag"),
                    output.skipped,
                    if output.head_hints { "added" } else { "unchanged" }
                );
            }
            Err(err) => status_error(&format!("error optimizing {shown}"), &err.to_string()),
        }

        report.push(path, result);
    }

    debug!(
        "webp";
        "{} succeeded, {} failed, {} converted",
        report.succeeded(),
        report.failed().count(),
        plural_count(report.converted(), "tag")
    );

    print_summary();
    Ok(report)
}
