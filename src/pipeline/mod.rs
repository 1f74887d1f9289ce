//! Page processing pipeline.
//!
//! Turns the text of one HTML page into its optimized text:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  text -> media (img -> picture)          │
//! │       -> head  (viewport hints)  -> text │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Pure and stateless: reading and writing files is left to `batch`.

pub mod transform;

use transform::{HeadHints, Rewritten, rewrite_counted};

use crate::config::OptimizeConfig;

// =============================================================================
// Types
// =============================================================================

/// Result of running the pipeline on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub html: String,
    /// `<img>` tags wrapped in `<picture>`.
    pub converted: usize,
    /// `<img>` tags left as they were.
    pub skipped: usize,
    /// Whether head hints were inserted.
    pub head_hints: bool,
}

impl PageOutput {
    /// True when the output differs from the input.
    pub fn is_modified(&self) -> bool {
        self.converted > 0 || self.head_hints
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Transforms applied to every page, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    head: HeadHints,
}

impl Pipeline {
    pub const fn new(head: HeadHints) -> Self {
        Self { head }
    }

    pub fn from_config(config: &OptimizeConfig) -> Self {
        Self::new(HeadHints::new(config.head.guard))
    }

    /// Rewrite image tags, then apply head hints to the rewritten text.
    pub fn run(&self, html: &str) -> PageOutput {
        let Rewritten {
            html,
            converted,
            skipped,
        } = rewrite_counted(html);

        let head_hints = self.head.should_insert(&html);
        let html = if head_hints {
            self.head.apply(&html).into_owned()
        } else {
            html
        };

        PageOutput {
            html,
            converted,
            skipped,
            head_hints,
        }
    }
}
