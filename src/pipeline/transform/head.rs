//! Head hint injector (Raw HTML -> Raw HTML).
//!
//! Appends a robots directive and a font-host DNS prefetch right after the
//! canonical viewport meta tag. Whether that happens is decided by a
//! [`HeadGuard`], so the rule can be inspected on its own.

use std::borrow::Cow;

use crate::config::HeadGuard;

/// Canonical viewport tag the hints are anchored to.
pub const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#;

/// Looser presence check used by the legacy guard.
const VIEWPORT_OPEN: &str = r#"<meta name="viewport""#;

pub const ROBOTS_META: &str = r#"<meta name="robots" content="index, follow">"#;

pub const FONT_PREFETCH: &str = r#"<link rel="dns-prefetch" href="//fonts.googleapis.com">"#;

/// Injects performance hints after the viewport meta tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadHints {
    guard: HeadGuard,
}

impl HeadHints {
    pub const fn new(guard: HeadGuard) -> Self {
        Self { guard }
    }

    pub const fn guard(&self) -> HeadGuard {
        self.guard
    }

    /// Evaluate the guard against `html`.
    ///
    /// `Legacy` requires the viewport tag to be present while the word
    /// `viewport` is absent, which no document satisfies.
    pub fn should_insert(&self, html: &str) -> bool {
        match self.guard {
            HeadGuard::Legacy => html.contains(VIEWPORT_OPEN) && !html.contains("viewport"),
            HeadGuard::Missing => html.contains(VIEWPORT_META) && !html.contains(FONT_PREFETCH),
            HeadGuard::Off => false,
        }
    }

    /// Insert the hints after every canonical viewport tag if the guard holds.
    pub fn apply<'a>(&self, html: &'a str) -> Cow<'a, str> {
        if !self.should_insert(html) {
            return Cow::Borrowed(html);
        }
        Cow::Owned(html.replace(VIEWPORT_META, &replacement()))
    }
}

fn replacement() -> String {
    format!("{VIEWPORT_META}\n\t\t{ROBOTS_META}\n\t\t{FONT_PREFETCH}")
}
