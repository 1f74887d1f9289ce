//! Image tag rewriter (Raw HTML -> Raw HTML).
//!
//! Wraps local raster `<img>` tags in a `<picture>` element that offers a
//! `.webp` sibling first and keeps the original image as fallback:
//!
//! ```text
//! <img src="hero.png" alt="Hero">
//!
//! <picture>
//!                 <source srcset="hero.webp" type="image/webp">
//!                 <img src="hero.png" alt="Hero" loading="lazy">
//!             </picture>
//! ```
//!
//! Matching is textual: a tag is `<img` up to the next `>`, and attributes are
//! found by unanchored `name="value"` searches inside that tag. Tags without a
//! `src`, already pointing at `.webp`, or pointing at an `http(s)` URL pass
//! through untouched. The `.webp` file itself is never checked or produced.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Extension of the compressed format.
pub const WEBP_EXT: &str = ".webp";

/// MIME type declared on the `<source>` element.
pub const WEBP_MIME: &str = "image/webp";

/// Sources containing this (case-insensitive) are loaded eagerly.
const EAGER_KEYWORD: &str = "logo";

/// Sources starting with this are treated as external (covers `https` too).
const EXTERNAL_PREFIX: &str = "http";

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img[^>]+>").unwrap());

static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=["']([^"']+)["']"#).unwrap());

static RASTER_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|jpg|jpeg)$").unwrap());

static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("alt"));
static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("class"));
static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("style"));
static ONCLICK_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("onclick"));
static WIDTH_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("width"));
static HEIGHT_ATTR: LazyLock<Regex> = LazyLock::new(|| optional_attr("height"));

/// Pattern for an attribute whose value may be empty.
fn optional_attr(name: &str) -> Regex {
    Regex::new(&format!(r#"{name}=["']([^"']*)["']"#)).unwrap()
}

/// First capture group of `re` inside `tag`.
#[inline]
fn capture<'a>(re: &Regex, tag: &'a str) -> Option<&'a str> {
    re.captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// =============================================================================
// Attribute extraction
// =============================================================================

/// Attributes carried from an original `<img>` tag onto the fallback image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttrs<'a> {
    pub src: &'a str,
    /// Empty when the tag has no `alt`.
    pub alt: &'a str,
    pub class: Option<&'a str>,
    pub style: Option<&'a str>,
    pub onclick: Option<&'a str>,
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

impl<'a> ImageAttrs<'a> {
    /// Extract attributes from a matched `<img ...>` tag.
    ///
    /// Returns `None` when there is no quoted, non-empty `src`.
    pub fn parse(tag: &'a str) -> Option<Self> {
        let src = capture(&SRC_ATTR, tag)?;
        Some(Self {
            src,
            alt: capture(&ALT_ATTR, tag).unwrap_or(""),
            class: capture(&CLASS_ATTR, tag),
            style: capture(&STYLE_ATTR, tag),
            onclick: capture(&ONCLICK_ATTR, tag),
            width: capture(&WIDTH_ATTR, tag),
            height: capture(&HEIGHT_ATTR, tag),
        })
    }

    /// Already webp, or hosted elsewhere.
    pub fn is_passthrough(&self) -> bool {
        self.src.ends_with(WEBP_EXT) || self.src.starts_with(EXTERNAL_PREFIX)
    }

    /// Source with a trailing `.png`/`.jpg`/`.jpeg` swapped for `.webp`.
    ///
    /// Any other source comes back unchanged, so the `<source>` and the
    /// fallback `<img>` then point at the same file.
    pub fn webp_src(&self) -> Cow<'a, str> {
        RASTER_EXT.replace(self.src, WEBP_EXT)
    }

    pub fn is_lazy(&self) -> bool {
        !self.src.to_lowercase().contains(EAGER_KEYWORD)
    }

    /// Render the `<picture>` block replacing the original tag.
    pub fn to_picture(&self) -> String {
        let mut img = format!(r#"<img src="{}" alt="{}""#, self.src, self.alt);
        let optional = [
            ("class", self.class),
            ("style", self.style),
            ("onclick", self.onclick),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                img.push_str(&format!(r#" {name}="{value}""#));
            }
        }
        if self.is_lazy() {
            img.push_str(r#" loading="lazy""#);
        }
        img.push('>');

        format!(
            "<picture>\n                <source srcset=\"{}\" type=\"{WEBP_MIME}\">\n                {img}\n            </picture>",
            self.webp_src()
        )
    }
}

// =============================================================================
// Rewriting
// =============================================================================

/// Replacement for a single matched tag, or `None` to keep it as is.
pub fn convert_tag(tag: &str) -> Option<String> {
    let attrs = ImageAttrs::parse(tag)?;
    if attrs.is_passthrough() {
        return None;
    }
    Some(attrs.to_picture())
}

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub html: String,
    /// Tags wrapped in `<picture>`.
    pub converted: usize,
    /// Tags left untouched.
    pub skipped: usize,
}

/// Rewrite every qualifying `<img>` tag in `html`.
///
/// Text outside matched tags is preserved byte for byte.
pub fn rewrite(html: &str) -> String {
    rewrite_counted(html).html
}

/// Same as [`rewrite`], also counting converted and skipped tags.
pub fn rewrite_counted(html: &str) -> Rewritten {
    let mut converted = 0;
    let mut skipped = 0;

    let out = IMG_TAG.replace_all(html, |caps: &Captures| {
        let tag = &caps[0];
        match convert_tag(tag) {
            Some(picture) => {
                converted += 1;
                picture
            }
            None => {
                skipped += 1;
                tag.to_string()
            }
        }
    });

    Rewritten {
        html: out.into_owned(),
        converted,
        skipped,
    }
}

// =============================================================================
// Tests
// =============================================================================
