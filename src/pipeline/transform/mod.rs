//! Text transforms applied to each page.
//!
//! - [`media`]: `<img>` -> `<picture>` with a webp source
//! - [`head`]: performance hints after the viewport meta tag

pub mod head;
pub mod media;

pub use head::HeadHints;
pub use media::{Rewritten, rewrite_counted};
