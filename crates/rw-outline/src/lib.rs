//! Outline loading for the RW notes scaffolder.
//!
//! An outline is a YAML document describing a notes site as two levels of
//! named groups: top-level sections, each holding an ordered list of
//! subsections. Every subsection later becomes one Markdown page.
//!
//! ```yaml
//! content:
//!   - guide:
//!       title: Guide
//!       sub:
//!         - intro:
//!             title: Intro
//!         - faq:
//! ```
//!
//! Source order is preserved everywhere. Missing `title` or `sub` fields are
//! defaults, not errors: a missing title falls back to the key.
//!
//! # Example
//!
//! ```ignore
//! use rw_outline::Outline;
//!
//! let outline = Outline::load(Path::new("organizer.yml"))?;
//! for (section, page) in outline.pages() {
//!     println!("{}/{}: {}", section.key, page.key, page.display_title());
//! }
//! ```

mod error;
mod outline;
mod yaml;

pub use error::OutlineError;
pub use outline::{Outline, Section, Subsection};
