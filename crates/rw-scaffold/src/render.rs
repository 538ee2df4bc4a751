//! Markdown text for pages, the index and sibling blocks.
//!
//! Pure functions with no I/O. The generators write exactly what these return.

use std::fmt::Write;

use rw_outline::{Outline, Section, Subsection};

/// First line of the index page.
pub const INDEX_HEADING: &str = "# Index";

/// Heading of the appended sibling link block ("list").
pub const SIBLING_HEADING: &str = "## 목록";

/// Page body before any sibling links: `# <title>\n`.
#[must_use]
pub fn page_heading(title: &str) -> String {
    format!("# {title}\n")
}

/// Relative link from the index to a page, always `/`-separated.
#[must_use]
pub fn index_link_target(section: &Section, sub: &Subsection) -> String {
    format!("{}/{}/{}", section.key, sub.key, sub.page_filename())
}

/// Full index document.
///
/// ```text
/// # Index
///
/// ## Guide
///
/// - [Intro](guide/intro/intro.md)
///
/// ```
#[must_use]
pub fn index_document(outline: &Outline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{INDEX_HEADING}\n");
    for section in &outline.sections {
        let _ = writeln!(out, "## {}\n", section.display_title());
        for sub in &section.subsections {
            let _ = writeln!(
                out,
                "- [{}]({})",
                sub.display_title(),
                index_link_target(section, sub)
            );
        }
        out.push('\n');
    }
    out
}

/// Sibling link block appended to a page, or an empty string for no names.
///
/// Each name is both the link text and the `./`-relative target.
#[must_use]
pub fn sibling_block<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{SIBLING_HEADING}\n\n");
    for name in names {
        let name = name.as_ref();
        let _ = writeln!(out, "- [{name}](./{name})");
    }
    out
}
