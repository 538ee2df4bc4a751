//! Page folder and page file creation.

use std::fs;
use std::path::{Path, PathBuf};

use rw_outline::Outline;

use crate::error::{ScaffoldError, io_at};
use crate::layout::{page_dir, validate_keys};
use crate::render::page_heading;

/// Create every page folder and overwrite every page with its heading.
///
/// Folders are created with missing parents and existing ones are reused.
/// Each page is truncated to `# <title>\n`, which drops any sibling block a
/// previous run appended.
///
/// Returns the page paths in outline order.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidPath`] before writing anything if a key is
/// not a plain folder name, and [`ScaffoldError::Io`] if a folder or page
/// cannot be written.
pub fn materialize(outline: &Outline, base_dir: &Path) -> Result<Vec<PathBuf>, ScaffoldError> {
    validate_keys(outline)?;

    let mut pages = Vec::with_capacity(outline.page_count());
    for (section, sub) in outline.pages() {
        let dir = page_dir(base_dir, section, sub);
        fs::create_dir_all(&dir).map_err(io_at(&dir))?;

        let page = dir.join(sub.page_filename());
        fs::write(&page, page_heading(sub.display_title())).map_err(io_at(&page))?;
        tracing::debug!(page = %page.display(), "Wrote page");
        pages.push(page);
    }

    tracing::info!(count = pages.len(), base_dir = %base_dir.display(), "Materialized pages");
    Ok(pages)
}
