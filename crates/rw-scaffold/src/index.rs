//! Index page generation.

use std::fs;
use std::path::{Path, PathBuf};

use rw_outline::Outline;

use crate::error::{ScaffoldError, io_at};
use crate::layout::index_path;
use crate::render::index_document;

/// Overwrite `base_dir/index.md` with links to every page.
///
/// Sections become level-2 headings and subsections become list links, both
/// in outline order. Returns the index path.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the base directory or index cannot be written.
pub fn build_index(outline: &Outline, base_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    fs::create_dir_all(base_dir).map_err(io_at(base_dir))?;

    let path = index_path(base_dir);
    fs::write(&path, index_document(outline)).map_err(io_at(&path))?;

    tracing::info!(
        path = %path.display(),
        sections = outline.sections.len(),
        links = outline.page_count(),
        "Wrote index"
    );
    Ok(path)
}
