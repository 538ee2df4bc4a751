//! Sibling link blocks appended to pages.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rw_outline::Outline;

use crate::error::{ScaffoldError, io_at};
use crate::layout::{page_dir, validate_keys};
use crate::render::sibling_block;

/// Page that received a sibling block, and the names it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingLinks {
    /// Page file that was appended to.
    pub page: PathBuf,
    /// File names listed in the block.
    pub siblings: Vec<String>,
}

/// Append a "목록" block to every page whose folder holds other files.
///
/// Reads each page folder as it is on disk right now. Every regular file
/// except the page itself is listed, whatever its extension. The block is
/// appended, not merged: calling this twice without [`materialize`] in between
/// lists the same files twice.
///
/// [`materialize`]: crate::materialize
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidPath`] if a key is not a plain folder name
/// and [`ScaffoldError::Io`] if a page folder is missing or unreadable, or a
/// page cannot be appended to.
pub fn link_siblings(
    outline: &Outline,
    base_dir: &Path,
) -> Result<Vec<SiblingLinks>, ScaffoldError> {
    validate_keys(outline)?;

    let mut linked = Vec::new();
    for (section, sub) in outline.pages() {
        let dir = page_dir(base_dir, section, sub);
        let own = sub.page_filename();
        let siblings = list_siblings(&dir, &own)?;
        if siblings.is_empty() {
            continue;
        }

        let page = dir.join(own);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&page)
            .map_err(io_at(&page))?;
        file.write_all(sibling_block(&siblings).as_bytes())
            .map_err(io_at(&page))?;

        tracing::debug!(page = %page.display(), count = siblings.len(), "Appended sibling links");
        linked.push(SiblingLinks { page, siblings });
    }

    tracing::info!(pages = linked.len(), "Linked sibling files");
    Ok(linked)
}

/// Names of the regular files in `dir` other than `own_filename`, sorted.
///
/// Symlinks count when they point at a regular file. Subfolders are skipped.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if `dir` cannot be read, or if an entry's
/// name is not valid UTF-8 and so cannot be written as a link.
pub fn list_siblings(dir: &Path, own_filename: &str) -> Result<Vec<String>, ScaffoldError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_at(dir))? {
        let entry = entry.map_err(io_at(dir))?;
        let path = entry.path();
        if !fs::metadata(&path).is_ok_and(|m| m.is_file()) {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|_| {
            io_at(&path)(io::Error::new(
                io::ErrorKind::InvalidData,
                "file name is not valid UTF-8",
            ))
        })?;
        if name != own_filename {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
