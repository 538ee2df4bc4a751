//! On-disk layout of a scaffolded site.

use std::path::{Component, Path, PathBuf};

use rw_outline::{Outline, Section, Subsection};

use crate::error::ScaffoldError;

/// Name of the index page at the base directory root.
pub const INDEX_FILENAME: &str = "index.md";

/// Folder holding a subsection's page: `base_dir/<section>/<subsection>`.
#[must_use]
pub fn page_dir(base_dir: &Path, section: &Section, sub: &Subsection) -> PathBuf {
    base_dir.join(&section.key).join(&sub.key)
}

/// Page file of a subsection: `base_dir/<section>/<subsection>/<subsection>.md`.
#[must_use]
pub fn page_path(base_dir: &Path, section: &Section, sub: &Subsection) -> PathBuf {
    page_dir(base_dir, section, sub).join(sub.page_filename())
}

/// Path of the index page.
#[must_use]
pub fn index_path(base_dir: &Path) -> PathBuf {
    base_dir.join(INDEX_FILENAME)
}

/// Check that every key maps to exactly one folder below its parent.
///
/// Rejects empty keys, `.`/`..`, absolute paths and keys containing a
/// separator, so nothing is ever created outside the base directory.
pub(crate) fn validate_keys(outline: &Outline) -> Result<(), ScaffoldError> {
    for section in &outline.sections {
        validate_key(&section.key)?;
        for sub in &section.subsections {
            validate_key(&sub.key)?;
        }
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ScaffoldError> {
    let mut components = Path::new(key).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if single && !key.contains(['/', '\\']) {
        return Ok(());
    }
    Err(ScaffoldError::InvalidPath {
        key: key.to_owned(),
    })
}
