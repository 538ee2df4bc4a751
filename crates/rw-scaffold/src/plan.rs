//! Whole-site planning: every file composed up front, then written once.
//!
//! A [`ScaffoldPlan`] is a pure function of the outline and an [`Assets`]
//! list. Writing it overwrites each page with heading plus sibling block in a
//! single step, so running it again over its own output changes nothing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rw_outline::Outline;

use crate::error::{ScaffoldError, io_at};
use crate::layout::{index_path, page_dir, page_path, validate_keys};
use crate::render::{index_document, page_heading, sibling_block};
use crate::siblings::list_siblings;

/// Files that live next to each page, keyed by section and subsection key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    by_page: HashMap<(String, String), Vec<String>>,
}

impl Assets {
    /// Create an empty asset list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the files next to a page, replacing any earlier entry.
    pub fn insert(&mut self, section: &str, sub: &str, names: Vec<String>) {
        self.by_page.insert((section.to_owned(), sub.to_owned()), names);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn declare<I, S>(mut self, section: &str, sub: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(section, sub, names.into_iter().map(Into::into).collect());
        self
    }

    /// Files recorded for a page, in declared order.
    #[must_use]
    pub fn get(&self, section: &str, sub: &str) -> &[String] {
        self.by_page
            .get(&(section.to_owned(), sub.to_owned()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Read the current files next to each page from disk.
    ///
    /// Page folders that do not exist yet have no assets.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidPath`] for unusable keys and
    /// [`ScaffoldError::Io`] if an existing folder cannot be read.
    pub fn discover(outline: &Outline, base_dir: &Path) -> Result<Self, ScaffoldError> {
        validate_keys(outline)?;

        let mut assets = Self::new();
        for (section, sub) in outline.pages() {
            let dir = page_dir(base_dir, section, sub);
            if !dir.is_dir() {
                continue;
            }
            let names = list_siblings(&dir, &sub.page_filename())?;
            if !names.is_empty() {
                assets.insert(&section.key, &sub.key, names);
            }
        }
        Ok(assets)
    }
}

/// A file a plan will write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Destination path.
    pub path: PathBuf,
    /// Full file contents.
    pub contents: String,
    /// Names listed in the page's sibling block. Empty for the index.
    pub siblings: Vec<String>,
}

/// Every file of a scaffolded site, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    /// Pages in outline order.
    pub pages: Vec<PlannedFile>,
    /// The index page.
    pub index: PlannedFile,
}

impl ScaffoldPlan {
    /// Compose all pages and the index without touching the filesystem.
    ///
    /// A page's own file name is never listed among its assets.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidPath`] if a key is not a plain folder name.
    pub fn build(
        outline: &Outline,
        base_dir: &Path,
        assets: &Assets,
    ) -> Result<Self, ScaffoldError> {
        validate_keys(outline)?;

        let pages = outline
            .pages()
            .map(|(section, sub)| {
                let own = sub.page_filename();
                let siblings: Vec<String> = assets
                    .get(&section.key, &sub.key)
                    .iter()
                    .filter(|name| **name != own)
                    .cloned()
                    .collect();

                let mut contents = page_heading(sub.display_title());
                contents.push_str(&sibling_block(&siblings));
                PlannedFile {
                    path: page_path(base_dir, section, sub),
                    contents,
                    siblings,
                }
            })
            .collect();

        let index = PlannedFile {
            path: index_path(base_dir),
            contents: index_document(outline),
            siblings: Vec::new(),
        };

        Ok(Self { pages, index })
    }

    /// All planned files: pages first, then the index.
    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.pages.iter().chain(std::iter::once(&self.index))
    }

    /// Write every planned file, creating folders as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] on the first folder or file that cannot be
    /// written. Files written before it stay on disk.
    pub fn write(&self) -> Result<(), ScaffoldError> {
        for file in self.files() {
            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent).map_err(io_at(parent))?;
            }
            fs::write(&file.path, &file.contents).map_err(io_at(&file.path))?;
            tracing::debug!(path = %file.path.display(), "Wrote planned file");
        }
        tracing::info!(files = self.pages.len() + 1, "Wrote scaffold plan");
        Ok(())
    }
}
