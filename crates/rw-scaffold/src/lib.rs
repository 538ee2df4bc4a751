//! Folder, page, index and sibling-link generation for RW notes sites.
//!
//! Turns an [`Outline`](rw_outline::Outline) into files under a base
//! directory:
//!
//! ```text
//! base_dir/
//! ├── index.md
//! └── <section>/
//!     └── <subsection>/
//!         ├── <subsection>.md
//!         └── ...other files listed in the page's "목록" block
//! ```
//!
//! # Generators
//!
//! - [`materialize`] creates page folders and overwrites each page with its heading
//! - [`build_index`] overwrites `index.md`
//! - [`link_siblings`] appends a list of neighbouring files to each page
//!
//! Each is a free function over the outline and base directory. [`Scaffolder`]
//! runs them in that order ([`Strategy::Sequential`]).
//!
//! The sequential run has a temporal coupling: sibling links are appended to
//! whatever the page holds at that moment, so running [`link_siblings`] twice
//! duplicates the block. [`Strategy::Planned`] avoids this by composing every
//! file up front from the outline plus an [`Assets`] list ([`ScaffoldPlan`])
//! and writing each file once.
//!
//! # Example
//!
//! ```ignore
//! use rw_scaffold::{Scaffolder, Strategy};
//!
//! let report = Scaffolder::new("site")
//!     .with_strategy(Strategy::Planned)
//!     .run_file(Path::new("organizer.yml"))?;
//! println!("{} pages", report.pages.len());
//! ```

mod error;
mod index;
mod layout;
mod materialize;
mod plan;
pub mod render;
mod scaffold;
mod siblings;

pub use error::{ErrorKind, ScaffoldError};
pub use index::build_index;
pub use layout::{INDEX_FILENAME, index_path, page_dir, page_path};
pub use materialize::materialize;
pub use plan::{Assets, PlannedFile, ScaffoldPlan};
pub use scaffold::{ScaffoldReport, Scaffolder, Strategy};
pub use siblings::{SiblingLinks, link_siblings, list_siblings};
