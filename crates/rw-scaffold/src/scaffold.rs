//! Run orchestration.

use std::path::{Path, PathBuf};

use rw_outline::Outline;

use crate::error::ScaffoldError;
use crate::index::build_index;
use crate::layout::validate_keys;
use crate::materialize::materialize;
use crate::plan::{Assets, ScaffoldPlan};
use crate::siblings::{SiblingLinks, link_siblings};

/// How a run composes pages and sibling blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Materialize pages, build the index, then append sibling blocks.
    #[default]
    Sequential,
    /// Discover assets, compose every file, then write each file once.
    Planned,
}

/// Outcome of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Page files written, in outline order.
    pub pages: Vec<PathBuf>,
    /// Index page written.
    pub index: PathBuf,
    /// Pages that carry a sibling block.
    pub linked: Vec<SiblingLinks>,
}

/// Runs all generators against one base directory.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    base_dir: PathBuf,
    strategy: Strategy,
}

impl Scaffolder {
    /// Create a scaffolder writing under `base_dir` with the sequential strategy.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            strategy: Strategy::default(),
        }
    }

    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Directory every generated path is relative to.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Configured strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Load the outline at `outline_path` and run.
    ///
    /// # Errors
    ///
    /// Returns the first outline or filesystem error. Nothing is rolled back.
    pub fn run_file(&self, outline_path: &Path) -> Result<ScaffoldReport, ScaffoldError> {
        let outline = Outline::load(outline_path)?;
        self.run(&outline)
    }

    /// Run every generator for `outline`.
    ///
    /// Keys are checked before the first write, so an unusable key leaves
    /// the base directory untouched.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error. Files written before it stay on disk.
    pub fn run(&self, outline: &Outline) -> Result<ScaffoldReport, ScaffoldError> {
        validate_keys(outline)?;
        tracing::info!(
            base_dir = %self.base_dir.display(),
            strategy = ?self.strategy,
            sections = outline.sections.len(),
            pages = outline.page_count(),
            "Scaffolding site"
        );

        match self.strategy {
            Strategy::Sequential => self.run_sequential(outline),
            Strategy::Planned => self.run_planned(outline),
        }
    }

    /// Plan a run against the current state of the base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is unusable or a page folder cannot be read.
    pub fn plan(&self, outline: &Outline) -> Result<ScaffoldPlan, ScaffoldError> {
        let assets = Assets::discover(outline, &self.base_dir)?;
        ScaffoldPlan::build(outline, &self.base_dir, &assets)
    }

    fn run_sequential(&self, outline: &Outline) -> Result<ScaffoldReport, ScaffoldError> {
        let pages = materialize(outline, &self.base_dir)?;
        let index = build_index(outline, &self.base_dir)?;
        let linked = link_siblings(outline, &self.base_dir)?;
        Ok(ScaffoldReport {
            pages,
            index,
            linked,
        })
    }

    fn run_planned(&self, outline: &Outline) -> Result<ScaffoldReport, ScaffoldError> {
        let plan = self.plan(outline)?;
        plan.write()?;

        let linked = plan
            .pages
            .iter()
            .filter(|page| !page.siblings.is_empty())
            .map(|page| SiblingLinks {
                page: page.path.clone(),
                siblings: page.siblings.clone(),
            })
            .collect();

        Ok(ScaffoldReport {
            pages: plan.pages.into_iter().map(|page| page.path).collect(),
            index: plan.index.path,
            linked,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    const OUTLINE: &str = "content:\n  - guide:\n      title: Guide\n      sub:\n        - intro:\n            title: Intro\n        - faq: {}\n";

    #[test]
    fn test_defaults() {
        let scaffolder = Scaffolder::new("/site");
        assert_eq!(scaffolder.base_dir(), Path::new("/site"));
        assert_eq!(scaffolder.strategy(), Strategy::Sequential);
        assert_eq!(
            scaffolder.with_strategy(Strategy::Planned).strategy(),
            Strategy::Planned
        );
    }

    #[test]
    fn test_run_sequential_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path();
        let outline = Outline::from_yaml(OUTLINE).unwrap();
        fs::create_dir_all(base.join("guide/faq")).unwrap();
        fs::write(base.join("guide/faq/notes.txt"), "").unwrap();

        let report = Scaffolder::new(base).run(&outline).unwrap();

        assert_eq!(
            report,
            ScaffoldReport {
                pages: vec![
                    base.join("guide/intro/intro.md"),
                    base.join("guide/faq/faq.md"),
                ],
                index: base.join("index.md"),
                linked: vec![SiblingLinks {
                    page: base.join("guide/faq/faq.md"),
                    siblings: vec!["notes.txt".to_owned()],
                }],
            }
        );
    }

    #[test]
    fn test_run_planned_report_matches_sequential() {
        let sequential = tempfile::tempdir().unwrap();
        let planned = tempfile::tempdir().unwrap();
        let outline = Outline::from_yaml(OUTLINE).unwrap();
        for dir in [sequential.path(), planned.path()] {
            fs::create_dir_all(dir.join("guide/faq")).unwrap();
            fs::write(dir.join("guide/faq/notes.txt"), "").unwrap();
        }

        let a = Scaffolder::new(sequential.path()).run(&outline).unwrap();
        let b = Scaffolder::new(planned.path())
            .with_strategy(Strategy::Planned)
            .run(&outline)
            .unwrap();

        assert_eq!(a.linked.len(), b.linked.len());
        assert_eq!(a.linked[0].siblings, b.linked[0].siblings);
        for rel in ["index.md", "guide/intro/intro.md", "guide/faq/faq.md"] {
            assert_eq!(
                fs::read_to_string(sequential.path().join(rel)).unwrap(),
                fs::read_to_string(planned.path().join(rel)).unwrap(),
                "{rel} differs between strategies"
            );
        }
    }

    #[test]
    fn test_run_rejects_invalid_key_before_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outline =
            Outline::from_yaml("content:\n  - '..':\n      sub:\n        - x: {}\n").unwrap();

        for strategy in [Strategy::Sequential, Strategy::Planned] {
            let err = Scaffolder::new(temp_dir.path())
                .with_strategy(strategy)
                .run(&outline)
                .unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidPath { .. }));
        }
        assert!(!temp_dir.path().join("index.md").exists());
    }

    #[test]
    fn test_run_file_missing_outline() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = Scaffolder::new(temp_dir.path())
            .run_file(&temp_dir.path().join("organizer.yml"))
            .unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::MissingFile);
        assert!(!temp_dir.path().join("index.md").exists());
    }

    #[test]
    fn test_plan_does_not_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outline = Outline::from_yaml(OUTLINE).unwrap();

        let plan = Scaffolder::new(temp_dir.path()).plan(&outline).unwrap();

        assert_eq!(plan.files().count(), 3);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
