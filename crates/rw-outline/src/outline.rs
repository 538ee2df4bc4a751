//! Outline tree types.

use std::path::Path;

use crate::error::OutlineError;
use crate::yaml::parse_outline;

/// Ordered tree of sections parsed from an outline document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    /// Top-level sections in source order.
    pub sections: Vec<Section>,
}

/// Top-level grouping. Becomes a folder under the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Folder name.
    pub key: String,
    /// Display title from the outline, if set.
    pub title: Option<String>,
    /// Subsections in source order.
    pub subsections: Vec<Subsection>,
}

/// Leaf grouping. Becomes a folder holding exactly one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    /// Folder and page file name.
    pub key: String,
    /// Display title from the outline, if set.
    pub title: Option<String>,
}

impl Outline {
    /// Load an outline from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::NotFound`] if the file does not exist,
    /// [`OutlineError::Io`] if it cannot be read, and a parse error if the
    /// document is malformed or has no `content` key.
    pub fn load(path: &Path) -> Result<Self, OutlineError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OutlineError::NotFound(path.to_path_buf())
            } else {
                OutlineError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let outline = Self::from_yaml(&text)?;
        tracing::debug!(
            path = %path.display(),
            sections = outline.sections.len(),
            pages = outline.page_count(),
            "Loaded outline"
        );
        Ok(outline)
    }

    /// Parse an outline from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the YAML is malformed or has no `content` key.
    pub fn from_yaml(text: &str) -> Result<Self, OutlineError> {
        parse_outline(text)
    }

    /// Iterate over every `(section, subsection)` pair in source order.
    pub fn pages(&self) -> impl Iterator<Item = (&Section, &Subsection)> {
        self.sections
            .iter()
            .flat_map(|section| section.subsections.iter().map(move |sub| (section, sub)))
    }

    /// Total number of subsections across all sections.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(|s| s.subsections.len()).sum()
    }
}

impl Section {
    /// Title shown in the index: the outline title, or the key.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }
}

impl Subsection {
    /// Title used for the page heading and index link text.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }

    /// File name of the page inside the subsection folder (`<key>.md`).
    #[must_use]
    pub fn page_filename(&self) -> String {
        format!("{}.md", self.key)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sub(key: &str, title: Option<&str>) -> Subsection {
        Subsection {
            key: key.to_owned(),
            title: title.map(str::to_owned),
        }
    }

    #[test]
    fn test_display_title_falls_back_to_key() {
        assert_eq!(sub("faq", None).display_title(), "faq");
        assert_eq!(sub("faq", Some("FAQ")).display_title(), "FAQ");

        let section = Section {
            key: "guide".to_owned(),
            title: None,
            subsections: Vec::new(),
        };
        assert_eq!(section.display_title(), "guide");
    }

    #[test]
    fn test_page_filename() {
        assert_eq!(sub("intro", None).page_filename(), "intro.md");
    }

    #[test]
    fn test_pages_iterates_in_source_order() {
        let outline = Outline::from_yaml(
            "content:\n  - a:\n      sub:\n        - x:\n        - y:\n  - b:\n  - c:\n      sub:\n        - z:\n",
        )
        .unwrap();

        let pairs: Vec<_> = outline
            .pages()
            .map(|(s, p)| format!("{}/{}", s.key, p.key))
            .collect();
        assert_eq!(pairs, vec!["a/x", "a/y", "c/z"]);
        assert_eq!(outline.page_count(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Outline::load(&temp_dir.path().join("missing.yml")).unwrap_err();
        assert!(err.is_not_found(), "Expected NotFound, got {err:?}");
    }

    #[test]
    fn test_load_reads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("organizer.yml");
        fs::write(
            &path,
            "content:\n  - guide:\n      title: Guide\n      sub:\n        - intro:\n            title: Intro\n",
        )
        .unwrap();

        let outline = Outline::load(&path).unwrap();
        assert_eq!(
            outline,
            Outline {
                sections: vec![Section {
                    key: "guide".to_owned(),
                    title: Some("Guide".to_owned()),
                    subsections: vec![sub("intro", Some("Intro"))],
                }],
            }
        );
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("organizer.yml");
        fs::write(&path, "content: [unclosed").unwrap();

        let err = Outline::load(&path).unwrap_err();
        assert!(err.is_parse(), "Expected parse error, got {err:?}");
    }
}
