//! YAML parsing for outline documents.
//!
//! Keys are read from the raw [`Value`] tree so that mapping order is kept;
//! entry bodies (`title`, `sub`) go through serde.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::error::OutlineError;
use crate::outline::{Outline, Section, Subsection};

/// Body of a `content` or `sub` entry.
///
/// Subsection bodies may carry a `sub` list too; it is ignored since outlines
/// are only two levels deep.
#[derive(Default, Deserialize)]
struct RawEntry {
    #[serde(default, deserialize_with = "deserialize_title")]
    title: Option<String>,
    #[serde(default)]
    sub: Option<Vec<Mapping>>,
}

/// Parse an outline document.
pub(crate) fn parse_outline(text: &str) -> Result<Outline, OutlineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OutlineError::MissingContent);
    }

    let root: Value =
        serde_yaml::from_str(trimmed).map_err(|e| OutlineError::Parse(e.to_string()))?;
    let root = match root {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Err(OutlineError::MissingContent),
        other => {
            return Err(OutlineError::Parse(format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            )));
        }
    };

    let items = match root.get("content") {
        None | Some(Value::Null) => return Err(OutlineError::MissingContent),
        Some(Value::Sequence(items)) => items,
        Some(other) => {
            return Err(OutlineError::Parse(format!(
                "`content` must be a list, found {}",
                value_kind(other)
            )));
        }
    };

    let mut sections = Vec::new();
    for item in items {
        for (key, body) in entry_mapping(item, "content")? {
            let key = scalar_key(key)?;
            let entry = parse_entry(body, &key)?;
            let subsections = parse_subsections(entry.sub.unwrap_or_default())?;
            sections.push(Section {
                key,
                title: entry.title,
                subsections,
            });
        }
    }

    Ok(Outline { sections })
}

fn parse_subsections(items: Vec<Mapping>) -> Result<Vec<Subsection>, OutlineError> {
    let mut subsections = Vec::new();
    for mapping in items {
        for (key, body) in &mapping {
            let key = scalar_key(key)?;
            let entry = parse_entry(body, &key)?;
            subsections.push(Subsection {
                key,
                title: entry.title,
            });
        }
    }
    Ok(subsections)
}

/// Require a list item to be a mapping of `key: body` entries.
fn entry_mapping<'a>(item: &'a Value, list: &str) -> Result<&'a Mapping, OutlineError> {
    item.as_mapping().ok_or_else(|| {
        OutlineError::Parse(format!(
            "`{list}` items must be mappings, found {}",
            value_kind(item)
        ))
    })
}

/// Deserialize an entry body. A null body (`faq:`) has no title and no children.
fn parse_entry(body: &Value, key: &str) -> Result<RawEntry, OutlineError> {
    if body.is_null() {
        return Ok(RawEntry::default());
    }
    serde_yaml::from_value(body.clone())
        .map_err(|e| OutlineError::Parse(format!("entry `{key}`: {e}")))
}

fn scalar_key(key: &Value) -> Result<String, OutlineError> {
    scalar_text(key).ok_or(OutlineError::InvalidKey(value_kind(key)))
}

/// Textual form of a scalar YAML value.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accept any scalar as a title so that `title: 2024` reads as "2024".
fn deserialize_title<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_text(&value).map(Some).ok_or_else(|| {
        D::Error::custom(format!(
            "title must be a scalar, found {}",
            value_kind(&value)
        ))
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(outline: &Outline) -> Vec<(String, Vec<String>)> {
        outline
            .sections
            .iter()
            .map(|s| {
                (
                    s.key.clone(),
                    s.subsections.iter().map(|p| p.key.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_full_outline() {
        let yaml = r"
content:
  - guide:
      title: Guide
      sub:
        - intro:
            title: Intro
        - setup:
            title: Setup
  - notes:
      title: Notes
      sub:
        - rust:
            title: Rust
";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[0].title.as_deref(), Some("Guide"));
        assert_eq!(
            outline.sections[0].subsections[1].title.as_deref(),
            Some("Setup")
        );
        assert_eq!(
            keys(&outline),
            vec![
                (
                    "guide".to_owned(),
                    vec!["intro".to_owned(), "setup".to_owned()]
                ),
                ("notes".to_owned(), vec!["rust".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_flow_style_outline() {
        let yaml = "content: [{guide: {title: Guide, sub: [{intro: {title: Intro}}]}}]";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(outline.sections[0].key, "guide");
        assert_eq!(outline.sections[0].subsections[0].key, "intro");
        assert_eq!(
            outline.sections[0].subsections[0].title.as_deref(),
            Some("Intro")
        );
    }

    #[test]
    fn test_missing_title_and_sub_are_defaults() {
        let yaml = "content:\n  - guide:\n      sub:\n        - faq: {}\n  - empty: {}\n  - bare:\n";
        let outline = parse_outline(yaml).unwrap();

        assert!(outline.sections[0].title.is_none());
        assert_eq!(outline.sections[0].subsections[0].key, "faq");
        assert!(outline.sections[0].subsections[0].title.is_none());
        assert!(outline.sections[1].subsections.is_empty());
        assert!(outline.sections[2].subsections.is_empty());
    }

    #[test]
    fn test_null_sub_is_empty() {
        let outline = parse_outline("content:\n  - guide:\n      sub:\n").unwrap();
        assert!(outline.sections[0].subsections.is_empty());
    }

    #[test]
    fn test_multi_key_items_keep_mapping_order() {
        let yaml = "content:\n  - zeta: {}\n    alpha: {}\n  - mid:\n      sub:\n        - b: {}\n          a: {}\n";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(
            keys(&outline),
            vec![
                ("zeta".to_owned(), vec![]),
                ("alpha".to_owned(), vec![]),
                ("mid".to_owned(), vec!["b".to_owned(), "a".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_scalar_keys_and_titles() {
        let yaml = "content:\n  - 2024:\n      title: 2025\n      sub:\n        - true: {}\n";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(outline.sections[0].key, "2024");
        assert_eq!(outline.sections[0].title.as_deref(), Some("2025"));
        assert_eq!(outline.sections[0].subsections[0].key, "true");
    }

    #[test]
    fn test_nested_sub_under_subsection_is_ignored() {
        let yaml = "content:\n  - a:\n      sub:\n        - b:\n            sub:\n              - c: {}\n";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(outline.page_count(), 1);
        assert_eq!(outline.sections[0].subsections[0].key, "b");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let yaml = "version: 2\ncontent:\n  - a:\n      title: A\n      icon: book\n";
        let outline = parse_outline(yaml).unwrap();
        assert_eq!(outline.sections[0].display_title(), "A");
    }

    #[test]
    fn test_empty_content_list() {
        let outline = parse_outline("content: []").unwrap();
        assert!(outline.sections.is_empty());
    }

    #[test]
    fn test_missing_content_key() {
        let err = parse_outline("sections:\n  - a: {}\n").unwrap_err();
        assert!(matches!(err, OutlineError::MissingContent));
    }

    #[test]
    fn test_null_content_is_missing() {
        let err = parse_outline("content:\n").unwrap_err();
        assert!(matches!(err, OutlineError::MissingContent));
    }

    #[test]
    fn test_empty_document_is_missing_content() {
        assert!(matches!(
            parse_outline("").unwrap_err(),
            OutlineError::MissingContent
        ));
        assert!(matches!(
            parse_outline("  \n\t ").unwrap_err(),
            OutlineError::MissingContent
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_outline("content: [unclosed").unwrap_err();
        assert!(matches!(err, OutlineError::Parse(_)));
    }

    #[test]
    fn test_top_level_sequence_is_rejected() {
        let err = parse_outline("- a\n- b\n").unwrap_err();
        assert!(matches!(err, OutlineError::Parse(_)));
        assert!(err.to_string().contains("top level"));
    }

    #[test]
    fn test_content_must_be_list() {
        let err = parse_outline("content: guide").unwrap_err();
        assert!(err.to_string().contains("`content` must be a list"));
    }

    #[test]
    fn test_content_items_must_be_mappings() {
        let err = parse_outline("content:\n  - guide\n").unwrap_err();
        assert!(err.to_string().contains("must be mappings"));
    }

    #[test]
    fn test_non_scalar_key_is_rejected() {
        let err = parse_outline("content:\n  - ? [a, b]\n    : {}\n").unwrap_err();
        assert!(matches!(err, OutlineError::InvalidKey("sequence")));
    }

    #[test]
    fn test_non_scalar_title_is_rejected() {
        let err = parse_outline("content:\n  - a:\n      title: [x]\n").unwrap_err();
        assert!(matches!(err, OutlineError::Parse(_)));
        assert!(err.to_string().contains("entry `a`"));
    }
}
