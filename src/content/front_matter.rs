//! Front-matter parsing and schema validation.
//!
//! A document starts with a `---` fence pair holding YAML key/value
//! fields, followed by the markdown body. The block is parsed into a
//! generic mapping first; the schema is then enforced by explicit
//! field-level checks so every failure can name the document and the
//! offending field.

use crate::content::ContentError;
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Date spellings accepted for `pubDate`.
///
/// Covers the ISO form and the long forms blog authors actually write
/// (`Jul 08 2022`, `July 08, 2022`).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d %Y", "%B %d %Y", "%b %d, %Y", "%B %d, %Y"];

/// Validated front-matter record for one post.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    pub hero_image: Option<String>,
    pub tags: Vec<String>,
}

/// Split a document into its raw front-matter block and markdown body.
///
/// The block is delimited by a `---` line at the very start of the
/// document and the next `---` line. Returns `None` when the opening
/// fence is missing. The body is returned with the fence's trailing
/// newlines removed but otherwise untouched.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text
        .strip_prefix("---")
        .and_then(|rest| rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')))?;

    // Scan line by line so a `---` inside a value cannot close the fence
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

/// Parse and validate the front-matter of `path`, returning the record
/// and the untouched markdown body.
pub fn parse_front_matter(path: &Path, text: &str) -> Result<(FrontMatter, String), ContentError> {
    let Some((block, body)) = split_front_matter(text) else {
        return Err(ContentError::schema(
            path,
            "front-matter",
            "missing `---` front-matter block",
        ));
    };

    let value: Value = serde_yaml::from_str(block)
        .map_err(|err| ContentError::schema(path, "front-matter", err.to_string()))?;
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        _ => {
            return Err(ContentError::schema(
                path,
                "front-matter",
                "front-matter is not a key/value mapping",
            ));
        }
    };

    let title = required_string(path, &mapping, "title")?;
    let description = required_string(path, &mapping, "description")?;
    let pub_date = parse_pub_date(path, &required_string(path, &mapping, "pubDate")?)?;
    let hero_image = optional_string(path, &mapping, "heroImage")?;
    let tags = tag_sequence(path, &mapping)?;

    Ok((
        FrontMatter {
            title,
            description,
            pub_date,
            hero_image,
            tags,
        },
        body.to_owned(),
    ))
}

// ============================================================================
// Field-Level Checks
// ============================================================================

/// Fetch a required field as a non-empty string.
fn required_string(path: &Path, mapping: &Mapping, field: &str) -> Result<String, ContentError> {
    let Some(value) = mapping.get(field) else {
        return Err(ContentError::schema(path, field, "missing required field"));
    };
    string_value(path, field, value)
}

/// Fetch an optional field as a non-empty string; absent or null means `None`.
fn optional_string(
    path: &Path,
    mapping: &Mapping,
    field: &str,
) -> Result<Option<String>, ContentError> {
    match mapping.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => string_value(path, field, value).map(Some),
    }
}

/// Fetch `tags` as a sequence of non-empty strings; absent or null means empty.
fn tag_sequence(path: &Path, mapping: &Mapping) -> Result<Vec<String>, ContentError> {
    match mapping.get("tags") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(sequence)) => sequence
            .iter()
            .map(|value| string_value(path, "tags", value))
            .collect(),
        Some(_) => Err(ContentError::schema(
            path,
            "tags",
            "expected a sequence of strings",
        )),
    }
}

/// Coerce a YAML value to a non-empty string.
fn string_value(path: &Path, field: &str, value: &Value) -> Result<String, ContentError> {
    let Value::String(text) = value else {
        return Err(ContentError::schema(path, field, "expected a string"));
    };
    if text.trim().is_empty() {
        return Err(ContentError::schema(path, field, "must not be empty"));
    }
    Ok(text.clone())
}

/// Parse `pubDate` against the accepted spellings.
fn parse_pub_date(path: &Path, raw: &str) -> Result<NaiveDate, ContentError> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw.trim(), format).ok())
        .ok_or_else(|| {
            ContentError::schema(
                path,
                "pubDate",
                format!("`{raw}` is not a valid calendar date"),
            )
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<(FrontMatter, String), ContentError> {
        parse_front_matter(Path::new("posts/test.md"), text)
    }

    #[test]
    fn test_split_front_matter() {
        let text = "---\ntitle: \"Hello\"\n---\n\nBody text.";
        let (block, body) = split_front_matter(text).expect("split");

        assert_eq!(block, "title: \"Hello\"\n");
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_split_front_matter_missing_fence() {
        assert!(split_front_matter("Just a body.").is_none());
        assert!(split_front_matter("").is_none());
    }

    #[test]
    fn test_split_front_matter_unclosed_fence() {
        assert!(split_front_matter("---\ntitle: \"Hello\"\n").is_none());
    }

    #[test]
    fn test_split_front_matter_dashes_inside_value() {
        let text = "---\ntitle: \"a --- b\"\n---\nBody";
        let (block, body) = split_front_matter(text).expect("split");

        assert!(block.contains("a --- b"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_front_matter_crlf() {
        let text = "---\r\ntitle: \"Hello\"\r\n---\r\nBody";
        let (block, body) = split_front_matter(text).expect("split");

        assert!(block.contains("title"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_full_record() {
        let (fm, body) = parse(
            r#"---
title: "First Post"
description: "The very first post."
pubDate: 2024-01-15
heroImage: "/images/hero.png"
tags:
  - rust
  - blog
---

Hello, world.
"#,
        )
        .expect("parse");

        assert_eq!(fm.title, "First Post");
        assert_eq!(fm.description, "The very first post.");
        assert_eq!(fm.pub_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(fm.hero_image.as_deref(), Some("/images/hero.png"));
        assert_eq!(fm.tags, vec!["rust", "blog"]);
        assert_eq!(body, "Hello, world.\n");
    }

    #[test]
    fn test_parse_missing_title() {
        let err = parse("---\ndescription: \"d\"\npubDate: 2024-01-15\n---\nBody").unwrap_err();

        match err {
            ContentError::Schema { field, path, .. } => {
                assert_eq!(field, "title");
                assert!(path.ends_with("test.md"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_description() {
        let err = parse("---\ntitle: \"t\"\npubDate: 2024-01-15\n---\nBody").unwrap_err();

        match err {
            ContentError::Schema { field, .. } => assert_eq!(field, "description"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unparseable_date() {
        let err =
            parse("---\ntitle: \"t\"\ndescription: \"d\"\npubDate: \"not-a-date\"\n---\nBody")
                .unwrap_err();

        match err {
            ContentError::Schema { field, reason, .. } => {
                assert_eq!(field, "pubDate");
                assert!(reason.contains("not-a-date"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_date_long_forms() {
        for date in ["Jul 08 2022", "July 08, 2022", "Jul 8, 2022"] {
            let text = format!(
                "---\ntitle: \"t\"\ndescription: \"d\"\npubDate: \"{date}\"\n---\nBody"
            );
            let (fm, _) = parse(&text).expect(date);
            assert_eq!(fm.pub_date, NaiveDate::from_ymd_opt(2022, 7, 8).unwrap());
        }
    }

    #[test]
    fn test_parse_impossible_date() {
        // Well-formed but not a real calendar date
        let err =
            parse("---\ntitle: \"t\"\ndescription: \"d\"\npubDate: 2023-02-29\n---\nBody")
                .unwrap_err();

        match err {
            ContentError::Schema { field, .. } => assert_eq!(field, "pubDate"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tags_default_empty() {
        let (fm, _) =
            parse("---\ntitle: \"t\"\ndescription: \"d\"\npubDate: 2024-01-15\n---\nBody")
                .expect("parse");

        assert!(fm.tags.is_empty());
        assert!(fm.hero_image.is_none());
    }

    #[test]
    fn test_parse_tags_non_string_element() {
        let err = parse(
            "---\ntitle: \"t\"\ndescription: \"d\"\npubDate: 2024-01-15\ntags:\n  - rust\n  - 42\n---\nBody",
        )
        .unwrap_err();

        match err {
            ContentError::Schema { field, .. } => assert_eq!(field, "tags"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tags_preserve_author_order() {
        let (fm, _) = parse(
            "---\ntitle: \"t\"\ndescription: \"d\"\npubDate: 2024-01-15\ntags: [zulu, alpha, mike]\n---\nBody",
        )
        .expect("parse");

        assert_eq!(fm.tags, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_parse_title_wrong_type() {
        let err =
            parse("---\ntitle: 42\ndescription: \"d\"\npubDate: 2024-01-15\n---\nBody")
                .unwrap_err();

        match err {
            ContentError::Schema { field, reason, .. } => {
                assert_eq!(field, "title");
                assert!(reason.contains("string"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_block() {
        let err = parse("---\n---\nBody").unwrap_err();

        // Empty front-matter reads as an empty mapping; the first missing
        // required field is reported
        match err {
            ContentError::Schema { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("---\ntitle: [unclosed\n---\nBody").unwrap_err();

        match err {
            ContentError::Schema { field, .. } => assert_eq!(field, "front-matter"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_body_preserved_unmodified() {
        let (_, body) = parse(
            "---\ntitle: \"t\"\ndescription: \"d\"\npubDate: 2024-01-15\n---\n# Heading\n\n    indented code\n",
        )
        .expect("parse");

        assert_eq!(body, "# Heading\n\n    indented code\n");
    }
}
