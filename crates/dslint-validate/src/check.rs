//! # Structure Checks
//!
//! Each function evaluates one invariant for one entity and returns the
//! failure, if any. A content file is parsed once by the caller; a parse or
//! read error fails both file checks independently.

use std::path::Path;

use dslint_core::{count_top_level_headings, ContentFile, DslintError, Frontmatter};

use crate::report::CheckFailure;
use crate::walk::has_category_descriptor;

/// Keys from `required_keys` absent in `metadata`, in `required_keys` order.
pub fn validate_frontmatter(metadata: &Frontmatter, required_keys: &[String]) -> Vec<String> {
    required_keys
        .iter()
        .filter(|key| !metadata.contains_key(key.as_str()))
        .cloned()
        .collect()
}

/// Required-frontmatter check for one parsed content file.
pub fn check_frontmatter(
    parsed: &Result<ContentFile, DslintError>,
    required_keys: &[String],
) -> Option<CheckFailure> {
    let file = match parsed {
        Ok(file) => file,
        Err(e) => return Some(CheckFailure::from(e)),
    };
    let missing = validate_frontmatter(&file.frontmatter, required_keys);
    if missing.is_empty() {
        None
    } else {
        Some(CheckFailure::MissingFields { missing })
    }
}

/// Single-H1 check for one parsed content file.
pub fn check_headings(parsed: &Result<ContentFile, DslintError>) -> Option<CheckFailure> {
    let file = match parsed {
        Ok(file) => file,
        Err(e) => return Some(CheckFailure::from(e)),
    };
    match count_top_level_headings(&file.body) {
        1 => None,
        count => Some(CheckFailure::HeadingCount { count }),
    }
}

/// Category-descriptor check for one content-bearing directory.
pub fn check_category(dir: &Path, category_file: &str) -> Option<CheckFailure> {
    if has_category_descriptor(dir, category_file) {
        None
    } else {
        Some(CheckFailure::MissingDescriptor {
            file: category_file.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use dslint_core::{split_frontmatter, ParseError};

    fn required() -> Vec<String> {
        vec![
            "title".to_string(),
            "description".to_string(),
            "sidebar_position".to_string(),
        ]
    }

    fn file(text: &str) -> Result<ContentFile, DslintError> {
        let (frontmatter, body) = split_frontmatter(text).unwrap();
        Ok(ContentFile {
            path: PathBuf::from("docs/page.md"),
            frontmatter,
            body: body.to_string(),
        })
    }

    #[test]
    fn missing_keys_preserve_required_order() {
        let (fm, _) = split_frontmatter("---\nsidebar_position: 1\n---\n").unwrap();
        assert_eq!(validate_frontmatter(&fm, &required()), vec!["title", "description"]);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let (fm, _) = split_frontmatter(
            "---\ntitle: T\ndescription: D\nsidebar_position: 3\nslug: /t\n---\n",
        )
        .unwrap();
        assert!(validate_frontmatter(&fm, &required()).is_empty());
    }

    #[test]
    fn empty_frontmatter_misses_everything() {
        assert_eq!(
            validate_frontmatter(&Frontmatter::new(), &required()),
            required()
        );
    }

    #[test]
    fn frontmatter_check_reports_single_missing_field() {
        let parsed = file("---\ntitle: Intro\ndescription: x\n---\n# Intro\n");
        assert_eq!(
            check_frontmatter(&parsed, &required()),
            Some(CheckFailure::MissingFields {
                missing: vec!["sidebar_position".to_string()]
            })
        );
        assert_eq!(check_headings(&parsed), None);
    }

    #[test]
    fn heading_check_reports_count() {
        let parsed = file("---\ntitle: T\n---\n# A\n\n# B");
        assert_eq!(
            check_headings(&parsed),
            Some(CheckFailure::HeadingCount { count: 2 })
        );

        let parsed = file("---\ntitle: T\n---\n## Only a subheading\n");
        assert_eq!(
            check_headings(&parsed),
            Some(CheckFailure::HeadingCount { count: 0 })
        );
    }

    #[test]
    fn parse_error_fails_both_file_checks() {
        let parsed = Err(DslintError::Parse {
            path: PathBuf::from("docs/bad.md"),
            source: ParseError::Unterminated,
        });
        assert!(matches!(
            check_frontmatter(&parsed, &required()),
            Some(CheckFailure::Parse { .. })
        ));
        assert!(matches!(check_headings(&parsed), Some(CheckFailure::Parse { .. })));
    }

    #[test]
    fn category_check() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            check_category(dir.path(), "_category_.json"),
            Some(CheckFailure::MissingDescriptor {
                file: "_category_.json".to_string()
            })
        );
        std::fs::write(dir.path().join("_category_.json"), b"{}").unwrap();
        assert_eq!(check_category(dir.path(), "_category_.json"), None);
    }
}
