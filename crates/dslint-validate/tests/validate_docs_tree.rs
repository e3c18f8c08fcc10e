//! Integration test: validate fixture documentation trees end to end.
//!
//! Each test builds a small `docs/` tree in a temporary directory, runs the
//! full validator, and asserts on individual (entity, invariant) results.

use std::path::{Path, PathBuf};

use dslint_core::ValidatorConfig;
use dslint_validate::{CheckFailure, Invariant, StructureValidator, ValidationReport};

const GOOD_FRONTMATTER: &str = "---\ntitle: Intro\ndescription: x\nsidebar_position: 1\n---\n";

/// Write `content` at `rel` under `root`, creating parent directories.
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn run(root: &Path) -> ValidationReport {
    StructureValidator::new(ValidatorConfig::for_docs_dir(root))
        .run()
        .expect("validation run should succeed")
}

fn failure_for<'a>(
    report: &'a ValidationReport,
    subject: &str,
    invariant: Invariant,
) -> Option<&'a CheckFailure> {
    report
        .checks
        .iter()
        .find(|c| c.invariant == invariant && c.subject == Path::new(subject))
        .unwrap_or_else(|| panic!("no {invariant} check for {subject}"))
        .failure()
}

#[test]
fn well_formed_tree_passes_every_check() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "intro/intro.md", &format!("{GOOD_FRONTMATTER}# Intro\n\nHello"));
    write(&docs, "intro/_category_.json", r#"{"label": "Intro"}"#);

    let report = run(&docs);

    assert!(report.is_success(), "unexpected failures: {report:#?}");
    assert_eq!(report.total(), 3);
    assert_eq!(report.by_invariant(Invariant::Frontmatter).count(), 1);
    assert_eq!(report.by_invariant(Invariant::Headings).count(), 1);
    assert_eq!(report.by_invariant(Invariant::Category).count(), 1);
}

#[test]
fn missing_sidebar_position_is_the_only_failure() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(
        &docs,
        "intro/intro.md",
        "---\ntitle: Intro\ndescription: x\n---\n# Intro\n\nHello",
    );
    write(&docs, "intro/_category_.json", "{}");

    let report = run(&docs);

    assert_eq!(report.failed(), 1);
    assert_eq!(
        report.missing_fields(Path::new("intro/intro.md")),
        Some(&["sidebar_position".to_string()][..])
    );
    assert!(failure_for(&report, "intro/intro.md", Invariant::Headings).is_none());
    assert!(failure_for(&report, "intro", Invariant::Category).is_none());
}

#[test]
fn two_top_level_headings_report_count() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "page.md", &format!("{GOOD_FRONTMATTER}# A\n\n# B"));

    let report = run(&docs);

    assert_eq!(
        failure_for(&report, "page.md", Invariant::Headings),
        Some(&CheckFailure::HeadingCount { count: 2 })
    );
    assert!(failure_for(&report, "page.md", Invariant::Frontmatter).is_none());
}

#[test]
fn fenced_and_lower_level_headings_do_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(
        &docs,
        "setup.mdx",
        &format!(
            "{GOOD_FRONTMATTER}# Setup\n\n## Install\n\n```bash\n# comment in a script\nnpm ci\n```\n"
        ),
    );

    let report = run(&docs);
    assert!(report.is_success(), "unexpected failures: {report:#?}");
}

#[test]
fn orphan_directory_fails_category_check() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "orphan/page.md", &format!("{GOOD_FRONTMATTER}# Page\n"));

    let report = run(&docs);

    assert_eq!(
        failure_for(&report, "orphan", Invariant::Category),
        Some(&CheckFailure::MissingDescriptor {
            file: "_category_.json".to_string()
        })
    );
    assert_eq!(report.failed(), 1);
}

#[test]
fn nested_directories_each_need_a_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "guides/_category_.json", "{}");
    write(&docs, "guides/advanced/tips.md", &format!("{GOOD_FRONTMATTER}# Tips\n"));
    write(&docs, "static/img/logo.svg", "<svg/>");

    let report = run(&docs);

    let category: Vec<(PathBuf, bool)> = report
        .by_invariant(Invariant::Category)
        .map(|c| (c.subject.clone(), c.passed()))
        .collect();
    assert_eq!(
        category,
        vec![
            (PathBuf::from("guides"), true),
            (PathBuf::from("guides").join("advanced"), false),
        ]
    );
}

#[test]
fn one_file_can_fail_every_file_check_independently() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "bare.md", "No frontmatter and no heading.\n");

    let report = run(&docs);

    assert_eq!(
        report.missing_fields(Path::new("bare.md")),
        Some(
            &[
                "title".to_string(),
                "description".to_string(),
                "sidebar_position".to_string()
            ][..]
        )
    );
    assert_eq!(
        failure_for(&report, "bare.md", Invariant::Headings),
        Some(&CheckFailure::HeadingCount { count: 0 })
    );
}

#[test]
fn malformed_frontmatter_is_scoped_to_its_file() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "broken.md", "---\ntitle: [oops\n---\n# Broken\n");
    write(&docs, "fine.md", &format!("{GOOD_FRONTMATTER}# Fine\n"));

    let report = run(&docs);

    assert!(matches!(
        failure_for(&report, "broken.md", Invariant::Frontmatter),
        Some(CheckFailure::Parse { .. })
    ));
    assert!(matches!(
        failure_for(&report, "broken.md", Invariant::Headings),
        Some(CheckFailure::Parse { .. })
    ));
    assert!(report
        .for_subject(Path::new("fine.md"))
        .all(|c| c.passed()));
}

#[test]
fn invalid_utf8_is_a_filesystem_failure() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    std::fs::write(docs.join("binary.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let report = run(&docs);

    assert!(matches!(
        failure_for(&report, "binary.md", Invariant::Frontmatter),
        Some(CheckFailure::Filesystem { .. })
    ));
}

#[test]
fn invariant_selection_limits_checks() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "orphan/page.md", "# Page\n");

    let report = StructureValidator::new(ValidatorConfig::for_docs_dir(&docs))
        .with_invariants([Invariant::Headings])
        .run()
        .unwrap();

    assert_eq!(report.total(), 1);
    assert!(report.is_success());
}

#[test]
fn include_root_requires_a_root_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "index.md", &format!("{GOOD_FRONTMATTER}# Home\n"));

    let config = ValidatorConfig {
        include_root: true,
        ..ValidatorConfig::for_docs_dir(&docs)
    };
    let report = StructureValidator::new(config).run().unwrap();

    assert!(matches!(
        failure_for(&report, ".", Invariant::Category),
        Some(CheckFailure::MissingDescriptor { .. })
    ));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "a/one.md", &format!("{GOOD_FRONTMATTER}# One\n"));
    write(&docs, "a/two.md", "# Two\n# Again\n");
    write(&docs, "b/c/three.mdx", "---\ntitle: Three\n---\n");
    write(&docs, "b/_category_.json", "{}");

    let first = run(&docs);
    let second = run(&docs);

    assert_eq!(first, second);
    assert!(!first.is_success());
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    write(&docs, "orphan/page.md", &format!("{GOOD_FRONTMATTER}# Page\n"));

    let report = run(&docs);
    let json = serde_json::to_value(&report).unwrap();

    let category = json["checks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["invariant"] == "category")
        .unwrap();
    assert_eq!(category["subject"], "orphan");
    assert_eq!(category["outcome"]["status"], "fail");
    assert_eq!(category["outcome"]["failure"]["kind"], "missing_descriptor");
}
