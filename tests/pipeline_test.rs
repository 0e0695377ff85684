//! Integration tests for changelog-rs
//!
//! These tests verify the public API works correctly, driving the full
//! pipeline through a fake markup parser. No real markup engine is
//! required.

use changelog_rs::{
    changelog_from_path, changelog_from_text, parse_person_field, ChangeLogEntry,
    ChangelogError, DocumentParser, Node, NodeKind, Result,
};

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Fake markup collaborator: hands back a prebuilt tree, like a markup
/// engine that performed no title promotion.
struct FakeParser {
    document: Node,
}

impl DocumentParser for FakeParser {
    fn parse_document(&self, _text: &str) -> Result<Node> {
        Ok(self.document.clone())
    }
}

fn title(text: &str) -> Node {
    Node::new(NodeKind::Title).child(Node::text(text))
}

fn section(heading: &str, content: Vec<Node>) -> Node {
    Node::new(NodeKind::Section)
        .child(title(heading))
        .children_from(content)
}

fn field(name: &str, value: &str) -> Node {
    Node::new(NodeKind::Field)
        .child(Node::new(NodeKind::FieldName).child(Node::text(name)))
        .child(Node::new(NodeKind::FieldBody).child(Node::text(value)))
}

fn released(value: &str) -> Node {
    Node::new(NodeKind::FieldList).child(field("Released", value))
}

#[test]
fn test_pipeline_single_promoted_entry() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document).child(section(
            "Version 1.0",
            vec![released("2009-01-01")],
        )),
    };

    let entries = changelog_from_text(&parser, "").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].version(), "1.0");
    assert_eq!(entries[0].release_date(), "2009-01-01");
    assert_eq!(entries[0].maintainer(), None);
}

#[test]
fn test_pipeline_multiple_entries_in_source_order() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document)
            .child(section("Version 1.0", vec![released("2009-01-01")]))
            .child(section("version 0.8", vec![released("2004-01-01")]))
            .child(section("Version 0.7.2", vec![released("2001-01-01")])),
    };

    let entries = changelog_from_text(&parser, "").unwrap();
    let versions: Vec<&str> = entries.iter().map(ChangeLogEntry::version).collect();
    assert_eq!(versions, ["1.0", "0.8", "0.7.2"]);
}

#[test]
fn test_pipeline_excludes_preamble_section_without_error() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document)
            .child(section("Overview", vec![]))
            .child(section("Version 1.0", vec![released("2009-01-01")])),
    };

    let entries = changelog_from_text(&parser, "").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].version(), "1.0");
}

#[test]
fn test_pipeline_rejects_invalid_version_token() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document)
            .child(section("Version 1.0", vec![]))
            .child(section("Version b0gUs", vec![])),
    };

    let err = changelog_from_text(&parser, "").unwrap_err();
    match err {
        ChangelogError::VersionInvalid(value) => assert_eq!(value, "b0gUs"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_pipeline_rejects_invalid_maintainer() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document).child(section(
            "Version 1.0",
            vec![Node::new(NodeKind::FieldList).child(field("Maintainer", "b0gUs"))],
        )),
    };

    let err = changelog_from_text(&parser, "").unwrap_err();
    assert!(matches!(err, ChangelogError::PersonDetailsInvalid(_)));
}

#[test]
fn test_pipeline_reads_file() {
    init_logging();
    let parser = FakeParser {
        document: Node::new(NodeKind::Document).child(section("Version 1.0", vec![])),
    };

    let path = std::env::temp_dir().join("changelog-rs-pipeline-test.txt");
    std::fs::write(&path, "Version 1.0\n===========\n").unwrap();
    let entries = changelog_from_path(&parser, &path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].version(), "1.0");
}

#[test]
fn test_entry_round_trip() {
    let entry = ChangeLogEntry::new(
        "2009-01-01",
        "1.0",
        Some("Foo Bar <foo.bar@example.org>".to_string()),
        Some("* Lorem ipsum dolor sit amet.".to_string()),
    )
    .unwrap();

    assert_eq!(entry.release_date(), "2009-01-01");
    assert_eq!(entry.version(), "1.0");
    assert_eq!(entry.maintainer(), Some("Foo Bar <foo.bar@example.org>"));
    assert_eq!(entry.body(), Some("* Lorem ipsum dolor sit amet."));

    let fields = entry.as_ordered_fields();
    assert_eq!(fields[0], ("release_date", Some("2009-01-01")));
    assert_eq!(fields[1], ("version", Some("1.0")));
    assert_eq!(
        fields[2],
        ("maintainer", Some("Foo Bar <foo.bar@example.org>"))
    );
    assert_eq!(fields[3], ("body", Some("* Lorem ipsum dolor sit amet.")));
}

#[test]
fn test_person_field_splitting() {
    let person = parse_person_field("Foo Bar <foo.bar@example.com>");
    assert_eq!(person.name.as_deref(), Some("Foo Bar"));
    assert_eq!(person.email.as_deref(), Some("foo.bar@example.com"));

    let person = parse_person_field("");
    assert_eq!(person.name, None);
    assert_eq!(person.email, None);

    let person = parse_person_field("Foo Bar");
    assert_eq!(person.name.as_deref(), Some("Foo Bar"));
    assert_eq!(person.email, None);
}

#[test]
fn test_error_display() {
    let err = ChangelogError::VersionInvalid("b0gUs".to_string());
    assert_eq!(err.to_string(), "not a valid version: \"b0gUs\"");
}

#[test]
fn test_document_without_entries_yields_empty_list() {
    init_logging();
    // Root has a non-matching title and no subtitle: not an entry, and no
    // sections either, so the result is simply empty.
    let parser = FakeParser {
        document: Node::new(NodeKind::Document)
            .child(title("Felis gravida lacinia"))
            .at("ChangeLog", 1),
    };

    let entries = changelog_from_text(&parser, "").unwrap();
    assert!(entries.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_entries_serialize_in_canonical_order() {
    let entry = ChangeLogEntry::builder()
        .release_date("2009-01-01")
        .version("1.0")
        .maintainer("Foo Bar <foo.bar@example.org>")
        .build()
        .unwrap();

    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(
        json,
        "{\"release_date\":\"2009-01-01\",\"version\":\"1.0\",\
         \"maintainer\":\"Foo Bar <foo.bar@example.org>\",\"body\":null}"
    );
}
