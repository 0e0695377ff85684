//! Changelog extraction pipeline
//!
//! Drives the full flow: document source text goes through the injected
//! markup parser, the promotion rule normalizes the tree, the locator
//! selects entry nodes, and each one is extracted and validated into a
//! [`ChangeLogEntry`]. The pipeline is synchronous and performs no
//! recovery: the first malformed entry aborts extraction of the whole
//! document.

use std::path::Path;

use tracing::debug;

use crate::extract::{changelog_entry_nodes, extract_entry, promote_document_titles};
use crate::model::ChangeLogEntry;
use crate::node::Node;
use crate::Result;

/// The markup-to-tree collaborator
///
/// Turning document text into a structured node tree is not this crate's
/// job; implement this trait over whatever markup engine the application
/// uses and hand it to [`changelog_from_text`]. Tests can implement it
/// over hand-built trees. The pipeline applies
/// [`promote_document_titles`] itself, so engines that promote lone
/// headings and engines that do not yield identical results.
pub trait DocumentParser {
    /// Parse document text into its node tree
    fn parse_document(&self, text: &str) -> Result<Node>;
}

/// Extract the validated changelog entries of a promoted document tree
///
/// Entries come back in document order. Any malformed entry aborts the
/// whole extraction; there is no partial result.
///
/// # Examples
///
/// ```
/// use changelog_rs::{entries_from_document, Node, NodeKind};
///
/// let document = Node::new(NodeKind::Document)
///     .child(Node::new(NodeKind::Title).child(Node::text("Version 1.0")))
///     .child(Node::new(NodeKind::Paragraph).child(Node::text("Initial release.")));
///
/// let entries = entries_from_document(&document).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].version(), "1.0");
/// assert_eq!(entries[0].release_date(), "UNKNOWN");
/// assert_eq!(entries[0].body(), Some("Initial release."));
/// ```
pub fn entries_from_document(document: &Node) -> Result<Vec<ChangeLogEntry>> {
    let nodes = changelog_entry_nodes(document)?;
    debug!("Located {} changelog entry node(s)", nodes.len());

    let mut entries = Vec::with_capacity(nodes.len());
    for node in nodes {
        let raw = extract_entry(node)?;

        let mut builder = ChangeLogEntry::builder().version(raw.version);
        if let Some(release_date) = raw.release_date {
            builder = builder.release_date(release_date);
        }
        if let Some(maintainer) = raw.maintainer {
            builder = builder.maintainer(maintainer);
        }
        if let Some(body) = raw.body {
            builder = builder.body(body);
        }
        entries.push(builder.build()?);
    }

    Ok(entries)
}

/// Parse changelog entries out of document source text
///
/// Parses `text` with the injected markup collaborator, applies the
/// lone-heading promotion rule, then extracts and validates the entries.
pub fn changelog_from_text<P: DocumentParser>(
    parser: &P,
    text: &str,
) -> Result<Vec<ChangeLogEntry>> {
    let mut document = parser.parse_document(text)?;
    promote_document_titles(&mut document)?;
    entries_from_document(&document)
}

/// Parse changelog entries out of a document file
///
/// The single bounded read of the pipeline; everything after it is pure.
pub fn changelog_from_path<P: DocumentParser>(
    parser: &P,
    path: impl AsRef<Path>,
) -> Result<Vec<ChangeLogEntry>> {
    let path = path.as_ref();
    debug!("Reading changelog document from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    changelog_from_text(parser, &text)
}
