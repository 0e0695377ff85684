//! Extracting raw entry fields from a located entry node
//!
//! An entry node carries its version in the heading, an optional field
//! list naming the release date and maintainer, and free-form body
//! content. Extraction here is purely structural; the values are
//! validated later when the [`crate::ChangeLogEntry`] is constructed.

use tracing::debug;

use super::locate::EntryNode;
use crate::error::NodeDiagnostic;
use crate::node::{Node, NodeKind};
use crate::title::{is_changelog_entry_title, version_from_title};
use crate::{ChangelogError, Result};

/// Field-list name carrying the release date
pub const RELEASED_FIELD: &str = "Released";

/// Field-list name carrying the maintainer
pub const MAINTAINER_FIELD: &str = "Maintainer";

/// Unvalidated field values pulled out of one entry node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Version token from the entry heading
    pub version: String,
    /// Value of the `Released` field, if present
    pub release_date: Option<String>,
    /// Value of the `Maintainer` field, if present
    pub maintainer: Option<String>,
    /// Remaining body content in document order, if any
    pub body: Option<String>,
}

/// Resolve the heading text that names this entry
///
/// The node's own heading is tried first. Only for the document root, a
/// non-matching or missing heading falls back to the subtitle (the
/// promoted singleton-entry shape). When neither matches, the node cannot
/// be treated as an entry at all: a structural error carrying the node's
/// provenance, never a silent skip, since the locator only hands over
/// candidate nodes.
fn resolve_entry_title(entry: EntryNode<'_>) -> Result<String> {
    let node = entry.node();

    if let Some(title) = node.title_text() {
        if is_changelog_entry_title(&title) {
            return Ok(title);
        }
    }

    if let EntryNode::Document(document) = entry {
        if let Some(subtitle) = document.subtitle_text() {
            if is_changelog_entry_title(&subtitle) {
                return Ok(subtitle);
            }
        }
    }

    Err(ChangelogError::InvalidFormat(NodeDiagnostic::for_node(
        node,
        "no changelog entry title found",
    )))
}

/// Pull the `Released` and `Maintainer` values from the entry's field list
///
/// Scans the first field list among the entry's direct children. Field
/// names match exactly (case-sensitive); the first occurrence of a name
/// wins; unrecognized names are ignored.
fn field_values(node: &Node) -> (Option<String>, Option<String>) {
    let mut release_date = None;
    let mut maintainer = None;

    let field_list = node
        .children()
        .iter()
        .find(|child| child.kind() == NodeKind::FieldList);
    let Some(field_list) = field_list else {
        return (None, None);
    };

    for field in field_list
        .children()
        .iter()
        .filter(|child| child.kind() == NodeKind::Field)
    {
        let name = field
            .children()
            .iter()
            .find(|child| child.kind() == NodeKind::FieldName)
            .map(Node::node_text);
        let Some(name) = name else {
            continue;
        };
        let value = field
            .children()
            .iter()
            .find(|child| child.kind() == NodeKind::FieldBody)
            .map(Node::node_text)
            .unwrap_or_default();

        match name.as_str() {
            RELEASED_FIELD if release_date.is_none() => release_date = Some(value),
            MAINTAINER_FIELD if maintainer.is_none() => maintainer = Some(value),
            RELEASED_FIELD | MAINTAINER_FIELD => {
                debug!("Ignoring repeated changelog field: {}", name);
            }
            _ => {
                debug!("Ignoring unrecognized changelog field: {}", name);
            }
        }
    }

    (release_date, maintainer)
}

/// Render the entry's remaining content as the body text
///
/// Headings and the consumed field list are skipped; the other blocks are
/// rendered to plain text in document order and joined by blank lines.
fn body_text(node: &Node) -> Option<String> {
    let field_list_index = node
        .children()
        .iter()
        .position(|child| child.kind() == NodeKind::FieldList);

    let blocks: Vec<String> = node
        .children()
        .iter()
        .enumerate()
        .filter(|(index, child)| {
            !matches!(child.kind(), NodeKind::Title | NodeKind::Subtitle)
                && Some(*index) != field_list_index
        })
        .map(|(_, child)| child.plain_text())
        .filter(|block| !block.is_empty())
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

/// Extract the raw fields of one located changelog entry
///
/// # Examples
///
/// ```
/// use changelog_rs::{extract_entry, EntryNode, Node, NodeKind};
///
/// let section = Node::new(NodeKind::Section)
///     .child(Node::new(NodeKind::Title).child(Node::text("Version 1.0")))
///     .child(
///         Node::new(NodeKind::Paragraph).child(Node::text("Lorem ipsum dolor sit amet.")),
///     );
///
/// let raw = extract_entry(EntryNode::Section(&section)).unwrap();
/// assert_eq!(raw.version, "1.0");
/// assert_eq!(raw.body.as_deref(), Some("Lorem ipsum dolor sit amet."));
/// ```
pub fn extract_entry(entry: EntryNode<'_>) -> Result<RawEntry> {
    let title = resolve_entry_title(entry)?;
    let version = version_from_title(&title)?;

    let node = entry.node();
    let (release_date, maintainer) = field_values(node);
    let body = body_text(node);

    Ok(RawEntry {
        version,
        release_date,
        maintainer,
        body,
    })
}
