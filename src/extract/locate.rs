//! Locating changelog entry nodes in a document tree
//!
//! Renderers that build document trees treat a lone top-level heading
//! specially: it is lifted up to be the document's own title, and a further
//! lone sub-heading becomes the subtitle, so the wrapping sections vanish
//! from the top level. [`promote_document_titles`] reproduces that rule for
//! parsers that do not perform it, and [`changelog_entry_nodes`] locates
//! entries on the promoted tree: the root itself when its title or subtitle
//! names an entry, then every top-level section whose heading does.

use tracing::debug;

use crate::node::{Node, NodeKind};
use crate::title::is_changelog_entry_title;
use crate::{ChangelogError, Result};

/// One located changelog entry: either the document root standing in for a
/// promoted singleton entry, or an ordinary top-level section
#[derive(Debug, Clone, Copy)]
pub enum EntryNode<'a> {
    /// The document root is itself the entry (its heading was promoted)
    Document(&'a Node),
    /// A top-level section whose heading names the entry
    Section(&'a Node),
}

impl<'a> EntryNode<'a> {
    /// The underlying tree node
    pub fn node(&self) -> &'a Node {
        match self {
            Self::Document(node) | Self::Section(node) => node,
        }
    }
}

fn require_document(node: &Node) -> Result<()> {
    if node.kind() != NodeKind::Document {
        return Err(ChangelogError::NotADocument { kind: node.kind() });
    }
    Ok(())
}

/// Text of the document's title, if it has one
///
/// Errors with `NotADocument` when `document` is not a document root.
pub fn document_title_text(document: &Node) -> Result<Option<String>> {
    require_document(document)?;
    Ok(document.title_text())
}

/// Text of the document's subtitle, if it has one
///
/// Errors with `NotADocument` when `document` is not a document root.
pub fn document_subtitle_text(document: &Node) -> Result<Option<String>> {
    require_document(document)?;
    Ok(document.subtitle_text())
}

/// The document's top-level section nodes, in document order
///
/// Errors with `NotADocument` when `document` is not a document root.
pub fn top_level_sections(document: &Node) -> Result<Vec<&Node>> {
    require_document(document)?;
    Ok(document
        .children()
        .iter()
        .filter(|child| child.kind() == NodeKind::Section)
        .collect())
}

/// Detach a section's heading from its remaining children
fn split_section_heading(mut section: Node) -> (Option<Node>, Vec<Node>) {
    let position = section
        .children
        .iter()
        .position(|child| child.kind == NodeKind::Title);
    match position {
        Some(index) => {
            let title = section.children.remove(index);
            (Some(title), section.children)
        }
        None => (None, section.children),
    }
}

/// Apply the lone-heading promotion rule to a document tree
///
/// Idempotent: trees produced by a renderer that already promotes pass
/// through unchanged. Promotion only triggers for a section that is the
/// *only* child at its level; any sibling content (a preamble paragraph,
/// another section) suppresses it.
///
/// 1. A titled document has no `Title` child and exactly one child, a
///    section: the section's heading becomes the document `Title` and its
///    content splices to the top level.
/// 2. A document with a `Title`, no `Subtitle`, and exactly one other
///    child, a section: that section's heading becomes the `Subtitle` and
///    its content splices likewise.
pub fn promote_document_titles(document: &mut Node) -> Result<()> {
    require_document(document)?;

    // Lone top-level section: heading becomes the document title.
    let has_title = document
        .children
        .iter()
        .any(|child| child.kind == NodeKind::Title);
    if !has_title
        && document.children.len() == 1
        && document.children[0].kind == NodeKind::Section
        && document.children[0].title_text().is_some()
    {
        let section = document.children.remove(0);
        let (title, rest) = split_section_heading(section);
        if let Some(title) = title {
            debug!("Promoting lone section heading to document title");
            document.children.push(title);
        }
        document.children.extend(rest);
    }

    // Lone section under a titled document: heading becomes the subtitle.
    let has_title = document
        .children
        .iter()
        .any(|child| child.kind == NodeKind::Title);
    let has_subtitle = document
        .children
        .iter()
        .any(|child| child.kind == NodeKind::Subtitle);
    if has_title && !has_subtitle {
        let non_title: Vec<usize> = document
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.kind != NodeKind::Title)
            .map(|(index, _)| index)
            .collect();
        if non_title.len() == 1
            && document.children[non_title[0]].kind == NodeKind::Section
            && document.children[non_title[0]].title_text().is_some()
        {
            let section = document.children.remove(non_title[0]);
            let (title, rest) = split_section_heading(section);
            if let Some(mut subtitle) = title {
                debug!("Promoting lone sub-heading to document subtitle");
                subtitle.kind = NodeKind::Subtitle;
                document.children.push(subtitle);
            }
            document.children.extend(rest);
        }
    }

    Ok(())
}

/// Locate the changelog entry nodes of a promoted document tree
///
/// The document root itself is the first entry when its title *or* subtitle
/// matches the entry-title grammar (the promoted singleton-entry case).
/// Every top-level section whose heading matches follows, in document
/// order. Sections with non-matching headings are not entries and not an
/// error; they are silently excluded.
///
/// Errors with `NotADocument` when `document` is not a document root.
pub fn changelog_entry_nodes(document: &Node) -> Result<Vec<EntryNode<'_>>> {
    require_document(document)?;

    let mut entries = Vec::new();

    let title_matches = document
        .title_text()
        .is_some_and(|text| is_changelog_entry_title(&text));
    let subtitle_matches = document
        .subtitle_text()
        .is_some_and(|text| is_changelog_entry_title(&text));
    if title_matches || subtitle_matches {
        entries.push(EntryNode::Document(document));
    }

    for section in document
        .children()
        .iter()
        .filter(|child| child.kind() == NodeKind::Section)
    {
        match section.title_text() {
            Some(title) if is_changelog_entry_title(&title) => {
                entries.push(EntryNode::Section(section));
            }
            Some(title) => {
                debug!("Excluding non-entry section: {}", title);
            }
            None => {
                debug!("Excluding untitled section");
            }
        }
    }

    Ok(entries)
}
