//! Structured document tree model
//!
//! This module contains the node tree consumed by the changelog extractor.
//! The tree is produced by an external markup parser (see
//! [`crate::pipeline::DocumentParser`]); the extractor only queries kind,
//! children and textual content. Node kinds mirror the shape emitted by
//! common document renderers: a `Document` root whose heading may have been
//! promoted into `Title`/`Subtitle` children, with `Section`, `Paragraph`,
//! field-list and list nodes below.

/// Kind of a structured document node
///
/// The set is open in the sense that unknown markup constructs map onto
/// `Container`; the extractor only gives meaning to the kinds named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Document or section heading text
    Title,
    /// Document subtitle (a promoted lone sub-heading)
    Subtitle,
    /// Titled section
    Section,
    /// Paragraph of running text
    Paragraph,
    /// List of named fields (`:Released:`, `:Maintainer:`, ...)
    FieldList,
    /// One named field inside a field list
    Field,
    /// Name part of a field
    FieldName,
    /// Body part of a field
    FieldBody,
    /// Bulleted list
    BulletList,
    /// One item of a bulleted list
    ListItem,
    /// Leaf text
    Text,
    /// Any other grouping construct
    Container,
}

/// A node of the structured document tree
///
/// Nodes carry an ordered child sequence and, for diagnostics only, an
/// optional `source`/`line` provenance pair. Leaf text lives in `Text`
/// nodes.
///
/// # Examples
///
/// ```
/// use changelog_rs::{Node, NodeKind};
///
/// let section = Node::new(NodeKind::Section)
///     .child(Node::new(NodeKind::Title).child(Node::text("Version 1.0")))
///     .child(Node::new(NodeKind::Paragraph).child(Node::text("Fixed a bug.")));
///
/// assert_eq!(section.title_text().as_deref(), Some("Version 1.0"));
/// assert_eq!(section.node_text(), "Version 1.0Fixed a bug.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<Node>,
    pub(crate) source: Option<String>,
    pub(crate) line: Option<usize>,
}

impl Node {
    /// Create an empty node of the given kind
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            children: Vec::new(),
            source: None,
            line: None,
        }
    }

    /// Create a leaf text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(text.into()),
            children: Vec::new(),
            source: None,
            line: None,
        }
    }

    /// Append a child node, consuming and returning `self`
    ///
    /// Intended for tree construction by parsers and tests.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append several children in order
    #[must_use]
    pub fn children_from(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Attach `source`/`line` provenance for diagnostics
    #[must_use]
    pub fn at(mut self, source: impl Into<String>, line: usize) -> Self {
        self.source = Some(source.into());
        self.line = Some(line);
        self
    }

    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Ordered child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Source path or identifier, if the parser recorded one
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Line number in the source, if the parser recorded one
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Concatenated text of this node and all descendants
    ///
    /// This is the raw textual content with no block separation; use it for
    /// headings and field values, not for entry bodies.
    pub fn node_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Text of this node's heading: the first `Title` child, if any
    ///
    /// Returns `None` for nodes without a heading (paragraphs, field lists,
    /// untitled containers).
    pub fn title_text(&self) -> Option<String> {
        self.children
            .iter()
            .find(|child| child.kind == NodeKind::Title)
            .map(Node::node_text)
    }

    /// Text of this node's `Subtitle` child, if any
    ///
    /// Only document roots whose lone sub-heading was promoted carry one.
    pub fn subtitle_text(&self) -> Option<String> {
        self.children
            .iter()
            .find(|child| child.kind == NodeKind::Subtitle)
            .map(Node::node_text)
    }

    /// Render this node's content as plain text
    ///
    /// Block constructs (paragraphs, lists, sections) are separated by blank
    /// lines; bullet items are prefixed with `* `. Used for entry bodies.
    pub fn plain_text(&self) -> String {
        match self.kind {
            NodeKind::Text => self.text.clone().unwrap_or_default(),
            NodeKind::Paragraph
            | NodeKind::Title
            | NodeKind::Subtitle
            | NodeKind::FieldName
            | NodeKind::FieldBody => self.node_text(),
            NodeKind::BulletList => {
                let items: Vec<String> = self
                    .children
                    .iter()
                    .map(|item| format!("* {}", item.plain_text()))
                    .collect();
                items.join("\n")
            }
            NodeKind::ListItem => {
                let blocks: Vec<String> = self
                    .children
                    .iter()
                    .map(Node::plain_text)
                    .filter(|block| !block.is_empty())
                    .collect();
                blocks.join("\n")
            }
            NodeKind::Field => {
                let name = self
                    .children
                    .iter()
                    .find(|child| child.kind == NodeKind::FieldName)
                    .map(Node::node_text)
                    .unwrap_or_default();
                let body = self
                    .children
                    .iter()
                    .find(|child| child.kind == NodeKind::FieldBody)
                    .map(Node::node_text)
                    .unwrap_or_default();
                format!("{name}: {body}")
            }
            NodeKind::FieldList => {
                let fields: Vec<String> =
                    self.children.iter().map(Node::plain_text).collect();
                fields.join("\n")
            }
            NodeKind::Document | NodeKind::Section | NodeKind::Container => {
                let blocks: Vec<String> = self
                    .children
                    .iter()
                    .map(Node::plain_text)
                    .filter(|block| !block.is_empty())
                    .collect();
                blocks.join("\n\n")
            }
        }
    }
}
