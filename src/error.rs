//! Changelog parsing error types

use thiserror::Error;

use crate::node::{Node, NodeKind};

/// Changelog document and field format errors
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// IO error while reading the document source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Release date value does not match the date grammar
    #[error("not a valid release date: {0:?}")]
    DateInvalid(String),

    /// Version value does not match the version grammar
    #[error("not a valid version: {0:?}")]
    VersionInvalid(String),

    /// Maintainer value does not match the person grammar
    #[error("not a valid person specification: {0:?}")]
    PersonDetailsInvalid(String),

    /// Heading text that should name a changelog entry does not match
    /// the entry-title grammar
    #[error("not a changelog entry title: {0:?}")]
    TitleFormatInvalid(String),

    /// The document (or a node within it) does not have the shape of a
    /// changelog entry
    #[error("{0}")]
    InvalidFormat(NodeDiagnostic),

    /// A document-level query was given a node that is not a document root
    #[error("expected a document node, got {kind:?}")]
    NotADocument {
        /// Kind of the offending node
        kind: NodeKind,
    },
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Provenance-carrying diagnostic for structural errors
///
/// Renders as `"{message}: {source} line {line}"`, substituting
/// `"(no message)"`, `"(source unknown)"` and `"(unknown)"` for absent
/// parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDiagnostic {
    /// Human-readable description of the structural problem
    pub message: Option<String>,
    /// Source path or identifier of the offending node, if known
    pub source: Option<String>,
    /// Line number of the offending node, if known
    pub line: Option<usize>,
}

impl NodeDiagnostic {
    /// Build a diagnostic from a node's provenance
    pub fn for_node(node: &Node, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            source: node.source().map(|s| s.to_string()),
            line: node.line(),
        }
    }
}

impl std::fmt::Display for NodeDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}")?,
            None => write!(f, "(no message)")?,
        }
        match &self.source {
            Some(source) => write!(f, ": {source}")?,
            None => write!(f, ": (source unknown)")?,
        }
        match self.line {
            Some(line) => write!(f, " line {line}"),
            None => write!(f, " line (unknown)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn diagnostic(
        message: Option<&str>,
        source: Option<&str>,
        line: Option<usize>,
    ) -> NodeDiagnostic {
        NodeDiagnostic {
            message: message.map(|s| s.to_string()),
            source: source.map(|s| s.to_string()),
            line,
        }
    }

    #[test]
    fn test_diagnostic_full() {
        let text = diagnostic(
            Some("Lorem ipsum, dolor sit amet."),
            Some("consecteur"),
            Some(17),
        )
        .to_string();
        assert_eq!(text, "Lorem ipsum, dolor sit amet.: consecteur line 17");
    }

    #[test]
    fn test_diagnostic_no_message() {
        let text = diagnostic(None, Some("consecteur"), Some(17)).to_string();
        assert_eq!(text, "(no message): consecteur line 17");
    }

    #[test]
    fn test_diagnostic_source_only() {
        let text = diagnostic(Some("bad entry"), Some("consecteur"), None).to_string();
        assert_eq!(text, "bad entry: consecteur line (unknown)");
    }

    #[test]
    fn test_diagnostic_line_only() {
        let text = diagnostic(Some("bad entry"), None, Some(17)).to_string();
        assert_eq!(text, "bad entry: (source unknown) line 17");
    }

    #[test]
    fn test_error_display_carries_offending_value() {
        let err = ChangelogError::VersionInvalid("b0gUs".to_string());
        assert!(err.to_string().contains("b0gUs"));

        let err = ChangelogError::DateInvalid("2009-13-01".to_string());
        assert!(err.to_string().contains("2009-13-01"));
    }

    #[test]
    fn test_not_a_document_display() {
        let err = ChangelogError::NotADocument {
            kind: NodeKind::Container,
        };
        assert!(err.to_string().contains("Container"));
    }
}
