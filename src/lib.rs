#![doc = include_str!("../README.md")]

mod error;
/// Changelog entry location and field extraction
pub mod extract;
/// Changelog entry data model
pub mod model;
/// Structured document tree consumed by the extractor
pub mod node;
/// Extraction pipeline and the markup-parser seam
pub mod pipeline;
/// Changelog entry title grammar
pub mod title;
/// Field validation for changelog entries
pub mod validation;

pub use error::{ChangelogError, NodeDiagnostic, Result};
pub use extract::{
    changelog_entry_nodes, document_subtitle_text, document_title_text, extract_entry,
    promote_document_titles, top_level_sections, EntryNode, RawEntry, MAINTAINER_FIELD,
    RELEASED_FIELD,
};
pub use model::{ChangeLogEntry, ChangeLogEntryBuilder};
pub use node::{Node, NodeKind};
pub use pipeline::{
    changelog_from_path, changelog_from_text, entries_from_document, DocumentParser,
};
pub use title::{is_changelog_entry_title, version_from_title};
pub use validation::{
    parse_person_field, validate_maintainer, validate_release_date, validate_version,
    ParsedPerson, RELEASE_DATE_SENTINELS, VERSION_SENTINELS,
};
