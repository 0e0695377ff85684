//! Changelog entry location and field extraction
//!
//! Works on the structured document tree produced by an injected markup
//! parser (see [`crate::pipeline::DocumentParser`]).
//!
//! This module is organized into:
//! - `locate`: document-level queries, the lone-heading promotion rule,
//!   and locating the entry nodes
//! - `fields`: per-entry title resolution, field-list values and body text

mod fields;
mod locate;

pub use self::fields::{extract_entry, RawEntry, MAINTAINER_FIELD, RELEASED_FIELD};
pub use self::locate::{
    changelog_entry_nodes, document_subtitle_text, document_title_text,
    promote_document_titles, top_level_sections, EntryNode,
};
