//! Changelog entry title grammar
//!
//! An entry heading is the case-insensitive literal word `version` followed
//! by whitespace and a single version token, e.g. `Version 1.0` or
//! `version 0.8`. The token itself is validated later, at entry
//! construction; this grammar is purely lexical so the locator can tell
//! "not a changelog entry" apart from "entry with a malformed version".

use crate::{ChangelogError, Result};

/// Split an entry title into its version token, if the title matches
fn entry_title_token(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let (keyword, rest) = trimmed.split_once(char::is_whitespace)?;
    if !keyword.eq_ignore_ascii_case("version") {
        return None;
    }
    let token = rest.trim();
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return None;
    }
    Some(token)
}

/// Check whether a heading text names a changelog entry
///
/// # Examples
///
/// ```
/// use changelog_rs::is_changelog_entry_title;
///
/// assert!(is_changelog_entry_title("Version 1.0"));
/// assert!(is_changelog_entry_title("version 0.8"));
/// assert!(!is_changelog_entry_title("Felis gravida lacinia"));
/// assert!(!is_changelog_entry_title("Version"));
/// ```
pub fn is_changelog_entry_title(text: &str) -> bool {
    entry_title_token(text).is_some()
}

/// Extract the version token from an entry title
///
/// Returns `TitleFormatInvalid` with the offending text when the title does
/// not match the entry grammar.
///
/// # Examples
///
/// ```
/// use changelog_rs::version_from_title;
///
/// assert_eq!(version_from_title("Version 1.0").unwrap(), "1.0");
/// assert_eq!(version_from_title("Version 0.7.2").unwrap(), "0.7.2");
/// assert!(version_from_title("Tempus lorem aliquet").is_err());
/// ```
pub fn version_from_title(text: &str) -> Result<String> {
    entry_title_token(text)
        .map(|token| token.to_string())
        .ok_or_else(|| ChangelogError::TitleFormatInvalid(text.to_string()))
}
