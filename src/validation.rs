//! Field validation for changelog entries
//!
//! Validation functions for the release date, version and maintainer values
//! of a changelog entry, plus the lenient person-field splitter. The
//! validators are the strict gate applied at entry construction; the
//! splitter is a best-effort convenience for callers that want name/email
//! parts out of whatever a document provides.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{ChangelogError, Result};

/// Sentinel release-date tokens accepted in place of a calendar date
pub const RELEASE_DATE_SENTINELS: [&str; 2] = ["UNKNOWN", "FUTURE"];

/// Sentinel version tokens accepted in place of a version string
pub const VERSION_SENTINELS: [&str; 2] = ["UNKNOWN", "NEXT"];

/// Pattern for a person's contact details: `name <email>`
static PERSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^<]+) <(?P<email>[^>]+)>$").expect("person pattern is valid")
});

/// Name and email parts split out of a person field
///
/// `email` is absent when the source string has no angle-bracket email;
/// `name` is absent only when the source string is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPerson {
    /// Display name, or `None` for empty input
    pub name: Option<String>,
    /// Email address, or `None` when the input has no `<email>` part
    pub email: Option<String>,
}

/// Validates a release date value
///
/// The sentinel tokens `UNKNOWN` and `FUTURE` are accepted unconditionally.
/// Anything else must be an exact `YYYY-MM-DD` calendar date: four-digit
/// year, zero-padded month and day, and a date that exists on the calendar.
///
/// # Examples
///
/// ```
/// use changelog_rs::validate_release_date;
///
/// assert!(validate_release_date("UNKNOWN").is_ok());
/// assert!(validate_release_date("FUTURE").is_ok());
/// assert!(validate_release_date("2001-01-01").is_ok());
/// assert!(validate_release_date("b0gUs").is_err());
/// assert!(validate_release_date("2001-1-1").is_err());   // Not zero-padded
/// assert!(validate_release_date("2001-02-30").is_err()); // No such day
/// ```
pub fn validate_release_date(value: &str) -> Result<()> {
    if RELEASE_DATE_SENTINELS.contains(&value) {
        return Ok(());
    }

    let invalid = || ChangelogError::DateInvalid(value.to_string());

    // Exact YYYY-MM-DD shape, no lenient parsing
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    // Calendar validity (month range, day-of-month, leap years)
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;

    Ok(())
}

/// Validates a version value
///
/// The sentinel tokens `UNKNOWN` and `NEXT` are accepted unconditionally.
/// Anything else must match `MAJOR[.MINOR[.PATCH]][-PRERELEASE]`:
/// one to three dot-separated decimal components without leading zeros,
/// optionally followed by a `-` separator and a non-empty prerelease of
/// letters, digits, dots and hyphens. Suffixes glued directly onto a
/// numeric component (`1.23.456a5`) are rejected.
///
/// # Examples
///
/// ```
/// use changelog_rs::validate_version;
///
/// assert!(validate_version("UNKNOWN").is_ok());
/// assert!(validate_version("NEXT").is_ok());
/// assert!(validate_version("0.0").is_ok());
/// assert!(validate_version("1.2.3").is_ok());
/// assert!(validate_version("1.23.456-alpha5").is_ok());
/// assert!(validate_version("1.23.456a5").is_err()); // Glued suffix
/// assert!(validate_version("-1.0").is_err());       // Negative
/// assert!(validate_version("b0gUs").is_err());      // Not numeric
/// ```
pub fn validate_version(value: &str) -> Result<()> {
    if VERSION_SENTINELS.contains(&value) {
        return Ok(());
    }

    let invalid = || ChangelogError::VersionInvalid(value.to_string());

    let (numeric, prerelease) = match value.split_once('-') {
        Some((numeric, prerelease)) => (numeric, Some(prerelease)),
        None => (value, None),
    };
    if numeric.is_empty() {
        return Err(invalid());
    }

    let components: Vec<&str> = numeric.split('.').collect();
    if components.len() > 3 {
        return Err(invalid());
    }
    for component in &components {
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if component.len() > 1 && component.starts_with('0') {
            return Err(invalid());
        }
    }

    if let Some(prerelease) = prerelease {
        let prerelease_ok = !prerelease.is_empty()
            && prerelease
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !prerelease_ok {
            return Err(invalid());
        }
    }

    Ok(())
}

/// Validates a maintainer value
///
/// An absent value is accepted unconditionally. A present value must match
/// `name <email>` exactly, where the name contains no `<` and the email no
/// `>`.
///
/// # Examples
///
/// ```
/// use changelog_rs::validate_maintainer;
///
/// assert!(validate_maintainer(None).is_ok());
/// assert!(validate_maintainer(Some("Foo Bar <foo.bar@example.org>")).is_ok());
/// assert!(validate_maintainer(Some("b0gUs")).is_err());
/// ```
pub fn validate_maintainer(value: Option<&str>) -> Result<()> {
    match value {
        None => Ok(()),
        Some(text) if PERSON_PATTERN.is_match(text) => Ok(()),
        Some(text) => Err(ChangelogError::PersonDetailsInvalid(text.to_string())),
    }
}

/// Split a person field into name and email parts
///
/// Lenient by design, unlike [`validate_maintainer`]: empty input yields
/// both parts absent, a `name <email>` match yields both parts, and any
/// other non-empty text becomes the name with no email. Never errors.
///
/// # Examples
///
/// ```
/// use changelog_rs::parse_person_field;
///
/// let person = parse_person_field("Foo Bar <foo.bar@example.com>");
/// assert_eq!(person.name.as_deref(), Some("Foo Bar"));
/// assert_eq!(person.email.as_deref(), Some("foo.bar@example.com"));
///
/// let person = parse_person_field("Foo Bar");
/// assert_eq!(person.name.as_deref(), Some("Foo Bar"));
/// assert_eq!(person.email, None);
///
/// let person = parse_person_field("");
/// assert_eq!(person.name, None);
/// assert_eq!(person.email, None);
/// ```
pub fn parse_person_field(text: &str) -> ParsedPerson {
    if text.is_empty() {
        return ParsedPerson {
            name: None,
            email: None,
        };
    }

    match PERSON_PATTERN.captures(text) {
        Some(captures) => ParsedPerson {
            name: Some(captures["name"].to_string()),
            email: Some(captures["email"].to_string()),
        },
        None => ParsedPerson {
            name: Some(text.to_string()),
            email: None,
        },
    }
}
