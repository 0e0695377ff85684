//! Changelog entry data model
//!
//! [`ChangeLogEntry`] is the validated output record of the extraction
//! pipeline. Construction is the only way to obtain one and runs every
//! field validator; no partially-valid entry is ever observable, and the
//! fields are immutable afterwards.

use crate::validation::{validate_maintainer, validate_release_date, validate_version};
use crate::Result;

/// An individual entry from a Change Log document
///
/// Field order (`release_date`, `version`, `maintainer`, `body`) is the
/// canonical order for any serialized form of the record.
///
/// # Examples
///
/// ```
/// use changelog_rs::ChangeLogEntry;
///
/// let entry = ChangeLogEntry::builder()
///     .release_date("2009-01-01")
///     .version("1.0")
///     .maintainer("Foo Bar <foo.bar@example.org>")
///     .body("* Lorem ipsum dolor sit amet.")
///     .build()
///     .unwrap();
///
/// assert_eq!(entry.release_date(), "2009-01-01");
/// assert_eq!(entry.version(), "1.0");
///
/// // Invalid fields prevent construction entirely
/// assert!(ChangeLogEntry::builder().version("b0gUs").build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChangeLogEntry {
    release_date: String,
    version: String,
    maintainer: Option<String>,
    body: Option<String>,
}

impl ChangeLogEntry {
    /// Release date used when a document does not state one
    pub const DEFAULT_RELEASE_DATE: &'static str = "UNKNOWN";

    /// Version used when a document does not state one
    pub const DEFAULT_VERSION: &'static str = "UNKNOWN";

    /// Canonical field order for serialization
    pub const FIELD_NAMES: [&'static str; 4] =
        ["release_date", "version", "maintainer", "body"];

    /// Create a validated entry
    ///
    /// All four fields are validated before the record exists; the first
    /// failing validator's error is returned and no record is produced.
    pub fn new(
        release_date: impl Into<String>,
        version: impl Into<String>,
        maintainer: Option<String>,
        body: Option<String>,
    ) -> Result<Self> {
        let release_date = release_date.into();
        validate_release_date(&release_date)?;

        let version = version.into();
        validate_version(&version)?;

        validate_maintainer(maintainer.as_deref())?;

        Ok(Self {
            release_date,
            version,
            maintainer,
            body,
        })
    }

    /// Start building an entry with default values
    pub fn builder() -> ChangeLogEntryBuilder {
        ChangeLogEntryBuilder::new()
    }

    /// Release date: `UNKNOWN`, `FUTURE` or a `YYYY-MM-DD` date
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    /// Version: `UNKNOWN`, `NEXT` or a semantic-version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Maintainer in `name <email>` form, if stated
    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    /// Free-text body of the entry, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The four fields in canonical order, paired with their names
    ///
    /// `release_date` and `version` are always present; `maintainer` and
    /// `body` are `None` when absent.
    pub fn as_ordered_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("release_date", Some(self.release_date.as_str())),
            ("version", Some(self.version.as_str())),
            ("maintainer", self.maintainer.as_deref()),
            ("body", self.body.as_deref()),
        ]
    }
}

impl Default for ChangeLogEntry {
    fn default() -> Self {
        // Defaults are valid by construction
        Self {
            release_date: Self::DEFAULT_RELEASE_DATE.to_string(),
            version: Self::DEFAULT_VERSION.to_string(),
            maintainer: None,
            body: None,
        }
    }
}

/// Builder for [`ChangeLogEntry`]
///
/// Unset fields fall back to the entry defaults; `build` runs the field
/// validators and fails on the first invalid value.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ChangeLogEntryBuilder {
    release_date: Option<String>,
    version: Option<String>,
    maintainer: Option<String>,
    body: Option<String>,
}

impl ChangeLogEntryBuilder {
    /// Create a builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the release date
    pub fn release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    /// Set the version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the maintainer
    pub fn maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.maintainer = Some(maintainer.into());
        self
    }

    /// Set the body text
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the entry, validating every field
    pub fn build(self) -> Result<ChangeLogEntry> {
        ChangeLogEntry::new(
            self.release_date
                .unwrap_or_else(|| ChangeLogEntry::DEFAULT_RELEASE_DATE.to_string()),
            self.version
                .unwrap_or_else(|| ChangeLogEntry::DEFAULT_VERSION.to_string()),
            self.maintainer,
            self.body,
        )
    }
}
