//! # Requirement Identifiers
//!
//! `RequirementId` is the validated form of the first RTM column,
//! `psm-<FAMILY>-<NUMERIC-PATH>` (e.g. `psm-FR-1.2.3`). Callers use it to
//! pull the embedded family code out of an ID and to decide whether a cell
//! is an ID at all.
//!
//! The pattern is anchored at the start of the cell only. Cells such as
//! `psm-FR-4.1 (deleted)` are accepted and keep their full text; the
//! numeric path is the longest `[0-9.]` run after the family code.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static REQ_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^psm-([A-Z][A-Z])-([0-9.]+)").expect("requirement id regex is valid")
});

/// Byte offset of the family code within a valid ID (`psm-` is 4 bytes).
const FAMILY_START: usize = 4;
/// Byte offset of the numeric path within a valid ID (`psm-XX-` is 7 bytes).
const PATH_START: usize = 7;

/// A requirement identifier validated against the RTM ID pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequirementId {
    raw: String,
    path_end: usize,
}

impl RequirementId {
    /// Parse an identifier, keeping the raw text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRequirementId`] if the string does
    /// not start with `psm-<two uppercase letters>-<digits and dots>`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let path_end = match REQ_ID_RE.captures(&raw).and_then(|caps| caps.get(2)) {
            Some(path) => path.end(),
            None => return Err(ValidationError::InvalidRequirementId(raw)),
        };
        Ok(Self { raw, path_end })
    }

    /// Whether `raw` would parse, without allocating.
    pub fn matches(raw: &str) -> bool {
        REQ_ID_RE.is_match(raw)
    }

    /// The full identifier text as it appeared in the source.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The embedded two-letter family code (`"FR"` for `psm-FR-1.2`).
    ///
    /// This is not necessarily a known [`crate::Family`]; the pattern
    /// admits any two uppercase letters.
    pub fn family_code(&self) -> &str {
        &self.raw[FAMILY_START..FAMILY_START + 2]
    }

    /// The dotted numeric path (`"1.2"` for `psm-FR-1.2`).
    pub fn numeric_path(&self) -> &str {
        &self.raw[PATH_START..self.path_end]
    }
}

impl TryFrom<String> for RequirementId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RequirementId> for String {
    fn from(id: RequirementId) -> Self {
        id.raw
    }
}

impl std::str::FromStr for RequirementId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
