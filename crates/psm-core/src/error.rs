//! # Error Types
//!
//! Errors raised by the core types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors carry the rejected input verbatim so the operator
//!   can find the offending spreadsheet cell.
//! - Catalog errors are structural: they mean the catalog's key invariant
//!   would have been broken, and ingestion must stop.

use thiserror::Error;

/// A value failed validation at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string does not start with `psm-<FAMILY>-<NUMERIC-PATH>`.
    #[error("invalid requirement id: {0:?} (expected psm-XX-N.N...)")]
    InvalidRequirementId(String),

    /// The string is not one of the two-letter family codes.
    #[error("unknown requirement family: {0:?}")]
    UnknownFamily(String),
}

/// The catalog rejected an insertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A requirement with the same ID is already in the catalog.
    #[error("encountered requirement '{req_id}' more than once")]
    DuplicateRequirement {
        /// The ID that was seen twice.
        req_id: String,
    },

    /// A serialized catalog entry is keyed by something other than its
    /// own `req_id`.
    #[error("catalog key '{key}' does not match requirement '{req_id}'")]
    KeyMismatch { key: String, req_id: String },
}
