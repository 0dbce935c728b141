//! # psm-core — Foundational Types for PSM Requirements
//!
//! Defines the typed vocabulary of the Requirements Traceability Matrix
//! (RTM). Every other crate in the workspace depends on `psm-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One `Family` enum.** The eight two-letter requirement families are a
//!    closed set with exhaustive `match` everywhere.
//!
//! 2. **Validated identifiers.** `RequirementId` can only be built from text
//!    matching `psm-<FAMILY>-<NUMERIC-PATH>`, and exposes the embedded
//!    family code.
//!
//! 3. **Opaque cells.** `Requirement` keeps every RTM column as the text the
//!    spreadsheet held. Nothing but the ID is interpreted.
//!
//! 4. **Unique keys.** `Catalog::insert` refuses a second requirement with
//!    the same ID instead of overwriting it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `psm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod family;
pub mod identity;
pub mod requirement;

// Re-export primary types for ergonomic imports.
pub use catalog::Catalog;
pub use error::{CatalogError, ValidationError};
pub use family::{Family, FAMILY_COUNT};
pub use identity::RequirementId;
pub use requirement::{Requirement, COLUMN_TITLES, FIELD_COUNT};
