//! # psm-rtm — Requirements Traceability Matrix Ingestion
//!
//! Turns the rows of an RTM spreadsheet into a validated
//! [`psm_core::Catalog`]. The export interleaves section banners, category
//! sub-headers, requirement rows, repeated column headers and stray rows;
//! this crate sorts them out in a single pass:
//!
//! - **Row sources** (`source.rs`): spreadsheet or CSV file to rows of text.
//! - **Row classifier** (`classify.rs`): decides what each row is.
//! - **Family resolver** (`resolver.rs`): section banner text to family.
//! - **Record builder** (`builder.rs`): data row to `Requirement`, with the
//!   ID/family consistency check.
//! - **Catalog assembler** (`assembler.rs`): owns the parse state and drives
//!   the other three.
//!
//! ## Error Policy
//!
//! Duplicate family sections and duplicate requirement IDs are fatal
//! ([`IngestError`]). Every other anomaly is a [`Diagnostic`] handed to the
//! caller's [`DiagnosticSink`], and ingestion continues.
//!
//! ## Crate Policy
//!
//! - Depends only on `psm-core` internally.
//! - No global state: each ingestion owns its `ParseState`.

pub mod assembler;
pub mod builder;
pub mod classify;
pub mod diagnostic;
pub mod error;
pub mod resolver;
pub mod source;
pub mod state;

pub use assembler::{ingest, CatalogAssembler};
pub use builder::build_requirement;
pub use classify::{classify, RowKind, SECTION_MARKER};
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use error::IngestError;
pub use resolver::{resolve_family, FamilyMatch};
pub use source::{load_catalog, read_csv, read_csv_from, read_rows, read_workbook};
pub use state::ParseState;
