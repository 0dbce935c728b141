//! # Ingestion Errors
//!
//! Fatal conditions only. Anything that leaves the catalog's invariants
//! intact is reported through [`crate::diagnostic::DiagnosticSink`]
//! instead, and ingestion carries on.

use std::path::PathBuf;

use psm_core::{CatalogError, Family};
use thiserror::Error;

/// Error that aborts ingestion. No partial catalog is returned.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The RTM spreadsheet does not exist at the configured path.
    #[error(
        "can't find {}\n\
         You must set the 'psm_reqs' parameter in 'psm-dashboard-config.json' \
         to point to the requirements/RTM.xlsx spreadsheet that lives in the PSM tree.",
        path.display()
    )]
    SourceNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The spreadsheet could not be opened or a sheet could not be read.
    #[error("workbook error for '{}': {reason}", path.display())]
    Workbook {
        /// Path to the workbook.
        path: PathBuf,
        /// Reason reported by the spreadsheet reader.
        reason: String,
    },

    /// A CSV export could not be parsed.
    #[error("csv error for '{}': {source}", path.display())]
    Csv {
        /// Path to the CSV file.
        path: PathBuf,
        /// Underlying parser error.
        source: csv::Error,
    },

    /// Two section banners resolved to the same family.
    #[error("encountered family '{family}' more than once")]
    DuplicateFamily {
        /// The family whose section appeared twice.
        family: Family,
    },

    /// Two data rows carried the same requirement ID.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// IO error reading the source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
