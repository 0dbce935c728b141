//! # psm-cli — PSM Requirements Command-Line Interface
//!
//! Reads the RTM spreadsheet named by `psm-dashboard-config.json` (or given
//! with `--reqs`) and reports on the resulting catalog.
//!
//! ## Subcommands
//!
//! - `summary`: requirement counts per family
//! - `list`: one line per requirement, optionally for one family
//! - `show`: full record for given IDs
//! - `export`: the catalog as JSON for the dashboard
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed
//!   arguments and an ingested catalog.
//! - Ingestion logic belongs to `psm-rtm`, not here.

pub mod config;
pub mod export;
pub mod inspect;

use std::path::Path;

use anyhow::{Context, Result};
use psm_core::Catalog;
use psm_rtm::DiagnosticSink;

/// Ingest the RTM at `path`, sending diagnostics to `sink`.
pub fn load(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Catalog> {
    psm_rtm::load_catalog(path, sink)
        .with_context(|| format!("failed to load requirements from {}", path.display()))
}
