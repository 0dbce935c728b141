//! # Export Subcommand
//!
//! Writes the catalog as a JSON object keyed by requirement ID, the shape
//! the dashboard consumes.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use psm_core::Catalog;

/// Arguments for the export subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the export subcommand.
pub fn run_export(args: &ExportArgs, catalog: &Catalog, stdout: &mut impl Write) -> Result<u8> {
    let json = render(catalog, args.pretty)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write export: {}", path.display()))?;
            tracing::info!(path = %path.display(), requirements = catalog.len(), "exported catalog");
        }
        None => stdout.write_all(&json)?,
    }
    Ok(0)
}

fn render(catalog: &Catalog, pretty: bool) -> Result<Vec<u8>> {
    let mut json = if pretty {
        serde_json::to_vec_pretty(catalog)?
    } else {
        serde_json::to_vec(catalog)?
    };
    json.push(b'\n');
    Ok(json)
}
