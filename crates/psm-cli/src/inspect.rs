//! # Inspection Subcommands
//!
//! `summary`, `list` and `show`: read-only views over an ingested catalog.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use psm_core::{Catalog, Family};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list requirements of this family (two-letter code, e.g. FR).
    #[arg(long)]
    pub family: Option<Family>,
}

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Requirement IDs to show (e.g. psm-FR-1.1).
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Per-family requirement counts.
pub fn run_summary(catalog: &Catalog, diagnostics: usize, out: &mut impl Write) -> Result<u8> {
    let counts = catalog.family_counts();
    writeln!(out, "Requirements by family:")?;
    writeln!(out)?;
    for family in Family::all() {
        let count = counts.get(family).copied().unwrap_or(0);
        writeln!(out, "  {:<4}{:<30}{count:>6}", family.code(), family.name())?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} requirements", catalog.len())?;
    writeln!(out, "Diagnostics: {diagnostics}")?;
    Ok(0)
}

/// One line per requirement, sorted by ID.
pub fn run_list(args: &ListArgs, catalog: &Catalog, out: &mut impl Write) -> Result<u8> {
    for (id, req) in catalog.iter() {
        if args.family.is_some_and(|family| req.family != family) {
            continue;
        }
        writeln!(out, "{id}  {}  {}", req.category, req.description)?;
    }
    Ok(0)
}

/// Full record for each requested ID. Every ID must exist.
pub fn run_show(args: &ShowArgs, catalog: &Catalog, out: &mut impl Write) -> Result<u8> {
    let missing: Vec<&str> = args
        .ids
        .iter()
        .map(String::as_str)
        .filter(|id| !catalog.contains(id))
        .collect();
    if !missing.is_empty() {
        bail!("unknown requirement id(s): {}", missing.join(", "));
    }

    for (i, id) in args.ids.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if let Some(req) = catalog.get(id) {
            write!(out, "{req}")?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use psm_core::{Requirement, FIELD_COUNT};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (family, id, category, description) in [
            (Family::Fr, "psm-FR-1.1", "FR General", "Do X"),
            (Family::Fr, "psm-FR-1.2", "FR General", "Do Y"),
            (Family::Sq, "psm-SQ-1", "SQ Usability", "Be nice"),
        ] {
            let mut fields: [String; FIELD_COUNT] = Default::default();
            fields[0] = id.to_string();
            fields[1] = category.to_string();
            fields[2] = description.to_string();
            catalog.insert(Requirement::from_fields(family, fields)).unwrap();
        }
        catalog
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<u8>) -> String {
        let mut buf = Vec::new();
        assert_eq!(f(&mut buf).unwrap(), 0);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_counts_every_family() {
        let text = output(|out| run_summary(&catalog(), 3, out));
        assert!(text.contains("Total: 3 requirements"));
        assert!(text.contains("Diagnostics: 3"));
        let fr = text.lines().find(|l| l.trim_start().starts_with("FR")).unwrap();
        assert!(fr.trim_end().ends_with(" 2"));
        let ph = text.lines().find(|l| l.trim_start().starts_with("PH")).unwrap();
        assert!(ph.trim_end().ends_with(" 0"));
    }

    #[test]
    fn list_filters_by_family() {
        let all = output(|out| run_list(&ListArgs { family: None }, &catalog(), out));
        assert_eq!(all.lines().count(), 3);
        assert!(all.starts_with("psm-FR-1.1  FR General  Do X\n"));

        let sq = output(|out| {
            run_list(&ListArgs { family: Some(Family::Sq) }, &catalog(), out)
        });
        assert_eq!(sq, "psm-SQ-1  SQ Usability  Be nice\n");
    }

    #[test]
    fn show_prints_each_record() {
        let args = ShowArgs {
            ids: vec!["psm-SQ-1".into(), "psm-FR-1.1".into()],
        };
        let text = output(|out| run_show(&args, &catalog(), out));
        let first = text.find("\"psm-SQ-1\"").unwrap();
        let second = text.find("\"psm-FR-1.1\"").unwrap();
        assert!(first < second);
        assert!(text.contains("Requirement Statement:     \"Be nice\""));
    }

    #[test]
    fn show_rejects_unknown_ids() {
        let args = ShowArgs {
            ids: vec!["psm-FR-1.1".into(), "psm-FR-7".into()],
        };
        let mut buf = Vec::new();
        let err = run_show(&args, &catalog(), &mut buf).unwrap_err();
        assert!(err.to_string().contains("psm-FR-7"));
        assert!(buf.is_empty());
    }
}
