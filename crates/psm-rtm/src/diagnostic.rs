//! # Ingestion Diagnostics
//!
//! Non-fatal anomalies found while reading the RTM. Spreadsheet data is
//! hand-edited and messy, so these are surfaced for manual review while
//! ingestion carries on and still produces a catalog.
//!
//! The ingestion entry points take a `&mut dyn DiagnosticSink`; callers
//! decide whether diagnostics are logged ([`TracingSink`]), collected
//! ([`CollectingSink`]) or dropped ([`NullSink`]).

use std::fmt;

use psm_core::Family;

/// A structured non-fatal ingestion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A section banner matched no rule of the family table.
    UnrecognizedSection {
        /// Full banner cell text.
        banner: String,
    },
    /// A category banner appeared while no family section was active.
    CategoryWithoutFamily {
        /// The category label (second cell).
        category: String,
    },
    /// A requirement row appeared before any category banner.
    RequirementWithoutCategory {
        /// The requirement's ID.
        req_id: String,
    },
    /// A requirement ID does not match `psm-XX-N.N...`.
    MalformedRequirementId {
        /// The offending ID.
        req_id: String,
    },
    /// A requirement ID embeds a different family than its section.
    FamilyMismatch {
        /// Family of the enclosing section.
        family: Family,
        /// The requirement's ID.
        req_id: String,
    },
    /// A row starts with a requirement ID but has fewer than eleven cells.
    TruncatedRequirementRow {
        /// The requirement ID in the first cell.
        req_id: String,
        /// Number of cells the row actually had.
        cells: usize,
    },
    /// A row under an active section matched no classification rule.
    UnclassifiedRow {
        /// The row's cells.
        row: Vec<String>,
    },
}

impl Diagnostic {
    /// Stable snake_case name of the diagnostic, for log fields and counts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedSection { .. } => "unrecognized_section",
            Self::CategoryWithoutFamily { .. } => "category_without_family",
            Self::RequirementWithoutCategory { .. } => "requirement_without_category",
            Self::MalformedRequirementId { .. } => "malformed_requirement_id",
            Self::FamilyMismatch { .. } => "family_mismatch",
            Self::TruncatedRequirementRow { .. } => "truncated_requirement_row",
            Self::UnclassifiedRow { .. } => "unclassified_row",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedSection { banner } => {
                write!(f, "unexpected family header: {banner:?}")
            }
            Self::CategoryWithoutFamily { category } => {
                write!(f, "category {category:?} seen while no family is active")
            }
            Self::RequirementWithoutCategory { req_id } => {
                write!(f, "requirement '{req_id}' has no category")
            }
            Self::MalformedRequirementId { req_id } => {
                write!(f, "no requirement family found for {req_id:?}")
            }
            Self::FamilyMismatch { family, req_id } => {
                write!(f, "family {family:?} does not match req {req_id:?}", family = family.code())
            }
            Self::TruncatedRequirementRow { req_id, cells } => {
                write!(f, "requirement '{req_id}' row has {cells} cells, expected at least 11")
            }
            Self::UnclassifiedRow { row } => {
                write!(f, "not really sure what this row is: {row:?}")
            }
        }
    }
}

/// Receiver for ingestion diagnostics.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a `tracing` warning and counts them.
#[derive(Debug, Default)]
pub struct TracingSink {
    emitted: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics logged so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emitted += 1;
        tracing::warn!(kind = diagnostic.kind(), "{diagnostic}");
    }
}

/// Keeps diagnostics in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Kinds of the collected diagnostics, in order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(Diagnostic::kind).collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.emit(Diagnostic::RequirementWithoutCategory {
            req_id: "psm-FR-1".into(),
        });
        sink.emit(Diagnostic::UnrecognizedSection {
            banner: "-------- 3 - Mystery".into(),
        });
        assert_eq!(
            sink.kinds(),
            ["requirement_without_category", "unrecognized_section"]
        );
        assert_eq!(sink.into_inner().len(), 2);
    }

    #[test]
    fn tracing_sink_counts() {
        let mut sink = TracingSink::new();
        sink.emit(Diagnostic::UnclassifiedRow {
            row: vec!["x".into()],
        });
        sink.emit(Diagnostic::UnclassifiedRow { row: vec![] });
        assert_eq!(sink.emitted(), 2);
    }

    #[test]
    fn display_names_the_offending_value() {
        let d = Diagnostic::FamilyMismatch {
            family: Family::Fr,
            req_id: "psm-IA-1.1".into(),
        };
        assert_eq!(d.to_string(), r#"family "FR" does not match req "psm-IA-1.1""#);

        let d = Diagnostic::TruncatedRequirementRow {
            req_id: "psm-FR-2".into(),
            cells: 4,
        };
        assert!(d.to_string().contains("4 cells"));
    }
}
