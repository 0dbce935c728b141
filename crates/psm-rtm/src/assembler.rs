//! # Catalog Assembler
//!
//! Drives the classifier over the RTM rows in order, exactly once, applying
//! each row's effect to the [`ParseState`] and collecting requirements into
//! a [`Catalog`].
//!
//! ## Fatal vs. reported
//!
//! Only a second section for the same family and a second row for the same
//! requirement ID abort ingestion; both would corrupt the catalog's keys.
//! Everything else goes to the [`DiagnosticSink`].

use psm_core::{Catalog, RequirementId, FIELD_COUNT};

use crate::builder::build_requirement;
use crate::classify::{classify, RowKind};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::IngestError;
use crate::resolver::{resolve_family, FamilyMatch};
use crate::state::ParseState;

/// Ingest a complete row sequence into a catalog.
///
/// # Errors
///
/// [`IngestError::DuplicateFamily`] or [`IngestError::Catalog`] on the
/// first structural violation. Nothing is returned for the rows read
/// before it.
pub fn ingest<I, R>(rows: I, sink: &mut dyn DiagnosticSink) -> Result<Catalog, IngestError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut assembler = CatalogAssembler::new(sink);
    for row in rows {
        assembler.feed(row.as_ref())?;
    }
    Ok(assembler.finish())
}

/// Single-pass RTM parser. One instance per ingestion run.
pub struct CatalogAssembler<'s> {
    state: ParseState,
    catalog: Catalog,
    rows_read: usize,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> CatalogAssembler<'s> {
    pub fn new(sink: &'s mut dyn DiagnosticSink) -> Self {
        Self {
            state: ParseState::default(),
            catalog: Catalog::new(),
            rows_read: 0,
            sink,
        }
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Apply one row.
    pub fn feed(&mut self, row: &[String]) -> Result<(), IngestError> {
        self.rows_read += 1;
        match classify(row, &self.state) {
            RowKind::SectionBanner(banner) => self.enter_section(banner),
            RowKind::CategoryBanner(label) => {
                self.enter_category(label);
                Ok(())
            }
            RowKind::HeaderRepeat => Ok(()),
            RowKind::Requirement { family, fields } => {
                let mut fields = fields.clone();
                match self.state.current_category() {
                    Some(category) => fields[1] = category.to_string(),
                    None => self.sink.emit(Diagnostic::RequirementWithoutCategory {
                        req_id: fields[0].clone(),
                    }),
                }
                let requirement = build_requirement(family, fields, &mut *self.sink);
                self.catalog.insert(requirement)?;
                Ok(())
            }
            RowKind::Unclassifiable => {
                self.report_unclassified(row);
                Ok(())
            }
        }
    }

    /// Finish the run and hand over the catalog.
    pub fn finish(self) -> Catalog {
        let families: Vec<&str> = self
            .state
            .families_seen()
            .iter()
            .map(|f| f.code())
            .collect();
        tracing::info!(
            rows = self.rows_read,
            requirements = self.catalog.len(),
            families = ?families,
            "ingested requirements catalog"
        );
        self.catalog
    }

    fn enter_section(&mut self, banner: &str) -> Result<(), IngestError> {
        let resolved = resolve_family(banner);
        if resolved == FamilyMatch::Unrecognized {
            self.sink.emit(Diagnostic::UnrecognizedSection {
                banner: banner.to_string(),
            });
        }
        let family = resolved.family();
        if let Some(family) = family {
            if !self.state.mark_seen(family) {
                return Err(IngestError::DuplicateFamily { family });
            }
        }
        tracing::debug!(banner, family = ?family, "entering section");
        self.state.set_family(family);
        Ok(())
    }

    fn enter_category(&mut self, label: &str) {
        match self.state.current_family() {
            Some(family) => {
                self.state
                    .set_category(Some(format!("{} {label}", family.code())));
            }
            None => {
                self.sink.emit(Diagnostic::CategoryWithoutFamily {
                    category: label.to_string(),
                });
                self.state.set_category(None);
            }
        }
    }

    /// Rows outside any section are preamble and are skipped quietly.
    fn report_unclassified(&mut self, row: &[String]) {
        if self.state.current_family().is_none() {
            return;
        }
        let diagnostic = match row.first() {
            Some(first) if row.len() < FIELD_COUNT && RequirementId::matches(first) => {
                Diagnostic::TruncatedRequirementRow {
                    req_id: first.clone(),
                    cells: row.len(),
                }
            }
            _ => Diagnostic::UnclassifiedRow { row: row.to_vec() },
        };
        self.sink.emit(diagnostic);
    }
}
