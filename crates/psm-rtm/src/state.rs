//! Parse state threaded through one ingestion run.

use std::collections::BTreeSet;

use psm_core::Family;

/// Mutable context of the row-by-row parse. Owned by one
/// [`crate::assembler::CatalogAssembler`] and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    current_family: Option<Family>,
    current_category: Option<String>,
    families_seen: BTreeSet<Family>,
}

impl ParseState {
    /// Family of the section being read, if it maps to one.
    pub fn current_family(&self) -> Option<Family> {
        self.current_family
    }

    /// Category to stamp onto requirements, already prefixed with the
    /// family code.
    pub fn current_category(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    /// Families whose section banners have been read so far.
    pub fn families_seen(&self) -> &BTreeSet<Family> {
        &self.families_seen
    }

    pub(crate) fn set_family(&mut self, family: Option<Family>) {
        self.current_family = family;
    }

    pub(crate) fn set_category(&mut self, category: Option<String>) {
        self.current_category = category;
    }

    /// Record a section for `family`. Returns `false` if it was already seen.
    pub(crate) fn mark_seen(&mut self, family: Family) -> bool {
        self.families_seen.insert(family)
    }
}
