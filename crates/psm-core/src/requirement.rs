//! # Requirement Records
//!
//! One `Requirement` per RTM data row. Every attribute except the family is
//! kept as the opaque cell text; nothing is parsed beyond the ID.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::family::Family;
use crate::identity::RequirementId;

/// Number of positional RTM columns that make up a requirement.
pub const FIELD_COUNT: usize = 11;

/// RTM column titles, in positional order. A row whose first eleven cells
/// equal these is a repeated header, not data.
pub const COLUMN_TITLES: [&str; FIELD_COUNT] = [
    "Requirement ID Number",
    "Requirement Category",
    "Requirement Statement",
    "Priority",
    "Rank",
    "Source",
    "Source Document",
    "Release",
    "Design Reference",
    "Acceptance Test Reference",
    "Comment",
];

/// A single requirement from the traceability matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// The family of the section the requirement was listed under.
    pub family: Family,
    /// "Requirement ID Number", verbatim.
    pub req_id: String,
    /// "Requirement Category", normally `"<family> <category banner>"`.
    pub category: String,
    /// "Requirement Statement".
    pub description: String,
    /// "Priority".
    pub priority: String,
    /// "Rank".
    pub rank: String,
    /// "Source".
    pub source: String,
    /// "Source Document".
    pub source_doc: String,
    /// "Release".
    pub release: String,
    /// "Design Reference".
    pub design_ref: String,
    /// "Acceptance Test Reference".
    pub acceptance_test_ref: String,
    /// "Comment".
    pub comment: String,
}

impl Requirement {
    /// Build a requirement from the eleven positional fields, in
    /// [`COLUMN_TITLES`] order.
    pub fn from_fields(family: Family, fields: [String; FIELD_COUNT]) -> Self {
        let [
            req_id,
            category,
            description,
            priority,
            rank,
            source,
            source_doc,
            release,
            design_ref,
            acceptance_test_ref,
            comment,
        ] = fields;
        Self {
            family,
            req_id,
            category,
            description,
            priority,
            rank,
            source,
            source_doc,
            release,
            design_ref,
            acceptance_test_ref,
            comment,
        }
    }

    /// The eleven positional fields, in [`COLUMN_TITLES`] order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.req_id.as_str(),
            self.category.as_str(),
            self.description.as_str(),
            self.priority.as_str(),
            self.rank.as_str(),
            self.source.as_str(),
            self.source_doc.as_str(),
            self.release.as_str(),
            self.design_ref.as_str(),
            self.acceptance_test_ref.as_str(),
            self.comment.as_str(),
        ]
    }

    /// The parsed ID, or `None` if `req_id` is malformed.
    pub fn identifier(&self) -> Option<RequirementId> {
        RequirementId::parse(self.req_id.as_str()).ok()
    }
}

/// Labelled block, one column per line. The family is left out since the
/// ID already carries it.
impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, value) in COLUMN_TITLES.iter().zip(self.fields()) {
            let label = format!("{title}:");
            writeln!(f, "{label:<27}\"{}\"", value.replace('"', "\\\""))?;
        }
        Ok(())
    }
}
