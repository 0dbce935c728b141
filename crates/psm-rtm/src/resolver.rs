//! # Family Resolver
//!
//! Maps the free text of a section banner (`"-------- 1 - Func Reqs"`) to a
//! requirement family. This table is the only link between the section
//! titles people type into the spreadsheet and the two-letter codes
//! embedded in every requirement ID, so its patterns and their order are
//! fixed.
//!
//! Matching is a case-insensitive regex search over the banner; the first
//! rule that matches wins.

use std::sync::LazyLock;

use psm_core::Family;
use regex::Regex;

/// Outcome of resolving a section banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyMatch {
    /// The banner opens a requirements family.
    Family(Family),
    /// A known section that holds no requirements ("Selections"), or whose
    /// contents are not mapped to a family ("Performance").
    Excluded,
    /// No rule matched.
    Unrecognized,
}

impl FamilyMatch {
    /// The resolved family, if any.
    pub fn family(self) -> Option<Family> {
        match self {
            Self::Family(family) => Some(family),
            Self::Excluded | Self::Unrecognized => None,
        }
    }
}

/// Ordered rule table. Patterns are matched against the lowercased banner.
const RULES: [(&str, FamilyMatch); 10] = [
    ("func reqs", FamilyMatch::Family(Family::Fr)),
    ("intermediary . interface", FamilyMatch::Family(Family::Ii)),
    ("standards and conditions", FamilyMatch::Family(Family::Sc)),
    ("information architecture", FamilyMatch::Family(Family::Ia)),
    ("integration and utility", FamilyMatch::Family(Family::Iu)),
    ("access and delivery", FamilyMatch::Family(Family::Ad)),
    ("software quality", FamilyMatch::Family(Family::Sq)),
    // Appears in the CSV export but not in the workbook view, and its rows
    // carry no requirement IDs. Left unmapped until someone works out what
    // it is.
    ("performance", FamilyMatch::Excluded),
    (r"pharmacy \(mmis\)", FamilyMatch::Family(Family::Ph)),
    ("selections", FamilyMatch::Excluded),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, FamilyMatch)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, outcome)| {
            let re = Regex::new(pattern).expect("family rule patterns are valid");
            (re, *outcome)
        })
        .collect()
});

/// Resolve a section banner to a family.
///
/// Pure and total: every input yields exactly one [`FamilyMatch`].
pub fn resolve_family(banner: &str) -> FamilyMatch {
    let lowered = banner.to_lowercase();
    COMPILED_RULES
        .iter()
        .find(|(re, _)| re.is_match(&lowered))
        .map(|(_, outcome)| *outcome)
        .unwrap_or(FamilyMatch::Unrecognized)
}
