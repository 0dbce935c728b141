//! # Requirement Family — Single Source of Truth
//!
//! Defines the `Family` enum with all eight requirement families of the
//! PSM Requirements Traceability Matrix. Every requirement ID embeds one of
//! these two-letter codes (`psm-FR-1.2`), and every synthesized category
//! string starts with one (`"FR General"`), so this is the ONE definition
//! used across the workspace. Every `match` on `Family` is exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A requirements family, i.e. one section of the RTM.
///
/// | Code | Family |
/// |------|--------|
/// | FR | Functional Requirements |
/// | II | Intermediary and Interface |
/// | SC | Standards and Conditions |
/// | IA | Information Architecture |
/// | IU | Integration and Utility |
/// | AD | Access and Delivery |
/// | SQ | Software Quality |
/// | PH | Pharmacy (MMIS) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Family {
    /// Functional requirements.
    Fr,
    /// Intermediary and interface requirements.
    Ii,
    /// Standards and conditions.
    Sc,
    /// Information architecture.
    Ia,
    /// Integration and utility.
    Iu,
    /// Access and delivery.
    Ad,
    /// Software quality.
    Sq,
    /// Pharmacy (MMIS).
    Ph,
}

/// Total number of requirement families.
pub const FAMILY_COUNT: usize = 8;

impl Family {
    /// Returns all families, in section-resolution order.
    pub fn all() -> &'static [Family] {
        &[
            Self::Fr,
            Self::Ii,
            Self::Sc,
            Self::Ia,
            Self::Iu,
            Self::Ad,
            Self::Sq,
            Self::Ph,
        ]
    }

    /// Returns the two-letter code embedded in requirement IDs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::Ii => "II",
            Self::Sc => "SC",
            Self::Ia => "IA",
            Self::Iu => "IU",
            Self::Ad => "AD",
            Self::Sq => "SQ",
            Self::Ph => "PH",
        }
    }

    /// Returns the human-readable section title.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fr => "Functional Requirements",
            Self::Ii => "Intermediary and Interface",
            Self::Sc => "Standards and Conditions",
            Self::Ia => "Information Architecture",
            Self::Iu => "Integration and Utility",
            Self::Ad => "Access and Delivery",
            Self::Sq => "Software Quality",
            Self::Ph => "Pharmacy (MMIS)",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Family {
    type Err = ValidationError;

    /// Parse a family from its two-letter code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FR" => Ok(Self::Fr),
            "II" => Ok(Self::Ii),
            "SC" => Ok(Self::Sc),
            "IA" => Ok(Self::Ia),
            "IU" => Ok(Self::Iu),
            "AD" => Ok(Self::Ad),
            "SQ" => Ok(Self::Sq),
            "PH" => Ok(Self::Ph),
            other => Err(ValidationError::UnknownFamily(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_families_count() {
        assert_eq!(Family::all().len(), FAMILY_COUNT);
    }

    #[test]
    fn test_all_families_unique() {
        let mut seen = std::collections::HashSet::new();
        for f in Family::all() {
            assert!(seen.insert(f.code()), "Duplicate family code: {f}");
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for family in Family::all() {
            let parsed: Family = family.code().parse().unwrap_or_else(|e| {
                panic!("Failed to parse {:?}: {e}", family.code())
            });
            assert_eq!(*family, parsed);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_and_lowercase() {
        assert!("fr".parse::<Family>().is_err());
        assert!("XX".parse::<Family>().is_err());
        assert!("".parse::<Family>().is_err());
        assert_eq!(
            "PF".parse::<Family>(),
            Err(ValidationError::UnknownFamily("PF".to_string()))
        );
    }

    #[test]
    fn test_serde_format_matches_code() {
        for family in Family::all() {
            let json = serde_json::to_string(family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.code()));
            let back: Family = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *family);
        }
    }

    #[test]
    fn test_codes_are_two_uppercase_letters() {
        for family in Family::all() {
            let code = family.code();
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!family.name().is_empty());
        }
    }
}
