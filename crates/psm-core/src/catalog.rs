//! # Requirement Catalog
//!
//! The product of ingestion: requirement ID to [`Requirement`]. Keys are
//! unique by construction; inserting an ID twice is a hard error rather
//! than a silent overwrite. Iteration is sorted by ID so exports are
//! deterministic, but consumers must not rely on any particular order.
//!
//! Serialized, a catalog is a JSON object keyed by ID. Deserializing goes
//! through [`Catalog::insert`] and also requires each key to equal its
//! record's `req_id`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::family::Family;
use crate::requirement::Requirement;

/// Mapping from requirement ID to requirement record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    requirements: BTreeMap<String, Requirement>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement keyed by its `req_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateRequirement`] if the ID is already
    /// present. The existing entry is left untouched.
    pub fn insert(&mut self, requirement: Requirement) -> Result<(), CatalogError> {
        if self.requirements.contains_key(&requirement.req_id) {
            return Err(CatalogError::DuplicateRequirement {
                req_id: requirement.req_id,
            });
        }
        self.requirements
            .insert(requirement.req_id.clone(), requirement);
        Ok(())
    }

    pub fn get(&self, req_id: &str) -> Option<&Requirement> {
        self.requirements.get(req_id)
    }

    pub fn contains(&self, req_id: &str) -> bool {
        self.requirements.contains_key(req_id)
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// All requirements, sorted by ID.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirement)> {
        self.requirements.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Requirements listed under `family`'s section, sorted by ID.
    pub fn in_family(&self, family: Family) -> impl Iterator<Item = &Requirement> {
        self.requirements
            .values()
            .filter(move |req| req.family == family)
    }

    /// Number of requirements per family. Families with no requirements
    /// are absent.
    pub fn family_counts(&self) -> BTreeMap<Family, usize> {
        let mut counts = BTreeMap::new();
        for req in self.requirements.values() {
            *counts.entry(req.family).or_insert(0) += 1;
        }
        counts
    }

    /// Consume the catalog and return the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Requirement> {
        self.requirements
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Requirement>::deserialize(deserializer)?;
        let mut catalog = Catalog::new();
        for (key, requirement) in entries {
            if key != requirement.req_id {
                return Err(serde::de::Error::custom(CatalogError::KeyMismatch {
                    key,
                    req_id: requirement.req_id,
                }));
            }
            catalog.insert(requirement).map_err(serde::de::Error::custom)?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::FIELD_COUNT;

    fn req(family: Family, id: &str, description: &str) -> Requirement {
        let mut fields: [String; FIELD_COUNT] = Default::default();
        fields[0] = id.to_string();
        fields[1] = format!("{family} General");
        fields[2] = description.to_string();
        Requirement::from_fields(family, fields)
    }

    #[test]
    fn insert_and_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert(req(Family::Fr, "psm-FR-1.1", "a")).unwrap();
        catalog.insert(req(Family::Ia, "psm-IA-2", "b")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("psm-FR-1.1"));
        assert_eq!(catalog.get("psm-IA-2").unwrap().description, "b");
        assert!(catalog.get("psm-IA-3").is_none());
    }

    #[test]
    fn duplicate_insert_is_rejected_and_keeps_original() {
        let mut catalog = Catalog::new();
        catalog.insert(req(Family::Fr, "psm-FR-1.1", "first")).unwrap();
        let err = catalog
            .insert(req(Family::Fr, "psm-FR-1.1", "second"))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateRequirement {
                req_id: "psm-FR-1.1".to_string()
            }
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("psm-FR-1.1").unwrap().description, "first");
    }

    #[test]
    fn family_views() {
        let mut catalog = Catalog::new();
        catalog.insert(req(Family::Fr, "psm-FR-1.2", "")).unwrap();
        catalog.insert(req(Family::Fr, "psm-FR-1.1", "")).unwrap();
        catalog.insert(req(Family::Sq, "psm-SQ-1", "")).unwrap();

        let fr: Vec<_> = catalog.in_family(Family::Fr).map(|r| r.req_id.as_str()).collect();
        assert_eq!(fr, ["psm-FR-1.1", "psm-FR-1.2"]);
        assert_eq!(catalog.in_family(Family::Ph).count(), 0);

        let counts = catalog.family_counts();
        assert_eq!(counts.get(&Family::Fr), Some(&2));
        assert_eq!(counts.get(&Family::Sq), Some(&1));
        assert!(!counts.contains_key(&Family::Ph));
    }

    #[test]
    fn serializes_as_object_keyed_by_id() {
        let mut catalog = Catalog::new();
        catalog.insert(req(Family::Ad, "psm-AD-3.1", "x")).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["psm-AD-3.1"]["family"], "AD");
        assert_eq!(json["psm-AD-3.1"]["category"], "AD General");
        let back: Catalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn deserialize_rejects_key_that_differs_from_req_id() {
        let mut catalog = Catalog::new();
        catalog.insert(req(Family::Sq, "psm-SQ-1", "x")).unwrap();
        let mut json = serde_json::to_value(&catalog).unwrap();
        let entry = json.as_object_mut().unwrap().remove("psm-SQ-1").unwrap();
        json["psm-SQ-2"] = entry;

        let err = serde_json::from_value::<Catalog>(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "catalog key 'psm-SQ-2' does not match requirement 'psm-SQ-1'"
        );
    }
}
