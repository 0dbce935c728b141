//! # Requirement Record Builder
//!
//! Turns the eleven positional fields of a data row into a
//! [`Requirement`], checking that the ID's embedded family agrees with the
//! section it was found in. Both a malformed ID and a mismatched family are
//! reported and the record is built anyway.

use psm_core::{Family, Requirement, RequirementId, FIELD_COUNT};

use crate::diagnostic::{Diagnostic, DiagnosticSink};

/// Build a requirement listed under `family` from its positional fields.
pub fn build_requirement(
    family: Family,
    fields: [String; FIELD_COUNT],
    sink: &mut dyn DiagnosticSink,
) -> Requirement {
    let req_id = &fields[0];
    match RequirementId::parse(req_id.as_str()) {
        Err(_) => sink.emit(Diagnostic::MalformedRequirementId {
            req_id: req_id.clone(),
        }),
        Ok(id) if id.family_code() != family.code() => sink.emit(Diagnostic::FamilyMismatch {
            family,
            req_id: req_id.clone(),
        }),
        Ok(_) => {}
    }
    Requirement::from_fields(family, fields)
}
