//! # Row Classifier
//!
//! Sorts one RTM row into exactly one [`RowKind`]. The rules are tried in a
//! fixed order and the first that fits wins:
//!
//! 1. section banner: a single cell starting with `"-------- "`
//! 2. category banner: more than one cell, empty first cell, non-empty second
//! 3. repeated header: first eleven cells equal [`COLUMN_TITLES`]
//! 4. requirement: at least eleven cells, a family is active, and the first
//!    cell is a requirement ID
//! 5. anything else
//!
//! Classification only reads the parse state; the assembler applies the
//! effects.

use psm_core::{Family, RequirementId, COLUMN_TITLES, FIELD_COUNT};

use crate::state::ParseState;

/// Prefix of a section banner cell. The spreadsheet converter writes one of
/// these before each sheet.
pub const SECTION_MARKER: &str = "-------- ";

/// The kind of a row, with the cells each kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind<'a> {
    /// Start of a family section. Carries the banner text.
    SectionBanner(&'a str),
    /// Category sub-header. Carries the raw label from the second cell.
    CategoryBanner(&'a str),
    /// The column titles repeated mid-sheet.
    HeaderRepeat,
    /// A requirement under the active family. Trailing cells are dropped.
    Requirement {
        family: Family,
        fields: &'a [String; FIELD_COUNT],
    },
    /// Matches nothing above.
    Unclassifiable,
}

/// Classify `row` given the current parse state.
pub fn classify<'a>(row: &'a [String], state: &ParseState) -> RowKind<'a> {
    if let [only] = row {
        if only.starts_with(SECTION_MARKER) {
            return RowKind::SectionBanner(only);
        }
    }

    if row.len() > 1 && row[0].is_empty() && !row[1].is_empty() {
        return RowKind::CategoryBanner(&row[1]);
    }

    let Some(fields) = leading_fields(row) else {
        return RowKind::Unclassifiable;
    };

    if fields.iter().zip(COLUMN_TITLES).all(|(cell, title)| cell == title) {
        return RowKind::HeaderRepeat;
    }

    match state.current_family() {
        Some(family) if !fields[0].is_empty() && RequirementId::matches(&fields[0]) => {
            RowKind::Requirement { family, fields }
        }
        _ => RowKind::Unclassifiable,
    }
}

/// The first eleven cells, or `None` if the row is shorter.
fn leading_fields(row: &[String]) -> Option<&[String; FIELD_COUNT]> {
    row.get(..FIELD_COUNT)?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn data_row(id: &str) -> Vec<String> {
        row(&[id, "FR General", "Do X", "High", "1", "Src", "Doc", "R1", "D1", "A1", "C1"])
    }

    fn in_family(family: Family) -> ParseState {
        let mut state = ParseState::default();
        state.set_family(Some(family));
        state
    }

    #[test]
    fn single_marker_cell_is_a_section_banner() {
        let r = row(&["-------- 1 - Func Reqs"]);
        assert_eq!(
            classify(&r, &ParseState::default()),
            RowKind::SectionBanner("-------- 1 - Func Reqs")
        );
    }

    #[test]
    fn marker_needs_its_trailing_space_and_a_lone_cell() {
        let state = ParseState::default();
        assert_eq!(classify(&row(&["--------1 - Func Reqs"]), &state), RowKind::Unclassifiable);
        assert_eq!(
            classify(&row(&["-------- 1 - Func Reqs", ""]), &state),
            RowKind::Unclassifiable
        );
    }

    #[test]
    fn category_banner() {
        let r = row(&["", "General", "", ""]);
        assert_eq!(classify(&r, &ParseState::default()), RowKind::CategoryBanner("General"));
        assert_eq!(
            classify(&row(&["", ""]), &ParseState::default()),
            RowKind::Unclassifiable
        );
    }

    #[test]
    fn header_repeat_needs_all_eleven_titles() {
        let mut header: Vec<String> = COLUMN_TITLES.iter().map(|t| t.to_string()).collect();
        header.push(String::new());
        let state = in_family(Family::Fr);
        assert_eq!(classify(&header, &state), RowKind::HeaderRepeat);
        assert_eq!(classify(&header, &ParseState::default()), RowKind::HeaderRepeat);

        header[10] = "Comments".to_string();
        assert_eq!(classify(&header, &state), RowKind::Unclassifiable);
        assert_eq!(classify(&header[..10], &state), RowKind::Unclassifiable);
    }

    #[test]
    fn requirement_row_needs_an_active_family() {
        let r = data_row("psm-FR-1.1");
        assert_eq!(classify(&r, &ParseState::default()), RowKind::Unclassifiable);

        match classify(&r, &in_family(Family::Fr)) {
            RowKind::Requirement { family, fields } => {
                assert_eq!(family, Family::Fr);
                assert_eq!(fields[0], "psm-FR-1.1");
                assert_eq!(fields[10], "C1");
            }
            other => panic!("expected requirement, got {other:?}"),
        }
    }

    #[test]
    fn requirement_row_drops_trailing_cells() {
        let mut r = data_row("psm-FR-1.1");
        r.extend(row(&["", "", "stray"]));
        match classify(&r, &in_family(Family::Fr)) {
            RowKind::Requirement { fields, .. } => assert_eq!(fields.len(), FIELD_COUNT),
            other => panic!("expected requirement, got {other:?}"),
        }
    }

    #[test]
    fn first_cell_must_be_a_requirement_id() {
        let state = in_family(Family::Fr);
        assert_eq!(classify(&data_row("FR-1.1"), &state), RowKind::Unclassifiable);
        assert_eq!(classify(&data_row("psm-fr-1.1"), &state), RowKind::Unclassifiable);
    }

    #[test]
    fn short_requirement_row_is_unclassifiable() {
        let r = row(&["psm-FR-1.1", "cat", "Do X"]);
        assert_eq!(classify(&r, &in_family(Family::Fr)), RowKind::Unclassifiable);
    }

    #[test]
    fn empty_row_is_unclassifiable() {
        assert_eq!(classify(&[], &in_family(Family::Fr)), RowKind::Unclassifiable);
    }
}
