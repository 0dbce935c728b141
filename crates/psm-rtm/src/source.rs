//! # Row Sources
//!
//! Converts the RTM file on disk into rows of text cells for the
//! assembler. Two inputs are supported:
//!
//! - a spreadsheet (`.xlsx`, `.xlsm`, `.xls`, `.ods`), read with `calamine`.
//!   Every sheet is converted in workbook order, each one preceded by a
//!   single-cell banner row `"-------- <n> - <sheet name>"`. The sheet
//!   names are therefore what the family resolver sees.
//! - a CSV export of such a spreadsheet (the same banner rows are already
//!   inline), read with `csv`.
//!
//! Rows whose cells are all empty are dropped by both readers. Workbook rows
//! are padded with empty cells to at least [`FIELD_COUNT`], since a sheet's
//! used range stops at its last non-empty column and an empty cell is an
//! empty field, not a missing one. CSV rows keep the width they were
//! written with.

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use psm_core::{Catalog, FIELD_COUNT};

use crate::assembler::ingest;
use crate::classify::SECTION_MARKER;
use crate::diagnostic::DiagnosticSink;
use crate::error::IngestError;

/// Read the RTM at `path` and assemble its catalog.
///
/// The file handle lives only for the duration of the conversion.
///
/// # Errors
///
/// [`IngestError::SourceNotFound`] if `path` does not exist, a conversion
/// error if it cannot be read, or any fatal error from [`ingest`].
pub fn load_catalog(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Catalog, IngestError> {
    if !path.exists() {
        return Err(IngestError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let rows = read_rows(path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "converted RTM source");
    ingest(rows, sink)
}

/// Convert `path` to rows, choosing the reader by extension: `.csv` is read
/// as CSV, anything else as a spreadsheet.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv(path)
    } else {
        read_workbook(path)
    }
}

/// Convert every sheet of a workbook, with a section banner before each.
pub fn read_workbook(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let workbook_error = |reason: String| IngestError::Workbook {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = Vec::new();
    for (index, name) in workbook.sheet_names().into_iter().enumerate() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| workbook_error(format!("sheet '{name}': {e}")))?;

        rows.push(vec![sheet_banner(index + 1, &name)]);

        // Ranges start at the first used cell; pad so column A is cell 0.
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        for cells in range.rows() {
            let mut row: Vec<String> = std::iter::repeat(String::new())
                .take(leading)
                .chain(cells.iter().map(cell_text))
                .collect();
            if row.len() < FIELD_COUNT {
                row.resize(FIELD_COUNT, String::new());
            }
            if !is_blank(&row) {
                rows.push(row);
            }
        }
    }
    Ok(rows)
}

/// Read an exported CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let file = std::fs::File::open(path)?;
    read_csv_from(file).map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Read CSV rows from any reader. No header handling; rows may differ in
/// width.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record?.iter().map(str::to_string).collect();
        if !is_blank(&row) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Banner row text for the sheet at 1-based `number`.
fn sheet_banner(number: usize, name: &str) -> String {
    format!("{SECTION_MARKER}{number} - {name}")
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}
