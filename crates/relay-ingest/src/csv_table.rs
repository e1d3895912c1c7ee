use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use relay_model::{CellValue, RawTable, Record};

use crate::error::IngestError;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Resolve one trimmed cell into the closed value variant.
///
/// CSV carries no native temporal type, so cells type themselves as null,
/// number, or text here; `CellValue::DateTime` only arrives from decoders
/// that produce real date objects.
fn type_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Null;
    }
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => CellValue::Number(number),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Returns true when the path carries an extension this decoder accepts.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
}

/// Decode a delimited lead file into an ordered header list plus one record
/// per data row.
///
/// The first non-empty row supplies the headers. Rows shorter than the
/// header list are padded with `Null` cells; extra trailing cells are
/// dropped. Fully-empty rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<RawTable, IngestError> {
    if !is_supported_extension(path) {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_string();
        return Err(IngestError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension,
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    // A header row alone is still an empty file to the caller.
    if raw_rows.len() <= 1 {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut table = RawTable::new(headers);
    for raw_row in raw_rows.iter().skip(1) {
        let mut row = Record::new();
        for (index, header) in table.headers.iter().enumerate() {
            let value = raw_row.get(index).map(String::as_str).unwrap_or("");
            row.insert(header.clone(), type_cell(value));
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        "decoded csv table"
    );
    Ok(table)
}
