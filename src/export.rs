//! CSV export.
//!
//! Flattens a collection of records into comma-separated text for download:
//! one header row, one data row per record. Columns are the sorted union of
//! keys across all records, with blank cells where a record lacks a key, so
//! mixed shapes stay well-defined; one export call is still expected to
//! cover one homogeneous collection. Nested values (cart snapshots,
//! customization maps) are rendered as compact JSON.

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The collection was empty; there is nothing to export.
    #[error("no data to export")]
    NoData,

    /// A record could not be flattened to JSON.
    #[error("failed to flatten record for export")]
    Flatten(#[from] serde_json::Error),

    /// A record did not flatten to a key/value object.
    #[error("records must flatten to key/value objects")]
    NotAnObject,
}

/// Render `records` as CSV text with a header row.
///
/// # Errors
///
/// - [`ExportError::NoData`]: `records` is empty.
/// - [`ExportError::Flatten`] / [`ExportError::NotAnObject`]: a record could
///   not be turned into a flat key/value row.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::to_value(record)? {
            Value::Object(map) => rows.push(map),
            _ => return Err(ExportError::NotAnObject),
        }
    }

    let mut columns: SmallVec<[String; 12]> = SmallVec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns.sort();

    let mut out = String::new();
    push_row(&mut out, columns.iter().map(String::as_str));

    for row in &rows {
        let cells: SmallVec<[String; 12]> = columns
            .iter()
            .map(|column| cell_text(row.get(column)))
            .collect();
        push_row(&mut out, cells.iter().map(String::as_str));
    }

    Ok(out)
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

/// Quote a field when it embeds a comma, quote or line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        // Arrays and objects are kept whole as compact JSON.
        Some(nested) => nested.to_string(),
    }
}
