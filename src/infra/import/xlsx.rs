use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Days, NaiveDate};

use crate::infra::import::{canonical_header, record_from_cells, ImportRecord};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.trim().to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => excel_serial_to_date(v.as_f64()).unwrap_or_else(|| v.to_string()),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Excel stores dates as days since 1899-12-30; the fraction is time of day.
pub fn excel_serial_to_date(days: f64) -> Option<String> {
    if !days.is_finite() || days < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_days(Days::new(days.trunc() as u64))?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Reads the first worksheet. The first non-empty row is the header.
pub fn read_xlsx_records<R: ImportRecord>(xlsx_path: &Path) -> Result<Vec<R>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("workbook has no sheets")?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();

    records_from_rows(&rows).with_context(|| format!("failed to import sheet: {sheet_name}"))
}

pub fn records_from_rows<R: ImportRecord>(rows: &[Vec<String>]) -> Result<Vec<R>> {
    let mut non_empty = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| !cell.is_empty()));

    let Some((_, header_row)) = non_empty.next() else {
        anyhow::bail!("sheet header is required")
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|header| canonical_header(header, R::FIELD_NAMES))
        .collect();

    let mut records = Vec::new();
    for (row_idx, row) in non_empty {
        let record = record_from_cells::<R>(&headers, row.iter().map(String::as_str))
            .with_context(|| format!("failed to parse sheet row {}", row_idx + 1))?;
        records.push(record);
    }

    Ok(records)
}
