use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::infra::import::{canonical_header, record_from_cells, ImportRecord};

pub fn read_csv_records<R: ImportRecord>(csv_path: &Path) -> Result<Vec<R>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    parse_csv_records(file).with_context(|| format!("failed to import csv: {}", csv_path.display()))
}

pub fn parse_csv_records<R: ImportRecord, T: Read>(input: T) -> Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let canonical: Vec<String> = headers
        .iter()
        .map(|header| canonical_header(header, R::FIELD_NAMES))
        .collect();

    let mut records = Vec::new();
    for (row_idx, row) in reader.records().enumerate() {
        // Header is line 1, so data row N lives on line N + 2.
        let line = row_idx + 2;
        let row = row.with_context(|| format!("failed to read csv row {line}"))?;
        let record = record_from_cells::<R>(&canonical, row.iter())
            .with_context(|| format!("failed to parse csv row {line}"))?;
        records.push(record);
    }

    Ok(records)
}
