pub mod csv;
pub mod json;
pub mod xlsx;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::entities::record::{Payout, Referral};

/// A record type that can be read from an export file.
pub trait ImportRecord: DeserializeOwned {
    /// Serialized field names, as the backend emits them.
    const FIELD_NAMES: &'static [&'static str];
}

impl ImportRecord for Payout {
    const FIELD_NAMES: &'static [&'static str] =
        &["id", "date", "amount", "method", "status", "reference"];
}

impl ImportRecord for Referral {
    const FIELD_NAMES: &'static [&'static str] =
        &["id", "name", "email", "status", "joinDate", "earnings"];
}

/// Maps a spreadsheet or CSV header onto a known field name. Case, spaces,
/// dashes and underscores are ignored, so `Join Date` matches `joinDate`.
pub fn canonical_header(raw: &str, known: &[&str]) -> String {
    let squashed = squash(raw);
    known
        .iter()
        .find(|name| squash(name) == squashed)
        .map(|name| name.to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

fn squash(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Builds one record from header names and raw cell text. Every cell is
/// handed over as a string so text such as `007123` or `1200.50` is kept
/// exactly as written.
pub fn record_from_cells<'a, R: ImportRecord>(
    headers: &[String],
    cells: impl IntoIterator<Item = &'a str>,
) -> Result<R> {
    let object: Map<String, Value> = headers
        .iter()
        .zip(cells)
        .filter(|(header, _)| !header.is_empty())
        .map(|(header, cell)| (header.clone(), Value::String(cell.to_string())))
        .collect();
    Ok(serde_json::from_value::<R>(Value::Object(object))?)
}
