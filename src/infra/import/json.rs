use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::infra::import::ImportRecord;

pub fn read_json_records<R: ImportRecord>(json_path: &Path) -> Result<Vec<R>> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read json: {}", json_path.display()))?;
    parse_json_records(&text)
        .with_context(|| format!("failed to import json: {}", json_path.display()))
}

/// Accepts a bare array or the backend's `{ "data": [...] }` envelope.
pub fn parse_json_records<R: ImportRecord>(text: &str) -> Result<Vec<R>> {
    let value: Value = serde_json::from_str(text).context("invalid json")?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(items)) => items,
            _ => anyhow::bail!("json object must carry a \"data\" array"),
        },
        _ => anyhow::bail!("json must be an array of records"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<R>(item).with_context(|| format!("invalid record at index {idx}"))
        })
        .collect()
}
