use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::domain::entities::record::{Payout, RecordKind, Referral};
use crate::infra::import::csv::read_csv_records;
use crate::infra::import::json::read_json_records;
use crate::infra::import::xlsx::read_xlsx_records;
use crate::infra::import::ImportRecord;
use crate::usecase::ports::repo::RecordRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ImportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())?;
        match ext.as_str() {
            "csv" => Some(ImportFormat::Csv),
            "xlsx" | "xls" | "ods" => Some(ImportFormat::Xlsx),
            "json" => Some(ImportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub kind: RecordKind,
    pub format: ImportFormat,
    pub row_count: usize,
}

/// Reads export files and replaces the stored collection of one kind.
pub struct ImportService {
    repo: Arc<dyn RecordRepository>,
}

impl ImportService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn import_file(&self, kind: RecordKind, path: &Path) -> Result<ImportResult> {
        let format = ImportFormat::from_path(path)
            .ok_or_else(|| anyhow!("unsupported file type: {}", path.display()))?;

        tracing::info!(kind = kind.noun(), path = %path.display(), "importing records");

        let row_count = match kind {
            RecordKind::Payouts => {
                let payouts = read_records::<Payout>(format, path)?;
                self.repo.replace_payouts(&payouts)?
            }
            RecordKind::Withdrawals => {
                let requests = read_records::<Payout>(format, path)?;
                self.repo.replace_withdrawals(&requests)?
            }
            RecordKind::Referrals => {
                let referrals = read_records::<Referral>(format, path)?;
                self.repo.replace_referrals(&referrals)?
            }
        };

        tracing::info!(kind = kind.noun(), row_count, "import finished");

        Ok(ImportResult {
            kind,
            format,
            row_count,
        })
    }
}

fn read_records<R: ImportRecord>(format: ImportFormat, path: &Path) -> Result<Vec<R>> {
    match format {
        ImportFormat::Csv => read_csv_records(path),
        ImportFormat::Xlsx => read_xlsx_records(path),
        ImportFormat::Json => read_json_records(path),
    }
}
