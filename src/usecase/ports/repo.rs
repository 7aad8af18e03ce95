use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::record::{Payout, Referral};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for RepoError {
    fn from(err: anyhow::Error) -> Self {
        RepoError::Message(format!("{err:#}"))
    }
}

/// Local store of fetched records and UI preferences.
pub trait RecordRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn load_payouts(&self) -> Result<Vec<Payout>, RepoError>;
    fn load_withdrawals(&self) -> Result<Vec<Payout>, RepoError>;
    fn load_referrals(&self) -> Result<Vec<Referral>, RepoError>;
    fn replace_payouts(&self, payouts: &[Payout]) -> Result<usize, RepoError>;
    fn replace_withdrawals(&self, requests: &[Payout]) -> Result<usize, RepoError>;
    fn replace_referrals(&self, referrals: &[Referral]) -> Result<usize, RepoError>;

    fn load_preferences(&self) -> Result<BTreeMap<String, String>, RepoError>;
    fn save_preferences(&self, entries: &BTreeMap<String, String>) -> Result<(), RepoError>;
}
