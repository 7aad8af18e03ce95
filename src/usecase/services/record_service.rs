use std::sync::Arc;

use crate::domain::entities::record::{Payout, Referral};
use crate::usecase::ports::repo::{RecordRepository, RepoError};

/// Loads the record collections the views render.
pub struct RecordService {
    repo: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn init(&self) -> Result<(), RepoError> {
        self.repo.init()
    }

    pub fn load_payouts(&self) -> Result<Vec<Payout>, RepoError> {
        let payouts = self.repo.load_payouts()?;
        tracing::debug!(count = payouts.len(), "loaded payouts");
        Ok(payouts)
    }

    pub fn load_withdrawals(&self) -> Result<Vec<Payout>, RepoError> {
        let requests = self.repo.load_withdrawals()?;
        tracing::debug!(count = requests.len(), "loaded withdrawal requests");
        Ok(requests)
    }

    pub fn load_referrals(&self) -> Result<Vec<Referral>, RepoError> {
        let referrals = self.repo.load_referrals()?;
        tracing::debug!(count = referrals.len(), "loaded referrals");
        Ok(referrals)
    }
}
