use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::record::{Payout, Referral};
use crate::infra::sqlite::queries::{
    load_payouts, load_preferences, load_referrals, load_withdrawals, replace_payouts,
    replace_referrals, replace_withdrawals, save_preferences,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RecordRepository, RepoError};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl RecordRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::from)
    }

    fn load_payouts(&self) -> Result<Vec<Payout>, RepoError> {
        load_payouts(&self.db_path).map_err(RepoError::from)
    }

    fn load_withdrawals(&self) -> Result<Vec<Payout>, RepoError> {
        load_withdrawals(&self.db_path).map_err(RepoError::from)
    }

    fn load_referrals(&self) -> Result<Vec<Referral>, RepoError> {
        load_referrals(&self.db_path).map_err(RepoError::from)
    }

    fn replace_payouts(&self, payouts: &[Payout]) -> Result<usize, RepoError> {
        replace_payouts(&self.db_path, payouts).map_err(RepoError::from)
    }

    fn replace_withdrawals(&self, requests: &[Payout]) -> Result<usize, RepoError> {
        replace_withdrawals(&self.db_path, requests).map_err(RepoError::from)
    }

    fn replace_referrals(&self, referrals: &[Referral]) -> Result<usize, RepoError> {
        replace_referrals(&self.db_path, referrals).map_err(RepoError::from)
    }

    fn load_preferences(&self) -> Result<BTreeMap<String, String>, RepoError> {
        load_preferences(&self.db_path).map_err(RepoError::from)
    }

    fn save_preferences(&self, entries: &BTreeMap<String, String>) -> Result<(), RepoError> {
        save_preferences(&self.db_path, entries).map_err(RepoError::from)
    }
}
