pub mod preferences;
pub mod query;
pub mod record;
pub mod summary;
pub mod withdrawal;
