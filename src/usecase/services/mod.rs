pub mod import_service;
pub mod preference_service;
pub mod record_service;
pub mod table_service;
