use std::sync::Arc;

use downlog_api::core::DownloadLog;

pub mod asserts;
pub mod client;
pub mod connection_info;
pub mod test_environment;
pub mod v1;

/// It forces a database error by dropping all tables.
/// That makes any query fail.
pub fn force_database_error(download_log: &Arc<DownloadLog>) {
    download_log.database.drop_database_tables().unwrap();
}
