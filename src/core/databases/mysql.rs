//! The `MySQL` database driver.
use std::panic::Location;

use downlog_api_configuration::Driver;
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder};
use r2d2_mysql::MySqlConnectionManager;

use super::{prefix_like_pattern, Database, Error, LogEntry};

const DRIVER: Driver = Driver::MySQL;

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_download_log_table = "
        CREATE TABLE IF NOT EXISTS download_log (
            id integer PRIMARY KEY AUTO_INCREMENT,
            timestamp BIGINT NOT NULL,
            permission_id BIGINT NOT NULL,
            user_id BIGINT NOT NULL,
            user_ip_address VARCHAR(100) NOT NULL
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_download_log_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_download_log_table = "
        DROP TABLE `download_log`;"
            .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_download_log_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::add_download_log_entry`](crate::core::databases::Database::add_download_log_entry).
    fn add_download_log_entry(&self, entry: &LogEntry) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO download_log (timestamp, permission_id, user_id, user_ip_address)
             VALUES (:timestamp, :permission_id, :user_id, :user_ip_address)",
            params! {
                "timestamp" => entry.timestamp,
                "permission_id" => entry.permission_id,
                "user_id" => entry.user_id,
                "user_ip_address" => &entry.user_ip_address,
            },
        )?;

        let affected_rows = conn.affected_rows();

        if affected_rows == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(usize::try_from(affected_rows).unwrap_or(usize::MAX))
        }
    }

    /// Refer to [`databases::Database::load_distinct_download_ips`](crate::core::databases::Database::load_distinct_download_ips).
    fn load_distinct_download_ips(&self, prefix: &str, limit: u32) -> Result<Vec<String>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let ips = conn.exec_map(
            "SELECT DISTINCT user_ip_address FROM download_log
             WHERE user_ip_address LIKE :pattern ESCAPE '\\\\' LIMIT :limit",
            params! {
                "pattern" => prefix_like_pattern(prefix),
                "limit" => limit,
            },
            |user_ip_address: String| user_ip_address,
        )?;

        Ok(ips)
    }
}
