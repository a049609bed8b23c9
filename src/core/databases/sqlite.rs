//! The `SQLite3` database driver.
use std::panic::Location;

use downlog_api_configuration::Driver;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::params;
use r2d2_sqlite::SqliteConnectionManager;

use super::{prefix_like_pattern, Database, Error, LogEntry};

const DRIVER: Driver = Driver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_download_log_table = "
        CREATE TABLE IF NOT EXISTS download_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp INTEGER NOT NULL,
            permission_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            user_ip_address TEXT NOT NULL
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_download_log_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_download_log_table = "
        DROP TABLE download_log;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_download_log_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::add_download_log_entry`](crate::core::databases::Database::add_download_log_entry).
    fn add_download_log_entry(&self, entry: &LogEntry) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO download_log (timestamp, permission_id, user_id, user_ip_address) VALUES (?1, ?2, ?3, ?4)",
            params![entry.timestamp, entry.permission_id, entry.user_id, entry.user_ip_address],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::load_distinct_download_ips`](crate::core::databases::Database::load_distinct_download_ips).
    fn load_distinct_download_ips(&self, prefix: &str, limit: u32) -> Result<Vec<String>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT user_ip_address FROM download_log WHERE user_ip_address LIKE ?1 ESCAPE '\\' LIMIT ?2",
        )?;

        let ip_iter = stmt.query_map(params![prefix_like_pattern(prefix), limit], |row| {
            row.get::<_, String>(0)
        })?;

        // A row that cannot be read is a failed search, not a smaller one.
        let ips = ip_iter.collect::<Result<Vec<String>, _>>()?;

        Ok(ips)
    }
}
