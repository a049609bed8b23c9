//! The persistence module.
//!
//! Persistence is currently implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. If there are any changes,
//! > we will implement them or provide a script to migrate to the new schema.
//!
//! The only persistent object is the download log:
//!
//!  Field             | Sample data     | Description
//! ---|---|---
//!  `id`              | 1               | Autoincrement id
//!  `timestamp`       | 1672419840      | Unix epoch seconds when the download happened
//!  `permission_id`   | 42              | The download permission the customer used
//!  `user_id`         | 7               | The customer that downloaded the file
//!  `user_ip_address` | `203.0.113.5`   | The client IP address that initiated the download
//!
//! The admin API only reads from this table. The writer is the storefront
//! platform embedding this crate.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use self::error::Error;

/// The character used to escape `LIKE` pattern meta characters, so that a
/// caller-supplied prefix is always matched literally.
const LIKE_ESCAPE_CHAR: char = '\\';

/// One row of the download log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Unix epoch seconds when the download happened.
    pub timestamp: i64,
    /// The download permission the customer used.
    pub permission_id: i64,
    /// The customer that downloaded the file.
    pub user_id: i64,
    /// The client IP address that initiated the download, as text.
    pub user_ip_address: String,
}

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the
/// database.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the
    /// trait implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Download log

    /// It appends one row to the download log.
    ///
    /// # Context: Download log
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn add_download_log_entry(&self, entry: &LogEntry) -> Result<usize, Error>;

    /// It loads the distinct `user_ip_address` values that start with the
    /// literal `prefix`, bounded to `limit` rows.
    ///
    /// The prefix must be bound as a query parameter and its `LIKE` meta
    /// characters (`%`, `_` and the escape character itself) escaped, so the
    /// match is always literal.
    ///
    /// # Context: Download log
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_distinct_download_ips(&self, prefix: &str, limit: u32) -> Result<Vec<String>, Error>;
}

/// It turns a literal prefix into a `LIKE` pattern matching values that start
/// with that exact prefix.
#[must_use]
fn prefix_like_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);

    for character in prefix.chars() {
        if matches!(character, '%' | '_' | LIKE_ESCAPE_CHAR) {
            pattern.push(LIKE_ESCAPE_CHAR);
        }
        pattern.push(character);
    }

    pattern.push('%');

    pattern
}
