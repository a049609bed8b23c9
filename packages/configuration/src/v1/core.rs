use serde::{Deserialize, Serialize};

use crate::v1::database::Database;

/// Core configuration: the download-log store the API reads from.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    // Database configuration.
    #[serde(default = "Core::default_database")]
    pub database: Database,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            database: Self::default_database(),
        }
    }
}

impl Core {
    fn default_database() -> Database {
        Database::default()
    }
}
