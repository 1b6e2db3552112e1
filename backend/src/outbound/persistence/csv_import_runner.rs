//! Production import runner: CSV resource into PostgreSQL.
//!
//! Each run builds its own single-connection pool so the import never
//! shares connections with request handling; dropping the pool at the end
//! of the run releases that connection.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::domain::import::{ImportError, ImportSummary, import_users_from_csv};
use crate::domain::ports::ImportRunner;

use super::diesel_user_repository::DieselUserRepository;
use super::pool::{DbPool, PoolConfig};

/// CSV-over-PostgreSQL implementation of the `ImportRunner` port.
pub struct CsvImportRunner {
    database_url: String,
    csv_path: PathBuf,
}

impl CsvImportRunner {
    /// Create a runner reading `csv_path` and writing through `database_url`.
    pub fn new(database_url: impl Into<String>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            database_url: database_url.into(),
            csv_path: csv_path.into(),
        }
    }
}

#[async_trait]
impl ImportRunner for CsvImportRunner {
    async fn run(&self) -> Result<ImportSummary, ImportError> {
        let config = PoolConfig::new(&self.database_url).with_max_size(1);
        let pool = DbPool::new(config)
            .await
            .map_err(|err| ImportError::Storage {
                message: err.to_string(),
            })?;
        let repository = DieselUserRepository::new(pool);

        info!(path = %self.csv_path.display(), "starting csv user import");
        import_users_from_csv(&repository, &self.csv_path).await
    }
}
