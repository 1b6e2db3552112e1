//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary and applied at startup, before
//! the server starts accepting traffic. The harness is synchronous, so the
//! run happens on a blocking thread over a sync-wrapped async connection.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// All migrations under `migrations/`, embedded at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Failures while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database was unreachable.
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },

    /// A migration failed to apply.
    #[error("failed to run migrations: {message}")]
    Run { message: String },
}

/// Apply every pending migration against `database_url`.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn: AsyncConnectionWrapper<AsyncPgConnection> =
            AsyncConnectionWrapper::establish(&url).map_err(|err| MigrationError::Connect {
                message: err.to_string(),
            })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| MigrationError::Run {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError::Run {
        message: err.to_string(),
    })??;

    info!(applied, "database migrations up to date");
    Ok(())
}
