use common::config;
use db::{Database, DatabaseStore, DbErr};
use derive_more::{Display, Error};
use migration::{Migrator, MigratorTrait};
use tracing::info;

/// Errors that may occur while preparing the log item store.
///
/// Any of these is fatal, the server is unable to proceed without a store.
#[derive(Debug, Display, Error)]
pub(crate) enum InitError {
    /// Database file could not be opened or created.
    #[display(fmt = "unable to open database: {}", _0)]
    Open(DbErr),

    /// Logs table could not be established.
    #[display(fmt = "unable to create logs table: {}", _0)]
    Schema(DbErr),
}

/// Open or create the database file and ensure that the logs table exists.
pub(crate) async fn initialize(config: &config::Database) -> Result<DatabaseStore, InitError> {
    if config.path.exists() {
        info!(path = %config.path.display(), "database file already exists");
    } else {
        info!(path = %config.path.display(), "database file does not exist and will be created");
    }

    let connection = Database::connect(config.url())
        .await
        .map_err(InitError::Open)?;

    Migrator::up(&connection, None)
        .await
        .map_err(InitError::Schema)?;

    Ok(DatabaseStore::new(connection))
}
