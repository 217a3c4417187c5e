mod cli;

use std::error::Error;

use clap::Parser;
use cli::Cli;
use common::{config::Config, logging};
use migration::{cli::run_migrate, sea_orm::Database};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.config)?;

    if let Some(path) = cli.path {
        config.database.path = path;
    }

    logging::init(&config);

    info!(path = %config.database.path.display(), "connecting to database");
    let db = Database::connect(config.database.url()).await?;
    info!("database connection established");

    run_migrate(migration::Migrator, &db, cli.command, false).await?;

    Ok(())
}
