mod extract;
mod handlers;
mod schema;
mod startup;

#[cfg(test)]
mod testing;

use std::{path::PathBuf, sync::Arc};

use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
};
use axum::{Extension, Router, Server};
use clap::Parser;
use common::{config::Config, logging};
use tracing::{error, info};

use crate::handlers::SharedStore;

/// CLI metrics ingestion server.
#[derive(Parser)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Full path to the SQLite database file, which will be created if it does not exist.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Port on which the server should listen.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.config)?;

    if let Some(path) = cli.path {
        config.database.path = path;
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    logging::init(&config);

    let address = config.server.socket_addr();

    info!(%address, "server will listen");
    info!(path = %config.database.path.display(), "using database file");

    let store = match startup::initialize(&config.database).await {
        Ok(store) => store,
        Err(err) => {
            error!(%err, "unable to initialize log item store");
            return Err(err.into());
        }
    };

    Server::bind(&address)
        .serve(app_router(Arc::new(store)).into_make_service())
        .await?;

    Ok(())
}

fn app_router(store: SharedStore) -> Router {
    let mut api = OpenApi {
        info: Info {
            title: String::from("CLI metrics ingestion API"),
            version: String::from(env!("CARGO_PKG_VERSION")),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    let router = ApiRouter::new()
        .merge(handlers::log_items::routes())
        .merge(handlers::health::routes())
        .merge(handlers::docs::routes())
        .finish_api(&mut api);

    router.layer(Extension(Arc::new(api))).with_state(store)
}
