use std::path::PathBuf;

use clap::Parser;
use sea_orm_cli::MigrateSubcommands;

#[derive(Parser)]
pub(crate) struct Cli {
    /// Path to the configuration file.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Full path to the SQLite database file, overrides configuration value.
    #[clap(long)]
    pub path: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<MigrateSubcommands>,
}
