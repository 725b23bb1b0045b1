//! volunteerhub library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Seed { .. } => cli::commands::seed::handle(cmd, cfg),
        Commands::User { .. } => cli::commands::user::handle(cmd, cfg),
        Commands::List { .. } | Commands::Show { .. } => cli::commands::list::handle(cmd, cfg),
        Commands::Register { .. } | Commands::Unregister { .. } => {
            cli::commands::register::handle(cmd, cfg)
        }
        Commands::Submit { .. } | Commands::Review { .. } | Commands::Hours { .. } => {
            cli::commands::hours::handle(cmd, cfg)
        }
        Commands::Delete { .. } => cli::commands::del::handle(cmd, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cmd, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cmd, cfg),
        Commands::Db { .. } => cli::commands::db::handle(cmd, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // loaded once, then the --db override wins
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
