use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::seed;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { users } = cmd {
        let mut store = open_store(cfg)?;
        let report = seed::populate(&mut store, users.unwrap_or(cfg.seed_users))?;

        if report.is_empty() {
            info("Database already has users: nothing seeded.");
        } else {
            success(format!(
                "Seeded {} user(s), {} organization(s), {} event(s).",
                report.users, report.organizations, report.events
            ));
        }
    }
    Ok(())
}
