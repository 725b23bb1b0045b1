use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::{EntityStore, stats};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn step(label: &str) {
    println!("{CYAN}▶ {label}…{RESET}");
}

fn done(label: &str) {
    println!("{GREEN}✔ {label}{RESET}\n");
}

fn integrity_check(store: &EntityStore) -> AppResult<()> {
    step("Checking integrity");
    let verdict: String = store
        .conn()
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if verdict == "ok" {
        done("Integrity check passed.");
    } else {
        println!("{RED}✘ Integrity check failed:{RESET} {verdict}\n");
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening the store already applies pending migrations
        let store = open_store(cfg)?;

        if *migrate {
            step("Applying schema migrations");
            run_pending_migrations(store.conn())?;
            done("Schema is up to date.");
        }
        if *info {
            stats::print_db_info(&store)?;
        }
        if *check {
            integrity_check(&store)?;
        }
        if *vacuum {
            step("Compacting database");
            store.conn().execute_batch("VACUUM;")?;
            done("Vacuum completed.");
        }
    }

    Ok(())
}
