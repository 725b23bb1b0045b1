use crate::cli::commands::{open_store, parse_kind};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { kind, id, force } = cmd {
        let kind = parse_kind(kind)?;
        let mut store = open_store(cfg)?;

        if !store.exists_kind(kind, id)? {
            return Err(AppError::NotFound {
                kind: kind.label(),
                id: id.clone(),
            });
        }

        // a referenced entity is refused by the store, no need to ask
        let blocked = !DeleteLogic::preview(&store, kind, id)?.is_empty();

        if !blocked
            && !*force
            && !ask_confirmation(&format!(
                "Delete {} '{}'? This action is irreversible.",
                kind.label(),
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut store, kind, id)?;
        success(format!("{} '{}' has been deleted.", kind.label(), id));
    }

    Ok(())
}
