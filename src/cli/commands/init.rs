use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EntityStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Creates the config file (skipped with `--test`) and bootstraps the
/// database schema. Running it again on an existing database is harmless.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing volunteerhub…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", db_path);

    let store = EntityStore::open(&db_path)?;

    if let Err(e) = audit(
        store.conn(),
        "init",
        "",
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    store.close()?;
    success(format!("Database initialized at {db_path}"));
    Ok(())
}
