use crate::cli::commands::{open_store, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Event, User};
use crate::ui::messages::success;

/// Handle `register` and `unregister`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (event_id, user_id, joining) = match cmd {
        Commands::Register { event, user } => (event, user, true),
        Commands::Unregister { event, user } => (event, user, false),
        _ => return Ok(()),
    };

    let mut store = open_store(cfg)?;
    let mut event: Event = store.get(event_id)?;
    let user: User = store.get(user_id)?;

    let current = if joining {
        event.add_volunteer(&user)?
    } else {
        event.remove_volunteer(&user)?
    };
    store.update(&event)?;
    report_warnings(&mut store);

    let verb = if joining {
        "registered for"
    } else {
        "removed from"
    };
    success(format!(
        "{} {} '{}' ({}/{} volunteers)",
        user.full_name(),
        verb,
        event.title,
        current,
        event.max_volunteers()
    ));
    Ok(())
}
