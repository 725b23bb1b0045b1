use crate::cli::commands::{open_store, report_warnings};
use crate::cli::parser::{Commands, UserAction, UserFields};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User, new_id};
use crate::ui::messages::{info, success};

fn parse_role(code: &str) -> AppResult<Role> {
    Role::from_code(code).ok_or_else(|| AppError::InvalidEnum {
        enum_name: "role",
        value: code.to_string(),
    })
}

fn required(value: &Option<String>, field: &'static str) -> AppResult<String> {
    value
        .clone()
        .ok_or_else(|| AppError::invalid(field, "is required"))
}

/// Handle `user add` and `user edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    match action {
        UserAction::Add { fields } => {
            let role = match &fields.role {
                Some(code) => parse_role(code)?,
                None => Role::Volunteer,
            };
            let user = User::new(
                new_id("user"),
                required(&fields.first, "firstName")?,
                required(&fields.last, "lastName")?,
                required(&fields.email, "email")?,
                fields.password.clone().unwrap_or_default(),
                role,
            );

            let mut store = open_store(cfg)?;
            store.insert(&user)?;
            success(format!(
                "User {} created: {} ({})",
                user.user_id,
                user.full_name(),
                user.role.to_db_str()
            ));
        }

        UserAction::Edit { id, fields } => {
            let mut store = open_store(cfg)?;
            let mut user: User = store.get(id)?;

            if !apply_fields(&mut user, fields)? {
                info("Nothing to change.");
                return Ok(());
            }
            store.update(&user)?;
            report_warnings(&mut store);

            success(format!(
                "User {} updated: {} <{}> ({})",
                user.user_id,
                user.full_name(),
                user.email,
                user.role.to_db_str()
            ));
        }
    }
    Ok(())
}

/// Copy the given fields onto `user`. Returns false when none was given.
fn apply_fields(user: &mut User, fields: &UserFields) -> AppResult<bool> {
    let mut changed = false;

    if let Some(first) = &fields.first {
        user.first_name = first.clone();
        changed = true;
    }
    if let Some(last) = &fields.last {
        user.last_name = last.clone();
        changed = true;
    }
    if let Some(email) = &fields.email {
        user.email = email.clone();
        changed = true;
    }
    if let Some(password) = &fields.password {
        user.password = password.clone();
        changed = true;
    }
    if let Some(code) = &fields.role {
        user.role = parse_role(code)?;
        changed = true;
    }
    Ok(changed)
}
