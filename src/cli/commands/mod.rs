pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod hours;
pub mod init;
pub mod list;
pub mod log;
pub mod register;
pub mod seed;
pub mod user;

use crate::config::Config;
use crate::db::{EntityKind, EntityStore};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

/// `users`, `orgs`, `events`, `records` (singular accepted).
pub(crate) fn parse_kind(code: &str) -> AppResult<EntityKind> {
    EntityKind::from_code(code).ok_or_else(|| AppError::InvalidEnum {
        enum_name: "kind",
        value: code.to_string(),
    })
}

pub(crate) fn open_store(cfg: &Config) -> AppResult<EntityStore> {
    EntityStore::open(&cfg.database)
}

/// Print blob-decode warnings gathered while serving the command.
pub(crate) fn report_warnings(store: &mut EntityStore) {
    for w in store.take_warnings() {
        warning(w);
    }
}
