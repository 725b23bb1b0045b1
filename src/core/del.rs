use crate::db::{EntityKind, EntityStore};
use crate::errors::AppResult;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entity. Referenced rows are refused by the store and the
    /// error is handed back unchanged.
    pub fn apply(store: &mut EntityStore, kind: EntityKind, id: &str) -> AppResult<()> {
        store.delete_kind(kind, id)?;
        info!(kind = kind.label(), id, "entity deleted");
        Ok(())
    }

    /// Rows that currently block deleting `id`, e.g. `"2 volunteer record(s)"`.
    pub fn preview(store: &EntityStore, kind: EntityKind, id: &str) -> AppResult<Vec<String>> {
        store.blocking_dependents(kind, id)
    }
}
