use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation to the migration engine; any failure here
/// means the process cannot continue.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| AppError::Bootstrap(e.to_string()))?;

    run_pending_migrations(conn).map_err(|e| AppError::Bootstrap(e.to_string()))?;
    Ok(())
}
