use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

const INITIAL_SCHEMA: &str = "20251015_0001_initial_schema";

/// Ensure that the `log` table exists. Migration markers live there too.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_entity_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            userID                TEXT PRIMARY KEY,
            firstName             TEXT NOT NULL DEFAULT '',
            lastName              TEXT NOT NULL DEFAULT '',
            email                 TEXT NOT NULL DEFAULT '',
            password              TEXT NOT NULL DEFAULT '',
            role                  TEXT NOT NULL
                CHECK (role IN ('VOLUNTEER','ORGANIZATION_REPRESENTATIVE','ADMIN')),
            totalHours            REAL NOT NULL DEFAULT 0 CHECK (totalHours >= 0),
            academicSemesterHours BLOB
        );

        CREATE TABLE IF NOT EXISTS organizations (
            orgID             TEXT PRIMARY KEY,
            orgName           TEXT NOT NULL DEFAULT '',
            contactPersonName TEXT NOT NULL DEFAULT '',
            contactEmail      TEXT NOT NULL DEFAULT '',
            contactPhone      TEXT NOT NULL DEFAULT '',
            password          TEXT NOT NULL DEFAULT '',
            description       TEXT NOT NULL DEFAULT '',
            addressStreet     TEXT NOT NULL DEFAULT '',
            addressCity       TEXT NOT NULL DEFAULT '',
            addressState      TEXT NOT NULL DEFAULT '',
            addressZipCode    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS events (
            eventID           TEXT PRIMARY KEY,
            title             TEXT NOT NULL DEFAULT '',
            description       TEXT NOT NULL DEFAULT '',
            date              TEXT NOT NULL,          -- YYYY-MM-DD
            startTime         TEXT NOT NULL,          -- HH:MM:SS[.f]
            endTime           TEXT NOT NULL,          -- HH:MM:SS[.f]
            locationStreet    TEXT NOT NULL DEFAULT '',
            locationCity      TEXT NOT NULL DEFAULT '',
            locationState     TEXT NOT NULL DEFAULT '',
            locationZipCode   TEXT NOT NULL DEFAULT '',
            maxVolunteers     INTEGER NOT NULL CHECK (maxVolunteers > 0),
            currentVolunteers INTEGER NOT NULL DEFAULT 0
                CHECK (currentVolunteers BETWEEN 0 AND maxVolunteers),
            requiredSkills    BLOB,
            orgID             TEXT NOT NULL REFERENCES organizations(orgID),
            contactInfo       TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS records (
            recordID       TEXT PRIMARY KEY,
            userID         TEXT NOT NULL REFERENCES users(userID),
            eventID        TEXT NOT NULL REFERENCES events(eventID),
            hoursSubmitted REAL NOT NULL CHECK (hoursSubmitted >= 0),
            submissionDate TEXT NOT NULL,             -- YYYY-MM-DD
            status         TEXT NOT NULL DEFAULT 'PENDING'
                CHECK (status IN ('PENDING','APPROVED','REJECTED')),
            approverID     TEXT
        );

        CREATE TABLE IF NOT EXISTS event_volunteers (
            eventID  TEXT NOT NULL REFERENCES events(eventID),
            userID   TEXT NOT NULL REFERENCES users(userID),
            position INTEGER NOT NULL,
            PRIMARY KEY (eventID, userID)
        );

        CREATE INDEX IF NOT EXISTS idx_events_org ON events(orgID);
        CREATE INDEX IF NOT EXISTS idx_records_user ON records(userID);
        CREATE INDEX IF NOT EXISTS idx_records_event ON records(eventID);
        CREATE INDEX IF NOT EXISTS idx_event_volunteers_user ON event_volunteers(userID);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: create whatever is missing.
///
/// Every statement is `IF NOT EXISTS`, so running this against an
/// up-to-date database changes nothing. Invoked by `db::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entity_tables(conn)?;

    if !migration_applied(conn, INITIAL_SCHEMA)? {
        mark_applied(
            conn,
            INITIAL_SCHEMA,
            "Created users, organizations, events, records, event_volunteers",
        )?;
        info!(version = INITIAL_SCHEMA, "schema created");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get::<_, String>(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let names = table_names(&conn);
        for t in ["users", "organizations", "events", "records", "event_volunteers", "log"] {
            assert!(names.iter().any(|n| n == t), "missing table {t}");
        }

        let markers: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(markers, 1);
    }
}
