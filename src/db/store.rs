//! The entity store: one SQLite connection with an explicit lifecycle.
//!
//! Every public operation runs in its own transaction. Dropping the
//! transaction on an error path rolls it back, so a failed call leaves the
//! database as it was before the call.

use crate::db::codec::DecodeWarning;
use crate::db::entity::{Entity, EntityKind};
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::{events, records};
use crate::errors::{AppError, AppResult};
use crate::models::{Event, Organization, User, VolunteerRecord};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

pub struct EntityStore {
    conn: Connection,
    path: String,
    warnings: Vec<DecodeWarning>,
}

impl EntityStore {
    /// Open (or create) the database file and bootstrap the schema.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::StoreUnavailable(format!("{path}: {e}")))?;
        Self::with_connection(conn, path)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;
        Self::with_connection(conn, ":memory:")
    }

    fn with_connection(conn: Connection, path: &str) -> AppResult<Self> {
        let mut store = Self {
            conn,
            path: path.to_string(),
            warnings: Vec::new(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Create missing tables. Safe to call on every start.
    pub fn initialize(&mut self) -> AppResult<()> {
        init_db(&self.conn)
    }

    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read-only access for diagnostics (`db --info`, `log --print`).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Drain blob-decode warnings gathered by earlier reads.
    pub fn take_warnings(&mut self) -> Vec<DecodeWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn insert<E: Entity>(&mut self, entity: &E) -> AppResult<()> {
        entity.validate()?;

        let kind = E::KIND;
        let tx = self.conn.transaction()?;

        if row_exists(&tx, kind, entity.id())? {
            return Err(AppError::DuplicateKey {
                kind: kind.label(),
                id: entity.id().to_string(),
            });
        }
        check_references(&tx, entity)?;

        E::insert_row(&tx, entity)?;
        audit(&tx, "insert", &target(kind, entity.id()), "created")?;
        tx.commit()?;

        debug!(kind = kind.label(), id = entity.id(), "inserted");
        Ok(())
    }

    pub fn get<E: Entity>(&mut self, id: &str) -> AppResult<E> {
        let tx = self.conn.transaction()?;
        let found = E::load(&tx, id, &mut self.warnings)?;
        tx.commit()?;

        found.ok_or_else(|| AppError::NotFound {
            kind: E::KIND.label(),
            id: id.to_string(),
        })
    }

    pub fn get_all<E: Entity>(&mut self) -> AppResult<Vec<E>> {
        let tx = self.conn.transaction()?;
        let all = E::load_all(&tx, &mut self.warnings)?;
        tx.commit()?;
        Ok(all)
    }

    /// Overwrite every stored field of an existing entity.
    pub fn update<E: Entity>(&mut self, entity: &E) -> AppResult<()> {
        entity.validate()?;

        let kind = E::KIND;
        let tx = self.conn.transaction()?;

        if !row_exists(&tx, kind, entity.id())? {
            return Err(AppError::NotFound {
                kind: kind.label(),
                id: entity.id().to_string(),
            });
        }
        check_references(&tx, entity)?;

        E::update_row(&tx, entity)?;
        audit(&tx, "update", &target(kind, entity.id()), "updated")?;
        tx.commit()?;

        debug!(kind = kind.label(), id = entity.id(), "updated");
        Ok(())
    }

    /// Delete one entity. Refused while other rows still point at it.
    pub fn delete<E: Entity>(&mut self, id: &str) -> AppResult<()> {
        let kind = E::KIND;
        let tx = self.conn.transaction()?;

        if !row_exists(&tx, kind, id)? {
            return Err(AppError::NotFound {
                kind: kind.label(),
                id: id.to_string(),
            });
        }

        let blocking = count_dependents(&tx, kind, id)?;
        if !blocking.is_empty() {
            return Err(AppError::Referenced {
                kind: kind.label(),
                id: id.to_string(),
                dependents: blocking.join(", "),
            });
        }

        E::delete_owned(&tx, id)?;
        tx.execute(
            &format!(
                "DELETE FROM {} WHERE {} = ?1",
                kind.table(),
                kind.id_column()
            ),
            [id],
        )?;
        audit(&tx, "delete", &target(kind, id), "deleted")?;
        tx.commit()?;

        debug!(kind = kind.label(), id, "deleted");
        Ok(())
    }

    /// Same as [`EntityStore::delete`] with the kind chosen at runtime.
    pub fn delete_kind(&mut self, kind: EntityKind, id: &str) -> AppResult<()> {
        match kind {
            EntityKind::User => self.delete::<User>(id),
            EntityKind::Organization => self.delete::<Organization>(id),
            EntityKind::Event => self.delete::<Event>(id),
            EntityKind::Record => self.delete::<VolunteerRecord>(id),
        }
    }

    /// Rows that would block deleting `id`, e.g. `"2 volunteer record(s)"`.
    pub fn blocking_dependents(&self, kind: EntityKind, id: &str) -> AppResult<Vec<String>> {
        count_dependents(&self.conn, kind, id)
    }

    pub fn exists<E: Entity>(&self, id: &str) -> AppResult<bool> {
        row_exists(&self.conn, E::KIND, id)
    }

    /// [`EntityStore::exists`] with the kind chosen at runtime.
    pub fn exists_kind(&self, kind: EntityKind, id: &str) -> AppResult<bool> {
        row_exists(&self.conn, kind, id)
    }

    pub fn count(&self, kind: EntityKind) -> AppResult<usize> {
        let n: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table()),
            [],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    /// Events whose `orgID` is `org_id`.
    pub fn events_for_org(&mut self, org_id: &str) -> AppResult<Vec<Event>> {
        let tx = self.conn.transaction()?;
        let out = events::load_for_org(&tx, org_id, &mut self.warnings)?;
        tx.commit()?;
        Ok(out)
    }

    pub fn records_for_user(&self, user_id: &str) -> AppResult<Vec<VolunteerRecord>> {
        records::load_for_user(&self.conn, user_id)
    }

    pub fn records_for_event(&self, event_id: &str) -> AppResult<Vec<VolunteerRecord>> {
        records::load_for_event(&self.conn, event_id)
    }
}

fn target(kind: EntityKind, id: &str) -> String {
    format!("{}:{}", kind.table(), id)
}

fn row_exists(conn: &Connection, kind: EntityKind, id: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            &format!(
                "SELECT 1 FROM {} WHERE {} = ?1 LIMIT 1",
                kind.table(),
                kind.id_column()
            ),
            [id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn count_dependents(conn: &Connection, kind: EntityKind, id: &str) -> AppResult<Vec<String>> {
    let mut out = Vec::new();
    for dep in kind.dependents() {
        let n: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {} WHERE {} = ?1",
                dep.table, dep.column
            ),
            [id],
            |row| row.get(0),
        )?;
        if n > 0 {
            out.push(format!("{n} {}", dep.label));
        }
    }
    Ok(out)
}

fn check_references<E: Entity>(conn: &Connection, entity: &E) -> AppResult<()> {
    for (target_kind, target_id) in entity.references() {
        if !row_exists(conn, target_kind, target_id)? {
            return Err(AppError::MissingReference {
                kind: E::KIND.label(),
                id: entity.id().to_string(),
                target: target_kind.label(),
                target_id: target_id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Role};
    use chrono::{NaiveDate, NaiveTime};

    fn org() -> Organization {
        Organization::new(
            "org-1",
            "Liberty University",
            "James Dollens",
            "jdollens@liberty.edu",
            "555-123-4567",
            "lu_pass",
            "University CSER program.",
            Address::new("1971 University Blvd", "Lynchburg", "VA", "24515"),
        )
    }

    fn event(id: &str) -> Event {
        Event::new(
            id,
            "Elementary Tutoring",
            "Help kids with homework",
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            Address::new("1971 University Blvd", "Lynchburg", "VA", "24515"),
            3,
            vec![],
            "org-1",
            "jdollens@liberty.edu",
        )
        .unwrap()
    }

    #[test]
    fn failed_insert_leaves_no_audit_line() {
        let mut store = EntityStore::open_in_memory().unwrap();
        store.insert(&org()).unwrap();
        let before = crate::db::log::load_log(store.conn()).unwrap().len();

        assert!(store.insert(&org()).is_err());

        let after = crate::db::log::load_log(store.conn()).unwrap().len();
        assert_eq!(before, after);
    }

    #[test]
    fn event_delete_drops_its_registrations() {
        let mut store = EntityStore::open_in_memory().unwrap();
        store.insert(&org()).unwrap();
        let u = User::new("u1", "A", "B", "a@b.c", "pw", Role::Volunteer);
        store.insert(&u).unwrap();

        let mut ev = event("event-1");
        ev.add_volunteer(&u).unwrap();
        store.insert(&ev).unwrap();

        store.delete::<Event>("event-1").unwrap();
        let left: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM event_volunteers", [], |r| r.get(0))
            .unwrap();
        assert_eq!(left, 0);

        // the user is free to go once the registration is gone
        store.delete::<User>("u1").unwrap();
    }

    #[test]
    fn counts_per_kind() {
        let mut store = EntityStore::open_in_memory().unwrap();
        assert_eq!(store.count(EntityKind::Event).unwrap(), 0);
        store.insert(&org()).unwrap();
        store.insert(&event("e1")).unwrap();
        store.insert(&event("e2")).unwrap();
        assert_eq!(store.count(EntityKind::Event).unwrap(), 2);
        assert_eq!(store.count(EntityKind::Organization).unwrap(), 1);
    }
}
