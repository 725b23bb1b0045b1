use crate::db::codec::DecodeWarning;
use crate::errors::AppResult;
use rusqlite::Connection;

/// The four persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Organization,
    Event,
    Record,
}

/// A row in another table that points at an entity.
pub struct Dependent {
    pub table: &'static str,
    pub column: &'static str,
    pub label: &'static str,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Organization => "Organization",
            EntityKind::Event => "Event",
            EntityKind::Record => "VolunteerRecord",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Organization => "organizations",
            EntityKind::Event => "events",
            EntityKind::Record => "records",
        }
    }

    pub fn id_column(&self) -> &'static str {
        match self {
            EntityKind::User => "userID",
            EntityKind::Organization => "orgID",
            EntityKind::Event => "eventID",
            EntityKind::Record => "recordID",
        }
    }

    /// Rows that would be left dangling by a delete. Deletes are refused
    /// while any of them exist.
    pub fn dependents(&self) -> &'static [Dependent] {
        match self {
            EntityKind::User => &[
                Dependent {
                    table: "records",
                    column: "userID",
                    label: "volunteer record(s)",
                },
                Dependent {
                    table: "event_volunteers",
                    column: "userID",
                    label: "event registration(s)",
                },
            ],
            EntityKind::Organization => &[Dependent {
                table: "events",
                column: "orgID",
                label: "event(s)",
            }],
            EntityKind::Event => &[Dependent {
                table: "records",
                column: "eventID",
                label: "volunteer record(s)",
            }],
            EntityKind::Record => &[],
        }
    }

    /// Helper: CLI input (`user`, `org`, `event`, `record`, plural accepted)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().trim_end_matches('s') {
            "user" => Some(EntityKind::User),
            "org" | "organization" => Some(EntityKind::Organization),
            "event" => Some(EntityKind::Event),
            "record" => Some(EntityKind::Record),
            _ => None,
        }
    }
}

/// Row mapping for one entity kind. The store wraps every call in its own
/// transaction; implementations only issue statements.
pub trait Entity: Sized {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn validate(&self) -> AppResult<()>;

    /// Parent rows that must exist before this entity can be written.
    fn references(&self) -> Vec<(EntityKind, &str)> {
        Vec::new()
    }

    fn insert_row(conn: &Connection, entity: &Self) -> AppResult<()>;

    /// Returns the number of rows changed.
    fn update_row(conn: &Connection, entity: &Self) -> AppResult<usize>;

    /// Remove rows owned by the entity (not independent dependents).
    fn delete_owned(_conn: &Connection, _id: &str) -> AppResult<()> {
        Ok(())
    }

    fn load(
        conn: &Connection,
        id: &str,
        warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Option<Self>>;

    /// All rows in storage (insertion) order.
    fn load_all(conn: &Connection, warnings: &mut Vec<DecodeWarning>) -> AppResult<Vec<Self>>;
}
