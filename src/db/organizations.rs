use crate::db::codec::DecodeWarning;
use crate::db::db_utils::lift;
use crate::db::entity::{Entity, EntityKind};
use crate::errors::AppResult;
use crate::models::{Address, Organization};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_ORGS: &str = "SELECT orgID, orgName, contactPersonName, contactEmail, contactPhone,
        password, description, addressStreet, addressCity, addressState, addressZipCode
 FROM organizations";

fn map_row(row: &Row) -> rusqlite::Result<Organization> {
    Ok(Organization {
        org_id: row.get("orgID")?,
        org_name: row.get("orgName")?,
        contact_person_name: row.get("contactPersonName")?,
        contact_email: row.get("contactEmail")?,
        contact_phone: row.get("contactPhone")?,
        password: row.get("password")?,
        description: row.get("description")?,
        address: Address {
            street: row.get("addressStreet")?,
            city: row.get("addressCity")?,
            state: row.get("addressState")?,
            zip: row.get("addressZipCode")?,
        },
        posted_events: Vec::new(),
    })
}

/// IDs of the events an organization posted, in storage order.
fn posted_event_ids(conn: &Connection, org_id: &str) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT eventID FROM events WHERE orgID = ?1 ORDER BY rowid")?;
    let rows = stmt.query_map([org_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl Entity for Organization {
    const KIND: EntityKind = EntityKind::Organization;

    fn id(&self) -> &str {
        &self.org_id
    }

    fn validate(&self) -> AppResult<()> {
        Organization::validate(self)
    }

    fn insert_row(conn: &Connection, o: &Organization) -> AppResult<()> {
        conn.execute(
            "INSERT INTO organizations (orgID, orgName, contactPersonName, contactEmail,
                                        contactPhone, password, description, addressStreet,
                                        addressCity, addressState, addressZipCode)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                o.org_id,
                o.org_name,
                o.contact_person_name,
                o.contact_email,
                o.contact_phone,
                o.password,
                o.description,
                o.address.street,
                o.address.city,
                o.address.state,
                o.address.zip,
            ],
        )?;
        Ok(())
    }

    fn update_row(conn: &Connection, o: &Organization) -> AppResult<usize> {
        let changed = conn.execute(
            "UPDATE organizations
             SET orgName = ?1, contactPersonName = ?2, contactEmail = ?3, contactPhone = ?4,
                 password = ?5, description = ?6, addressStreet = ?7, addressCity = ?8,
                 addressState = ?9, addressZipCode = ?10
             WHERE orgID = ?11",
            params![
                o.org_name,
                o.contact_person_name,
                o.contact_email,
                o.contact_phone,
                o.password,
                o.description,
                o.address.street,
                o.address.city,
                o.address.state,
                o.address.zip,
                o.org_id,
            ],
        )?;
        Ok(changed)
    }

    fn load(
        conn: &Connection,
        id: &str,
        _warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Option<Organization>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_ORGS} WHERE orgID = ?1"))?;
        let org = stmt.query_row([id], map_row).optional().map_err(lift)?;

        match org {
            Some(mut o) => {
                o.posted_events = posted_event_ids(conn, &o.org_id)?;
                Ok(Some(o))
            }
            None => Ok(None),
        }
    }

    fn load_all(
        conn: &Connection,
        _warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Vec<Organization>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_ORGS} ORDER BY rowid"))?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            let mut o = r.map_err(lift)?;
            o.posted_events = posted_event_ids(conn, &o.org_id)?;
            out.push(o);
        }
        Ok(out)
    }
}
