use crate::db::codec::{self, DecodeWarning};
use crate::db::db_utils::{format_date, format_time, lift, parse_date, parse_time};
use crate::db::entity::{Entity, EntityKind};
use crate::errors::AppResult;
use crate::models::{Address, Event};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::HashMap;

const SELECT_EVENTS: &str = "SELECT eventID, title, description, date, startTime, endTime,
        locationStreet, locationCity, locationState, locationZipCode,
        maxVolunteers, currentVolunteers, requiredSkills, orgID, contactInfo
 FROM events";

fn map_row(row: &Row, warnings: &mut Vec<DecodeWarning>) -> rusqlite::Result<Event> {
    let event_id: String = row.get("eventID")?;
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("startTime")?;
    let end_str: String = row.get("endTime")?;

    let blob: Option<Vec<u8>> = row.get("requiredSkills")?;
    let required_skills: Vec<String> =
        codec::decode_column(blob.as_deref(), "requiredSkills", &event_id, warnings);

    Ok(Event {
        event_id,
        title: row.get("title")?,
        description: row.get("description")?,
        date: parse_date(3, &date_str)?,
        start_time: parse_time(4, &start_str)?,
        end_time: parse_time(5, &end_str)?,
        location: Address {
            street: row.get("locationStreet")?,
            city: row.get("locationCity")?,
            state: row.get("locationState")?,
            zip: row.get("locationZipCode")?,
        },
        required_skills,
        org_id: row.get("orgID")?,
        contact_info: row.get("contactInfo")?,
        max_volunteers: row.get("maxVolunteers")?,
        // filled from event_volunteers by the caller
        registered_volunteers: Vec::new(),
    })
}

fn registrations(conn: &Connection, event_id: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT userID FROM event_volunteers WHERE eventID = ?1 ORDER BY position ASC",
    )?;
    let rows = stmt.query_map([event_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn all_registrations(conn: &Connection) -> AppResult<HashMap<String, Vec<String>>> {
    let mut stmt = conn.prepare_cached(
        "SELECT eventID, userID FROM event_volunteers ORDER BY eventID, position ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for r in rows {
        let (event_id, user_id) = r?;
        out.entry(event_id).or_default().push(user_id);
    }
    Ok(out)
}

/// Replace the stored membership of `ev` with its in-memory list.
fn write_registrations(conn: &Connection, ev: &Event) -> AppResult<()> {
    conn.execute(
        "DELETE FROM event_volunteers WHERE eventID = ?1",
        [&ev.event_id],
    )?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO event_volunteers (eventID, userID, position) VALUES (?1, ?2, ?3)",
    )?;
    for (pos, user_id) in ev.registered_volunteers.iter().enumerate() {
        stmt.execute(params![ev.event_id, user_id, pos as i64])?;
    }
    Ok(())
}

/// Events posted by one organization, in storage order.
pub(crate) fn load_for_org(
    conn: &Connection,
    org_id: &str,
    warnings: &mut Vec<DecodeWarning>,
) -> AppResult<Vec<Event>> {
    let mut stmt =
        conn.prepare_cached(&format!("{SELECT_EVENTS} WHERE orgID = ?1 ORDER BY rowid"))?;
    let rows = stmt.query_map([org_id], |row| map_row(row, warnings))?;

    let mut out = Vec::new();
    for r in rows {
        let mut ev = r.map_err(lift)?;
        ev.registered_volunteers = registrations(conn, &ev.event_id)?;
        out.push(ev);
    }
    Ok(out)
}

impl Entity for Event {
    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> &str {
        &self.event_id
    }

    fn validate(&self) -> AppResult<()> {
        Event::validate(self)
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        let mut refs = vec![(EntityKind::Organization, self.org_id.as_str())];
        refs.extend(
            self.registered_volunteers
                .iter()
                .map(|u| (EntityKind::User, u.as_str())),
        );
        refs
    }

    fn insert_row(conn: &Connection, ev: &Event) -> AppResult<()> {
        let skills = codec::encode(&ev.required_skills)?;
        conn.execute(
            "INSERT INTO events (eventID, title, description, date, startTime, endTime,
                                 locationStreet, locationCity, locationState, locationZipCode,
                                 maxVolunteers, currentVolunteers, requiredSkills, orgID,
                                 contactInfo)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                ev.event_id,
                ev.title,
                ev.description,
                format_date(&ev.date),
                format_time(&ev.start_time),
                format_time(&ev.end_time),
                ev.location.street,
                ev.location.city,
                ev.location.state,
                ev.location.zip,
                ev.max_volunteers,
                ev.current_volunteers(),
                skills,
                ev.org_id,
                ev.contact_info,
            ],
        )?;
        write_registrations(conn, ev)
    }

    fn update_row(conn: &Connection, ev: &Event) -> AppResult<usize> {
        let skills = codec::encode(&ev.required_skills)?;
        let changed = conn.execute(
            "UPDATE events
             SET title = ?1, description = ?2, date = ?3, startTime = ?4, endTime = ?5,
                 locationStreet = ?6, locationCity = ?7, locationState = ?8,
                 locationZipCode = ?9, maxVolunteers = ?10, currentVolunteers = ?11,
                 requiredSkills = ?12, orgID = ?13, contactInfo = ?14
             WHERE eventID = ?15",
            params![
                ev.title,
                ev.description,
                format_date(&ev.date),
                format_time(&ev.start_time),
                format_time(&ev.end_time),
                ev.location.street,
                ev.location.city,
                ev.location.state,
                ev.location.zip,
                ev.max_volunteers,
                ev.current_volunteers(),
                skills,
                ev.org_id,
                ev.contact_info,
                ev.event_id,
            ],
        )?;
        if changed > 0 {
            write_registrations(conn, ev)?;
        }
        Ok(changed)
    }

    fn delete_owned(conn: &Connection, id: &str) -> AppResult<()> {
        conn.execute("DELETE FROM event_volunteers WHERE eventID = ?1", [id])?;
        Ok(())
    }

    fn load(
        conn: &Connection,
        id: &str,
        warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Option<Event>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENTS} WHERE eventID = ?1"))?;
        let ev = stmt
            .query_row([id], |row| map_row(row, warnings))
            .optional()
            .map_err(lift)?;

        match ev {
            Some(mut ev) => {
                ev.registered_volunteers = registrations(conn, &ev.event_id)?;
                Ok(Some(ev))
            }
            None => Ok(None),
        }
    }

    fn load_all(conn: &Connection, warnings: &mut Vec<DecodeWarning>) -> AppResult<Vec<Event>> {
        let mut members = all_registrations(conn)?;

        let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENTS} ORDER BY rowid"))?;
        let rows = stmt.query_map([], |row| map_row(row, warnings))?;

        let mut out = Vec::new();
        for r in rows {
            let mut ev = r.map_err(lift)?;
            ev.registered_volunteers = members.remove(&ev.event_id).unwrap_or_default();
            out.push(ev);
        }
        Ok(out)
    }
}
