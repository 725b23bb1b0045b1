use crate::db::codec::DecodeWarning;
use crate::db::db_utils::{conversion_error, format_date, lift, parse_date};
use crate::db::entity::{Entity, EntityKind};
use crate::errors::{AppError, AppResult};
use crate::models::{RecordStatus, VolunteerRecord};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_RECORDS: &str = "SELECT recordID, userID, eventID, hoursSubmitted, submissionDate,
        status, approverID
 FROM records";

fn map_row(row: &Row) -> rusqlite::Result<VolunteerRecord> {
    let date_str: String = row.get("submissionDate")?;
    let status_str: String = row.get("status")?;

    let status = RecordStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(
            5,
            AppError::InvalidEnum {
                enum_name: "status",
                value: status_str.clone(),
            },
        )
    })?;

    Ok(VolunteerRecord {
        record_id: row.get("recordID")?,
        user_id: row.get("userID")?,
        event_id: row.get("eventID")?,
        hours_submitted: row.get("hoursSubmitted")?,
        submission_date: parse_date(4, &date_str)?,
        status,
        approver_id: row.get("approverID")?,
    })
}

fn collect(conn: &Connection, sql: &str, key: Option<&str>) -> AppResult<Vec<VolunteerRecord>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = match key {
        Some(k) => stmt.query_map([k], map_row)?,
        None => stmt.query_map([], map_row)?,
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(lift)?);
    }
    Ok(out)
}

pub(crate) fn load_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<VolunteerRecord>> {
    collect(
        conn,
        &format!("{SELECT_RECORDS} WHERE userID = ?1 ORDER BY rowid"),
        Some(user_id),
    )
}

pub(crate) fn load_for_event(
    conn: &Connection,
    event_id: &str,
) -> AppResult<Vec<VolunteerRecord>> {
    collect(
        conn,
        &format!("{SELECT_RECORDS} WHERE eventID = ?1 ORDER BY rowid"),
        Some(event_id),
    )
}

impl Entity for VolunteerRecord {
    const KIND: EntityKind = EntityKind::Record;

    fn id(&self) -> &str {
        &self.record_id
    }

    fn validate(&self) -> AppResult<()> {
        VolunteerRecord::validate(self)
    }

    fn references(&self) -> Vec<(EntityKind, &str)> {
        vec![
            (EntityKind::User, self.user_id.as_str()),
            (EntityKind::Event, self.event_id.as_str()),
        ]
    }

    fn insert_row(conn: &Connection, r: &VolunteerRecord) -> AppResult<()> {
        conn.execute(
            "INSERT INTO records (recordID, userID, eventID, hoursSubmitted, submissionDate,
                                  status, approverID)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                r.record_id,
                r.user_id,
                r.event_id,
                r.hours_submitted,
                format_date(&r.submission_date),
                r.status.to_db_str(),
                r.approver_id,
            ],
        )?;
        Ok(())
    }

    fn update_row(conn: &Connection, r: &VolunteerRecord) -> AppResult<usize> {
        let changed = conn.execute(
            "UPDATE records
             SET userID = ?1, eventID = ?2, hoursSubmitted = ?3, submissionDate = ?4,
                 status = ?5, approverID = ?6
             WHERE recordID = ?7",
            params![
                r.user_id,
                r.event_id,
                r.hours_submitted,
                format_date(&r.submission_date),
                r.status.to_db_str(),
                r.approver_id,
                r.record_id,
            ],
        )?;
        Ok(changed)
    }

    fn load(
        conn: &Connection,
        id: &str,
        _warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Option<VolunteerRecord>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_RECORDS} WHERE recordID = ?1"))?;
        stmt.query_row([id], map_row).optional().map_err(lift)
    }

    fn load_all(
        conn: &Connection,
        _warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Vec<VolunteerRecord>> {
        collect(conn, &format!("{SELECT_RECORDS} ORDER BY rowid"), None)
    }
}
