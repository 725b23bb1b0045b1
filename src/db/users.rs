use crate::db::codec::{self, DecodeWarning};
use crate::db::db_utils::{conversion_error, lift};
use crate::db::entity::{Entity, EntityKind};
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeMap;

const SELECT_USERS: &str = "SELECT userID, firstName, lastName, email, password, role,
        totalHours, academicSemesterHours
 FROM users";

fn map_row(row: &Row, warnings: &mut Vec<DecodeWarning>) -> rusqlite::Result<User> {
    let user_id: String = row.get("userID")?;

    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        conversion_error(
            5,
            AppError::InvalidEnum {
                enum_name: "role",
                value: role_str.clone(),
            },
        )
    })?;

    let blob: Option<Vec<u8>> = row.get("academicSemesterHours")?;
    let academic_semester_hours: BTreeMap<String, f64> = codec::decode_column(
        blob.as_deref(),
        "academicSemesterHours",
        &user_id,
        warnings,
    );

    Ok(User {
        user_id,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        email: row.get("email")?,
        password: row.get("password")?,
        role,
        total_hours: row.get("totalHours")?,
        academic_semester_hours,
    })
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.user_id
    }

    fn validate(&self) -> AppResult<()> {
        User::validate(self)
    }

    fn insert_row(conn: &Connection, u: &User) -> AppResult<()> {
        let hours = codec::encode(&u.academic_semester_hours)?;
        conn.execute(
            "INSERT INTO users (userID, firstName, lastName, email, password, role,
                                totalHours, academicSemesterHours)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                u.user_id,
                u.first_name,
                u.last_name,
                u.email,
                u.password,
                u.role.to_db_str(),
                u.total_hours,
                hours,
            ],
        )?;
        Ok(())
    }

    fn update_row(conn: &Connection, u: &User) -> AppResult<usize> {
        let hours = codec::encode(&u.academic_semester_hours)?;
        let changed = conn.execute(
            "UPDATE users
             SET firstName = ?1, lastName = ?2, email = ?3, password = ?4, role = ?5,
                 totalHours = ?6, academicSemesterHours = ?7
             WHERE userID = ?8",
            params![
                u.first_name,
                u.last_name,
                u.email,
                u.password,
                u.role.to_db_str(),
                u.total_hours,
                hours,
                u.user_id,
            ],
        )?;
        Ok(changed)
    }

    fn load(
        conn: &Connection,
        id: &str,
        warnings: &mut Vec<DecodeWarning>,
    ) -> AppResult<Option<User>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_USERS} WHERE userID = ?1"))?;
        stmt.query_row([id], |row| map_row(row, warnings))
            .optional()
            .map_err(lift)
    }

    fn load_all(conn: &Connection, warnings: &mut Vec<DecodeWarning>) -> AppResult<Vec<User>> {
        let mut stmt = conn.prepare_cached(&format!("{SELECT_USERS} ORDER BY rowid"))?;
        let rows = stmt.query_map([], |row| map_row(row, warnings))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(lift)?);
        }
        Ok(out)
    }
}
