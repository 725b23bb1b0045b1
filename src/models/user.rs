use super::{check_hours, check_id};
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Volunteer,
    OrganizationRepresentative,
    Admin,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "VOLUNTEER",
            Role::OrganizationRepresentative => "ORGANIZATION_REPRESENTATIVE",
            Role::Admin => "ADMIN",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "VOLUNTEER" => Some(Role::Volunteer),
            "ORGANIZATION_REPRESENTATIVE" => Some(Role::OrganizationRepresentative),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Lenient parser for CLI input (`volunteer`, `org-rep`, `admin`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().replace('-', "_").as_str() {
            "volunteer" | "v" => Some(Role::Volunteer),
            "organization_representative" | "org_rep" | "o" => {
                Some(Role::OrganizationRepresentative)
            }
            "admin" | "a" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// A registered person. Hour totals only change through `add_hours` and
/// `add_academic_hours`; callers persist them with `EntityStore::update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub(crate) total_hours: f64,
    pub(crate) academic_semester_hours: BTreeMap<String, f64>,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            role,
            total_hours: 0.0,
            academic_semester_hours: BTreeMap::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn academic_semester_hours(&self) -> &BTreeMap<String, f64> {
        &self.academic_semester_hours
    }

    pub fn hours_for_semester(&self, semester: &str) -> f64 {
        self.academic_semester_hours
            .get(semester)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn add_hours(&mut self, hours: f64) -> AppResult<()> {
        check_hours("hours", hours)?;
        self.total_hours += hours;
        Ok(())
    }

    /// Repeated adds for the same semester are summed.
    pub fn add_academic_hours(&mut self, semester: &str, hours: f64) -> AppResult<()> {
        check_hours("hours", hours)?;
        if semester.trim().is_empty() {
            return Err(AppError::invalid("semester", "must not be empty"));
        }
        *self
            .academic_semester_hours
            .entry(semester.to_string())
            .or_insert(0.0) += hours;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        check_id("userID", &self.user_id)?;
        check_hours("totalHours", self.total_hours)?;
        for hours in self.academic_semester_hours.values() {
            check_hours("academicSemesterHours", *hours)?;
        }
        Ok(())
    }
}
