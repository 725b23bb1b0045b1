use super::{check_hours, check_id};
use crate::errors::AppResult;
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "PENDING",
            RecordStatus::Approved => "APPROVED",
            RecordStatus::Rejected => "REJECTED",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(RecordStatus::Pending),
            "APPROVED" => Some(RecordStatus::Approved),
            "REJECTED" => Some(RecordStatus::Rejected),
            _ => None,
        }
    }

    /// Helper: CLI input (`A`/`R`/`P` or the full name, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "A" => Some(RecordStatus::Approved),
            "R" => Some(RecordStatus::Rejected),
            "P" => Some(RecordStatus::Pending),
            other => Self::from_db_str(other),
        }
    }
}

/// Hours a volunteer submitted for one event.
///
/// `status` and `approver_id` change only through the approval workflow
/// (`core::approval`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerRecord {
    pub record_id: String,
    pub user_id: String,
    pub event_id: String,
    pub hours_submitted: f64,
    pub submission_date: NaiveDate,
    pub(crate) status: RecordStatus,
    pub(crate) approver_id: Option<String>,
}

impl VolunteerRecord {
    /// New PENDING record dated today.
    pub fn new(
        record_id: impl Into<String>,
        user_id: impl Into<String>,
        event_id: impl Into<String>,
        hours_submitted: f64,
    ) -> AppResult<Self> {
        check_hours("hoursSubmitted", hours_submitted)?;
        Ok(Self {
            record_id: record_id.into(),
            user_id: user_id.into(),
            event_id: event_id.into(),
            hours_submitted,
            submission_date: date::today(),
            status: RecordStatus::Pending,
            approver_id: None,
        })
    }

    pub fn status(&self) -> RecordStatus {
        self.status
    }

    pub fn approver_id(&self) -> Option<&str> {
        self.approver_id.as_deref()
    }

    pub fn validate(&self) -> AppResult<()> {
        check_id("recordID", &self.record_id)?;
        check_id("userID", &self.user_id)?;
        check_id("eventID", &self.event_id)?;
        check_hours("hoursSubmitted", self.hours_submitted)
    }
}
