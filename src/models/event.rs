use super::{Address, check_id};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A volunteer opportunity posted by an organization.
///
/// The occupied slot count is the length of `registered_volunteers`, so the
/// count and the list cannot drift apart. Membership changes go through
/// `core::capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,       // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime, // ⇔ events.startTime (TEXT "HH:MM:SS[.f]")
    pub end_time: NaiveTime,   // ⇔ events.endTime
    pub location: Address,
    pub required_skills: Vec<String>,
    pub org_id: String, // ⇔ events.orgID → organizations
    pub contact_info: String,
    pub(crate) max_volunteers: u32,
    pub(crate) registered_volunteers: Vec<String>,
}

impl Event {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: Address,
        max_volunteers: u32,
        required_skills: Vec<String>,
        org_id: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> AppResult<Self> {
        if max_volunteers == 0 {
            return Err(AppError::invalid("maxVolunteers", "must be greater than zero"));
        }
        Ok(Self {
            event_id: event_id.into(),
            title: title.into(),
            description: description.into(),
            date,
            start_time,
            end_time,
            location,
            required_skills,
            org_id: org_id.into(),
            contact_info: contact_info.into(),
            max_volunteers,
            registered_volunteers: Vec::new(),
        })
    }

    pub fn max_volunteers(&self) -> u32 {
        self.max_volunteers
    }

    pub fn current_volunteers(&self) -> u32 {
        self.registered_volunteers.len() as u32
    }

    pub fn registered_volunteers(&self) -> &[String] {
        &self.registered_volunteers
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Multi-line summary used by `show event`.
    pub fn details(&self) -> String {
        format!(
            "Event Title: {}\nDescription: {}\nDate: {} {}-{}\nLocation: {}\nSkills: {}\nRemaining Slots: {}",
            self.title,
            self.description,
            self.date_str(),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.location,
            if self.required_skills.is_empty() {
                "-".to_string()
            } else {
                self.required_skills.join(", ")
            },
            self.remaining_slots()
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        check_id("eventID", &self.event_id)?;
        check_id("orgID", &self.org_id)?;
        if self.max_volunteers == 0 {
            return Err(AppError::invalid("maxVolunteers", "must be greater than zero"));
        }
        if self.current_volunteers() > self.max_volunteers {
            return Err(AppError::invalid(
                "currentVolunteers",
                format!(
                    "{} registered exceeds capacity {}",
                    self.current_volunteers(),
                    self.max_volunteers
                ),
            ));
        }
        Ok(())
    }
}
