use crate::errors::AppResult;
use crate::models::{Event, Organization, User, VolunteerRecord};
use csv::Writer;
use std::path::Path;

/// Flat CSV representation of an entity. Nested collections are joined
/// into a single cell.
pub trait CsvRow {
    fn headers() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

impl CsvRow for User {
    fn headers() -> &'static [&'static str] {
        &[
            "userID",
            "firstName",
            "lastName",
            "email",
            "role",
            "totalHours",
            "academicSemesterHours",
        ]
    }

    fn record(&self) -> Vec<String> {
        let semesters = self
            .academic_semester_hours()
            .iter()
            .map(|(s, h)| format!("{s}={h}"))
            .collect::<Vec<_>>()
            .join("; ");
        vec![
            self.user_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.role.to_db_str().to_string(),
            self.total_hours().to_string(),
            semesters,
        ]
    }
}

impl CsvRow for Organization {
    fn headers() -> &'static [&'static str] {
        &[
            "orgID",
            "orgName",
            "contactPersonName",
            "contactEmail",
            "contactPhone",
            "description",
            "address",
            "postedEvents",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.org_id.clone(),
            self.org_name.clone(),
            self.contact_person_name.clone(),
            self.contact_email.clone(),
            self.contact_phone.clone(),
            self.description.clone(),
            self.address.to_string(),
            self.posted_events().len().to_string(),
        ]
    }
}

impl CsvRow for Event {
    fn headers() -> &'static [&'static str] {
        &[
            "eventID",
            "title",
            "date",
            "startTime",
            "endTime",
            "location",
            "maxVolunteers",
            "currentVolunteers",
            "requiredSkills",
            "orgID",
            "contactInfo",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.event_id.clone(),
            self.title.clone(),
            self.date_str(),
            self.start_time.format("%H:%M").to_string(),
            self.end_time.format("%H:%M").to_string(),
            self.location.to_string(),
            self.max_volunteers().to_string(),
            self.current_volunteers().to_string(),
            self.required_skills.join("; "),
            self.org_id.clone(),
            self.contact_info.clone(),
        ]
    }
}

impl CsvRow for VolunteerRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "recordID",
            "userID",
            "eventID",
            "hoursSubmitted",
            "submissionDate",
            "status",
            "approverID",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.record_id.clone(),
            self.user_id.clone(),
            self.event_id.clone(),
            self.hours_submitted.to_string(),
            self.submission_date.format("%Y-%m-%d").to_string(),
            self.status().to_db_str().to_string(),
            self.approver_id().unwrap_or_default().to_string(),
        ]
    }
}

/// Write the rows as CSV into `path`, header first.
pub fn write_csv<T: CsvRow>(path: &Path, rows: &[T]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(T::headers())?;
    for r in rows {
        wtr.write_record(r.record())?;
    }

    wtr.flush()?;
    Ok(())
}
