//! Approval workflow for submitted hours.
//!
//! Transitions are permissive: any status may follow any other and the
//! approver is overwritten each time. Moving a record back to PENDING clears
//! the approver.

use crate::models::{Notification, NotificationType, Organization, RecordStatus, VolunteerRecord};
use tracing::debug;

impl VolunteerRecord {
    /// Set `status` and `approver_id` regardless of the current state.
    /// Returns the status the record had before the call.
    pub fn update_status(&mut self, status: RecordStatus, approver_id: &str) -> RecordStatus {
        let previous = self.status;
        self.status = status;
        self.approver_id = match status {
            RecordStatus::Pending => None,
            RecordStatus::Approved | RecordStatus::Rejected => Some(approver_id.to_string()),
        };
        debug!(
            record = %self.record_id,
            from = previous.to_db_str(),
            to = status.to_db_str(),
            approver = approver_id,
            "record status updated"
        );
        previous
    }
}

impl Organization {
    pub fn approve_hours(&self, record: &mut VolunteerRecord) -> RecordStatus {
        record.update_status(RecordStatus::Approved, &self.org_id)
    }

    pub fn reject_hours(&self, record: &mut VolunteerRecord) -> RecordStatus {
        record.update_status(RecordStatus::Rejected, &self.org_id)
    }
}

/// Message for the volunteer whose record was just reviewed.
pub fn status_notification(record: &VolunteerRecord) -> Notification {
    let message = match record.status() {
        RecordStatus::Approved => format!(
            "Your {} hours for event {} were approved",
            record.hours_submitted, record.event_id
        ),
        RecordStatus::Rejected => format!(
            "Your {} hours for event {} were rejected",
            record.hours_submitted, record.event_id
        ),
        RecordStatus::Pending => format!(
            "Your {} hours for event {} are awaiting review",
            record.hours_submitted, record.event_id
        ),
    };
    Notification::new(&record.user_id, message, NotificationType::Approval)
}
