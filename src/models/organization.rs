use super::{Address, Event, Notification, NotificationType, check_id};
use crate::errors::AppResult;
use serde::Serialize;

/// A group posting volunteer opportunities.
///
/// `posted_events` holds event IDs only. The store owns the events; on load
/// the list is rebuilt from the `events` table filtered by `orgID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub org_id: String,
    pub org_name: String,
    pub contact_person_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub description: String,
    pub address: Address,
    pub(crate) posted_events: Vec<String>,
}

impl Organization {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        org_id: impl Into<String>,
        org_name: impl Into<String>,
        contact_person_name: impl Into<String>,
        contact_email: impl Into<String>,
        contact_phone: impl Into<String>,
        password: impl Into<String>,
        description: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            org_name: org_name.into(),
            contact_person_name: contact_person_name.into(),
            contact_email: contact_email.into(),
            contact_phone: contact_phone.into(),
            password: password.into(),
            description: description.into(),
            address,
            posted_events: Vec::new(),
        }
    }

    pub fn posted_events(&self) -> &[String] {
        &self.posted_events
    }

    /// Record `event` as posted by this organization and build the
    /// announcement for `recipient`. The event itself must still be stored
    /// with `EntityStore::insert`; the two steps are not linked.
    pub fn create_event(&mut self, event: &Event, recipient: &str) -> Notification {
        if !self.posted_events.iter().any(|id| id == &event.event_id) {
            self.posted_events.push(event.event_id.clone());
        }
        Notification::new(
            recipient,
            format!("{} posted a new opportunity: {}", self.org_name, event.title),
            NotificationType::NewOpportunity,
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        check_id("orgID", &self.org_id)
    }
}
