use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationType {
    Reminder,
    Approval,
    NewOpportunity,
}

impl NotificationType {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::Reminder => "Reminder",
            NotificationType::Approval => "Approval",
            NotificationType::NewOpportunity => "New opportunity",
        }
    }
}

/// Message addressed to a single user. Not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub notification_id: String,
    pub user_id: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub kind: NotificationType,
    read: bool,
}

impl Notification {
    pub fn new(user_id: &str, message: impl Into<String>, kind: NotificationType) -> Self {
        Self {
            notification_id: super::new_id("notif"),
            user_id: user_id.to_string(),
            message: message.into(),
            timestamp: Local::now(),
            kind,
            read: false,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn mark_as_read(&mut self) {
        self.read = true;
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] to {}: {} ({}, {})",
            self.kind.label(),
            self.user_id,
            self.message,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            if self.read { "read" } else { "unread" }
        )
    }
}
