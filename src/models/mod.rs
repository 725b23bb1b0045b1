pub mod address;
pub mod event;
pub mod notification;
pub mod organization;
pub mod record;
pub mod user;

pub use address::Address;
pub use event::Event;
pub use notification::{Notification, NotificationType};
pub use organization::Organization;
pub use record::{RecordStatus, VolunteerRecord};
pub use user::{Role, User};

use crate::errors::{AppError, AppResult};

/// Hours must be finite and non-negative everywhere they are accepted.
pub(crate) fn check_hours(field: &'static str, hours: f64) -> AppResult<()> {
    if !hours.is_finite() {
        return Err(AppError::invalid(field, format!("{hours} is not a number")));
    }
    if hours < 0.0 {
        return Err(AppError::invalid(field, format!("{hours} is negative")));
    }
    Ok(())
}

/// Identifiers are caller-supplied; the store only refuses empty ones.
pub(crate) fn check_id(field: &'static str, id: &str) -> AppResult<()> {
    if id.trim().is_empty() {
        return Err(AppError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Generate a fresh identifier such as `user-4f1c…`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
