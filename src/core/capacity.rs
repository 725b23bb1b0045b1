//! Event membership and the volunteer-slot invariant.
//!
//! `add_volunteer` and `remove_volunteer` change the registration list and
//! therefore the slot count in one step; a rejected call leaves the event
//! untouched. Persisting the result is a separate `EntityStore::update`.
//!
//! A user can hold at most one slot per event: registering twice fails with
//! `AlreadyRegistered`, matching the `(eventID, userID)` primary key of
//! `event_volunteers`. A full event reports `EventFull` first.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, User};
use tracing::debug;

impl Event {
    /// Register `user`. Returns the new volunteer count.
    pub fn add_volunteer(&mut self, user: &User) -> AppResult<u32> {
        if self.is_full() {
            return Err(AppError::EventFull {
                event_id: self.event_id.clone(),
                max: self.max_volunteers,
            });
        }
        if self.is_registered(&user.user_id) {
            return Err(AppError::AlreadyRegistered {
                event_id: self.event_id.clone(),
                user_id: user.user_id.clone(),
            });
        }

        self.registered_volunteers.push(user.user_id.clone());
        debug!(event = %self.event_id, user = %user.user_id, "volunteer added");
        Ok(self.current_volunteers())
    }

    /// Unregister `user`. Returns the new volunteer count.
    pub fn remove_volunteer(&mut self, user: &User) -> AppResult<u32> {
        let pos = self
            .registered_volunteers
            .iter()
            .position(|id| id == &user.user_id)
            .ok_or_else(|| AppError::NotRegistered {
                event_id: self.event_id.clone(),
                user_id: user.user_id.clone(),
            })?;

        self.registered_volunteers.remove(pos);
        debug!(event = %self.event_id, user = %user.user_id, "volunteer removed");
        Ok(self.current_volunteers())
    }

    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered_volunteers.iter().any(|id| id == user_id)
    }

    pub fn is_full(&self) -> bool {
        self.current_volunteers() >= self.max_volunteers
    }

    pub fn remaining_slots(&self) -> u32 {
        self.max_volunteers.saturating_sub(self.current_volunteers())
    }
}
