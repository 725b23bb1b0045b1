//! Sample data for a fresh database.

use crate::db::log::audit;
use crate::db::{EntityKind, EntityStore};
use crate::errors::AppResult;
use crate::models::{Address, Event, Organization, Role, User, new_id};
use crate::utils::date;
use chrono::NaiveTime;
use tracing::info;

/// What `populate` inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub organizations: usize,
    pub events: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.users == 0 && self.organizations == 0 && self.events == 0
    }
}

/// Insert `users` random volunteers, two organizations and one event each.
/// Does nothing when the users table already has rows.
pub fn populate(store: &mut EntityStore, users: usize) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();
    if store.count(EntityKind::User)? > 0 {
        return Ok(report);
    }

    for i in 0..users {
        let user = User::new(
            new_id("user"),
            format!("Random{i}"),
            "User",
            format!("random{i}@example.com"),
            format!("pass{i}"),
            Role::Volunteer,
        );
        store.insert(&user)?;
        report.users += 1;
    }

    let lu_address = Address::new("1971 University Blvd", "Lynchburg", "VA", "24515");
    let lu = Organization::new(
        "org-1",
        "Liberty University",
        "James Dollens",
        "jdollens@liberty.edu",
        "555-123-4567",
        "lu_pass",
        "University CSER program.",
        lu_address.clone(),
    );
    let rc_address = Address::new("123 Main St", "Lynchburg", "VA", "24504");
    let red_cross = Organization::new(
        "org-2",
        "Red Cross",
        "Jane Red",
        "info@redcross.org",
        "555-987-6543",
        "rc_pass",
        "Disaster relief organization.",
        rc_address.clone(),
    );

    for org in [&lu, &red_cross] {
        if !store.exists::<Organization>(&org.org_id)? {
            store.insert(org)?;
            report.organizations += 1;
        }
    }

    let today = date::today();
    let tutoring = Event::new(
        "event-1",
        "Elementary Tutoring",
        "Help kids with homework",
        today,
        hm(15, 0),
        hm(17, 0),
        lu_address,
        10,
        vec!["Teaching".to_string()],
        &lu.org_id,
        &lu.contact_email,
    )?;
    let blood_drive = Event::new(
        "event-2",
        "Community Blood Drive",
        "Assist with a local blood drive",
        today,
        hm(9, 0),
        hm(14, 0),
        rc_address,
        25,
        vec!["First Aid".to_string()],
        &red_cross.org_id,
        &red_cross.contact_email,
    )?;

    for ev in [&tutoring, &blood_drive] {
        if !store.exists::<Event>(&ev.event_id)? {
            store.insert(ev)?;
            report.events += 1;
        }
    }

    audit(
        store.conn(),
        "seed",
        "",
        &format!(
            "{} user(s), {} organization(s), {} event(s)",
            report.users, report.organizations, report.events
        ),
    )?;
    info!(
        users = report.users,
        organizations = report.organizations,
        events = report.events,
        "sample data inserted"
    );
    Ok(report)
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}
