#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use volunteerhub::models::{Address, Event, Organization, Role, User};

pub fn vh() -> Command {
    cargo_bin_cmd!("volunteerhub")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_volunteerhub.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed the sample organizations and events
pub fn init_db_with_data(db_path: &str, users: usize) {
    vh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vh().args(["--db", db_path, "seed", "--users", &users.to_string()])
        .assert()
        .success();
}

pub fn lu_address() -> Address {
    Address::new("1971 University Blvd", "Lynchburg", "VA", "24515")
}

pub fn liberty() -> Organization {
    Organization::new(
        "org-1",
        "Liberty University",
        "James Dollens",
        "jdollens@liberty.edu",
        "555-123-4567",
        "lu_pass",
        "University CSER program.",
        lu_address(),
    )
}

pub fn red_cross() -> Organization {
    Organization::new(
        "org-2",
        "Red Cross",
        "Jane Red",
        "info@redcross.org",
        "555-987-6543",
        "rc_pass",
        "Disaster relief organization.",
        Address::new("123 Main St", "Lynchburg", "VA", "24504"),
    )
}

pub fn volunteer(id: &str) -> User {
    User::new(
        id,
        "Test",
        id.to_uppercase(),
        format!("{id}@example.com"),
        "pw",
        Role::Volunteer,
    )
}

pub fn tutoring(id: &str, max: u32) -> Event {
    Event::new(
        id,
        "Elementary Tutoring",
        "Help kids with homework",
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        lu_address(),
        max,
        vec!["Teaching".to_string()],
        "org-1",
        "jdollens@liberty.edu",
    )
    .unwrap()
}

/// Add volunteers directly via the library API (the CLI has no user form)
pub fn add_volunteers(db_path: &str, ids: &[&str]) {
    let mut store = volunteerhub::db::EntityStore::open(db_path).expect("open db");
    for id in ids {
        store.insert(&volunteer(id)).expect("insert volunteer");
    }
    store.close().expect("close db");
}
