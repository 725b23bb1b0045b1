use chrono::NaiveTime;
use volunteerhub::db::EntityStore;
use volunteerhub::errors::{AppError, ErrorKind};
use volunteerhub::models::{Event, Organization, RecordStatus, User, VolunteerRecord};

mod common;
use common::{liberty, red_cross, setup_test_db, tutoring, volunteer};

/// org-1 with one event and two volunteers, ready for registrations.
fn populated() -> EntityStore {
    let mut store = EntityStore::open_in_memory().unwrap();
    store.insert(&liberty()).unwrap();
    store.insert(&red_cross()).unwrap();
    store.insert(&volunteer("u1")).unwrap();
    store.insert(&volunteer("u2")).unwrap();
    store.insert(&tutoring("event-1", 2)).unwrap();
    store
}

#[test]
fn stored_entities_read_back_equal() {
    let mut store = populated();

    let mut user = volunteer("u3");
    user.add_hours(4.5).unwrap();
    user.add_academic_hours("Fall 2025", 3.0).unwrap();
    user.add_academic_hours("Spring 2026", 1.5).unwrap();
    store.insert(&user).unwrap();
    assert_eq!(store.get::<User>("u3").unwrap(), user);

    let mut org = liberty();
    let ev: Event = store.get("event-1").unwrap();
    org.create_event(&ev, "u1");
    assert_eq!(store.get::<Organization>("org-1").unwrap(), org);

    assert_eq!(store.get::<Event>("event-1").unwrap(), tutoring("event-1", 2));

    let rec = VolunteerRecord::new("rec-1", "u1", "event-1", 2.0).unwrap();
    store.insert(&rec).unwrap();
    assert_eq!(store.get::<VolunteerRecord>("rec-1").unwrap(), rec);

    assert!(store.take_warnings().is_empty());
}

#[test]
fn sub_second_event_times_read_back_equal() {
    let mut store = populated();

    let mut ev = tutoring("event-ms", 4);
    ev.start_time = NaiveTime::from_hms_milli_opt(9, 0, 0, 500).unwrap();
    ev.end_time = NaiveTime::from_hms_micro_opt(11, 30, 15, 250).unwrap();
    store.insert(&ev).unwrap();

    assert_eq!(store.get::<Event>("event-ms").unwrap(), ev);
}

#[test]
fn semester_hours_are_bit_exact_after_reload() {
    let mut store = populated();

    let mut user = volunteer("u9");
    user.add_academic_hours("Fall 2025", 985.690_694_632_869_5).unwrap();
    user.add_academic_hours("Spring 2026", 0.1 + 0.2).unwrap();
    store.insert(&user).unwrap();

    // several save/load cycles must not drift
    for _ in 0..5 {
        let loaded: User = store.get("u9").unwrap();
        assert_eq!(loaded, user);
        store.update(&loaded).unwrap();
    }
}

#[test]
fn duplicate_insert_is_rejected_and_keeps_the_original() {
    let mut store = populated();

    let mut other = volunteer("u1");
    other.email = "someone-else@example.com".into();

    let err = store.insert(&other).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(store.get::<User>("u1").unwrap().email, "u1@example.com");
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let mut store = populated();

    let err = store.update(&volunteer("ghost")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!store.exists::<User>("ghost").unwrap());
}

#[test]
fn get_missing_and_empty_collections() {
    let mut store = EntityStore::open_in_memory().unwrap();

    assert!(store.get_all::<Event>().unwrap().is_empty());
    assert!(store.get_all::<VolunteerRecord>().unwrap().is_empty());

    let err = store.get::<Organization>("org-9").unwrap_err();
    assert!(matches!(err, AppError::NotFound { id, .. } if id == "org-9"));
}

#[test]
fn get_all_keeps_insertion_order() {
    let mut store = populated();
    store.insert(&volunteer("a0")).unwrap();

    let ids: Vec<String> = store
        .get_all::<User>()
        .unwrap()
        .into_iter()
        .map(|u| u.user_id)
        .collect();
    assert_eq!(ids, ["u1", "u2", "a0"]);
}

#[test]
fn insert_with_missing_parent_is_refused() {
    let mut store = populated();

    let rec = VolunteerRecord::new("rec-1", "u1", "event-404", 1.0).unwrap();
    let err = store.insert(&rec).unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingReference { target_id, .. } if target_id == "event-404"
    ));
    assert!(!store.exists::<VolunteerRecord>("rec-1").unwrap());
}

#[test]
fn referenced_entities_cannot_be_deleted() {
    let mut store = populated();
    store
        .insert(&VolunteerRecord::new("rec-1", "u1", "event-1", 1.0).unwrap())
        .unwrap();

    // org-1 still has event-1, event-1 and u1 still have rec-1
    for res in [
        store.delete::<Organization>("org-1"),
        store.delete::<Event>("event-1"),
        store.delete::<User>("u1"),
    ] {
        assert!(matches!(res, Err(AppError::Referenced { .. })));
    }

    store.delete::<VolunteerRecord>("rec-1").unwrap();
    store.delete::<Event>("event-1").unwrap();
    store.delete::<Organization>("org-1").unwrap();
    store.delete::<User>("u1").unwrap();

    assert!(!store.exists::<Organization>("org-1").unwrap());
    assert_eq!(
        store.delete::<User>("u1").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn registrations_survive_a_reload() {
    let mut store = populated();

    let mut ev: Event = store.get("event-1").unwrap();
    let u1: User = store.get("u1").unwrap();
    let u2: User = store.get("u2").unwrap();
    assert_eq!(ev.add_volunteer(&u1).unwrap(), 1);
    assert_eq!(ev.add_volunteer(&u2).unwrap(), 2);
    store.update(&ev).unwrap();

    let mut reloaded: Event = store.get("event-1").unwrap();
    assert_eq!(reloaded.current_volunteers(), 2);
    assert_eq!(reloaded.registered_volunteers(), ["u1", "u2"]);

    let u3 = volunteer("u3");
    let err = reloaded.add_volunteer(&u3).unwrap_err();
    assert!(matches!(err, AppError::EventFull { max: 2, .. }));
    assert_eq!(reloaded.current_volunteers(), 2);
}

#[test]
fn reviewed_record_is_persisted() {
    let mut store = populated();
    store
        .insert(&VolunteerRecord::new("rec-1", "u1", "event-1", 3.0).unwrap())
        .unwrap();

    let lu: Organization = store.get("org-1").unwrap();
    let rc: Organization = store.get("org-2").unwrap();

    let mut rec: VolunteerRecord = store.get("rec-1").unwrap();
    lu.approve_hours(&mut rec);
    store.update(&rec).unwrap();

    let mut rec: VolunteerRecord = store.get("rec-1").unwrap();
    assert_eq!(rec.status(), RecordStatus::Approved);
    assert_eq!(rec.approver_id(), Some("org-1"));

    rc.reject_hours(&mut rec);
    store.update(&rec).unwrap();

    let rec: VolunteerRecord = store.get("rec-1").unwrap();
    assert_eq!(rec.status(), RecordStatus::Rejected);
    assert_eq!(rec.approver_id(), Some("org-2"));
}

#[test]
fn corrupt_blob_degrades_to_empty_with_a_warning() {
    let mut store = populated();

    let mut user = volunteer("u3");
    user.add_academic_hours("Fall 2025", 6.0).unwrap();
    store.insert(&user).unwrap();

    store
        .conn()
        .execute(
            "UPDATE users SET academicSemesterHours = ?1 WHERE userID = 'u3'",
            [b"\x00not json".to_vec()],
        )
        .unwrap();

    let loaded: User = store.get("u3").unwrap();
    assert!(loaded.academic_semester_hours().is_empty());
    assert_eq!(loaded.email, "u3@example.com");

    let warnings = store.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].column, "academicSemesterHours");
    assert_eq!(warnings[0].owner_id, "u3");

    // drained
    assert!(store.take_warnings().is_empty());
}

#[test]
fn events_for_org_match_posted_events() {
    let mut store = populated();
    store.insert(&tutoring("event-2", 5)).unwrap();

    let ids: Vec<String> = store
        .events_for_org("org-1")
        .unwrap()
        .into_iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(ids, ["event-1", "event-2"]);

    let org: Organization = store.get("org-1").unwrap();
    assert_eq!(org.posted_events(), ["event-1", "event-2"]);
    assert!(store.events_for_org("org-2").unwrap().is_empty());
}

#[test]
fn file_store_reopens_with_data_intact() {
    let db_path = setup_test_db("reopen_store");

    {
        let mut store = EntityStore::open(&db_path).unwrap();
        store.insert(&liberty()).unwrap();
        store.insert(&volunteer("u1")).unwrap();
        store.close().unwrap();
    }

    // second open runs the bootstrap again
    let mut store = EntityStore::open(&db_path).unwrap();
    assert_eq!(store.get_all::<User>().unwrap().len(), 1);
    assert!(store.exists::<Organization>("org-1").unwrap());
    store.close().unwrap();

    std::fs::remove_file(&db_path).ok();
}

#[test]
fn unopenable_path_is_store_unavailable() {
    let err = EntityStore::open("/nonexistent-dir/deeper/vh.sqlite")
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}
