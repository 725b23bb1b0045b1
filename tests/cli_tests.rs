use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_volunteers, init_db_with_data, setup_test_db, vh};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    vh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // running it twice is harmless
    vh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vh().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_seed_only_fills_an_empty_database() {
    let db_path = setup_test_db("cli_seed");
    init_db_with_data(&db_path, 3);

    vh().args(["--db", &db_path, "list", "orgs"])
        .assert()
        .success()
        .stdout(contains("Liberty University").and(contains("Red Cross")));

    vh().args(["--db", &db_path, "list", "events"])
        .assert()
        .success()
        .stdout(contains("Elementary Tutoring").and(contains("0/10")));

    vh().args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("nothing seeded"));
}

#[test]
fn test_list_empty_kind() {
    let db_path = setup_test_db("cli_list_empty");

    vh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vh().args(["--db", &db_path, "list", "records"])
        .assert()
        .success()
        .stdout(contains("No records stored"));
}

#[test]
fn test_unknown_kind_fails() {
    let db_path = setup_test_db("cli_bad_kind");

    vh().args(["--db", &db_path, "list", "teams"])
        .assert()
        .failure()
        .stderr(contains("teams"));
}

#[test]
fn test_register_and_unregister() {
    let db_path = setup_test_db("cli_register");
    init_db_with_data(&db_path, 0);
    add_volunteers(&db_path, &["u1"]);

    vh().args(["--db", &db_path, "register", "--event", "event-1", "--user", "u1"])
        .assert()
        .success()
        .stdout(contains("1/10"));

    vh().args(["--db", &db_path, "register", "--event", "event-1", "--user", "u1"])
        .assert()
        .failure()
        .stderr(contains("already registered"));

    vh().args(["--db", &db_path, "show", "event", "event-1"])
        .assert()
        .success()
        .stdout(contains("Remaining Slots: 9").and(contains("u1")));

    vh().args(["--db", &db_path, "unregister", "--event", "event-1", "--user", "u1"])
        .assert()
        .success()
        .stdout(contains("0/10"));

    vh().args(["--db", &db_path, "unregister", "--event", "event-1", "--user", "u1"])
        .assert()
        .failure()
        .stderr(contains("not registered"));
}

#[test]
fn test_register_unknown_user_fails() {
    let db_path = setup_test_db("cli_register_unknown");
    init_db_with_data(&db_path, 0);

    vh().args(["--db", &db_path, "register", "--event", "event-1", "--user", "ghost"])
        .assert()
        .failure()
        .stderr(contains("'ghost' not found"));
}

#[test]
fn test_submit_and_review_hours() {
    let db_path = setup_test_db("cli_review");
    init_db_with_data(&db_path, 0);
    add_volunteers(&db_path, &["u1"]);

    vh().args([
        "--db", &db_path, "submit", "--user", "u1", "--event", "event-1", "--hours", "2.5",
        "--id", "rec-1",
    ])
    .assert()
    .success()
    .stdout(contains("PENDING"));

    vh().args(["--db", &db_path, "review", "rec-1", "--status", "A", "--by", "org-1"])
        .assert()
        .success()
        .stdout(contains("PENDING → APPROVED").and(contains("were approved")));

    vh().args([
        "--db", &db_path, "review", "rec-1", "--status", "rejected", "--by", "org-2",
    ])
    .assert()
    .success()
    .stdout(contains("APPROVED → REJECTED"));

    vh().args(["--db", &db_path, "show", "record", "rec-1"])
        .assert()
        .success()
        .stdout(contains("REJECTED").and(contains("org-2")));
}

#[test]
fn test_submit_for_missing_event_fails() {
    let db_path = setup_test_db("cli_submit_missing");
    init_db_with_data(&db_path, 0);
    add_volunteers(&db_path, &["u1"]);

    vh().args([
        "--db", &db_path, "submit", "--user", "u1", "--event", "event-9", "--hours", "1",
    ])
    .assert()
    .failure()
    .stderr(contains("event-9"));

    vh().args([
        "--db", &db_path, "submit", "--user", "u1", "--event", "event-1", "--hours=-3",
    ])
    .assert()
    .failure();
}

#[test]
fn test_hours_merge_per_semester() {
    let db_path = setup_test_db("cli_hours");
    init_db_with_data(&db_path, 0);
    add_volunteers(&db_path, &["u1"]);

    for h in ["2", "1.5"] {
        vh().args([
            "--db", &db_path, "hours", "--user", "u1", "--hours", h, "--semester", "Fall 2025",
        ])
        .assert()
        .success();
    }

    vh().args(["--db", &db_path, "hours", "--user", "u1", "--hours", "4"])
        .assert()
        .success()
        .stdout(contains("4 total hour(s)"));

    vh().args(["--db", &db_path, "show", "user", "u1"])
        .assert()
        .success()
        .stdout(contains("Fall 2025: 3.5").and(contains("Total Hours: 4.0")));
}

#[test]
fn test_delete_is_refused_while_referenced() {
    let db_path = setup_test_db("cli_delete");
    init_db_with_data(&db_path, 0);

    vh().args(["--db", &db_path, "delete", "orgs", "org-1", "--force"])
        .assert()
        .failure()
        .stderr(contains("still referenced"));

    vh().args(["--db", &db_path, "delete", "events", "event-1", "--force"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    vh().args(["--db", &db_path, "delete", "orgs", "org-1", "--force"])
        .assert()
        .success();

    vh().args(["--db", &db_path, "show", "org", "org-1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_delete_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("cli_delete_cancel");
    init_db_with_data(&db_path, 0);

    vh().args(["--db", &db_path, "delete", "events", "event-2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    vh().args(["--db", &db_path, "show", "event", "event-2"])
        .assert()
        .success();
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path, 2);

    vh().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("users").and(contains("Integrity check passed")));
}

#[test]
fn test_delete_unknown_id_fails_without_prompting() {
    let db_path = setup_test_db("cli_delete_unknown");
    init_db_with_data(&db_path, 0);

    vh().args(["--db", &db_path, "delete", "events", "event-404"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(contains("Confirm").not())
        .stderr(contains("'event-404' not found"));
}
