use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{jc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_job_create_prints_id() {
    let db_path = setup_test_db("job_create");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        &db_path,
        "job",
        "Parking garage",
        "--number",
        "25-003",
        "--client",
        "Metro Transit",
        "--contract",
        "150000",
        "--hours",
        "1200",
        "--material",
        "40000",
    ])
    .assert()
    .success()
    .stdout(contains("Job #1 created"))
    .stdout(contains("25-003"));
}

#[test]
fn test_job_rejects_negative_contract() {
    let db_path = setup_test_db("job_negative");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        &db_path,
        "job",
        "Bad job",
        "--contract",
        "-1",
        "--hours",
        "0",
        "--material",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("contract amount must be >= 0"));
}

#[test]
fn test_report_requires_existing_job() {
    let db_path = setup_test_db("report_no_job");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        &db_path,
        "report",
        "42",
        "--date",
        "2026-03-12",
        "--crew",
        "2",
        "--hours",
        "4",
    ])
    .assert()
    .failure()
    .stderr(contains("No job found with id 42"));
}

#[test]
fn test_report_rejects_malformed_date() {
    let db_path = setup_test_db("report_bad_date");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "report",
        "1",
        "--date",
        "12/03/2026",
        "--crew",
        "2",
        "--hours",
        "4",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_rejects_negative_hours() {
    let db_path = setup_test_db("report_negative");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "report",
        "1",
        "--crew",
        "2",
        "--hours",
        "-4",
    ])
    .assert()
    .failure()
    .stderr(contains("hours must be >= 0"));
}

#[test]
fn test_report_append_success() {
    let db_path = setup_test_db("report_append");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "report",
        "1",
        "--date",
        "2026-03-13",
        "--crew",
        "3",
        "--hours",
        "8",
        "--material",
        "250.75",
        "--notes",
        "block walls",
    ])
    .assert()
    .success()
    .stdout(contains("Report #2 added to job 24-117"));
}

#[test]
fn test_list_shows_jobs() {
    let db_path = setup_test_db("list_jobs");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Warehouse shell"))
        .stdout(contains("24-117"))
        .stdout(contains("Acme Builders"));
}

#[test]
fn test_list_filters_by_client() {
    let db_path = setup_test_db("list_filter");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "job",
        "Retaining wall",
        "--client",
        "Hillside HOA",
        "--contract",
        "30000",
        "--hours",
        "200",
        "--material",
        "8000",
    ])
    .assert()
    .success();

    jc().args(["--db", &db_path, "list", "--client", "hillside"])
        .assert()
        .success()
        .stdout(contains("Retaining wall"))
        .stdout(contains("Warehouse shell").not());
}

#[test]
fn test_list_reports_for_job() {
    let db_path = setup_test_db("list_reports");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "list", "--reports", "1"])
        .assert()
        .success()
        .stdout(contains("2026-03-12"))
        .stdout(contains("footings poured"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Database initialized"))
        .stdout(contains("Created job"))
        .stdout(contains("Added daily report"));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_info_counts_rows() {
    let db_path = setup_test_db("db_info");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total jobs"))
        .stdout(contains("Total reports"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup");
    common::init_db_with_job(&db_path);

    let backup_path = common::temp_out("backup", "sqlite");

    jc().args(["--db", &db_path, "backup", "--file", &backup_path])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&backup_path).exists());
}
