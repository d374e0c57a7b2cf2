use predicates::str::contains;

mod common;
use common::{jc, setup_test_db};

/// Worked example at the default labor rate (55/h):
/// estimate 10 h + 500 material on a 2000 contract, one report of
/// 2 crew × 4 h + 100 material.
#[test]
fn test_summary_worked_example() {
    let db_path = setup_test_db("summary_example");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "summary", "1"])
        .assert()
        .success()
        // header
        .stdout(contains("24-117"))
        .stdout(contains("Warehouse shell"))
        .stdout(contains("Acme Builders"))
        // estimate: 550 labor + 500 material = 1050, margin 950
        .stdout(contains("$550.00"))
        .stdout(contains("$1,050.00"))
        .stdout(contains("$950.00"))
        // actual: 8 crew-hours → 440 labor, 100 material, 540 total, margin 1460
        .stdout(contains("8.0 h"))
        .stdout(contains("$440.00"))
        .stdout(contains("$100.00"))
        .stdout(contains("$540.00"))
        .stdout(contains("$1,460.00"))
        // burn percentages
        .stdout(contains("51.4%"))
        .stdout(contains("80.0%"))
        .stdout(contains("20.0%"));
}

#[test]
fn test_summary_accumulates_multiple_reports() {
    let db_path = setup_test_db("summary_multi");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "report",
        "1",
        "--date",
        "2026-03-13",
        "--crew",
        "2",
        "--hours",
        "4",
        "--material",
        "100",
    ])
    .assert()
    .success();

    // actuals double: 16 crew-hours → 880 labor, 200 material, 1080 total
    jc().args(["--db", &db_path, "summary", "1"])
        .assert()
        .success()
        .stdout(contains("16.0 h"))
        .stdout(contains("$880.00"))
        .stdout(contains("$200.00"))
        .stdout(contains("$1,080.00"));
}

#[test]
fn test_summary_job_without_reports_shows_zero_actuals() {
    let db_path = setup_test_db("summary_empty");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        &db_path,
        "job",
        "Empty job",
        "--contract",
        "2000",
        "--hours",
        "10",
        "--material",
        "500",
    ])
    .assert()
    .success();

    jc().args(["--db", &db_path, "summary", "1"])
        .assert()
        .success()
        .stdout(contains("0.0 h"))
        .stdout(contains("$0.00"))
        // actual margin equals the full contract
        .stdout(contains("$2,000.00"));
}

#[test]
fn test_summary_zero_estimate_reports_zero_percent() {
    let db_path = setup_test_db("summary_zero_estimate");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        &db_path,
        "job",
        "T&M job",
        "--contract",
        "1000",
        "--hours",
        "0",
        "--material",
        "0",
    ])
    .assert()
    .success();

    jc().args([
        "--db",
        &db_path,
        "report",
        "1",
        "--crew",
        "2",
        "--hours",
        "4",
        "--material",
        "100",
    ])
    .assert()
    .success();

    // no estimate → all burn percentages are 0, never a division error
    jc().args(["--db", &db_path, "summary", "1"])
        .assert()
        .success()
        .stdout(contains("0.0%"));
}

#[test]
fn test_summary_unknown_job_fails() {
    let db_path = setup_test_db("summary_unknown");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jc().args(["--db", &db_path, "summary", "7"])
        .assert()
        .failure()
        .stderr(contains("No job found with id 7"));
}

#[test]
fn test_summary_with_reports_flag_lists_reports() {
    let db_path = setup_test_db("summary_with_reports");
    common::init_db_with_job(&db_path);

    jc().args(["--db", &db_path, "summary", "1", "--reports"])
        .assert()
        .success()
        .stdout(contains("Reports:"))
        .stdout(contains("2026-03-12"))
        .stdout(contains("footings poured"));
}
