use predicates::str::contains;

mod common;
use common::{jc, setup_test_db, temp_out};

#[test]
fn test_export_csv_all_reports() {
    let db_path = setup_test_db("export_csv");
    common::init_db_with_job(&db_path);

    let out = temp_out("export_csv", "csv");

    jc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,job_id,job_number,date,crew_size,hours,material_cost,notes"));
    assert!(content.contains("24-117"));
    assert!(content.contains("2026-03-12"));
    assert!(content.contains("footings poured"));
}

#[test]
fn test_export_json_single_job() {
    let db_path = setup_test_db("export_json");
    common::init_db_with_job(&db_path);

    // second job whose reports must NOT appear
    jc().args([
        "--db",
        &db_path,
        "job",
        "Other job",
        "--contract",
        "100",
        "--hours",
        "1",
        "--material",
        "0",
    ])
    .assert()
    .success();

    jc().args([
        "--db",
        &db_path,
        "report",
        "2",
        "--date",
        "2026-04-01",
        "--crew",
        "1",
        "--hours",
        "2",
    ])
    .assert()
    .success();

    let out = temp_out("export_json", "json");

    jc().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--job", "1",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = std::fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of reports");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["job_number"], "24-117");
    assert_eq!(rows[0]["crew_size"], 2.0);
    assert_eq!(rows[0]["material_cost"], 100.0);
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    common::init_db_with_job(&db_path);

    jc().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        "reports.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_unknown_job_fails() {
    let db_path = setup_test_db("export_unknown_job");
    common::init_db_with_job(&db_path);

    let out = temp_out("export_unknown_job", "csv");

    jc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--job", "99",
    ])
    .assert()
    .failure()
    .stderr(contains("No job found with id 99"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    common::init_db_with_job(&db_path);

    let out = temp_out("export_force", "csv");
    std::fs::write(&out, "stale").expect("seed existing file");

    jc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("stale"));
    assert!(content.contains("24-117"));
}

#[test]
fn test_export_empty_db_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    jc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    jc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("No daily reports found"));

    assert!(!std::path::Path::new(&out).exists());
}
