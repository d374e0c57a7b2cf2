#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jc() -> Command {
    cargo_bin_cmd!("jobcost")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobcost.sqlite", name));
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

/// Initialize DB and create one job with a small set of daily reports.
/// Job parameters match the documented worked example at labor rate 55.
pub fn init_db_with_job(db_path: &str) {
    // init DB (creates tables)
    jc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    jc().args([
        "--db",
        db_path,
        "job",
        "Warehouse shell",
        "--number",
        "24-117",
        "--client",
        "Acme Builders",
        "--contract",
        "2000",
        "--hours",
        "10",
        "--material",
        "500",
    ])
    .assert()
    .success();

    jc().args([
        "--db",
        db_path,
        "report",
        "1",
        "--date",
        "2026-03-12",
        "--crew",
        "2",
        "--hours",
        "4",
        "--material",
        "100",
        "--notes",
        "footings poured",
    ])
    .assert()
    .success();
}
