#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchcard")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcard.sqlite", name));
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

/// Initialize a store and clock one full day for the seeded employee
pub fn init_db_with_data(db_path: &str) {
    // init store (creates schema and seeds)
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", db_path, "--test", "in", "--user", "NV001", "--date", "2025-09-01", "--time",
        "08:00",
    ])
    .assert()
    .success();

    pc().args([
        "--db", db_path, "--test", "out", "--user", "NV001", "--date", "2025-09-01", "--time",
        "18:00",
    ])
    .assert()
    .success();
}
