#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, isolated from the user's real configuration.
pub fn sl() -> Command {
    let mut cmd = cargo_bin_cmd!("staffledger");
    cmd.env("HOME", test_home()).env("NO_COLOR", "1");
    cmd
}

/// Binary under test with its own home directory, for tests that write a
/// configuration file.
pub fn sl_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("staffledger");
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("staffledger_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffledger.sqlite", name));
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

/// Initialize the DB (schema + seeded roster) without touching the config file
pub fn init_db(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and add a small March 2026 dataset
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (date, name, status) in [
        ("2026-03-02", "Riya", "leave"),
        ("2026-03-10", "Riya", "half-day"),
        ("2026-03-05", "Neha", "leave"),
        ("2026-04-01", "Riya", "leave"),
    ] {
        sl().args(["--db", db_path, "mark", date, name, status])
            .assert()
            .success();
    }
}
