use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, sl, temp_out};

#[test]
fn test_init_seeds_roster() {
    let db_path = setup_test_db("init_seeds_roster");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Roster seeded with 6 employee(s)"));

    sl().args(["--db", &db_path, "roster"])
        .assert()
        .success()
        .stdout(contains("Karishma").and(contains("24000")).and(contains("Sahil")));

    // a second init keeps the roster as it is
    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Roster seeded").not());
}

#[test]
fn test_mark_resubmit_replaces_record() {
    let db_path = setup_test_db("mark_resubmit");
    init_db(&db_path);

    sl().args(["--db", &db_path, "mark", "2026-03-02", "Riya", "leave"])
        .assert()
        .success()
        .stdout(contains("Saved: Riya is on Leave"));

    sl().args(["--db", &db_path, "mark", "2026-03-02", "riya", "h"])
        .assert()
        .success()
        .stdout(contains("Replaced previous status: Leave"));

    let out = sl()
        .args(["--db", &db_path, "records", "--month", "2026-03"])
        .output()
        .expect("failed to list records");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows: Vec<&str> = stdout.lines().filter(|l| l.contains("Riya")).collect();
    assert_eq!(rows.len(), 1, "expected a single record, got: {stdout}");
    assert!(rows[0].contains("02-03-2026"));
    assert!(rows[0].contains("Half-Day"));
}

#[test]
fn test_mark_present_removes_record() {
    let db_path = setup_test_db("mark_present");
    init_db(&db_path);

    sl().args(["--db", &db_path, "mark", "2026-03-02", "Neha", "leave"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "mark", "2026-03-02", "Neha", "present"])
        .assert()
        .success()
        .stdout(contains("Saved: Neha is Present"));

    sl().args(["--db", &db_path, "history", "Neha"])
        .assert()
        .success()
        .stdout(contains("No leave records found for Neha."));
}

#[test]
fn test_mark_rejects_bad_input() {
    let db_path = setup_test_db("mark_bad_input");
    init_db(&db_path);

    sl().args(["--db", &db_path, "mark", "2026-03-02", "Ghost", "leave"])
        .assert()
        .failure()
        .stderr(contains("Unknown employee: Ghost"));

    sl().args(["--db", &db_path, "mark", "2026-03-02", "Riya", "sick"])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status"));

    sl().args(["--db", &db_path, "mark", "2026-02-30", "Riya", "leave"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_summary_applies_payout_rules() {
    let db_path = setup_test_db("summary_rules");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "roster", "--set", "Riya=26000"])
        .assert()
        .success()
        .stdout(contains("Base salary of Riya set to 26000"));

    let out = sl()
        .args(["--db", &db_path, "summary", "--month", "2026-03"])
        .output()
        .expect("failed to run summary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let row = |name: &str| -> Vec<String> {
        stdout
            .lines()
            .find(|l| l.starts_with(name))
            .unwrap_or_else(|| panic!("no row for {name} in: {stdout}"))
            .split_whitespace()
            .map(str::to_string)
            .collect()
    };

    // name, base, leaves, bonus, deduction, final
    assert_eq!(row("Riya"), ["Riya", "26000", "1.5", "0", "500", "25500"]);
    assert_eq!(row("Neha"), ["Neha", "21000", "1.0", "0", "0", "21000"]);
    assert_eq!(row("Karishma"), ["Karishma", "24000", "0.0", "1000", "0", "25000"]);
}

#[test]
fn test_roster_rejects_unknown_and_negative() {
    let db_path = setup_test_db("roster_reject");
    init_db(&db_path);

    sl().args(["--db", &db_path, "roster", "--set", "Ghost=1000"])
        .assert()
        .failure()
        .stderr(contains("Unknown employee"));

    sl().args(["--db", &db_path, "roster", "--set", "Riya=-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid salary"));
}

#[test]
fn test_del_confirms_and_missing_is_noop() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "del", "2026-03-05", "Neha"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    sl().args(["--db", &db_path, "history", "Neha"])
        .assert()
        .success()
        .stdout(contains("05-03-2026"));

    sl().args(["--db", &db_path, "del", "2026-03-05", "Neha"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    sl().args(["--db", &db_path, "del", "2026-03-05", "Neha", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    sl().args(["--db", &db_path, "history", "Neha"])
        .assert()
        .success()
        .stdout(contains("No leave records found for Neha."));
}

#[test]
fn test_clear_removes_everything() {
    let db_path = setup_test_db("clear_all");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("4 removed"));

    sl().args(["--db", &db_path, "records", "--month", "2026-03"])
        .assert()
        .success()
        .stdout(contains("No records found in the system yet."));
}

#[test]
fn test_records_for_empty_month() {
    let db_path = setup_test_db("records_empty_month");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "records", "--month", "2026-05"])
        .assert()
        .success()
        .stdout(contains("No leave records found for May 2026."));

    sl().args(["--db", &db_path, "records", "--month", "2026-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_export_csv_filtered_by_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_month", "csv");

    sl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2026-03",
    ])
    .assert()
    .success()
    .stdout(contains("3 record(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Date,Name,Status\n"));
    assert!(content.contains("2026-03-10,Riya,Half-Day"));
    assert!(content.contains("2026-03-05,Neha,Leave"));
    assert!(!content.contains("2026-04-01"));
}

#[test]
fn test_export_json_by_employee() {
    let db_path = setup_test_db("export_json_name");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_name", "json");

    sl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--name", "Riya",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(3));
    assert!(content.contains("\"Status\": \"Half-Day\""));
    assert!(!content.contains("Neha"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    sl().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sl().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,Name,Status"));
}

#[test]
fn test_history_with_csv_download() {
    let db_path = setup_test_db("history_csv");
    init_db_with_data(&db_path);
    let out = temp_out("history_csv", "csv");

    sl().args(["--db", &db_path, "history", "riya", "--csv", &out])
        .assert()
        .success()
        .stdout(contains("Recorded absences for Riya"))
        .stdout(contains("01-04-2026"));

    let content = fs::read_to_string(&out).expect("read history csv");
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_slip_and_share_link() {
    let db_path = setup_test_db("slip_share");
    init_db_with_data(&db_path);

    sl().args([
        "--db", &db_path, "slip", "Riya", "--month", "2026-03", "--share", "--phone", "919999999999",
    ])
    .assert()
    .success()
    .stdout(contains("Salary Slip: March 2026"))
    .stdout(contains("Leave Dates: 02-03"))
    .stdout(contains("Half-Day Dates: 10-03"))
    .stdout(contains("https://wa.me/919999999999?text=Salary%20Slip"));
}

#[test]
fn test_audit_records_mutations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "audit"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("mark (Riya on 2026-03-02: Leave)"))
        .stdout(contains("clear (all records)"));
}
