use chrono::NaiveDate;
use staffledger::core::ledger::{Ledger, LedgerChange, RecordFilter};
use staffledger::core::reports::{employee_history, monthly_log};
use staffledger::models::period::Period;
use staffledger::models::status::{Mark, Status};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_upsert_is_idempotent() {
    let mut once = Ledger::new();
    once.upsert(d(2026, 3, 2), "Riya", Mark::Leave);

    let mut twice = Ledger::new();
    twice.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    twice.upsert(d(2026, 3, 2), "Riya", Mark::Leave);

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn test_resubmit_replaces_previous_status() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave), None);
    assert_eq!(
        ledger.upsert(d(2026, 3, 2), "Riya", Mark::HalfDay),
        Some(Status::Leave)
    );

    let filter = RecordFilter::all().on(d(2026, 3, 2)).employee("Riya");
    let found: Vec<_> = ledger.query(|r| filter.matches(r)).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].status, Status::HalfDay);
}

#[test]
fn test_at_most_one_record_per_pair_after_mixed_operations() {
    let mut ledger = Ledger::new();
    let marks = [Mark::Leave, Mark::HalfDay, Mark::Present, Mark::Leave, Mark::Leave];

    for (i, m) in marks.iter().enumerate() {
        for name in ["Riya", "Neha"] {
            ledger.upsert(d(2026, 3, 1 + (i as u32 % 2)), name, *m);
        }
    }
    ledger.delete(d(2026, 3, 1), "Neha");

    for day in 1..=2 {
        for name in ["Riya", "Neha"] {
            let filter = RecordFilter::all().on(d(2026, 3, day)).employee(name);
            assert!(ledger.query(|r| filter.matches(r)).count() <= 1);
        }
    }
}

#[test]
fn test_present_is_absence() {
    let mut ledger = Ledger::new();
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Present);

    let filter = RecordFilter::all().on(d(2026, 3, 2)).employee("Riya");
    assert_eq!(ledger.query(|r| filter.matches(r)).count(), 0);

    // marking present on an empty day stores nothing either
    ledger.upsert(d(2026, 3, 3), "Neha", Mark::Present);
    assert!(ledger.is_empty());
}

#[test]
fn test_delete_then_query_and_missing_delete() {
    let mut ledger = Ledger::new();
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave);

    assert!(ledger.delete(d(2026, 3, 2), "Riya"));
    assert!(ledger.get(d(2026, 3, 2), "Riya").is_none());

    // no-op, not an error
    assert!(!ledger.delete(d(2026, 3, 2), "Riya"));
    assert!(!ledger.delete(d(2020, 1, 1), "Nobody"));
}

#[test]
fn test_clear_all_empties_every_query() {
    let mut ledger = Ledger::new();
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    ledger.upsert(d(2026, 4, 2), "Neha", Mark::HalfDay);

    assert_eq!(ledger.clear_all(), 2);
    assert_eq!(ledger.query(|_| true).count(), 0);
    assert_eq!(
        ledger
            .query(|r| RecordFilter::all().employee("Neha").matches(r))
            .count(),
        0
    );
}

#[test]
fn test_query_is_restartable_and_read_only() {
    let mut ledger = Ledger::new();
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    ledger.upsert(d(2026, 3, 3), "Neha", Mark::HalfDay);

    let march = RecordFilter::all().in_period(Period::new(2026, 3).unwrap());
    let first: Vec<_> = ledger.query(|r| march.matches(r)).collect();
    let riya_only: Vec<_> = ledger.query(|r| r.employee_name == "Riya").collect();
    let second: Vec<_> = ledger.query(|r| march.matches(r)).collect();

    assert_eq!(first, second);
    assert_eq!(riya_only.len(), 1);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_apply_matches_direct_operations() {
    let mut direct = Ledger::new();
    direct.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    direct.upsert(d(2026, 3, 3), "Riya", Mark::HalfDay);
    direct.delete(d(2026, 3, 2), "Riya");

    let mut replayed = Ledger::new();
    for change in [
        LedgerChange::Upsert {
            date: d(2026, 3, 2),
            employee_name: "Riya".into(),
            mark: Mark::Leave,
        },
        LedgerChange::Upsert {
            date: d(2026, 3, 3),
            employee_name: "Riya".into(),
            mark: Mark::HalfDay,
        },
        LedgerChange::Delete {
            date: d(2026, 3, 2),
            employee_name: "Riya".into(),
        },
    ] {
        replayed.apply(&change);
    }

    assert_eq!(direct, replayed);

    replayed.apply(&LedgerChange::ClearAll);
    assert!(replayed.is_empty());
}

#[test]
fn test_reports_sort_newest_first() {
    let mut ledger = Ledger::new();
    ledger.upsert(d(2026, 3, 2), "Riya", Mark::Leave);
    ledger.upsert(d(2026, 3, 20), "Neha", Mark::HalfDay);
    ledger.upsert(d(2026, 3, 20), "Bhumi", Mark::Leave);
    ledger.upsert(d(2026, 2, 27), "Riya", Mark::Leave);

    let log = monthly_log(&ledger, Period::new(2026, 3).unwrap());
    let order: Vec<_> = log
        .iter()
        .map(|r| (r.date.format("%d").to_string(), r.employee_name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("20".to_string(), "Bhumi"),
            ("20".to_string(), "Neha"),
            ("02".to_string(), "Riya"),
        ]
    );

    let history = employee_history(&ledger, "Riya");
    assert_eq!(history.len(), 2);
    assert!(history[0].date > history[1].date);
}
