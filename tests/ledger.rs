use budget_tracker_wasm::domain::ledger::{
    BudgetSnapshot, EntryId, EntryKey, EntryType, Ledger, TimestampIdGenerator,
};
use budget_tracker_wasm::infrastructure::ui::{format_amount, snapshot_percentage_label};

fn ledger() -> Ledger {
    let mut seed = 0.0_f64;
    Ledger::new(TimestampIdGenerator::new(move || {
        seed = (seed + 0.137) % 1.0;
        seed
    }))
}

fn describe(step: &str, s: &BudgetSnapshot) -> String {
    format!(
        "{}: income={} expenses={} budget={} pct={}",
        step,
        format_amount(s.income_total),
        format_amount(s.expense_total),
        format_amount(s.budget),
        snapshot_percentage_label(s)
    )
}

#[test]
fn salary_rent_scenario() {
    let mut ledger = ledger();
    let mut trace = Vec::new();

    let salary = ledger.add_entry(EntryType::Income, "Salary", 1000.0);
    ledger.recompute();
    let s = ledger.snapshot();
    assert_eq!((s.income_total, s.budget, s.percentage), (1000.0, 1000.0, 0));
    trace.push(describe("salary", &s));

    ledger.add_entry(EntryType::Expense, "Rent", 400.0);
    ledger.recompute();
    let s = ledger.snapshot();
    assert_eq!((s.expense_total, s.budget, s.percentage), (400.0, 600.0, 40));
    trace.push(describe("rent", &s));

    ledger.delete_entry(&salary.key(EntryType::Income));
    ledger.recompute();
    let s = ledger.snapshot();
    assert_eq!((s.income_total, s.budget, s.percentage), (0.0, -400.0, -1));
    trace.push(describe("delete salary", &s));

    insta::assert_snapshot!(trace.join("\n"), @r"
    salary: income=1,000.00 expenses=0.00 budget=1,000.00 pct=0%
    rent: income=1,000.00 expenses=400.00 budget=600.00 pct=40%
    delete salary: income=0.00 expenses=400.00 budget=-400.00 pct=---
    ");
}

#[test]
fn fresh_ledger_reports_not_applicable() {
    let ledger = ledger();
    assert!(ledger.is_empty());
    assert_eq!(ledger.snapshot(), BudgetSnapshot::default());
    assert_eq!(ledger.snapshot().percentage, BudgetSnapshot::PERCENTAGE_NOT_APPLICABLE);
    assert_eq!(ledger.snapshot().applicable_percentage(), None);
}

#[test]
fn entries_keep_insertion_order() {
    let mut ledger = ledger();
    for (i, name) in ["a", "b", "c"].iter().enumerate() {
        ledger.add_entry(EntryType::Expense, *name, i as f64 + 1.0);
    }
    let names: Vec<_> = ledger
        .entries(EntryType::Expense)
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert!(ledger.entries(EntryType::Income).is_empty());
}

#[test]
fn deleting_unknown_key_changes_nothing() {
    let mut ledger = ledger();
    ledger.add_entry(EntryType::Income, "Salary", 1000.0);
    ledger.add_entry(EntryType::Expense, "Food", 120.5);
    ledger.recompute();
    let before = ledger.snapshot();

    let missing = EntryKey::new(EntryType::Expense, "NOPE".parse::<EntryId>().unwrap());
    assert!(ledger.delete_entry(&missing).is_none());
    ledger.recompute();

    assert_eq!(ledger.snapshot(), before);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn delete_only_searches_its_own_type() {
    let mut ledger = ledger();
    let income = ledger.add_entry(EntryType::Income, "Salary", 1000.0);
    let wrong_type = EntryKey::new(EntryType::Expense, income.id.clone());
    assert!(ledger.delete_entry(&wrong_type).is_none());
    assert_eq!(ledger.entries(EntryType::Income).len(), 1);
}

#[test]
fn back_to_back_adds_get_distinct_ids() {
    let mut ledger = ledger();
    let first = ledger.add_entry(EntryType::Income, "One", 1.0);
    let second = ledger.add_entry(EntryType::Income, "Two", 2.0);
    assert_ne!(first.id, second.id);
}

#[test]
fn percentage_rounds_half_up() {
    let mut ledger = ledger();
    ledger.add_entry(EntryType::Income, "Salary", 200.0);
    ledger.add_entry(EntryType::Expense, "Coffee", 1.0);
    ledger.recompute();
    // 0.5% rounds up
    assert_eq!(ledger.snapshot().percentage, 1);
}

#[test]
fn state_json_lists_both_collections() {
    let mut ledger = ledger();
    ledger.add_entry(EntryType::Income, "Salary", 1000.0);
    ledger.add_entry(EntryType::Expense, "Rent", 400.0);
    ledger.recompute();

    let state: serde_json::Value = serde_json::from_str(&ledger.state_json().unwrap()).unwrap();
    assert_eq!(state["income"][0]["description"], "Salary");
    assert_eq!(state["expenses"][0]["value"], 400.0);
    assert_eq!(state["totals"]["percentage"], 40);
    assert_eq!(state["stale"], false);
}
