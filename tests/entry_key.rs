use budget_tracker_wasm::domain::AppError;
use budget_tracker_wasm::domain::ledger::{EntryId, EntryKey, EntryType};
use std::str::FromStr;

#[test]
fn key_round_trips_through_dom_string() {
    let key = EntryKey::new(EntryType::Expense, EntryId::from_parts(1_700_000_000_000, 0.42));
    let text = key.to_string();
    assert!(text.starts_with("expenses-"));
    assert_eq!(EntryKey::from_str(&text).unwrap(), key);
}

#[test]
fn short_type_names_parse() {
    let key: EntryKey = "inc-ABC123".parse().unwrap();
    assert_eq!(key.entry_type, EntryType::Income);
    assert_eq!(key.id.value(), "ABC123");
    assert_eq!(key.to_string(), "income-ABC123");
}

#[test]
fn splits_on_first_separator_only() {
    // ids never contain '-', so a second one makes the key invalid
    assert!(matches!(
        EntryKey::from_str("income-ABC-123"),
        Err(AppError::InvalidKey(_))
    ));
}

#[test]
fn malformed_keys_are_rejected() {
    for raw in ["", "income", "income-", "savings-ABC", "-ABC"] {
        assert!(EntryKey::from_str(raw).is_err(), "{raw:?} should not parse");
    }
}

#[test]
fn entry_type_strings() {
    assert_eq!(EntryType::Income.to_string(), "income");
    assert_eq!(EntryType::Expense.as_ref(), "expenses");
    assert_eq!(EntryType::from_str("exp").unwrap(), EntryType::Expense);
}
