use serde::Serialize;

use super::entities::{BudgetSnapshot, Entry};
use super::id_generator::IdGenerator;
use super::value_objects::{EntryId, EntryKey, EntryType};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

const MAX_ID_ATTEMPTS: u64 = 8;

/// In-memory income/expense ledger with cached aggregates.
///
/// Cached totals are only meaningful right after [`Ledger::recompute`];
/// every mutation marks them stale.
pub struct Ledger {
    income: Vec<Entry>,
    expenses: Vec<Entry>,
    snapshot: BudgetSnapshot,
    stale: bool,
    id_generator: Box<dyn IdGenerator>,
}

#[derive(Serialize)]
struct LedgerState<'a> {
    income: &'a [Entry],
    expenses: &'a [Entry],
    totals: &'a BudgetSnapshot,
    stale: bool,
}

impl Ledger {
    pub fn new(id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            income: Vec::new(),
            expenses: Vec::new(),
            snapshot: BudgetSnapshot::default(),
            stale: false,
            id_generator: Box::new(id_generator),
        }
    }

    /// Appends a new entry with a fresh id. Input is not validated here.
    pub fn add_entry(
        &mut self,
        entry_type: EntryType,
        description: impl Into<String>,
        value: f64,
    ) -> Entry {
        let id = self.unique_id(entry_type);
        let entry = Entry::new(id, description, value);
        log_trace!(
            LogComponent::Domain("Ledger"),
            "add {} {} = {}",
            entry_type,
            entry.id,
            entry.value
        );
        self.entries_mut(entry_type).push(entry.clone());
        self.stale = true;
        entry
    }

    /// Removes the first entry matching `key`; `None` when nothing matched.
    pub fn delete_entry(&mut self, key: &EntryKey) -> Option<Entry> {
        let entries = self.entries_mut(key.entry_type);
        let Some(index) = entries.iter().position(|entry| entry.id == key.id) else {
            log_debug!(LogComponent::Domain("Ledger"), "delete: no entry for {}", key);
            return None;
        };
        let removed = entries.remove(index);
        self.stale = true;
        Some(removed)
    }

    pub fn recompute(&mut self) {
        let income_total = total(&self.income);
        let expense_total = total(&self.expenses);
        let percentage = if income_total > 0.0 {
            round_half_up(expense_total / income_total * 100.0)
        } else {
            BudgetSnapshot::PERCENTAGE_NOT_APPLICABLE
        };

        self.snapshot = BudgetSnapshot {
            budget: income_total - expense_total,
            income_total,
            expense_total,
            percentage,
        };
        self.stale = false;
    }

    /// Aggregates from the last [`Ledger::recompute`].
    pub fn snapshot(&self) -> BudgetSnapshot {
        self.snapshot
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn entries(&self, entry_type: EntryType) -> &[Entry] {
        match entry_type {
            EntryType::Income => &self.income,
            EntryType::Expense => &self.expenses,
        }
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full ledger state as JSON, for diagnostics.
    pub fn state_json(&self) -> AppResult<String> {
        let state = LedgerState {
            income: &self.income,
            expenses: &self.expenses,
            totals: &self.snapshot,
            stale: self.stale,
        };
        Ok(serde_json::to_string_pretty(&state)?)
    }

    fn entries_mut(&mut self, entry_type: EntryType) -> &mut Vec<Entry> {
        match entry_type {
            EntryType::Income => &mut self.income,
            EntryType::Expense => &mut self.expenses,
        }
    }

    fn unique_id(&mut self, entry_type: EntryType) -> EntryId {
        let mut candidate = self.id_generator.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.contains_id(entry_type, &candidate) {
                return candidate;
            }
            candidate = self.id_generator.next_id();
        }

        let mut counter = self.entries(entry_type).len() as u64;
        let mut suffixed = candidate.with_suffix(counter);
        while self.contains_id(entry_type, &suffixed) {
            counter += 1;
            suffixed = candidate.with_suffix(counter);
        }
        log_debug!(
            LogComponent::Domain("Ledger"),
            "id collision for {}, using {}",
            entry_type,
            suffixed
        );
        suffixed
    }

    fn contains_id(&self, entry_type: EntryType, id: &EntryId) -> bool {
        self.entries(entry_type).iter().any(|entry| &entry.id == id)
    }
}

fn total(entries: &[Entry]) -> f64 {
    entries.iter().fold(0.0, |sum, entry| sum + entry.value)
}

/// Rounds half toward positive infinity, like `Math.round`.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Share of `income_total` taken by a single expense, if income is positive.
pub fn entry_percentage(value: f64, income_total: f64) -> Option<i32> {
    (income_total > 0.0).then(|| round_half_up(value / income_total * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedId;

    impl IdGenerator for FixedId {
        fn next_id(&mut self) -> EntryId {
            EntryId::from_parts(42, 0.5)
        }
    }

    #[test]
    fn rounding_follows_math_round() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(39.4), 39);
    }

    #[test]
    fn colliding_generator_still_yields_unique_ids() {
        let mut ledger = Ledger::new(FixedId);
        let a = ledger.add_entry(EntryType::Expense, "a", 1.0);
        let b = ledger.add_entry(EntryType::Expense, "b", 2.0);
        let c = ledger.add_entry(EntryType::Expense, "c", 3.0);
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);

        // same id is fine across collections
        let d = ledger.add_entry(EntryType::Income, "d", 4.0);
        assert_eq!(a.id, d.id);
    }

    #[test]
    fn mutation_marks_cache_stale() {
        let mut ledger = Ledger::new(FixedId);
        assert!(!ledger.is_stale());
        ledger.add_entry(EntryType::Income, "x", 1.0);
        assert!(ledger.is_stale());
        ledger.recompute();
        assert!(!ledger.is_stale());
    }
}
