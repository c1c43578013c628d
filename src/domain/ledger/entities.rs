use super::value_objects::{EntryId, EntryKey, EntryType};
use serde::{Deserialize, Serialize};

/// Domain entity - a single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    pub value: f64,
}

impl Entry {
    pub fn new(id: EntryId, description: impl Into<String>, value: f64) -> Self {
        Self { id, description: description.into(), value }
    }

    pub fn key(&self, entry_type: EntryType) -> EntryKey {
        EntryKey::new(entry_type, self.id.clone())
    }
}

/// Aggregates produced by the last recompute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub budget: f64,
    pub income_total: f64,
    pub expense_total: f64,
    pub percentage: i32,
}

impl BudgetSnapshot {
    /// Percentage value meaning "no income to compare against".
    pub const PERCENTAGE_NOT_APPLICABLE: i32 = -1;

    pub fn applicable_percentage(&self) -> Option<i32> {
        (self.percentage >= 0).then_some(self.percentage)
    }
}

impl Default for BudgetSnapshot {
    fn default() -> Self {
        Self {
            budget: 0.0,
            income_total: 0.0,
            expense_total: 0.0,
            percentage: Self::PERCENTAGE_NOT_APPLICABLE,
        }
    }
}
