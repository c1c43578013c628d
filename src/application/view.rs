use crate::application::validation::RawInput;
use crate::domain::AppResult;
use crate::domain::ledger::{BudgetSnapshot, Entry, EntryKey, EntryType};

/// Rendering surface the coordinator drives.
///
/// Implementations own every detail of the page; the coordinator only
/// sequences calls.
pub trait BudgetView {
    fn read_input(&self) -> AppResult<RawInput>;

    /// Appends a block for `entry` to the list for `entry_type`.
    fn render_entry(&self, entry: &Entry, entry_type: EntryType) -> AppResult<()>;

    fn render_aggregates(&self, snapshot: &BudgetSnapshot) -> AppResult<()>;

    /// Refreshes the per-expense share labels against `income_total`.
    fn render_percentages(&self, income_total: f64) -> AppResult<()>;

    /// Removes the block for `key`; missing blocks are ignored.
    fn remove_entry(&self, key: &EntryKey) -> AppResult<()>;

    fn toggle_input_highlight(&self) -> AppResult<()>;

    fn clear_inputs(&self) -> AppResult<()>;

    fn render_current_month_label(&self) -> AppResult<()>;

    /// Blocking user-facing notice.
    fn alert(&self, message: &str);
}
