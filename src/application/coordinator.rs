use crate::application::validation::validate_input;
use crate::application::view::BudgetView;
use crate::config::DEFAULT_INVALID_INPUT_MESSAGE;
use crate::domain::ledger::{BudgetSnapshot, Entry, EntryKey, EntryType, Ledger};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::{AppError, AppResult};
use crate::log_debug;

/// Sequences user actions into ledger mutations and view updates.
pub struct BudgetCoordinator<V: BudgetView> {
    ledger: Ledger,
    view: V,
    invalid_input_message: String,
}

impl<V: BudgetView> BudgetCoordinator<V> {
    pub fn new(ledger: Ledger, view: V) -> Self {
        get_logger().info(
            LogComponent::Application("BudgetCoordinator"),
            "Creating new budget coordinator",
        );

        Self {
            ledger,
            view,
            invalid_input_message: DEFAULT_INVALID_INPUT_MESSAGE.to_string(),
        }
    }

    pub fn with_invalid_input_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_input_message = message.into();
        self
    }

    /// Month label plus the empty-ledger aggregates.
    pub fn initialize(&mut self) -> AppResult<()> {
        self.view.render_current_month_label()?;
        self.refresh()?;
        get_logger().info(
            LogComponent::Application("BudgetCoordinator"),
            "Budget view initialized",
        );
        Ok(())
    }

    /// Add flow: read, validate, store, render, recompute.
    ///
    /// Invalid input alerts the user and returns
    /// [`AppError::InvalidInput`] without touching ledger or view. A view
    /// failure after the entry was stored removes it again.
    pub fn add_entry_from_input(&mut self) -> AppResult<Entry> {
        let input = self.view.read_input()?;
        let valid = match validate_input(&input) {
            Ok(valid) => valid,
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("BudgetCoordinator"),
                    &format!("Rejected entry: {}", e),
                );
                self.view.alert(&self.invalid_input_message);
                return Err(e.into());
            }
        };

        let entry = self
            .ledger
            .add_entry(valid.entry_type, valid.description, valid.value);
        if let Err(e) = self.show_added(&entry, valid.entry_type) {
            self.roll_back(&entry.key(valid.entry_type));
            return Err(e);
        }

        log_debug!(
            LogComponent::Application("BudgetCoordinator"),
            "Added {} -> budget {:.2}",
            entry.key(valid.entry_type),
            self.ledger.snapshot().budget
        );
        Ok(entry)
    }

    /// Delete flow for a raw `{type}-{id}` key taken from the page.
    ///
    /// Keys that do not parse or match nothing leave everything unchanged.
    pub fn delete_entry_by_key(&mut self, raw_key: &str) -> AppResult<()> {
        let key: EntryKey = match raw_key.parse() {
            Ok(key) => key,
            Err(e) => {
                log_debug!(LogComponent::Application("BudgetCoordinator"), "Ignoring delete: {}", e);
                return Ok(());
            }
        };
        self.delete_entry(&key)
    }

    pub fn delete_entry(&mut self, key: &EntryKey) -> AppResult<()> {
        self.view.remove_entry(key)?;
        if self.ledger.delete_entry(key).is_some() {
            log_debug!(LogComponent::Application("BudgetCoordinator"), "Deleted {}", key);
        }
        self.refresh()?;
        Ok(())
    }

    pub fn toggle_input_highlight(&self) -> AppResult<()> {
        self.view.toggle_input_highlight()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn show_added(&mut self, entry: &Entry, entry_type: EntryType) -> AppResult<()> {
        self.view.render_entry(entry, entry_type)?;
        self.view.clear_inputs()?;
        self.refresh()?;
        Ok(())
    }

    /// Undoes an add whose rendering failed so ledger and page agree again.
    fn roll_back(&mut self, key: &EntryKey) {
        self.ledger.delete_entry(key);
        self.ledger.recompute();
        if let Err(e) = self.view.remove_entry(key) {
            get_logger().warn(
                LogComponent::Application("BudgetCoordinator"),
                &format!("Could not remove {} after failed add: {}", key, e),
            );
        }
        get_logger().error(
            LogComponent::Application("BudgetCoordinator"),
            &format!("Rolled back {} after a render failure", key),
        );
    }

    fn refresh(&mut self) -> AppResult<BudgetSnapshot> {
        self.ledger.recompute();
        let snapshot = self.ledger.snapshot();
        self.view.render_aggregates(&snapshot)?;
        self.view.render_percentages(snapshot.income_total)?;
        Ok(snapshot)
    }
}

/// True for errors the user already saw as an alert.
pub fn is_user_error(error: &AppError) -> bool {
    matches!(error, AppError::InvalidInput(_))
}
