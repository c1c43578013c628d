use serde::Deserialize;

use crate::domain::ledger::EntryType;
use crate::domain::logging::LogLevel;
use crate::domain::{AppError, AppResult};

pub const DEFAULT_INVALID_INPUT_MESSAGE: &str =
    "Please add description and valid dollar amount before submitting.";

/// DOM selectors, class names and attributes the view works against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub input_type: String,
    pub input_description: String,
    pub input_value: String,
    pub input_button: String,
    pub budget_label: String,
    pub income_label: String,
    pub expenses_label: String,
    pub percentage_label: String,
    pub container: String,
    pub income_list: String,
    pub expenses_list: String,
    pub month_label: String,
    /// Matched against the click target in the container.
    pub delete_icon: String,
    /// Attribute on the delete icon holding the `{type}-{id}` key.
    pub entry_key_attribute: String,
    pub focus_highlight_class: String,
    pub button_highlight_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            input_type: ".add__type".into(),
            input_description: ".add__description".into(),
            input_value: ".add__value".into(),
            input_button: ".add__btn".into(),
            budget_label: ".budget__value".into(),
            income_label: ".budget__income--value".into(),
            expenses_label: ".budget__expenses--value".into(),
            percentage_label: ".budget__expenses--percentage".into(),
            container: ".container".into(),
            income_list: ".income__list".into(),
            expenses_list: ".expenses__list".into(),
            month_label: ".budget__title--month".into(),
            delete_icon: "i".into(),
            entry_key_attribute: "data-item".into(),
            focus_highlight_class: "red-focus".into(),
            button_highlight_class: "red".into(),
        }
    }
}

impl Selectors {
    pub fn list_for(&self, entry_type: EntryType) -> &str {
        match entry_type {
            EntryType::Income => &self.income_list,
            EntryType::Expense => &self.expenses_list,
        }
    }

    /// Direct children of the expense list, one per rendered expense.
    pub fn expense_items(&self) -> String {
        format!("{} > div", self.expenses_list)
    }
}

/// Top-level app configuration; every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub selectors: Selectors,
    pub log_level: LogLevel,
    pub invalid_input_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            log_level: LogLevel::build_default(),
            invalid_input_message: DEFAULT_INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// `None` or blank input yields the defaults.
    pub fn from_optional_json(json: Option<&str>) -> AppResult<Self> {
        match json.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(
            r##"{"log_level":"warn","selectors":{"container":"#app"}}"##,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.selectors.container, "#app");
        assert_eq!(config.selectors.income_list, ".income__list");
        assert_eq!(config.invalid_input_message, DEFAULT_INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn blank_json_is_default() {
        assert_eq!(AppConfig::from_optional_json(Some("  ")).unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_optional_json(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(AppError::Config(_))));
    }

    #[test]
    fn expense_items_selector() {
        assert_eq!(Selectors::default().expense_items(), ".expenses__list > div");
    }
}
