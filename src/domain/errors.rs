use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why an add-entry form submission was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    EmptyDescription,
    NotANumber,
    ZeroValue,
    UnknownEntryType(String),
}

/// Simplified error system for the whole app
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    InvalidInput(InputError),
    InvalidKey(String),
    ElementNotFound(String),
    Dom(String),
    Config(String),
    Serialization(String),
    NotStarted,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InputError::EmptyDescription => write!(f, "description is empty"),
            InputError::NotANumber => write!(f, "value is not a number"),
            InputError::ZeroValue => write!(f, "value is zero"),
            InputError::UnknownEntryType(kind) => write!(f, "unknown entry type '{}'", kind),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            AppError::InvalidKey(key) => write!(f, "Invalid entry key: {}", key),
            AppError::ElementNotFound(selector) => write!(f, "Element not found: {}", selector),
            AppError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
            AppError::NotStarted => write!(f, "Budget app has not been started"),
        }
    }
}

impl std::error::Error for InputError {}
impl std::error::Error for AppError {}

impl From<InputError> for AppError {
    fn from(error: InputError) -> Self {
        AppError::InvalidInput(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
