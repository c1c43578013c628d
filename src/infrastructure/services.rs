use crate::domain::ledger::RandomSource;
use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Console logger implementation for the WASM environment
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = BrowserTimeProvider.format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!(
                "[{}] {} {} | {}",
                timestamp, entry.level, entry.component, entry.message
            ),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = wasm_bindgen::JsValue::from(Self::format_log_entry(&entry));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// `Date.now()` backed clock
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// `Math.random()` backed randomness for entry ids
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
