use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger, set_min_level};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Installs the panic hook, console logger and browser clock.
///
/// The page then calls `mountBudgetApp` or `attachBudgetApp`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));
    set_min_level(LogLevel::build_default());

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Budget tracker initialized",
    );
}
