use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::AppError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::presentation::bindings::{BudgetApp, install_global_app, with_global_app};

/// Mounts the built-in page shell into `<body>` and starts the app on it.
#[wasm_bindgen(js_name = mountBudgetApp)]
pub fn mount_budget_app() -> Result<(), JsValue> {
    leptos::mount_to_body(App);
    start(AppConfig::default())
}

/// Starts the app on markup already present in the page.
///
/// `config_json` is an optional JSON `AppConfig`; missing fields use defaults.
#[wasm_bindgen(js_name = attachBudgetApp)]
pub fn attach_budget_app(config_json: Option<String>) -> Result<(), JsValue> {
    let config = AppConfig::from_optional_json(config_json.as_deref())?;
    start(config)
}

/// Current aggregates as JSON.
#[wasm_bindgen(js_name = budgetSnapshot)]
pub fn budget_snapshot() -> Result<String, JsValue> {
    let snapshot = with_global_app(|app| app.coordinator().borrow().ledger().snapshot())
        .ok_or(AppError::NotStarted)?;
    Ok(serde_json::to_string(&snapshot).map_err(AppError::from)?)
}

/// Full ledger state as JSON, also echoed to the console.
#[wasm_bindgen(js_name = dumpLedger)]
pub fn dump_ledger() -> Result<String, JsValue> {
    let state = with_global_app(|app| app.coordinator().borrow().ledger().state_json())
        .ok_or(AppError::NotStarted)??;
    get_logger().log_with_metadata(
        crate::domain::logging::LogLevel::Info,
        LogComponent::Presentation("Api"),
        "Ledger dump",
        &state,
    );
    Ok(state)
}

fn start(config: AppConfig) -> Result<(), JsValue> {
    let app = BudgetApp::start(config).inspect_err(|e| {
        get_logger().error(
            LogComponent::Presentation("Api"),
            &format!("Failed to start budget app: {}", e),
        );
    })?;
    install_global_app(app);
    get_logger().info(LogComponent::Presentation("Api"), "Budget app started");
    Ok(())
}
