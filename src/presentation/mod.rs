pub mod bindings;
pub mod wasm_api;

pub use bindings::{BudgetApp, with_global_app};
