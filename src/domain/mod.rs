pub mod errors;
pub mod ledger;
pub mod logging;

pub use errors::{AppError, AppResult, InputError};
