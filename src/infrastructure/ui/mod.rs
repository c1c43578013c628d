pub mod dom_view;
pub mod format;

pub use dom_view::DomBudgetView;
pub use format::*;
