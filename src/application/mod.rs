pub mod coordinator;
pub mod validation;
pub mod view;

pub use coordinator::*;
pub use validation::*;
pub use view::*;
