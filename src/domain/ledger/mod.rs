//! Ledger aggregate: entries, id generation and budget aggregation.

pub mod entities;
pub mod id_generator;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use id_generator::*;
pub use services::*;
pub use value_objects::*;
