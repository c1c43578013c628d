pub mod services;
pub mod ui;

pub use services::{BrowserRandom, BrowserTimeProvider, ConsoleLogger};
