//! Command implementations.

mod config;
mod search;

pub use config::run_config;
pub use search::run_search;
