// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;

// Re-export commonly used items
pub use client::AllocationClient;
pub use config::{get_access_token, get_api_url, load_config, save_config, Config};
pub use context::AppContext;
pub use error::{AllocationError, AllocationResult};
pub use models::*;

#[cfg(test)]
mod tests;
