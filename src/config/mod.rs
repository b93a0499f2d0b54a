//! Configuration model for realestate.
//!
//! This module defines the Config struct that represents `realestate.yaml`.
//! Every field is optional; the defaults match the stock docker-compose
//! setup of the Real Estate app. Unknown fields are ignored.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
