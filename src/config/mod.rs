//! Persistent preferences: storage location, storage key, and dashboard
//! defaults.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
