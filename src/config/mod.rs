//! Application configuration: optional TOML file with full defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClientConfig, Config, ServerConfig, StorageConfig};
