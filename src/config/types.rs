use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub storage: StorageConfig,
}

/// Backend server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the backend server (host:port).
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Demo client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend server.
    pub base_url: String,
    /// WebSocket URL of the counter hub endpoint.
    pub hub_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hub_url: default_hub_url(),
        }
    }
}

/// Persistence settings for the demo client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage document path. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fluxkit")
                .join("storage.json")
        })
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_hub_url() -> String {
    "ws://127.0.0.1:5000/counterhub".to_string()
}
