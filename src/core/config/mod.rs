pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main argoforge configuration loaded from argoforge.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForgeConfig {
    /// Argo server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Template catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Argo server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Argo server API
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Namespace workflows are submitted into
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Optional bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            namespace: default_namespace(),
            auth_token: None,
        }
    }
}

/// Template catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the template catalog YAML file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_log_level(),
        }
    }
}

// Default functions
fn default_server_url() -> String {
    "https://localhost:2746".to_string()
}

fn default_namespace() -> String {
    "argo".to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.yaml")
}

fn default_log_level() -> String {
    "info".to_string()
}
