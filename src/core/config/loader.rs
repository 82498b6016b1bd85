use super::ForgeConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/argoforge.toml).
    /// Environment variables override config file values.
    /// Falls back to defaults when the file does not exist.
    pub fn load_from_workspace(workspace_path: &Path) -> Result<ForgeConfig, AppError> {
        let config_path = workspace_path.join("argoforge.toml");
        let config_file = Self::load_from_file(&config_path)?;

        let mut config = config_file.unwrap_or_default();

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from a specific file path.
    /// Returns Ok(None) if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> Result<Option<ForgeConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: ForgeConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigLoadError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration.
    /// Environment variables take precedence over config file values.
    fn apply_env_overrides(config: &mut ForgeConfig) {
        if let Ok(url) = env::var("ARGOFORGE_SERVER_URL") {
            config.server.url = url;
        }

        if let Ok(namespace) = env::var("ARGOFORGE_NAMESPACE") {
            config.server.namespace = namespace;
        }

        if let Ok(token) = env::var("ARGOFORGE_AUTH_TOKEN") {
            config.server.auth_token = Some(token);
        }

        if let Ok(catalog_path) = env::var("ARGOFORGE_CATALOG_PATH") {
            config.catalog.path = PathBuf::from(catalog_path);
        }

        if let Ok(level) = env::var("ARGOFORGE_LOG_LEVEL") {
            config.logging.default_level = level;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "ARGOFORGE_SERVER_URL - Override Argo server base URL (default: https://localhost:2746)",
            "ARGOFORGE_NAMESPACE - Override submission namespace (default: argo)",
            "ARGOFORGE_AUTH_TOKEN - Bearer token sent with server requests",
            "ARGOFORGE_CATALOG_PATH - Override template catalog path (default: catalog.yaml)",
            "ARGOFORGE_LOG_LEVEL - Override default tracing filter (default: info)",
        ]
    }

    /// Validate configuration values
    pub fn validate_config(config: &ForgeConfig) -> Result<(), AppError> {
        if url::Url::parse(&config.server.url).is_err() {
            return Err(AppError::new(
                ErrorCategory::ConfigLoadError,
                format!("Server URL is not a valid URL: {}", config.server.url),
            ));
        }

        if config.server.namespace.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigLoadError,
                "Namespace cannot be empty".to_string(),
            ));
        }

        if config.catalog.path.as_os_str().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ConfigLoadError,
                "Catalog path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
