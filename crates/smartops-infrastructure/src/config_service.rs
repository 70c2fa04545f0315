//! Configuration service implementation.
//!
//! Loads the API configuration from `config.toml` and layers environment
//! variable overrides on top.

use smartops_core::config::{ApiConfig, ConfigOverrides, Environment, RootConfig};
use smartops_core::error::{Result, SmartOpsError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::paths::SmartOpsPaths;

pub const ENV_ENVIRONMENT: &str = "SMARTOPS_ENV";
pub const ENV_BASE_URL: &str = "SMARTOPS_API_BASE_URL";
pub const ENV_LOGIN_PATH: &str = "SMARTOPS_LOGIN_PATH";
pub const ENV_REQUEST_TIMEOUT: &str = "SMARTOPS_REQUEST_TIMEOUT_SECS";

/// Configuration service that loads and caches the API configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ApiConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the standard config file, or the one under
    /// `base` if given.
    pub fn new(base: Option<&Path>) -> Result<Self> {
        let config_path = SmartOpsPaths::new(base).config_file()?;
        Ok(Self::with_path(config_path))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the file configuration with environment overrides applied,
    /// loading it on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// an override variable holds an invalid value.
    pub fn get_config(&self) -> Result<ApiConfig> {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let loaded = self.load_file()?.apply(env_overrides()?);
        tracing::debug!(
            path = %self.config_path.display(),
            environment = %loaded.environment,
            "Loaded API configuration"
        );

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }

    fn load_file(&self) -> Result<ApiConfig> {
        if !self.config_path.exists() {
            return Ok(ApiConfig::default());
        }

        let content = std::fs::read_to_string(&self.config_path).map_err(|e| {
            SmartOpsError::config(format!(
                "Failed to read {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        RootConfig::from_toml_str(&content)
            .map(|root| root.api)
            .map_err(|e| {
                SmartOpsError::config(format!(
                    "Failed to parse {}: {}",
                    self.config_path.display(),
                    e
                ))
            })
    }
}

/// Reads the `SMARTOPS_*` environment overrides.
pub fn env_overrides() -> Result<ConfigOverrides> {
    overrides_from(|name| std::env::var(name).ok())
}

fn overrides_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ConfigOverrides> {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let environment = get(ENV_ENVIRONMENT)
        .map(|raw| {
            raw.trim().parse::<Environment>().map_err(|_| {
                SmartOpsError::config(format!("{} has unknown environment '{}'", ENV_ENVIRONMENT, raw))
            })
        })
        .transpose()?;

    let request_timeout_secs = get(ENV_REQUEST_TIMEOUT)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|_| {
                SmartOpsError::config(format!("{} must be a whole number of seconds", ENV_REQUEST_TIMEOUT))
            })
        })
        .transpose()?;

    Ok(ConfigOverrides {
        environment,
        base_url: get(ENV_BASE_URL),
        login_path: get(ENV_LOGIN_PATH),
        request_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load_file().unwrap(), ApiConfig::default());
    }

    #[test]
    fn test_reads_api_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nenvironment = \"development\"\nlogin_path = \"/auth/login\"\n",
        )
        .unwrap();

        let config = ConfigService::with_path(path).load_file().unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.login_path, "/auth/login");
    }

    #[test]
    fn test_config_is_read_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nlogin_path = \"/auth/login\"\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        let first = service.get_config().unwrap();
        std::fs::write(&path, "[api]\nlogin_path = \"/signin\"\n").unwrap();

        assert_eq!(service.get_config().unwrap(), first);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api\n").unwrap();

        let err = ConfigService::with_path(path).load_file().unwrap_err();
        assert!(matches!(err, SmartOpsError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let overrides = overrides_from(lookup(&[
            (ENV_ENVIRONMENT, "dev"),
            (ENV_BASE_URL, "http://localhost:5000/api"),
            (ENV_REQUEST_TIMEOUT, "10"),
            (ENV_LOGIN_PATH, ""),
        ]))
        .unwrap();
        assert_eq!(overrides.environment, Some(Environment::Development));
        assert_eq!(overrides.base_url.as_deref(), Some("http://localhost:5000/api"));
        assert_eq!(overrides.request_timeout_secs, Some(10));
        assert!(overrides.login_path.is_none());
    }

    #[test]
    fn test_invalid_env_values() {
        assert!(overrides_from(lookup(&[(ENV_ENVIRONMENT, "staging")])).is_err());
        assert!(overrides_from(lookup(&[(ENV_REQUEST_TIMEOUT, "soon")])).is_err());
    }
}
