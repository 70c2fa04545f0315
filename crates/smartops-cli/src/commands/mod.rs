pub mod auth;
pub mod catalog;
pub mod config;
pub mod utils;

use anyhow::{Context, Result};
use smartops_application::SmartOpsApp;
use smartops_core::config::{ApiConfig, ConfigOverrides, Environment};
use smartops_infrastructure::{ConfigService, FileKeyValueStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub environment: Option<Environment>,
    pub base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// File config, then environment variables, then flags.
    pub fn resolve_config(&self) -> Result<ApiConfig> {
        let service = ConfigService::new(self.data_dir.as_deref())?;
        let config = service
            .get_config()
            .with_context(|| format!("Failed to load {}", service.config_path().display()))?;

        Ok(config.apply(ConfigOverrides {
            environment: self.environment,
            base_url: self.base_url.clone(),
            ..ConfigOverrides::default()
        }))
    }

    pub async fn open_app(&self) -> Result<SmartOpsApp> {
        let config = self.resolve_config()?;
        let store = FileKeyValueStore::new(self.data_dir.as_deref())?;
        tracing::debug!(path = %store.path().display(), "Using session store");

        Ok(SmartOpsApp::initialize(&config, Arc::new(store)).await?)
    }
}
