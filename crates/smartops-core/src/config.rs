//! API configuration.
//!
//! The single place endpoint URLs are derived from. Every request the core
//! makes resolves its URL through [`Endpoints`].

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{Display, EnumString};

use crate::error::{Result, SmartOpsError};

pub const DEVELOPMENT_BASE_URL: &str = "http://10.0.2.2:5000/api";
pub const PRODUCTION_BASE_URL: &str = "https://smartsolutionfl.com/api";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Deployment the client talks to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[serde(alias = "dev")]
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    #[default]
    #[serde(alias = "prod")]
    #[strum(to_string = "production", serialize = "prod")]
    Production,
}

impl Environment {
    pub fn default_base_url(self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub api: ApiConfig,
}

impl RootConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Connection settings for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Overrides the environment's default base URL.
    pub base_url: Option<String>,
    /// Path of the login endpoint relative to the base URL.
    pub login_path: String,
    /// Deadline for every request; `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Values layered over the file configuration (environment variables,
/// command-line flags). `None` leaves the underlying value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub environment: Option<Environment>,
    pub base_url: Option<String>,
    pub login_path: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(environment) = overrides.environment {
            self.environment = environment;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = Some(base_url);
        }
        if let Some(login_path) = overrides.login_path {
            self.login_path = login_path;
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        self
    }

    /// Base URL without trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the URL is not an absolute http(s) URL.
    pub fn resolved_base_url(&self) -> Result<String> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.environment.default_base_url());

        let url = Url::parse(raw)
            .map_err(|e| SmartOpsError::config(format!("Invalid base URL '{}': {}", raw, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SmartOpsError::config(format!(
                "Base URL must use http or https: {}",
                raw
            )));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Ok(Endpoints::new(&self.resolved_base_url()?, &self.login_path))
    }
}

/// Fully resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub base_url: String,
    pub login: String,
    pub register: String,
    pub reset_password: String,
    pub users: String,
    pub clients: String,
    pub products: String,
    pub invoices: String,
    pub proposals: String,
    pub jobs: String,
}

impl Endpoints {
    pub fn new(base_url: &str, login_path: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let join = |path: &str| format!("{}/{}", base, path.trim_start_matches('/'));

        Self {
            base_url: base.to_string(),
            login: join(login_path),
            register: join("register"),
            reset_password: join("reset-password"),
            users: join("users"),
            clients: join("clients"),
            products: join("products"),
            invoices: join("invoices"),
            proposals: join("proposals"),
            jobs: join("jobs"),
        }
    }

    pub fn client(&self, id: u64) -> String {
        format!("{}/{}", self.clients, id)
    }

    pub fn product(&self, id: u64) -> String {
        format!("{}/{}", self.products, id)
    }
}
