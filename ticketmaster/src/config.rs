//! CLI configuration management
//!
//! Persisted values (`apiKey`, `baseUrl`) live behind the [`ConfigStore`]
//! trait. The effective settings for one invocation are resolved by
//! [`ConfigBuilder`] from command-line flags, environment and the store.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use ticketmaster_core::{default_config_path, DEFAULT_BASE_URL};

/// Environment variable overriding the config file location
pub const ENV_CONFIG_PATH: &str = "TICKETMASTER_CONFIG";
/// Environment variable overriding the stored API key
pub const ENV_API_KEY: &str = "TICKETMASTER_API_KEY";
/// Environment variable overriding the stored base URL
pub const ENV_BASE_URL: &str = "TICKETMASTER_BASE_URL";
/// Environment variable setting the request timeout in seconds
pub const ENV_TIMEOUT: &str = "TICKETMASTER_TIMEOUT";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Keys understood by a [`ConfigStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ApiKey,
    BaseUrl,
}

impl ConfigKey {
    /// Name under which the value is persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "apiKey",
            ConfigKey::BaseUrl => "baseUrl",
        }
    }
}

/// Persistent key/value storage for CLI settings.
pub trait ConfigStore {
    /// Read a value; `None` when it was never set.
    fn get(&self, key: ConfigKey) -> Option<String>;

    /// Persist a value.
    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()>;

    /// Remove every persisted value.
    fn clear(&mut self) -> Result<()>;
}

/// On-disk layout of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
}

impl StoredConfig {
    fn slot(&mut self, key: ConfigKey) -> &mut Option<String> {
        match key {
            ConfigKey::ApiKey => &mut self.api_key,
            ConfigKey::BaseUrl => &mut self.base_url,
        }
    }
}

/// TOML file backed [`ConfigStore`]
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    values: StoredConfig,
}

impl FileConfigStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            StoredConfig::default()
        };

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self { path, values })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content =
            toml::to_string_pretty(&self.values).context("Failed to serialize CLI config")?;
        std::fs::write(&self.path, content).context("Failed to write CLI config file")?;

        tracing::debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::ApiKey => self.values.api_key.clone(),
            ConfigKey::BaseUrl => self.values.base_url.clone(),
        }
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        *self.values.slot(key) = Some(value.to_string());
        tracing::debug!(key = key.as_str(), "updating configuration");
        self.save()
    }

    fn clear(&mut self) -> Result<()> {
        self.values = StoredConfig::default();
        self.save()
    }
}

/// In-memory [`ConfigStore`], nothing is written to disk
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: HashMap<ConfigKey, String>,
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: ConfigKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        self.values.insert(key, value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        Ok(())
    }
}

/// Resolve the config file path: explicit flag, then environment, then default.
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }

    match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_config_path(),
    }
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// API base URL
    pub base_url: String,

    /// API key sent as `X-SSL-CERT-UID`
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CliConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Priority chain (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config store
/// 4. Defaults
///
/// Every layer only fills values that are still unset, so layers are applied
/// from the highest priority down.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<u64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout (with validation)
    pub fn with_timeout(mut self, timeout: u64) -> Result<Self> {
        validate_timeout(timeout)?;
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Self {
        if self.base_url.is_none() {
            if let Ok(url) = std::env::var(ENV_BASE_URL) {
                if validate_url(&url).is_ok() {
                    self.base_url = Some(url);
                }
            }
        }

        if self.api_key.is_none() {
            if let Ok(key) = std::env::var(ENV_API_KEY) {
                if !key.is_empty() {
                    self.api_key = Some(key);
                }
            }
        }

        if self.timeout.is_none() {
            if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
                if let Ok(timeout) = timeout.parse() {
                    if validate_timeout(timeout).is_ok() {
                        self.timeout = Some(timeout);
                    }
                }
            }
        }

        self
    }

    /// Fill unset values from persisted configuration
    pub fn with_store(mut self, store: &dyn ConfigStore) -> Self {
        if self.base_url.is_none() {
            self.base_url = store.get(ConfigKey::BaseUrl).filter(|url| !url.is_empty());
        }

        if self.api_key.is_none() {
            self.api_key = store.get(ConfigKey::ApiKey).filter(|key| !key.is_empty());
        }

        self
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<CliConfig> {
        let defaults = CliConfig::default();

        let base_url = self.base_url.unwrap_or(defaults.base_url);
        let timeout = self.timeout.unwrap_or(defaults.timeout);

        validate_url(&base_url)?;
        validate_timeout(timeout)?;

        Ok(CliConfig {
            base_url,
            api_key: self.api_key,
            timeout,
        })
    }
}

/// Validate URL format
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow::anyhow!("Base URL cannot be empty"));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(anyhow::anyhow!(
            "Base URL must start with http:// or https://"
        ));
    }

    Ok(())
}

/// Validate timeout value
pub fn validate_timeout(timeout: u64) -> Result<()> {
    if timeout == 0 {
        return Err(anyhow::anyhow!("Timeout must be greater than 0"));
    }

    if timeout > 300 {
        return Err(anyhow::anyhow!(
            "Timeout must be less than or equal to 300 seconds"
        ));
    }

    Ok(())
}
