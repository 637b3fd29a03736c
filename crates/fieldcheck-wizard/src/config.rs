//! Wizard engine configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Wizard engine configuration
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// How long a session may sit unchanged before `purge_idle`
    /// removes it
    pub idle_timeout: Duration,

    /// Progress storage backend
    pub storage: StoreBackend,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(24 * 60 * 60),
            storage: StoreBackend::Memory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory storage (fast, non-persistent)
    Memory,

    /// Filesystem storage (persistent, single-instance)
    Filesystem(FileStoreConfig),
}

/// Filesystem storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Progress directory path
    pub path: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".fieldcheck/progress"),
        }
    }
}

/// TOML configuration for wizard.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardTomlConfig {
    /// Idle timeout in seconds
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout: u64,

    /// Storage configuration
    pub storage: StoreTomlConfig,
}

/// Storage configuration in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreTomlConfig {
    /// Storage backend: "memory" or "filesystem"
    pub backend: String,

    /// Filesystem-specific config
    pub filesystem: Option<FileStoreConfig>,
}

fn default_idle_timeout_secs() -> u64 {
    24 * 60 * 60
}

impl WizardTomlConfig {
    /// Convert TOML config to runtime config
    pub fn to_runtime_config(&self) -> anyhow::Result<WizardConfig> {
        let storage = match self.storage.backend.as_str() {
            "memory" => StoreBackend::Memory,
            "filesystem" => {
                let config = self.storage.filesystem.clone().unwrap_or_default();
                StoreBackend::Filesystem(config)
            }
            other => anyhow::bail!("Unknown storage backend: {}", other),
        };

        Ok(WizardConfig {
            idle_timeout: Duration::from_secs(self.idle_timeout),
            storage,
        })
    }
}
