//! Client configuration
//!
//! Stored as JSON at `<config_dir>/delugram-prefs/config.json`. A missing file
//! yields the defaults; unknown keys are ignored.

use std::path::{Path, PathBuf};

use delugram_prefs_core::error::{PrefsError, PrefsResult};
use delugram_prefs_core::types::EntryKindId;
use serde::{Deserialize, Serialize};
use tokio::fs;

const APP_DIR: &str = "delugram-prefs";
const CONFIG_FILE: &str = "config.json";

/// Which remote store the page talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Loopback server living in this process
    Memory,
    /// Deluge Web UI JSON-RPC endpoint
    #[default]
    DelugeWeb,
}

/// Deluge Web connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// JSON-RPC endpoint
    pub url: String,
    /// Web UI password (`auth.login`)
    pub password: String,
    /// Daemon host id to connect the web UI to, if it is not connected yet
    pub host_id: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8112/json".to_string(),
            password: "deluge".to_string(),
            host_id: None,
            timeout_secs: 30,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend: Backend,
    /// Which allow-list the page edits
    pub entry_kind: EntryKindId,
    /// RPC namespace of the plugin
    pub plugin: String,
    pub web: WebConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            entry_kind: EntryKindId::default(),
            plugin: "delugram".to_string(),
            web: WebConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Directory holding the config file and logs
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load from the default location
    pub async fn load() -> PrefsResult<Self> {
        Self::load_from(&Self::default_path()).await
    }

    /// Load from `path`; a missing file yields the defaults
    pub async fn load_from(path: &Path) -> PrefsResult<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PrefsError::Config(format!("{}: {e}", path.display())))?;

        serde_json::from_str(&content)
            .map_err(|e| PrefsError::Config(format!("{}: {e}", path.display())))
    }

    /// Write to `path`, creating parent directories
    pub async fn save_to(&self, path: &Path) -> PrefsResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| PrefsError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PrefsError::Serialization(e.to_string()))?;

        fs::write(path, content)
            .await
            .map_err(|e| PrefsError::Storage(e.to_string()))
    }
}
