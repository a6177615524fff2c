use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::relay::RelayConfig;
use crate::resolution::ClientConfig;

/// Canonical resolution endpoint (Cobalt-compatible JSON API).
pub const DEFAULT_API_ENDPOINT: &str = "https://api.cobalt.tools/api/json";

/// Fixed request options sent with every resolution call (optional `[request]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDefaults {
    /// Desired video codec, e.g. "h264".
    pub v_codec: String,
    /// Desired vertical resolution, e.g. "720".
    pub v_quality: String,
    /// Audio format for audio extraction, e.g. "mp3".
    pub a_format: String,
    /// File naming convention understood by the API, e.g. "classic".
    pub filename_pattern: String,
    pub is_audio_only: bool,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            v_codec: "h264".to_string(),
            v_quality: "720".to_string(),
            a_format: "mp3".to_string(),
            filename_pattern: "classic".to_string(),
            is_audio_only: false,
        }
    }
}

/// Local relay settings (optional `[relay]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Address the relay listens on.
    pub bind: String,
    /// Request path the relay serves.
    pub path: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            path: "/proxy".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/vlink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlinkConfig {
    /// Resolution API endpoint called when no relay is configured.
    pub api_endpoint: String,
    /// Optional relay address; when set, every resolution call goes here instead.
    #[serde(default)]
    pub relay_url: Option<String>,
    /// Total request timeout in seconds (0 = transport default, no limit).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Optional request options; if missing, built-in defaults are used.
    #[serde(default)]
    pub request: Option<RequestDefaults>,
    /// Optional relay listener settings.
    #[serde(default)]
    pub relay: Option<RelaySettings>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for VlinkConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            relay_url: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request: None,
            relay: None,
        }
    }
}

impl VlinkConfig {
    /// The single base address the client talks to: the relay if set, else the API.
    pub fn endpoint(&self) -> &str {
        match self.relay_url.as_deref().map(str::trim) {
            Some(relay) if !relay.is_empty() => relay,
            _ => &self.api_endpoint,
        }
    }

    /// Resolves the endpoint choice and timeouts once into a client configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint().to_string(),
            request: self.request.clone().unwrap_or_default(),
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
        }
    }

    /// Relay configuration forwarding to the canonical API endpoint.
    pub fn relay_config(&self) -> RelayConfig {
        let settings = self.relay.clone().unwrap_or_default();
        RelayConfig {
            bind: settings.bind,
            path: settings.path,
            upstream: self.api_endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<VlinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: VlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
