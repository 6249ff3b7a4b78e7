use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries allowed after the first attempt on throttling.
    pub max_retries: u32,
    /// Linear backoff step in seconds; the Nth retry waits `N * step`.
    pub backoff_step_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_step_secs: 8,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            step: Duration::from_secs(self.backoff_step_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/qclass/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Bedrock region the runtime client talks to.
    pub region: String,
    /// Bedrock model identifier passed to InvokeModel.
    pub model_id: String,
    /// Protocol version field sent in every request body.
    pub anthropic_version: String,
    /// Output token cap; the label fits well inside the default.
    pub max_tokens: u32,
    /// Per-request operation timeout. Unset means the SDK default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            region: "us-west-2".to_string(),
            model_id: "anthropic.claude-3-haiku-20240307-v1:0".to_string(),
            anthropic_version: "bedrock-2023-05-31".to_string(),
            max_tokens: 10,
            request_timeout_secs: None,
            retry: None,
        }
    }
}

impl ClassifierConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.unwrap_or_default().policy()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qclass")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClassifierConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ClassifierConfig> {
    if !path.exists() {
        let default_cfg = ClassifierConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ClassifierConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
