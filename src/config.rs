//! Configuration file loading and validation.
//!
//! The file holds the vendor credentials and model choices. It is YAML by
//! default; a `.toml` extension switches the parser to TOML. Keys are
//! camelCase in both formats:
//!
//! ```yaml
//! apiKey: sk-...
//! timeout: 60
//! maxRetries: 0
//! model: whisper-1
//! tts:
//!   voice: nova
//!   maxChars: 4096
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use speech_relay_core::chunk::{Chunker, DEFAULT_MAX_CHARS};

/// Root of the OpenAI-compatible audio API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable consulted when the file has no `apiKey`.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub max_retries: u32,
    /// Transcription model.
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub tts: TtsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TtsConfig {
    #[serde(default = "default_tts_model")]
    pub model: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_response_format")]
    pub response_format: String,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: default_tts_model(),
            voice: default_voice(),
            response_format: default_response_format(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: default_timeout(),
            max_retries: 0,
            model: default_model(),
            base_url: default_base_url(),
            tts: TtsConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}
fn default_model() -> String {
    "whisper-1".to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_tts_model() -> String {
    "tts-1-hd".to_string()
}
fn default_voice() -> String {
    "nova".to_string()
}
fn default_response_format() -> String {
    "mp3".to_string()
}
fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Config {
    /// Chunker bounded by `tts.maxChars`.
    pub fn chunker(&self) -> Result<Chunker> {
        Chunker::new(self.tts.max_chars).context("invalid tts.maxChars")
    }
}

/// Read, parse, and validate the config file at `path`.
///
/// A missing or empty `apiKey` is filled from `OPENAI_API_KEY` when set.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config = parse_config(path, &content)?;
    config.api_key = resolve_api_key(config.api_key.take(), std::env::var(API_KEY_ENV).ok());

    validate(&config)?;
    Ok(config)
}

fn parse_config(path: &Path, content: &str) -> Result<Config> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
        _ => serde_yaml::from_str(content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
    }
}

/// The configured key wins unless it is blank.
fn resolve_api_key(configured: Option<String>, from_env: Option<String>) -> Option<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_env.filter(|key| !key.trim().is_empty()))
}

fn validate(config: &Config) -> Result<()> {
    if config.timeout == 0 {
        bail!("timeout must be > 0");
    }
    if config.tts.max_chars == 0 {
        bail!("tts.maxChars must be > 0");
    }
    if config.model.trim().is_empty() {
        bail!("model must not be empty");
    }
    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        bail!(
            "baseUrl must start with http:// or https://, got '{}'",
            config.base_url
        );
    }
    Ok(())
}
