//! Configuration loading and saving.
//!
//! The config lives at `<platform config dir>/standup/config.toml`. A
//! missing file or missing fields fall back to defaults, so a fresh
//! install works without running `standup configure` first.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::llm::Provider;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// LLM backend: "claude" or "ollama"
    #[serde(default = "default_provider")]
    pub provider: Provider,

    /// Model name, used by the Ollama backend
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum characters per summarization chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters of context carried between adjacent chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_provider() -> Provider {
    Provider::Claude
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_chunk_size() -> usize {
    6000
}

fn default_chunk_overlap() -> usize {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Config {
    /// Reject chunking parameters the splitter cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 || self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::InvalidChunking {
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            });
        }
        Ok(())
    }
}

/// Path of the config file under the platform config directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("standup").join("config.toml"))
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path()?)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    let config: Config = toml::from_str(&content).map_err(ConfigError::ParseFailed)?;
    config.validate()?;

    Ok(config)
}

/// Save the configuration to the default location.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    save_to(config, &config_path()?)
}

/// Save configuration to an explicit path.
///
/// Writes to a temp file in the target directory, then persists over the
/// destination, so a crash mid-write never leaves a torn config.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;

    let parent = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;

    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeFailed)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(ConfigError::WriteFailed)?;
    tmp.write_all(content.as_bytes())
        .map_err(ConfigError::WriteFailed)?;
    tmp.persist(path).map_err(|e| ConfigError::WriteFailed(e.error))?;

    Ok(())
}
