//! Shell Configuration
//!
//! Capacities and limits for the filesystem arenas and the shell's fixed
//! buffers. Defaults match the sizes the kernel shell was built around; a
//! TOML file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {field} must be at least {min}")]
    OutOfRange { field: &'static str, min: usize },
}

/// Limits for one shell session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Node arena capacity, not counting the root
    pub max_nodes: usize,
    /// Content arena size in bytes
    pub content_pool_size: usize,
    /// Maximum children per directory
    pub max_children: usize,
    /// Visible characters kept in a node name
    pub max_name_len: usize,
    /// Maximum tokens produced from one line
    pub max_args: usize,
    /// Line buffer size, including the terminator slot
    pub line_capacity: usize,
    /// Maximum number of aliases
    pub alias_capacity: usize,
    /// Number of history lines retained
    pub history_capacity: usize,
    /// Redirection capture buffer size in bytes
    pub capture_capacity: usize,
    /// Prompt printed before each line
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            max_nodes: 128,
            content_pool_size: 4096,
            max_children: 32,
            max_name_len: 31,
            max_args: 12,
            line_capacity: 128,
            alias_capacity: 16,
            history_capacity: 32,
            capture_capacity: 1024,
            prompt: "$ ".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file from the host filesystem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, usize, usize); 6] = [
            ("max_children", self.max_children, 1),
            ("max_name_len", self.max_name_len, 1),
            ("max_args", self.max_args, 1),
            ("line_capacity", self.line_capacity, 2),
            ("history_capacity", self.history_capacity, 1),
            ("capture_capacity", self.capture_capacity, 1),
        ];
        for (field, value, min) in checks {
            if value < min {
                return Err(ConfigError::OutOfRange { field, min });
            }
        }
        Ok(())
    }
}
