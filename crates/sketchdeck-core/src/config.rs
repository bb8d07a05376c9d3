//! Editor configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SKETCHDECK_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables read at startup. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Undo steps kept, `0` for no limit.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Offset applied to pasted shapes on both axes.
    #[serde(default = "default_paste_offset")]
    pub paste_offset: f64,
    /// Pick distance for point selection, in canvas units.
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,
}

fn default_max_history() -> usize {
    crate::history::DEFAULT_MAX_HISTORY
}

fn default_paste_offset() -> f64 {
    20.0
}

fn default_hit_tolerance() -> f64 {
    4.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            paste_offset: default_paste_offset(),
            hit_tolerance: default_hit_tolerance(),
        }
    }
}

impl EditorConfig {
    /// Config file location: `$SKETCHDECK_CONFIG`, else
    /// `<config dir>/sketchdeck/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join("sketchdeck").join("config.json"))
    }

    /// Load from the default location.
    /// Returns the defaults if there is no config file or it cannot be read.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to a file, creating its directory.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        // Write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", temp_path.display(), e)))?;
        fs::rename(&temp_path, path)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Paste nudge as a vector.
    pub fn paste_vector(&self) -> kurbo::Vec2 {
        kurbo::Vec2::new(self.paste_offset, self.paste_offset)
    }
}
