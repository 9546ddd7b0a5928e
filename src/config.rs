//! Configuration management.
//!
//! Configuration is read from `~/.config/lingo-srs/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use crate::srs::clock::local_offset;
use chrono::FixedOffset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("utc_offset_minutes out of range: {0}")]
    InvalidOffset(i32),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding review progress.
    pub database_path: Option<PathBuf>,
    /// Timezone for the daily due cutoff; the machine's local offset when unset.
    pub utc_offset_minutes: Option<i32>,
    pub shuffle_sessions: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            utc_offset_minutes: None,
            shuffle_sessions: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_config_path()?;
        if !path.exists() {
            Self::create_default_config(&path)?;
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file. Missing fields use defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(minutes) = config.utc_offset_minutes {
            offset_from_minutes(minutes)?;
        }
        Ok(config)
    }

    /// `~/.config/lingo-srs/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("lingo-srs").join("config.toml"))
    }

    /// Configured database file, or `<data_dir>/lingo-srs/lingo.db`.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database_path.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join("lingo-srs").join("lingo.db"))
        })
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        match self.utc_offset_minutes {
            Some(minutes) => offset_from_minutes(minutes),
            None => Ok(local_offset()),
        }
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ConfigError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ConfigError::InvalidOffset(minutes))
}

const DEFAULT_CONFIG: &str = r##"# lingo-srs configuration

# SQLite file holding review progress (default: platform data dir)
# database_path = "/home/me/.local/share/lingo-srs/lingo.db"

# Minutes east of UTC used to decide when "today" ends.
# Leave unset to follow the system timezone.
# utc_offset_minutes = 60

# Present due items in random order
shuffle_sessions = true

# trace, debug, info, warn or error (RUST_LOG takes precedence)
log_level = "warn"
"##;
