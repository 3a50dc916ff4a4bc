//! Configuration
//!
//! Read once at startup from `<config_dir>/vidtube/config.toml`.
//! Every field has a default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::ConfigError;
use crate::core::search::MAX_RESULTS;

pub const APP_DIR: &str = "vidtube";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title when idle, and the prefix of "<name> - <title>".
    pub app_name: String,
    pub player: PlayerConfig,
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "VidTube".to_string(),
            player: PlayerConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Media engine (mpv) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub binary: String,
    /// Passed to mpv verbatim, after our own flags.
    pub extra_args: Vec<String>,
    /// How long to wait for mpv to answer one IPC request.
    pub reply_timeout_ms: u64,
    /// Draw video inside the shell window (`--wid`) instead of mpv's own.
    /// mpv then covers the whole client area; controls stay on the keyboard.
    pub embed: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            binary: "mpv".to_string(),
            extra_args: Vec::new(),
            reply_timeout_ms: 2000,
            embed: false,
        }
    }
}

/// Search backend (yt-dlp) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub binary: String,
    /// Preselected entry of the result-count dropdown.
    pub default_limit: usize,
    pub socket_timeout_secs: u32,
    /// yt-dlp format selector used when resolving a stream.
    pub format: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            default_limit: 5,
            socket_timeout_secs: 15,
            format: "best[vcodec!=none][acodec!=none]/best".to_string(),
        }
    }
}

impl Config {
    /// `<config_dir>/vidtube/config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "using default config");
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.search.default_limit = config.search.default_limit.min(MAX_RESULTS);
        Ok(Some(config))
    }
}
