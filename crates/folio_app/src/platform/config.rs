use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_core::{ControllerSettings, DeferralPolicy, ScrollBehavior};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "folio.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DeferralConfig {
    LayoutReady,
    FixedDelay { ms: u64 },
}

/// Startup settings read from `folio.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub deferral: DeferralConfig,
    pub smooth_scroll: bool,
    pub log: LogDestination,
    pub log_level: String,
    /// Lines of the page shown per frame.
    pub viewport_height: usize,
    /// Catalog file replacing the built-in content.
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deferral: DeferralConfig::LayoutReady,
            smooth_scroll: true,
            log: LogDestination::File,
            log_level: "info".to_string(),
            viewport_height: 24,
            catalog: None,
        }
    }
}

impl AppConfig {
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            deferral: match self.deferral {
                DeferralConfig::LayoutReady => DeferralPolicy::LayoutReady,
                DeferralConfig::FixedDelay { ms } => {
                    DeferralPolicy::FixedDelay(Duration::from_millis(ms))
                }
            },
            scroll_behavior: if self.smooth_scroll {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            },
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// A missing file yields the defaults; a broken one is an error.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
