use crate::errors::{AppError, AppResult};
use crate::ui::i18n::Lang;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_rides_file")]
    pub rides_file: String,
    #[serde(default = "default_period")]
    pub default_period: String,
    #[serde(default = "default_comment_width")]
    pub comment_width: usize,
    /// `auto` (from the locale), `en` or `fr`
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

fn default_rides_file() -> String {
    "~/.bikerides".to_string()
}
fn default_period() -> String {
    "year".to_string()
}
fn default_comment_width() -> usize {
    30
}
fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rides_file: default_rides_file(),
            default_period: default_period(),
            comment_width: default_comment_width(),
            language: default_language(),
            editor: None,
        }
    }
}

impl Config {
    /// `~/.bike`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bike")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    /// Rides file with `~` expanded.
    pub fn rides_path(&self) -> PathBuf {
        expand_tilde(&self.rides_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg = Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        // an unknown language is a configuration error
        cfg.lang()?;
        Ok(cfg)
    }

    /// Language for user-facing messages.
    pub fn lang(&self) -> AppResult<Lang> {
        Lang::from_setting(&self.language)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the config file (creating `~/.bike/`) unless it already exists.
    /// Returns true when a new file was written.
    pub fn init(&self) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, self.to_yaml()?)?;
        Ok(true)
    }
}
