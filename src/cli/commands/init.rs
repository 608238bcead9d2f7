use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs::{self, OpenOptions};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (if missing)
///  - an empty rides file (if missing)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let config_path = Config::config_file();
    if cfg.init()? {
        success(format!("Config file : {}", config_path.display()));
    } else {
        info(format!("Config file already exists: {}", config_path.display()));
    }

    let rides = cfg.rides_path();
    if let Some(parent) = rides.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| AppError::file_access(parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&rides)
        .map_err(|e| AppError::file_access(&rides, e))?;

    tracing::info!(config = %config_path.display(), rides = %rides.display(), "initialized");
    success(format!("Rides file  : {}", rides.display()));
    Ok(())
}
