use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::edit_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs::OpenOptions;

/// Open the rides file in a text editor. Rides are only ever changed this way.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { editor } = cmd {
        let path = cfg.rides_path();

        // make sure there is something to open
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::file_access(&path, e))?;

        let requested = editor.as_deref().or(cfg.editor.as_deref());
        let used = edit_file(&path, requested)?;

        success(format!("{} edited using '{used}'", path.display()));
    }

    Ok(())
}
