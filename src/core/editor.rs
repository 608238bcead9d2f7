use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Platform default: $EDITOR, then $VISUAL, then nano / notepad.
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in `requested` (or the default editor), falling back to the
/// default editor when the requested one fails. Returns the editor used.
pub fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<String> {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => return Ok(editor),
        Ok(s) => warn!(%editor, status = %s, "editor exited with failure"),
        Err(e) => warn!(%editor, error = %e, "editor not available"),
    }

    if editor == fallback {
        return Err(AppError::Editor(format!(
            "failed to edit {} using '{editor}'",
            path.display()
        )));
    }

    match Command::new(&fallback).arg(path).status() {
        Ok(s) if s.success() => Ok(fallback),
        _ => Err(AppError::Editor(format!(
            "failed to edit {} using fallback '{fallback}'",
            path.display()
        ))),
    }
}
