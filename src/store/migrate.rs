use super::format::{LEGACY_TIMESTAMP_FORMAT, TIMESTAMP_FORMAT, decode_with};
use super::{rewrite, sibling};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a [`migrate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub total: usize,
    pub converted: usize,
    /// Copy of the original file, only set when the file was rewritten.
    pub backup: Option<PathBuf>,
}

/// Convert legacy timestamps (`YYYY-MM-DD HH:MM:SS`) to the current layout.
///
/// Every line must decode with either layout, otherwise nothing is written.
/// The original file is copied to `<file>.bak` before it is replaced.
pub fn migrate(path: &Path) -> AppResult<MigrationReport> {
    let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;

    let mut rides = Vec::new();
    let mut converted = 0;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (ride, format) =
            decode_with(line, idx + 1, &[TIMESTAMP_FORMAT, LEGACY_TIMESTAMP_FORMAT])?;
        if format == LEGACY_TIMESTAMP_FORMAT {
            debug!(line = idx + 1, "legacy timestamp found");
            converted += 1;
        }
        rides.push(ride);
    }

    if converted == 0 {
        info!(path = %path.display(), "rides file already up to date");
        return Ok(MigrationReport {
            total: rides.len(),
            converted,
            backup: None,
        });
    }

    let backup = sibling(path, "bak");
    fs::copy(path, &backup).map_err(|e| AppError::file_access(&backup, e))?;
    rewrite(path, &rides)?;

    info!(
        path = %path.display(),
        converted,
        backup = %backup.display(),
        "rides file migrated"
    );

    Ok(MigrationReport {
        total: rides.len(),
        converted,
        backup: Some(backup),
    })
}
