//! Record store: reads and writes the plain text rides file.
//!
//! The store only (de)serializes. It holds no state between calls; the
//! file path is always passed in explicitly.

pub mod format;
pub mod migrate;

pub use format::{LEGACY_TIMESTAMP_FORMAT, TIMESTAMP_FORMAT, decode, encode};
pub use migrate::{MigrationReport, migrate};

use crate::errors::{AppError, AppResult};
use crate::models::Ride;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load every ride of the file, in file order.
///
/// Blank lines are skipped. The first malformed line aborts the whole load.
pub fn load(path: &Path) -> AppResult<Vec<Ride>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
    let rides = parse_lines(&content)?;
    debug!(path = %path.display(), rides = rides.len(), "rides file loaded");
    Ok(rides)
}

/// Parse the full content of a rides file.
pub fn parse_lines(content: &str) -> AppResult<Vec<Ride>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| decode(line, idx + 1))
        .collect()
}

/// Append one ride at the end of the file, creating it if needed.
pub fn append(path: &Path, ride: &Ride) -> AppResult<()> {
    ride.validate()?;
    let line = encode(ride)?;

    let mut buf = String::with_capacity(line.len() + 2);
    if missing_trailing_newline(path)? {
        buf.push('\n');
    }
    buf.push_str(&line);
    buf.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::file_access(path, e))?;
    file.write_all(buf.as_bytes())
        .map_err(|e| AppError::file_access(path, e))?;

    info!(path = %path.display(), line = %line, "ride appended");
    Ok(())
}

/// Replace the whole file with `rides`: write a sibling temp file, then rename.
pub fn rewrite(path: &Path, rides: &[Ride]) -> AppResult<()> {
    let mut out = String::new();
    for ride in rides {
        out.push_str(&encode(ride)?);
        out.push('\n');
    }

    let tmp = sibling(path, "tmp");
    fs::write(&tmp, out).map_err(|e| AppError::file_access(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| AppError::file_access(path, e))?;

    info!(path = %path.display(), rides = rides.len(), "rides file rewritten");
    Ok(())
}

/// `~/.bikerides` + `bak` → `~/.bikerides.bak`
pub(crate) fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// True when the file exists, is non-empty and its last byte is not `\n`
/// (typically after a hand edit).
fn missing_trailing_newline(path: &Path) -> AppResult<bool> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(AppError::file_access(path, e)),
    };

    let len = file
        .metadata()
        .map_err(|e| AppError::file_access(path, e))?
        .len();
    if len == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(|e| AppError::file_access(path, e))?;

    Ok(last[0] != b'\n')
}
