use crate::core::repository::RideRepository;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub struct ViewLogic;

impl ViewLogic {
    /// Resolve the URL of ride `id` and, unless `print_only`, open it in the
    /// default browser.
    pub fn apply(rides_path: &Path, id: usize, print_only: bool) -> AppResult<String> {
        let repo = RideRepository::open(rides_path)?;
        let ride = repo.require(id)?;

        if !ride.has_url() {
            return Err(AppError::NoUrl(id));
        }
        let url = ride.url.trim().to_string();

        if !print_only {
            open_in_browser(&url)?;
        }

        Ok(url)
    }
}

fn open_in_browser(url: &str) -> AppResult<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(url);

    debug!(?cmd, "launching browser");
    let status = cmd
        .status()
        .map_err(|e| AppError::Other(format!("cannot launch browser: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Other(format!("browser exited with {status}")))
    }
}
