use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Migrate = cmd {
        let path = cfg.rides_path();
        let report = store::migrate(&path)?;

        match report.backup {
            None => info(format!(
                "{} is already up to date ({} rides)",
                path.display(),
                report.total
            )),
            Some(backup) => success(format!(
                "Migrated {} of {} rides in {} (backup: {})",
                report.converted,
                report.total,
                path.display(),
                backup.display()
            )),
        }
    }

    Ok(())
}
