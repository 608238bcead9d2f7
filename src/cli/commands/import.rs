use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::time::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { filename, comment } = cmd {
        let source = expand_tilde(filename);
        let joined = comment.join(" ");
        let comment = (!joined.trim().is_empty()).then_some(joined.as_str());

        let ride = ImportLogic::apply(&cfg.rides_path(), &source, comment)?;

        success(format!(
            "Imported ride of {:.2} km in {} from {}",
            ride.distance_km,
            hours2readable(ride.duration_hours),
            source.display()
        ));
    }

    Ok(())
}
