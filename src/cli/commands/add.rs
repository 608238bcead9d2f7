use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::i18n::Msg;
use crate::ui::messages::{prompt, success};
use crate::utils::formatting::format_optional;
use crate::utils::time::{hours2readable, parse_distance, parse_duration};

/// Add a ride. Values missing from the command line are asked for
/// interactively, together with the optional comment and URL.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        distance,
        duration,
        comment,
        url,
    } = cmd
    {
        let lang = cfg.lang()?;
        let interactive = distance.is_none() || duration.is_none();

        let distance_raw = match distance {
            Some(d) => d.clone(),
            None => prompt(lang.tr(Msg::EnterDistance))?,
        };
        let distance_km = parse_distance(&distance_raw)?;

        let duration_raw = match duration {
            Some(d) => d.clone(),
            None => prompt(lang.tr(Msg::EnterDuration))?,
        };
        let duration_hours = parse_duration(&duration_raw)?;

        let comment = match comment {
            Some(c) => c.clone(),
            None if interactive => prompt(lang.tr(Msg::CommentPrompt))?,
            None => String::new(),
        };
        let url = match url {
            Some(u) => u.clone(),
            None if interactive => prompt(lang.tr(Msg::UrlPrompt))?,
            None => String::new(),
        };

        let ride = AddLogic::apply(
            &cfg.rides_path(),
            distance_km,
            duration_hours,
            comment.trim(),
            url.trim(),
        )?;

        success(format!(
            "{}: {} km, {} ({} km/h)",
            lang.tr(Msg::RideAdded),
            ride.distance_km,
            hours2readable(ride.duration_hours),
            format_optional(ride.speed_kmh(), 1)
        ));
    }

    Ok(())
}
