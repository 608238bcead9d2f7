use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, LocalClock};
use crate::core::period::{self, Period};
use crate::core::repository::RideRepository;
use crate::core::stats::summarize_filtered;
use crate::errors::{AppError, AppResult};
use crate::models::Summary;
use crate::ui::i18n::{Lang, Msg};
use crate::ui::messages::{header, info};
use crate::utils::formatting::{format_optional, pad_right};
use crate::utils::time::hours2readable;

const LABEL_WIDTH: usize = 18;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        years,
        period,
        json,
    } = cmd
    {
        let lang = cfg.lang()?;
        let repo = RideRepository::open(&cfg.rides_path())?;
        let today = LocalClock.now().date();
        let periods = period::resolve(years, period.as_deref(), &cfg.default_period, today)?;

        let summary = summarize_filtered(repo.all(), &periods);

        if *json {
            let out = serde_json::to_string_pretty(&summary)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        if summary.is_empty() {
            info(format!(
                "{} {}",
                lang.tr(Msg::NoRidesFor),
                period::describe(&periods, lang)
            ));
            return Ok(());
        }

        print_summary(&summary, &periods, lang);
    }

    Ok(())
}

fn print_summary(summary: &Summary, periods: &[Period], lang: Lang) {
    let label = |msg: Msg| pad_right(lang.tr(msg), LABEL_WIDTH);

    header(format!(
        "{} {}",
        lang.tr(Msg::StatisticsFor),
        period::describe(periods, lang)
    ));
    println!("{} {:>8}", label(Msg::Rides), summary.count);
    println!("{} {:>8.2} km", label(Msg::Distance), summary.total_distance_km);
    println!(
        "{} {:>8.2} h ({})",
        label(Msg::Duration),
        summary.total_duration_hours,
        hours2readable(summary.total_duration_hours)
    );
    println!(
        "{} {:>8} km/h",
        label(Msg::AverageSpeed),
        format_optional(summary.average_speed_kmh, 2)
    );
    println!(
        "{} {:>8} km",
        label(Msg::AverageRide),
        format_optional(summary.average_distance_km, 2)
    );
    println!(
        "{} {:>8} km",
        label(Msg::LongestRide),
        format_optional(summary.longest_distance_km, 2)
    );
}
