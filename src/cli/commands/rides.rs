use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, LocalClock};
use crate::core::period;
use crate::core::repository::RideRepository;
use crate::errors::AppResult;
use crate::models::Ride;
use crate::ui::i18n::{Lang, Msg};
use crate::ui::messages::info;
use crate::utils::formatting::{format_optional, truncate};
use crate::utils::table::{Align, Column, Table};
use unicode_width::UnicodeWidthStr;

const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rides { years, period } = cmd {
        let lang = cfg.lang()?;
        let repo = RideRepository::open(&cfg.rides_path())?;
        let today = LocalClock.now().date();
        let periods = period::resolve(years, period.as_deref(), &cfg.default_period, today)?;

        let selected = period::select(repo.all(), &periods);
        if selected.is_empty() {
            info(format!(
                "{} {}",
                lang.tr(Msg::NoRidesFor),
                period::describe(&periods, lang)
            ));
            return Ok(());
        }

        print!("{}", render(&selected, cfg.comment_width, lang));
    }

    Ok(())
}

fn render(rides: &[(usize, &Ride)], comment_width: usize, lang: Lang) -> String {
    let column = |msg: Msg, width: usize, align: Align| {
        let header = lang.tr(msg);
        Column::new(header, width.max(UnicodeWidthStr::width(header)), align)
    };

    let mut table = Table::new(vec![
        Column::new("id", 4, Align::Right),
        column(Msg::ColDate, 16, Align::Left),
        column(Msg::ColDistance, 13, Align::Right),
        column(Msg::ColDuration, 12, Align::Right),
        column(Msg::ColSpeed, 12, Align::Right),
        column(Msg::ColComment, comment_width, Align::Left),
        Column::new("URL", 3, Align::Left),
    ]);

    for (id, ride) in rides {
        table.add_row(vec![
            id.to_string(),
            ride.timestamp.format(DATE_FORMAT).to_string(),
            format!("{:.1}", ride.distance_km),
            format!("{:.2}", ride.duration_hours),
            format_optional(ride.speed_kmh(), 1),
            truncate(&ride.comment, comment_width),
            if ride.has_url() { lang.tr(Msg::Yes) } else { "" }.to_string(),
        ]);
    }

    table.render()
}
