use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View { ride_id, print } = cmd {
        let url = ViewLogic::apply(&cfg.rides_path(), *ride_id, *print)?;

        if *print {
            println!("{url}");
        } else {
            info(format!("Opened {url}"));
        }
    }

    Ok(())
}
