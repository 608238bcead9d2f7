use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::edit_file;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config || !*edit_config {
            header(format!("Configuration ({})", Config::config_file().display()));
            print!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = Config::config_file();
            cfg.init()?;

            let requested = editor.as_deref().or(cfg.editor.as_deref());
            let used = edit_file(&path, requested)?;
            success(format!("Configuration file edited successfully using '{used}'"));
        }
    }

    Ok(())
}
