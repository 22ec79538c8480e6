use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !ask_confirmation(
            "Delete ALL attendance records? This action is irreversible.",
            *yes,
        ) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut session = Session::open(cfg)?;
        let removed = session.clear_all()?;

        success(format!("All records cleared ({removed} removed)."));
    }

    Ok(())
}
