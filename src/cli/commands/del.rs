use crate::cli::commands::{ask_confirmation, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        name,
        yes,
    } = cmd
    {
        let d = parse_date_arg(date_str)?;

        let prompt = format!("Delete the attendance record of {name} for {d}?");
        if !ask_confirmation(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut session = Session::open(cfg)?;

        if session.delete(d, name)? {
            success(format!("Record of {name} for {d} has been deleted."));
        } else {
            info(format!("No record of {name} for {d}; nothing to delete."));
        }
    }

    Ok(())
}
