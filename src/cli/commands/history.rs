use crate::cli::commands::records::render_records;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::employee_history;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::{header, info};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { name, csv, force } = cmd {
        let session = Session::open(cfg)?;
        let employee = session.roster().resolve(name)?.name.clone();

        let history = employee_history(session.ledger(), &employee);
        if history.is_empty() {
            info(format!("No leave records found for {employee}."));
            return Ok(());
        }

        header(format!("Recorded absences for {employee}"));
        print!("{}", render_records(&history));

        if let Some(file) = csv {
            ExportLogic::export(&history, ExportFormat::Csv, &expand_tilde(file), *force)?;
        }
    }

    Ok(())
}
