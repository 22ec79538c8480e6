use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::status::Mark;
use crate::ui::messages::{info, success};

/// Submit attendance for one employee on one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { date, name, status } = cmd {
        let d = parse_date_arg(date)?;
        let mark = Mark::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let mut session = Session::open(cfg)?;
        let employee = session.roster().resolve(name)?.name.clone();

        let previous = session.mark(d, &employee, mark)?;

        match mark {
            Mark::Present => success(format!("Saved: {employee} is Present on {d}")),
            _ => success(format!("Saved: {employee} is on {} on {d}", mark.label())),
        }

        if let Some(prev) = previous
            && mark.exception() != Some(prev)
        {
            info(format!("Replaced previous status: {prev}"));
        }
    }

    Ok(())
}
