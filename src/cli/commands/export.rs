use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::RecordFilter;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::period::Period;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        name,
        force,
    } = cmd
    {
        let session = Session::open(cfg)?;

        let mut filter = RecordFilter::all();
        if let Some(m) = month {
            filter = filter.in_period(Period::parse(m)?);
        }
        if let Some(n) = name {
            // orphaned names are still exportable
            let resolved = session
                .roster()
                .resolve(n)
                .map(|e| e.name.clone())
                .unwrap_or_else(|_| n.trim().to_string());
            filter = filter.employee(resolved);
        }

        let records: Vec<_> = session.ledger().query(|r| filter.matches(r)).collect();
        ExportLogic::export(&records, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
