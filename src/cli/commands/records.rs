use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::monthly_log;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::{header, info};
use crate::utils::date::display_date;
use crate::utils::table::{Column, Table};

pub(crate) fn render_records(records: &[AttendanceRecord]) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Name"),
        Column::left("Status"),
    ]);

    for r in records {
        table.add_row(vec![
            display_date(r.date),
            r.employee_name.clone(),
            r.status.label().to_string(),
        ]);
    }

    table.render()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { month } = cmd {
        let period = resolve_period(month.as_deref())?;
        let session = Session::open(cfg)?;

        if session.ledger().is_empty() {
            info("No records found in the system yet.");
            return Ok(());
        }

        let records = monthly_log(session.ledger(), period);
        if records.is_empty() {
            info(format!("No leave records found for {}.", period.title()));
            return Ok(());
        }

        header(format!("Date-wise Log: {}", period.title()));
        print!("{}", render_records(&records));
    }

    Ok(())
}
