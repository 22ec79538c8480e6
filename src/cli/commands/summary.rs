use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::monthly_summary;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{amount, units};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let period = resolve_period(month.as_deref())?;
        let session = Session::open(cfg)?;

        if session.roster().is_empty() {
            info("The roster is empty.");
            return Ok(());
        }

        let summary = monthly_summary(session.roster(), session.ledger(), period, session.policy());

        header(format!("Monthly Salary Calculation: {}", period.title()));

        let mut table = Table::new(vec![
            Column::left("Name"),
            Column::right("Base Salary"),
            Column::right("Leaves"),
            Column::right("Bonus"),
            Column::right("Deduction"),
            Column::right("Final Pay"),
        ]);

        for row in &summary.rows {
            table.add_row(vec![
                row.employee_name.clone(),
                amount(row.base_salary),
                units(row.leave_units),
                amount(row.bonus),
                amount(row.deduction),
                amount(row.final_pay),
            ]);
        }

        print!("{}", table.render());
        println!(
            "\nTotal payout: {} | Total deductions: {} | Divisor: {}",
            amount(summary.total_final_pay()),
            amount(summary.total_deductions()),
            session.policy().divisor
        );
    }

    Ok(())
}
