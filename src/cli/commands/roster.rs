use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::formatting::amount;
use crate::utils::table::{Column, Table};

/// Parse `NAME=SALARY`.
fn parse_assignment(s: &str) -> AppResult<(&str, f64)> {
    let (name, salary) = s
        .split_once('=')
        .ok_or_else(|| AppError::InvalidSalary(format!("expected NAME=SALARY, got '{s}'")))?;

    let value: f64 = salary
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidSalary(salary.trim().to_string()))?;

    Ok((name.trim(), value))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { set } = cmd {
        let mut session = Session::open(cfg)?;

        if let Some(assignment) = set {
            let (name, salary) = parse_assignment(assignment)?;
            let updated = session.set_salary(name, salary)?;
            success(format!(
                "Base salary of {} set to {}",
                updated.name,
                amount(updated.base_salary)
            ));
        }

        header("Employees");
        let mut table = Table::new(vec![Column::left("Name"), Column::right("Base Salary")]);
        for e in session.roster().iter() {
            table.add_row(vec![e.name.clone(), amount(e.base_salary)]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
