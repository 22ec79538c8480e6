use crate::cli::commands::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll;
use crate::core::reports::exception_dates;
use crate::core::session::Session;
use crate::core::slip::SalarySlip;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slip {
        name,
        month,
        share,
        phone,
    } = cmd
    {
        let period = resolve_period(month.as_deref())?;
        let session = Session::open(cfg)?;
        let employee = session.roster().resolve(name)?.clone();

        let payout = payroll::compute(&employee, period, session.ledger(), session.policy());
        let (leave_dates, half_day_dates) = exception_dates(session.ledger(), &employee.name, period);

        let slip = SalarySlip {
            period,
            employee,
            payout,
            leave_dates,
            half_day_dates,
        };

        println!("{}", slip.render());

        if *share {
            header("Share link");
            println!("{}", slip.share_link(&cfg.share_url, phone.as_deref()));
        }
    }

    Ok(())
}
