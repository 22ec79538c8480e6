use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, seed_roster};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the employee roster from the configured seed list
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cfg = Config::init_all(cfg, cli.test)?;

    println!("⚙️  Initializing staffledger…");
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let seeded = seed_roster(&mut pool.conn, &cfg.roster)?;
    if seeded > 0 {
        success(format!("Roster seeded with {seeded} employee(s)."));
    }

    // internal log is not blocking
    if let Err(e) = log::audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("staffledger initialization completed!");
    Ok(())
}
