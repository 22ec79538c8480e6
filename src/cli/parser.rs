use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for staffledger
#[derive(Parser)]
#[command(
    name = "staffledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff attendance CLI: record leave and half-days, compute monthly payouts and salary slips",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the database and the employee roster
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Mark attendance for one employee on one day
    Mark {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        /// Employee name (must be in the roster)
        name: String,

        /// present, half-day (h) or leave (l)
        status: String,
    },

    /// Delete the attendance record of one employee on one day
    Del {
        /// Date (YYYY-MM-DD or "today")
        date: String,

        /// Employee name
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every attendance record
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Monthly salary calculation for the whole roster
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,
    },

    /// Date-wise log of leave and half-day records for a month
    Records {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,
    },

    /// All recorded absences of one employee
    History {
        name: String,

        #[arg(long, value_name = "FILE", help = "Also save the history as CSV")]
        csv: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing CSV file")]
        force: bool,
    },

    /// Salary slip text for one employee
    Slip {
        name: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Print a share link with the slip text")]
        share: bool,

        #[arg(long, requires = "share", help = "Recipient phone number for the share link")]
        phone: Option<String>,
    },

    /// Show the roster or edit a base salary
    Roster {
        #[arg(long, value_name = "NAME=SALARY", help = "Set the base salary of an employee")]
        set: Option<String>,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Only records of this month")]
        month: Option<String>,

        #[arg(long, help = "Only records of this employee")]
        name: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Audit,
}
