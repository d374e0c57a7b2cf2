use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jobcost
/// CLI application to track construction job costs with SQLite
#[derive(Parser)]
#[command(
    name = "jobcost",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple job costing CLI: track contract estimates and daily field reports, and compare estimate vs actual using SQLite",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new job with its estimated contract parameters
    Job {
        /// Job name
        name: String,

        #[arg(long = "number", help = "Job number (e.g. 24-117)", default_value = "")]
        number: String,

        #[arg(long = "client", help = "Client name (free text)", default_value = "")]
        client: String,

        #[arg(
            long = "contract",
            help = "Contract amount in dollars",
            allow_negative_numbers = true
        )]
        contract: f64,

        #[arg(
            long = "hours",
            help = "Estimated labor hours",
            allow_negative_numbers = true
        )]
        est_labor_hours: f64,

        #[arg(
            long = "material",
            help = "Estimated material cost in dollars",
            allow_negative_numbers = true
        )]
        est_material_cost: f64,
    },

    /// Append a daily field report to a job
    Report {
        /// Job id the report belongs to
        job_id: i64,

        #[arg(long = "date", help = "Report date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long = "crew",
            help = "Crew size (fractional allowed, e.g. 2.5)",
            allow_negative_numbers = true
        )]
        crew: f64,

        #[arg(
            long = "hours",
            help = "Hours worked by the crew",
            allow_negative_numbers = true
        )]
        hours: f64,

        #[arg(
            long = "material",
            help = "Material cost in dollars",
            default_value_t = 0.0,
            allow_negative_numbers = true
        )]
        material: f64,

        #[arg(long = "notes", help = "Free-text notes", default_value = "")]
        notes: String,
    },

    /// List jobs, or the daily reports of one job
    List {
        #[arg(long, help = "Filter jobs by client name (substring match)")]
        client: Option<String>,

        #[arg(
            long = "reports",
            value_name = "JOB_ID",
            help = "List the daily reports of the given job instead of jobs"
        )]
        reports: Option<i64>,
    },

    /// Show the estimate-vs-actual cost summary for a job
    Summary {
        /// Job id to summarize
        job_id: i64,

        #[arg(long = "reports", help = "Also print the job's daily reports")]
        with_reports: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export daily report data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "JOB_ID", help = "Export only one job's reports")]
        job: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
