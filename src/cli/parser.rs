use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendsum
/// CLI application to summarize attendance event logs
#[derive(Parser)]
#[command(
    name = "attendsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize a clock-in/clock-out event log into a per-person daily attendance report",
    long_about = None
)]
pub struct Cli {
    /// Disable colored status messages
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize an event log file into a daily attendance report
    Summarize {
        /// Input event log (.csv is read as CSV, anything else as a spreadsheet)
        input: String,

        /// Output file (default: <input-base>_attendance_summary.<ext> next to the input)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Output format (default taken from the config file)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Also print the summary as a table on stdout
        #[arg(long)]
        print: bool,

        /// Overwrite the output file if it already exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Load and validate an event log without writing anything
    Inspect {
        /// Input event log
        input: String,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}
