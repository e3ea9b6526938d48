use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for callview
/// CLI application to load, link and inspect call-session CSV datasets
#[derive(Parser)]
#[command(
    name = "callview",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple dataset inspection CLI: load users, sessions and in-call messages from CSV and explore the linked graph",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset directory (useful for tests or ad-hoc exports)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the registration window in days
    #[arg(global = true, long = "days")]
    pub days: Option<i64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the dataset directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and dataset directory")]
        check: bool,
    },

    /// Load the dataset and print summary statistics
    Stats,

    /// Load the dataset and list retained users with session counts
    List {
        #[arg(long, short, help = "Show at most N users")]
        limit: Option<usize>,
    },

    /// Load the dataset and print a nested sample of the linked graph
    Sample {
        #[arg(long, default_value_t = 3, help = "Users to include")]
        users: usize,

        #[arg(long, default_value_t = 5, help = "Sessions per user")]
        sessions: usize,

        #[arg(long, default_value_t = 10, help = "Messages per session")]
        messages: usize,
    },

    /// Export the loaded dataset
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, default_value_t = 3, help = "Users in the JSON sample")]
        users: usize,

        #[arg(long, default_value_t = 5, help = "Sessions per user in the JSON sample")]
        sessions: usize,

        #[arg(long, default_value_t = 10, help = "Messages per session in the JSON sample")]
        messages: usize,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
