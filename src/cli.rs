use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Query Helper - spot keyword typos and common mistakes, reformat queries
#[derive(Parser, Debug)]
#[command(name = "sql-query-helper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report misspelled keywords and common syntax mistakes
    Check {
        /// SQL files to check (use - for stdin)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Reformat a query into a keyword-aligned layout
    Format {
        /// SQL file to format (use - for stdin)
        path: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool
    },

    /// Emulated editor: each stdin line is an edit, findings follow pauses
    Live {
        /// Quiet period in milliseconds before analysis runs
        #[arg(long, env = "SQL_HELPER_DEBOUNCE_MS")]
        debounce_ms: Option<u64>,

        /// Print the final document when input ends
        #[arg(long)]
        print_document: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
