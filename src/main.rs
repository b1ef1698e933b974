//! # SQL Query Helper
//!
//! Keyword spell-checking, heuristic linting and formatting for SQL text.
//!
//! `sql-query-helper` reports likely typos in SQL keywords (`SELCT`, `FRM`,
//! ...) and a handful of common mistakes: missing semicolon, unmatched
//! parentheses, CREATE TABLE without columns, GROUP BY without SELECT and
//! JOINs outside the `FROM a JOIN b` shape. It can also rewrite a query into
//! a multi-line, keyword-aligned layout. There is no SQL parser: every check
//! is a text heuristic.
//!
//! # Quick Start
//!
//! ```bash
//! # Report issues
//! sql-query-helper check queries.sql
//!
//! # Machine-readable output
//! sql-query-helper check -f json a.sql b.sql
//!
//! # Reformat, printing the result or rewriting the file
//! sql-query-helper format queries.sql
//! sql-query-helper format -w queries.sql
//!
//! # Emulated editor: findings appear after typing pauses
//! sql-query-helper live --debounce-ms 300
//! ```
//!
//! # Checks
//!
//! | ID | Name |
//! |----|------|
//! | SQL001 | Misspelled keyword |
//! | SQL002 | Missing semicolon |
//! | SQL003 | Incomplete CREATE TABLE |
//! | SQL004 | Unmatched parentheses |
//! | SQL005 | Invalid GROUP BY usage |
//! | SQL006 | Incorrect JOIN syntax |
//!
//! # Exit Codes
//!
//! - `0` - Success, no issues or only informational messages
//! - `1` - Warnings found, or the command failed
//! - `2` - Errors found

use std::{io, process};

use clap::Parser;
use sql_query_helper::{
    app::{CheckParams, FormatParams, LiveParams, run_check, run_format, run_live},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult,
    logging::init_tracing
};
use tokio::{io::BufReader, main};

#[main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?.with_env(),
        None => Config::load()?
    };

    match cli.command {
        Commands::Check {
            paths,
            output_format,
            no_color
        } => {
            let output = run_check(
                CheckParams {
                    paths,
                    output_format,
                    no_color
                },
                config
            )?;
            if let Some(stdout) = output.stdout {
                println!("{}", stdout);
            }
            Ok(output.exit_code)
        }
        Commands::Format {
            path,
            write
        } => {
            let output = run_format(
                FormatParams {
                    path,
                    write
                },
                config
            )?;
            if let Some(stdout) = output.stdout {
                println!("{}", stdout);
            }
            Ok(output.exit_code)
        }
        Commands::Live {
            debounce_ms,
            print_document,
            no_color
        } => {
            let params = LiveParams {
                debounce_ms,
                print_document,
                no_color
            };
            let input = BufReader::new(tokio::io::stdin());
            let print_document = params.print_document;
            let (document, _) = run_live(input, io::stdout(), params, config).await?;
            if print_document {
                println!("{}", document.trim_end());
            }
            Ok(0)
        }
    }
}
