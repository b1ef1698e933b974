//! Application logic for the SQL Query Helper CLI.
//!
//! This module contains the command implementations separated from the main
//! entry point to enable testing.

mod convert;
mod helpers;
mod run;
mod types;

pub use convert::convert_format;
pub use helpers::{
    STDIN_PATH, calculate_exit_code, create_output_options, is_stdin, read_input, source_name
};
pub use run::{CLEAR_COMMAND, FORMAT_COMMAND, parse_live_line, run_check, run_format, run_live};
pub use types::{CheckParams, CommandOutput, FormatParams, LiveParams};
