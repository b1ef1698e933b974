//! Application types for CLI commands.
//!
//! Parameters passed from the command line to each command and the results
//! they hand back to the entry point for printing.

use std::path::PathBuf;

use crate::cli::Format;

/// Parameters for the check command.
///
/// # Example
///
/// ```
/// use sql_query_helper::{app::CheckParams, cli::Format};
///
/// let params = CheckParams {
///     paths:         vec!["queries.sql".into()],
///     output_format: Format::Text,
///     no_color:      true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Files to analyze; `-` reads stdin.
    pub paths:         Vec<PathBuf>,
    /// Output format for results.
    pub output_format: Format,
    /// Disable colored terminal output.
    pub no_color:      bool
}

/// Parameters for the format command.
#[derive(Debug, Clone)]
pub struct FormatParams {
    /// File to format; `-` reads stdin.
    pub path:  PathBuf,
    /// Rewrite the file in place.
    pub write: bool
}

/// Parameters for the live command.
#[derive(Debug, Clone, Default)]
pub struct LiveParams {
    /// Quiet period override in milliseconds.
    pub debounce_ms:    Option<u64>,
    /// Print the final document on exit.
    pub print_document: bool,
    /// Disable colored terminal output.
    pub no_color:       bool
}

/// Output from CLI command execution.
///
/// # Example
///
/// ```
/// use sql_query_helper::app::CommandOutput;
///
/// let output = CommandOutput {
///     exit_code: 0,
///     stdout:    Some("a.sql: No issues found!".to_string())
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process (0=clean, 1=warnings, 2=errors).
    pub exit_code: i32,
    /// Text to print to stdout, if any.
    pub stdout:    Option<String>
}
