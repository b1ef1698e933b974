//! Helper functions for CLI operations.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::Path
};

use super::convert::convert_format;
use crate::{
    cli::Format,
    error::{AppResult, file_read_error},
    output::{OutputOptions, Report},
    rules::Severity
};

/// Marker path selecting stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Calculates the process exit code based on finding severities.
///
/// - `0` - No findings or only informational ones
/// - `1` - At least one warning present
/// - `2` - At least one error present
///
/// # Example
///
/// ```
/// use sql_query_helper::{app::calculate_exit_code, output::Report};
///
/// let reports = [Report {
///     source:   "a.sql".into(),
///     findings: vec![]
/// }];
/// assert_eq!(calculate_exit_code(&reports), 0);
/// ```
pub fn calculate_exit_code(reports: &[Report]) -> i32 {
    let worst = reports
        .iter()
        .flat_map(|r| r.findings.iter())
        .map(|f| f.severity)
        .max();
    match worst {
        Some(Severity::Error) => 2,
        Some(Severity::Warning) => 1,
        _ => 0
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.to_str() == Some(STDIN_PATH)
}

/// Display name used in reports
pub fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        String::from("<stdin>")
    } else {
        path.display().to_string()
    }
}

/// Read SQL text from a file or stdin
pub fn read_input(path: &Path) -> AppResult<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
    }
}

/// Create output options from parameters
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}
