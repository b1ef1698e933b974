//! Type definitions for the heuristic check system.
//!
//! - [`Severity`] - Finding severity levels (Info, Warning, Error)
//! - [`CheckInfo`] - Static metadata describing a check
//! - [`Finding`] - A single issue reported for the analyzed text

use serde::Serialize;

/// Severity level of a finding.
///
/// Ordered from lowest to highest severity. Every built-in check reports
/// [`Severity::Error`]; the lower levels exist for configuration overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint, does not affect exit code
    Info,
    /// Likely mistake (exit code 1)
    Warning,
    /// Mistake that must be addressed (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

impl Severity {
    /// Parse a configuration severity name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None
        }
    }
}

/// A single heuristic issue found in the text.
///
/// Findings are informational: the suggestion is never applied
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Identifier of the check that produced this finding (e.g., "SQL001")
    pub rule_id:    &'static str,
    /// Human-readable description of the problem
    pub message:    String,
    /// Actionable hint, often with a worked example
    pub suggestion: String,
    /// Severity level of this finding
    pub severity:   Severity
}

impl Finding {
    pub fn new(info: &CheckInfo, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            rule_id:    info.id,
            message:    message.into(),
            suggestion: suggestion.into(),
            severity:   info.severity
        }
    }
}

/// Metadata about a check for identification and configuration.
#[derive(Debug, Clone, Copy)]
pub struct CheckInfo {
    /// Unique check identifier (e.g., "SQL002")
    pub id:       &'static str,
    /// Human-readable check name
    pub name:     &'static str,
    /// Default severity level
    pub severity: Severity
}
