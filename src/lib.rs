//! # SQL Query Helper Library
//!
//! Heuristic spell-checking, linting and formatting for SQL text.
//!
//! The two entry points are pure functions over raw text:
//!
//! - [`analyze`] - ordered [`Finding`]s for misspelled keywords and common
//!   structural mistakes
//! - [`format()`] - keyword-aligned, multi-line layout with misspellings fixed
//!
//! ```
//! use sql_query_helper::{analyze, format};
//!
//! let findings = analyze("SELCT * FRM users;");
//! assert_eq!(findings.len(), 2);
//!
//! assert_eq!(format("selct * frm users"), "SELECT *\nFROM users");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod keywords;
pub mod logging;
pub mod output;
pub mod rules;

pub use format::format;
pub use rules::{Finding, Severity, analyze};
