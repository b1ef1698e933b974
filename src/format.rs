//! Keyword-aligned SQL layout.
//!
//! The formatter fixes known keyword misspellings and then applies a fixed
//! sequence of global rewrite rules that put every major clause on its own
//! line. The rules know nothing about string literals or comments: a `JOIN`
//! inside quotes is moved the same way as a real one.
//!
//! # Example
//!
//! ```
//! use sql_query_helper::format::format;
//!
//! let formatted = format("select * frm users where id=1 and active=1");
//! assert_eq!(formatted, "SELECT *\nFROM users\nWHERE id=1\n  AND active=1");
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::keywords::{self, KeywordCorrector};

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([,()])\s*").expect("valid regex"));

static CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(SELECT|FROM|WHERE|GROUP\s+BY|HAVING|ORDER\s+BY|VALUES)\b")
        .expect("valid regex")
});

/// Optional side qualifier, then optional kind qualifier, then JOIN.
static JOIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\b((?:(?:LEFT|RIGHT|FULL)\s+)?(?:(?:INNER|OUTER|CROSS)\s+)?)JOIN\b")
        .expect("valid regex")
});

static LOGICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(AND|OR)\b").expect("valid regex"));

static DML_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(INSERT|UPDATE|DELETE)\b").expect("valid regex"));

static SET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSET\b").expect("valid regex"));

const LOGICAL_INDENT: &str = "  ";

/// Format text with the built-in keyword dictionary.
///
/// Pure and total: unrecognizable input still goes through every rule and
/// comes back best-effort formatted. Empty input yields an empty string.
pub fn format(text: &str) -> String {
    Formatter::new(keywords::builtin()).format(text)
}

/// Rewrite pipeline bound to a keyword dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    corrector: &'a KeywordCorrector
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new(keywords::builtin())
    }
}

impl<'a> Formatter<'a> {
    pub fn new(corrector: &'a KeywordCorrector) -> Self {
        Self {
            corrector
        }
    }

    /// Apply the full rewrite pipeline.
    pub fn format(&self, text: &str) -> String {
        let mut sql = self.corrector.correct_text(text);
        sql = collapse_whitespace(&sql);
        sql = space_punctuation(&sql);
        sql = break_parentheses(&sql);
        sql = break_clauses(&sql);
        sql = break_joins(&sql);
        sql = break_logical(&sql);
        sql = break_dml(&sql);
        sql = break_set(&sql);
        let formatted = tidy_lines(&sql);
        tracing::trace!(
            input = text.len(),
            output = formatted.len(),
            "formatted query"
        );
        formatted
    }
}

fn collapse_whitespace(sql: &str) -> String {
    WHITESPACE_REGEX.replace_all(sql, " ").into_owned()
}

/// `a , b( c )` becomes `a, b( c) `
fn space_punctuation(sql: &str) -> String {
    PUNCTUATION_REGEX.replace_all(sql, "$1 ").into_owned()
}

fn break_parentheses(sql: &str) -> String {
    sql.replace('(', "\n(").replace(')', ")\n")
}

fn break_clauses(sql: &str) -> String {
    CLAUSE_REGEX
        .replace_all(sql, |caps: &Captures| format!("\n{}", normalize_keyword(&caps[1])))
        .into_owned()
}

fn break_joins(sql: &str) -> String {
    JOIN_REGEX
        .replace_all(sql, |caps: &Captures| {
            let qualifier = normalize_keyword(&caps[1]);
            if qualifier.is_empty() {
                String::from("\nJOIN")
            } else {
                format!("\n{} JOIN", qualifier)
            }
        })
        .into_owned()
}

fn break_logical(sql: &str) -> String {
    LOGICAL_REGEX
        .replace_all(sql, |caps: &Captures| {
            format!("\n{}{}", LOGICAL_INDENT, caps[1].to_uppercase())
        })
        .into_owned()
}

fn break_dml(sql: &str) -> String {
    DML_REGEX
        .replace_all(sql, |caps: &Captures| format!("\n{}", caps[1].to_uppercase()))
        .into_owned()
}

fn break_set(sql: &str) -> String {
    SET_REGEX.replace_all(sql, "\nSET").into_owned()
}

/// Uppercase and join words with single spaces: `group  by` → `GROUP BY`.
fn normalize_keyword(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop blank lines and edge spaces; only AND/OR lines keep their indent.
fn tidy_lines(sql: &str) -> String {
    sql.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if starts_with_logical(line) {
                format!("{}{}", LOGICAL_INDENT, line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn starts_with_logical(line: &str) -> bool {
    let word = line
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or_default();
    word == "AND" || word == "OR"
}
