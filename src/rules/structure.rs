//! Structural heuristics over raw query text.
//!
//! Each check is a single boolean test and reports at most one finding per
//! call. None of them parse SQL: they count characters or match patterns, so
//! they can both over- and under-report on realistic multi-clause queries.

use std::sync::LazyLock;

use regex::Regex;

use super::{Check, CheckInfo, Finding, Severity};

static CREATE_TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CREATE TABLE\s+\w+(?:\s*\(.*\))?").expect("valid regex")
});

static GROUP_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)GROUP BY").expect("valid regex"));

/// Any SELECT earlier in the text satisfies this, not only the governing one.
static SELECT_GROUP_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)SELECT.*GROUP BY").expect("valid regex"));

static JOIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)JOIN").expect("valid regex"));

/// Exactly one word on each side: `LEFT JOIN` and friends do not match.
static FROM_JOIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)FROM\s+\w+\s+JOIN\s+\w+").expect("valid regex"));

/// Query text that does not end with `;`
pub struct MissingSemicolon;

impl MissingSemicolon {
    pub fn detect(&self, text: &str) -> Option<Finding> {
        let text = text.trim();
        if text.is_empty() || text.ends_with(';') {
            return None;
        }
        Some(Finding::new(
            &self.info(),
            "Missing semicolon at the end of the query",
            "Ensure your query ends with a ';'"
        ))
    }
}

impl Check for MissingSemicolon {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL002",
            name:     "Missing semicolon",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        self.detect(text).into_iter().collect()
    }
}

/// CREATE TABLE without any column list
pub struct IncompleteCreateTable;

impl IncompleteCreateTable {
    pub fn detect(&self, text: &str) -> Option<Finding> {
        if text.contains('(') || !CREATE_TABLE_REGEX.is_match(text) {
            return None;
        }
        Some(Finding::new(
            &self.info(),
            "Incomplete CREATE TABLE statement",
            "Ensure you define columns within parentheses, e.g., CREATE TABLE users (id INT, \
             name VARCHAR(255));"
        ))
    }
}

impl Check for IncompleteCreateTable {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL003",
            name:     "Incomplete CREATE TABLE",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        self.detect(text).into_iter().collect()
    }
}

/// Different number of `(` and `)` characters
///
/// Nesting order is not validated: `)(` counts as balanced.
pub struct UnmatchedParentheses;

impl UnmatchedParentheses {
    pub fn detect(&self, text: &str) -> Option<Finding> {
        let (open, close) = text.chars().fold((0usize, 0usize), |(open, close), c| match c {
            '(' => (open + 1, close),
            ')' => (open, close + 1),
            _ => (open, close)
        });
        if open == close {
            return None;
        }
        Some(Finding::new(
            &self.info(),
            "Unmatched parentheses detected",
            "Ensure all opening parentheses '(' have matching closing parentheses ')'."
        ))
    }
}

impl Check for UnmatchedParentheses {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL004",
            name:     "Unmatched parentheses",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        self.detect(text).into_iter().collect()
    }
}

/// GROUP BY with no SELECT anywhere before it
pub struct GroupByWithoutSelect;

impl GroupByWithoutSelect {
    pub fn detect(&self, text: &str) -> Option<Finding> {
        if !GROUP_BY_REGEX.is_match(text) || SELECT_GROUP_BY_REGEX.is_match(text) {
            return None;
        }
        Some(Finding::new(
            &self.info(),
            "Incorrect GROUP BY usage",
            "Ensure GROUP BY is used correctly after SELECT."
        ))
    }
}

impl Check for GroupByWithoutSelect {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL005",
            name:     "Invalid GROUP BY usage",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        self.detect(text).into_iter().collect()
    }
}

/// JOIN outside the `FROM <table> JOIN <table>` shape
pub struct IncorrectJoinSyntax;

impl IncorrectJoinSyntax {
    pub fn detect(&self, text: &str) -> Option<Finding> {
        if !JOIN_REGEX.is_match(text) || FROM_JOIN_REGEX.is_match(text) {
            return None;
        }
        Some(Finding::new(
            &self.info(),
            "Incorrect JOIN syntax",
            "Ensure JOIN is used properly, e.g., SELECT * FROM users JOIN orders ON users.id = \
             orders.user_id;"
        ))
    }
}

impl Check for IncorrectJoinSyntax {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL006",
            name:     "Incorrect JOIN syntax",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        self.detect(text).into_iter().collect()
    }
}
