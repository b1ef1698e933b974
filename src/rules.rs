//! Heuristic check engine for SQL text.
//!
//! The analyzer runs a fixed battery of independent checks against raw query
//! text and collects their findings in check order. There is no parser: every
//! check is a pattern or character-count heuristic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Raw text   │────▶│   Analyzer   │────▶│  Findings   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │   Checks    │
//!                     │ (in order)  │
//!                     └─────────────┘
//! ```
//!
//! # Checks
//!
//! | ID | Name | Reports |
//! |----|------|---------|
//! | SQL001 | Misspelled keyword | Once per misspelled token occurrence |
//! | SQL002 | Missing semicolon | Text does not end with `;` |
//! | SQL003 | Incomplete CREATE TABLE | `CREATE TABLE name` with no `(` anywhere |
//! | SQL004 | Unmatched parentheses | `(` and `)` counts differ |
//! | SQL005 | Invalid GROUP BY usage | No `SELECT` before `GROUP BY` |
//! | SQL006 | Incorrect JOIN syntax | JOIN outside `FROM a JOIN b` |
//!
//! # Configuration
//!
//! Checks can be disabled or have their severity modified via
//! [`RulesConfig`]:
//!
//! ```toml
//! [rules]
//! disabled = ["SQL002"]
//!
//! [rules.severity]
//! SQL006 = "warning"
//! ```
//!
//! # Example
//!
//! ```
//! use sql_query_helper::rules::analyze;
//!
//! let findings = analyze("SELCT * FRM users;");
//! assert_eq!(findings.len(), 2);
//! assert_eq!(findings[0].suggestion, "Did you mean: SELECT?");
//! ```

mod spelling;
mod structure;
mod types;

use std::{collections::HashMap, sync::LazyLock};

pub use spelling::MisspelledKeyword;
pub use structure::{
    GroupByWithoutSelect, IncompleteCreateTable, IncorrectJoinSyntax, MissingSemicolon,
    UnmatchedParentheses
};
pub use types::{CheckInfo, Finding, Severity};

use crate::{config::RulesConfig, keywords::KeywordCorrector};

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

/// Analyze text with the default check battery.
///
/// Pure and total: any input, including empty or non-SQL text, yields a
/// (possibly empty) list of findings in check order.
pub fn analyze(text: &str) -> Vec<Finding> {
    DEFAULT_ANALYZER.analyze(text)
}

/// A single heuristic check.
///
/// Checks are stateless with respect to the analyzed text and must be
/// `Send + Sync` so one analyzer can serve several inputs at once.
pub trait Check: Send + Sync {
    /// Returns metadata about this check.
    fn info(&self) -> CheckInfo;

    /// Examines the text and returns any findings, empty if it passes.
    fn check(&self, text: &str) -> Vec<Finding>;
}

/// Ordered check runner.
///
/// Holds the enabled checks in their fixed execution order plus any
/// configured severity overrides.
///
/// # Example
///
/// ```
/// use sql_query_helper::{config::RulesConfig, rules::Analyzer};
///
/// let config = RulesConfig {
///     disabled: vec!["SQL002".into()],
///     ..Default::default()
/// };
///
/// let analyzer = Analyzer::with_config(config, Default::default());
/// assert!(analyzer.analyze("SELECT 1").is_empty());
/// ```
pub struct Analyzer {
    checks:             Vec<Box<dyn Check>>,
    severity_overrides: HashMap<&'static str, Severity>
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with every check and the built-in dictionary
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default(), KeywordCorrector::new())
    }

    /// Create an analyzer honoring disabled checks and severity overrides
    pub fn with_config(config: RulesConfig, corrector: KeywordCorrector) -> Self {
        let all_checks: Vec<Box<dyn Check>> = vec![
            Box::new(MisspelledKeyword::new(corrector)),
            Box::new(MissingSemicolon),
            Box::new(IncompleteCreateTable),
            Box::new(UnmatchedParentheses),
            Box::new(GroupByWithoutSelect),
            Box::new(IncorrectJoinSyntax),
        ];
        let checks: Vec<Box<dyn Check>> = all_checks
            .into_iter()
            .filter(|c| {
                !config
                    .disabled
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(c.info().id))
            })
            .collect();
        let mut severity_overrides = HashMap::new();
        for check in &checks {
            let id = check.info().id;
            let configured = config
                .severity
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(id));
            if let Some((_, sev_str)) = configured {
                match Severity::parse(sev_str) {
                    Some(sev) => {
                        severity_overrides.insert(id, sev);
                    }
                    None => tracing::warn!(check = id, value = %sev_str, "ignoring unknown severity")
                }
            }
        }
        Self {
            checks,
            severity_overrides
        }
    }

    /// Metadata of the enabled checks, in execution order
    pub fn checks(&self) -> Vec<CheckInfo> {
        self.checks.iter().map(|c| c.info()).collect()
    }

    /// Run every enabled check in order and collect the findings
    pub fn analyze(&self, text: &str) -> Vec<Finding> {
        let text = text.trim();
        let mut findings: Vec<Finding> = self
            .checks
            .iter()
            .flat_map(|check| check.check(text))
            .collect();
        for finding in &mut findings {
            if let Some(&severity) = self.severity_overrides.get(finding.rule_id) {
                finding.severity = severity;
            }
        }
        tracing::debug!(
            chars = text.len(),
            findings = findings.len(),
            "analysis finished"
        );
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_ids(findings: &[Finding]) -> Vec<&'static str> {
        findings.iter().map(|f| f.rule_id).collect()
    }

    #[test]
    fn test_findings_follow_check_order() {
        let findings = analyze("GROUP BY x JOIN (frm");
        assert_eq!(
            rule_ids(&findings),
            ["SQL001", "SQL002", "SQL004", "SQL005", "SQL006"]
        );
    }

    #[test]
    fn test_empty_text_has_no_findings() {
        assert!(analyze("").is_empty());
        assert!(analyze("   \n ").is_empty());
    }

    #[test]
    fn test_disabled_check_is_skipped() {
        let analyzer = Analyzer::with_config(
            RulesConfig {
                disabled: vec!["sql002".into()],
                ..Default::default()
            },
            KeywordCorrector::new()
        );
        assert!(analyzer.analyze("SELECT 1").is_empty());
        assert_eq!(analyzer.checks().len(), 5);
    }

    #[test]
    fn test_severity_override() {
        let mut severity = HashMap::new();
        severity.insert("SQL002".to_string(), "warning".to_string());
        severity.insert("SQL004".to_string(), "bogus".to_string());
        let analyzer = Analyzer::with_config(
            RulesConfig {
                disabled: vec![],
                severity
            },
            KeywordCorrector::new()
        );
        let findings = analyzer.analyze("SELECT (1");
        assert_eq!(findings[0].rule_id, "SQL002");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[1].rule_id, "SQL004");
        assert_eq!(findings[1].severity, Severity::Error);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "selct * frm users where (a = 1";
        assert_eq!(analyze(text), analyze(text));
    }
}
