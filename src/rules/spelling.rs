use std::sync::LazyLock;

use regex::Regex;

use super::{Check, CheckInfo, Finding, Severity};
use crate::keywords::{self, KeywordCorrector};

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Known keyword misspellings, one finding per occurrence
pub struct MisspelledKeyword {
    corrector: KeywordCorrector
}

impl Default for MisspelledKeyword {
    fn default() -> Self {
        Self::new(keywords::builtin().clone())
    }
}

impl MisspelledKeyword {
    pub fn new(corrector: KeywordCorrector) -> Self {
        Self {
            corrector
        }
    }
}

impl Check for MisspelledKeyword {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SQL001",
            name:     "Misspelled keyword",
            severity: Severity::Error
        }
    }

    fn check(&self, text: &str) -> Vec<Finding> {
        let info = self.info();
        WORD_REGEX
            .find_iter(text)
            .filter_map(|token| {
                let word = token.as_str().to_uppercase();
                self.corrector.correct(&word).map(|fixed| {
                    Finding::new(
                        &info,
                        format!("Misspelled keyword: {}", word),
                        format!("Did you mean: {}?", fixed)
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_each_occurrence() {
        let findings = MisspelledKeyword::default().check("selct a frm t; selct b");
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Misspelled keyword: SELCT",
                "Misspelled keyword: FRM",
                "Misspelled keyword: SELCT"
            ]
        );
        assert_eq!(findings[1].suggestion, "Did you mean: FROM?");
    }

    #[test]
    fn test_ignores_correct_keywords() {
        assert!(MisspelledKeyword::default().check("SELECT * FROM users;").is_empty());
    }

    #[test]
    fn test_substring_is_not_a_token() {
        assert!(MisspelledKeyword::default().check("SELECT frmx FROM t;").is_empty());
    }

    #[test]
    fn test_uses_custom_corrector() {
        let check = MisspelledKeyword::new(KeywordCorrector::with_extra([("slect", "select")]));
        let findings = check.check("slect 1;");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].suggestion, "Did you mean: SELECT?");
    }
}
