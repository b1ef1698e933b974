//! Keyword corrector for common SQL keyword misspellings.
//!
//! The dictionary stores every misspelling once, keyed by its uppercase form.
//! Lookups fold the token to uppercase, so `frm`, `Frm` and `FRM` all resolve
//! to `FROM`.
//!
//! # Example
//!
//! ```
//! use sql_query_helper::keywords::correct;
//!
//! assert_eq!(correct("selct"), Some("SELECT"));
//! assert_eq!(correct("SELECT"), None);
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Built-in misspelling → keyword pairs, in registration order.
const BUILTIN: &[(&str, &str)] = &[
    ("CREAT", "CREATE"),
    ("SELCT", "SELECT"),
    ("SELEC", "SELECT"),
    ("WHER", "WHERE"),
    ("DELET", "DELETE"),
    ("UPDAT", "UPDATE"),
    ("INSRT", "INSERT"),
    ("FRM", "FROM"),
    ("TABL", "TABLE"),
    ("DATABAS", "DATABASE"),
    ("COLUM", "COLUMN"),
    ("GROOP", "GROUP"),
    ("ORDR", "ORDER"),
    ("JOINNG", "JOIN"),
    ("HAVNG", "HAVING"),
    ("DISTINCTT", "DISTINCT"),
    ("UNOIN", "UNION"),
    ("VALU", "VALUES")
];

/// Word runs, each looked up whole in the dictionary
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

static BUILTIN_CORRECTOR: LazyLock<KeywordCorrector> = LazyLock::new(KeywordCorrector::new);

/// Look up the correction for a token in the built-in dictionary.
///
/// Returns `None` for unknown tokens, including correctly spelled keywords.
pub fn correct(token: &str) -> Option<&'static str> {
    builtin().correct(token)
}

/// Shared corrector holding only the built-in entries.
pub fn builtin() -> &'static KeywordCorrector {
    &BUILTIN_CORRECTOR
}

/// Case-insensitive misspelling dictionary.
///
/// Keys are uppercase misspellings, values are canonical uppercase keywords.
/// Inserting an existing key replaces its correction.
#[derive(Debug, Clone)]
pub struct KeywordCorrector {
    entries: IndexMap<String, String>
}

impl Default for KeywordCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordCorrector {
    /// Corrector with the built-in dictionary.
    pub fn new() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(wrong, right)| ((*wrong).to_string(), (*right).to_string()))
        )
    }

    /// Built-in dictionary extended with user-supplied pairs.
    ///
    /// Both sides are normalized to uppercase. Extra pairs override built-in
    /// entries with the same misspelling. Blank or non-word keys are skipped.
    pub fn with_extra<'a, I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>
    {
        let extra = extra
            .into_iter()
            .map(|(wrong, right)| (wrong.trim().to_uppercase(), right.trim().to_uppercase()))
            .filter(|(wrong, right)| {
                !wrong.is_empty()
                    && !right.is_empty()
                    && wrong.chars().all(|c| c.is_alphanumeric() || c == '_')
            })
            .collect::<Vec<_>>();
        if extra.is_empty() {
            return Self::new();
        }
        tracing::debug!(count = extra.len(), "registering extra keyword corrections");
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(wrong, right)| ((*wrong).to_string(), (*right).to_string()))
                .chain(extra)
        )
    }

    fn from_entries(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries = IndexMap::new();
        for (wrong, right) in pairs {
            entries.insert(wrong, right);
        }
        Self {
            entries
        }
    }

    /// Case-insensitive lookup of a single token.
    pub fn correct(&self, token: &str) -> Option<&str> {
        self.entries
            .get(token.to_uppercase().as_str())
            .map(String::as_str)
    }

    /// Number of distinct misspellings known.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(misspelling, correction)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every whole-word misspelling in `text` with its correction.
    pub fn correct_text(&self, text: &str) -> String {
        WORD_REGEX
            .replace_all(text, |caps: &Captures| match self.correct(&caps[0]) {
                Some(fixed) => fixed.to_string(),
                None => caps[0].to_string()
            })
            .into_owned()
    }
}
