use serde::{Deserialize, Serialize};

use crate::charset::{is_dash, BRACKETS};

/// A name fragment together with its normalized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The fragment as it appeared after punctuation normalization.
    pub raw: String,
    /// Canonical text: charset-normalized, script-repaired and title-cased.
    pub text: String,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Split punctuation-normalized text into raw fragments.
///
/// Splits on Unicode whitespace, dash variants and brackets; empty fragments
/// are dropped.
pub fn split_fragments(text: &str) -> Vec<&str> {
    text.split(|ch: char| ch.is_whitespace() || is_dash(ch) || BRACKETS.contains(&ch))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
