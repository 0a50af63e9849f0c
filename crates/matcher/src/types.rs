use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use lexicon::Label;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque caller-supplied identifier stored in the seed index.
pub type IdentityId = u64;

/// Unordered set of lemma strings used as a seed-index key.
///
/// Two combinations that pick the same lemma from different positions
/// collapse to a smaller set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentitySet(BTreeSet<String>);

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.0.contains(lemma)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for IdentitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a IdentitySet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for IdentitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, lemma) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(lemma)?;
        }
        f.write_str("}")
    }
}

/// Ordered list of labels describing one extra combination shape,
/// e.g. firstname + patronymic + lastname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<Label>);

impl Schema {
    /// Shortest schema accepted; singles and pairs are built in.
    pub const MIN_LEN: usize = 3;

    pub fn new(labels: impl Into<Vec<Label>>) -> Self {
        Self(labels.into())
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|label| label.as_str()).collect();
        f.write_str(&names.join("+"))
    }
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of identity sets generated per name.
    #[serde(default = "MatchConfig::default_generation_cap")]
    pub generation_cap: usize,
    /// Extra combination shapes tried after singles and pairs, in order.
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl MatchConfig {
    pub(crate) fn default_generation_cap() -> usize {
        1000
    }

    pub fn with_generation_cap(mut self, cap: usize) -> Self {
        self.generation_cap = cap;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.generation_cap == 0 {
            return Err(MatchError::InvalidConfig(
                "generation_cap must be greater than zero".into(),
            ));
        }
        if let Some(schema) = self.schemas.iter().find(|s| s.len() < Schema::MIN_LEN) {
            return Err(MatchError::InvalidConfig(format!(
                "schema `{schema}` must have at least {} labels",
                Schema::MIN_LEN
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            generation_cap: Self::default_generation_cap(),
            schemas: Vec::new(),
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
