use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a lemma stored in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaLabel {
    Firstname,
    Patronymic,
    Lastname,
}

impl LemmaLabel {
    pub const ALL: [LemmaLabel; 3] = [
        LemmaLabel::Firstname,
        LemmaLabel::Patronymic,
        LemmaLabel::Lastname,
    ];

    /// Name used in dictionary keys (`"<term>|<label>"`).
    pub fn as_str(self) -> &'static str {
        match self {
            LemmaLabel::Firstname => "firstname",
            LemmaLabel::Patronymic => "patronymic",
            LemmaLabel::Lastname => "lastname",
        }
    }

    /// Map a source tag from the build input to a label type.
    ///
    /// Typo variants share the label of their base tag.
    pub fn from_source_tag(tag: &str) -> Option<Self> {
        match tag {
            "lemma-firstname" | "lemma-firstname-typo" => Some(LemmaLabel::Firstname),
            "lemma-patronymic" | "lemma-patronymic-typo" => Some(LemmaLabel::Patronymic),
            "lemma-lastname" | "lemma-lastname-typo" => Some(LemmaLabel::Lastname),
            _ => None,
        }
    }
}

impl fmt::Display for LemmaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LemmaLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LemmaLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Role of a resolved candidate: a dictionary label or the synthetic
/// no-match marker.
///
/// The declaration order is the group order used by combination generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    Firstname,
    Patronymic,
    Lastname,
    NoMatch,
}

impl Label {
    pub const ALL: [Label; 4] = [
        Label::Firstname,
        Label::Patronymic,
        Label::Lastname,
        Label::NoMatch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Firstname => "firstname",
            Label::Patronymic => "patronymic",
            Label::Lastname => "lastname",
            Label::NoMatch => "no-match",
        }
    }

    /// Dense index in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<LemmaLabel> for Label {
    fn from(label: LemmaLabel) -> Self {
        match label {
            LemmaLabel::Firstname => Label::Firstname,
            LemmaLabel::Patronymic => Label::Patronymic,
            LemmaLabel::Lastname => Label::Lastname,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// A label name that is not part of the closed label set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label `{0}`")]
pub struct UnknownLabel(pub String);
