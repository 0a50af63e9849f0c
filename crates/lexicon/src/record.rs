use serde::{Deserialize, Serialize};

use crate::label::{Label, LemmaLabel};

/// One line of dictionary build input.
///
/// `labels` and `properties` are carried through the build but only the
/// auxiliary labels are stored; properties are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub term: String,
    pub lemma: String,
    pub lemma_labels: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// Payload stored in a posting list. Ids index the dictionary side tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredPayload {
    pub lemma_id: u32,
    pub aux_labels: Vec<u32>,
}

/// A dictionary hit: the term that matched, its label type and the stored
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub term: String,
    pub label: LemmaLabel,
    pub lemma_id: u32,
    pub aux_labels: Vec<u32>,
}

/// A candidate interpretation of one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    pub label: Label,
    pub lemma: String,
}

impl Candidate {
    pub fn new(term: impl Into<String>, label: Label, lemma: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            label,
            lemma: lemma.into(),
        }
    }
}

/// Candidates for one token position, deduplicated in first-seen order.
pub type CandidateSet = Vec<Candidate>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_record_optional_fields() {
        let line = r#"{"term":"Іван","lemma":"Іван","lemma_labels":["lemma","lemma-firstname"]}"#;
        let record: BuildRecord = serde_json::from_str(line).expect("parse record");

        assert_eq!(record.term, "Іван");
        assert!(record.labels.is_empty());
        assert!(record.properties.is_null());
    }

    #[test]
    fn candidate_serializes_label_name() {
        let candidate = Candidate::new("Xyzzy123", Label::NoMatch, "abc");
        let json = serde_json::to_value(&candidate).expect("serialize");
        assert_eq!(json["label"], "no-match");
        assert_eq!(json["term"], "Xyzzy123");
    }
}
