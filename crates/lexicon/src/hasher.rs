use std::sync::Arc;

use rayon::prelude::*;

use crate::dictionary::LemmaDictionary;
use crate::hash::no_match_lemma;
use crate::label::Label;
use crate::record::{Candidate, CandidateSet};

/// Resolves normalized tokens to candidate lemmas.
///
/// The hasher holds a shared handle to an immutable dictionary and has no
/// mutable state, so it can be cloned freely and used from many threads.
#[derive(Debug, Clone)]
pub struct Hasher {
    dictionary: Arc<LemmaDictionary>,
}

impl Hasher {
    pub fn new(dictionary: Arc<LemmaDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Arc<LemmaDictionary> {
        &self.dictionary
    }

    /// Candidates for one token. Never empty.
    ///
    /// Known tokens yield one candidate per distinct label and lemma;
    /// unknown tokens yield a single `no-match` candidate carrying a
    /// salted hash of the token as its lemma.
    pub fn resolve_token(&self, token: &str) -> CandidateSet {
        let mut candidates: CandidateSet = Vec::new();

        for record in self.dictionary.lookup(token) {
            let Some(lemma) = self.dictionary.lemma(record.lemma_id) else {
                continue;
            };
            let candidate = Candidate::new(record.term, record.label.into(), lemma);
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        if candidates.is_empty() {
            candidates.push(Candidate::new(token, Label::NoMatch, no_match_lemma(token)));
        }
        candidates
    }

    /// Candidates for every token of one name, in token order.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<CandidateSet> {
        tokens
            .iter()
            .map(|token| self.resolve_token(token.as_ref()))
            .collect()
    }

    /// Resolve many names in parallel. Output order matches input order.
    pub fn resolve_batch<S>(&self, names: &[Vec<S>]) -> Vec<Vec<CandidateSet>>
    where
        S: AsRef<str> + Sync,
    {
        names.par_iter().map(|tokens| self.resolve(tokens)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::DictionaryBuilder;
    use crate::record::BuildRecord;

    fn hasher() -> Hasher {
        let mut builder = DictionaryBuilder::new();
        let rows = [
            ("Іван", "Іван", "lemma-firstname"),
            ("Івана", "Іван", "lemma-firstname"),
            ("Петренко", "Петренко", "lemma-lastname"),
            ("Петро", "Петро", "lemma-firstname"),
            ("Петро", "Петро", "lemma-firstname-typo"),
            ("Петро", "Петров", "lemma-lastname"),
        ];
        for (term, lemma, tag) in rows {
            builder
                .push(BuildRecord {
                    term: term.to_string(),
                    lemma: lemma.to_string(),
                    lemma_labels: vec!["lemma".to_string(), tag.to_string()],
                    labels: Vec::new(),
                    properties: serde_json::Value::Null,
                })
                .expect("valid record");
        }
        Hasher::new(Arc::new(builder.build().expect("build")))
    }

    #[test]
    fn unknown_token_gets_synthetic_lemma() {
        let hasher = hasher();
        let resolved = hasher.resolve(&["xyzzy123"]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(
            resolved[0],
            vec![Candidate::new(
                "xyzzy123",
                Label::NoMatch,
                no_match_lemma("xyzzy123")
            )]
        );
    }

    #[test]
    fn known_token_lists_every_label() {
        let hasher = hasher();
        let candidates = hasher.resolve_token("Петро");

        assert_eq!(
            candidates,
            vec![
                Candidate::new("Петро", Label::Firstname, "Петро"),
                Candidate::new("Петро", Label::Lastname, "Петров"),
            ]
        );
    }

    #[test]
    fn inflected_forms_share_lemma() {
        let hasher = hasher();
        let a = hasher.resolve_token("Іван");
        let b = hasher.resolve_token("Івана");
        assert_eq!(a[0].lemma, b[0].lemma);
        assert_ne!(a[0].term, b[0].term);
    }

    #[test]
    fn resolve_preserves_structure() {
        let hasher = hasher();
        let empty: [&str; 0] = [];
        assert!(hasher.resolve(&empty).is_empty());

        let resolved = hasher.resolve(&["Іван", "Невідомий", "Петренко"]);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[1][0].label, Label::NoMatch);
        assert_eq!(resolved[2][0].label, Label::Lastname);
    }

    #[test]
    fn batch_matches_sequential() {
        let hasher = hasher();
        let names: Vec<Vec<&str>> = vec![
            vec!["Іван", "Петренко"],
            vec![],
            vec!["xyzzy123"],
            vec!["Петро", "Івана"],
        ];

        let batch = hasher.resolve_batch(&names);
        let sequential: Vec<_> = names.iter().map(|n| hasher.resolve(n)).collect();
        assert_eq!(batch, sequential);
    }
}
