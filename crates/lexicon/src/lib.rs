//! Lemma dictionary and token resolution for namefp.
//!
//! A [`LemmaDictionary`] maps `(term, label type)` keys to lemma ids through
//! an FST, with lemma strings and auxiliary labels interned in side tables.
//! The [`Hasher`] turns normalized tokens into per-token [`CandidateSet`]s;
//! tokens absent from the dictionary get a deterministic synthetic lemma.
//!
//! Dictionaries are produced by [`DictionaryBuilder`] from JSON-lines input
//! and stored as a directory artifact:
//!
//! ```text
//! dict.fst       "<term>|<label>" -> posting index
//! postings.bin   posting lists of {lemma_id, aux_labels}
//! lemmas.bin     lemma strings in id order
//! labels.bin     auxiliary label strings in id order
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//! use lexicon::{BuildRecord, DictionaryBuilder, Hasher, Label};
//!
//! let mut builder = DictionaryBuilder::new();
//! builder.push(BuildRecord {
//!     term: "Івана".into(),
//!     lemma: "Іван".into(),
//!     lemma_labels: vec!["lemma".into(), "lemma-firstname".into()],
//!     labels: vec![],
//!     properties: serde_json::Value::Null,
//! })?;
//! let hasher = Hasher::new(Arc::new(builder.build()?));
//!
//! let resolved = hasher.resolve(&["Івана", "Xyzzy"]);
//! assert_eq!(resolved[0][0].lemma, "Іван");
//! assert_eq!(resolved[1][0].label, Label::NoMatch);
//! # Ok::<(), lexicon::LexiconError>(())
//! ```

mod build;
mod dictionary;
mod error;
mod hash;
mod hasher;
mod label;
mod record;
mod table;

pub use crate::build::DictionaryBuilder;
pub use crate::dictionary::{
    dictionary_key, LemmaDictionary, DICTIONARY_SCHEMA_VERSION, FST_FILE, KEY_SEPARATOR,
    LABELS_FILE, LEMMAS_FILE, POSTINGS_FILE,
};
pub use crate::error::LexiconError;
pub use crate::hash::{no_match_lemma, NO_MATCH_SALT};
pub use crate::hasher::Hasher;
pub use crate::label::{Label, LemmaLabel, UnknownLabel};
pub use crate::record::{BuildRecord, Candidate, CandidateSet, LemmaRecord, StoredPayload};
pub use crate::table::IdTable;
