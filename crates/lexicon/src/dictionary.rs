use std::fs;
use std::path::Path;

use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LexiconError;
use crate::label::LemmaLabel;
use crate::record::{LemmaRecord, StoredPayload};
use crate::table::IdTable;

/// Artifact format version stored in `postings.bin`.
pub const DICTIONARY_SCHEMA_VERSION: u16 = 1;

/// Separator between term and label type in dictionary keys.
pub const KEY_SEPARATOR: char = '|';

pub const FST_FILE: &str = "dict.fst";
pub const POSTINGS_FILE: &str = "postings.bin";
pub const LEMMAS_FILE: &str = "lemmas.bin";
pub const LABELS_FILE: &str = "labels.bin";

#[derive(Debug, Serialize, Deserialize)]
struct PostingsFile {
    schema_version: u16,
    postings: Vec<Vec<StoredPayload>>,
}

/// Build the dictionary key for a term and label type.
pub fn dictionary_key(term: &str, label: LemmaLabel) -> String {
    format!("{term}{KEY_SEPARATOR}{}", label.as_str())
}

/// Immutable term → lemma dictionary backed by an FST.
///
/// Keys are `"<term>|<label>"`; each key points at a posting list because
/// the same term may carry the same label type for several lemmas.
/// Lemma strings and auxiliary labels are interned in side tables.
#[derive(Debug)]
pub struct LemmaDictionary {
    map: Map<Vec<u8>>,
    postings: Vec<Vec<StoredPayload>>,
    lemmas: IdTable,
    labels: IdTable,
}

impl LemmaDictionary {
    pub(crate) fn from_parts(
        map: Map<Vec<u8>>,
        postings: Vec<Vec<StoredPayload>>,
        lemmas: IdTable,
        labels: IdTable,
    ) -> Result<Self, LexiconError> {
        let dict = Self {
            map,
            postings,
            lemmas,
            labels,
        };
        dict.validate()?;
        Ok(dict)
    }

    /// Load a dictionary artifact directory into memory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let dir = dir.as_ref();

        let fst_bytes = read_file(&dir.join(FST_FILE))?;
        let map = Map::new(fst_bytes)?;

        let (file, _): (PostingsFile, usize) =
            decode_from_slice(&read_file(&dir.join(POSTINGS_FILE))?, standard())?;
        if file.schema_version != DICTIONARY_SCHEMA_VERSION {
            return Err(LexiconError::Corrupt(format!(
                "unsupported schema version {} (expected {DICTIONARY_SCHEMA_VERSION})",
                file.schema_version
            )));
        }

        let (lemmas, _): (Vec<String>, usize) =
            decode_from_slice(&read_file(&dir.join(LEMMAS_FILE))?, standard())?;
        let (labels, _): (Vec<String>, usize) =
            decode_from_slice(&read_file(&dir.join(LABELS_FILE))?, standard())?;

        let dict = Self::from_parts(
            map,
            file.postings,
            IdTable::from_values(lemmas)?,
            IdTable::from_values(labels)?,
        )?;

        info!(
            path = %dir.display(),
            keys = dict.len(),
            lemmas = dict.lemmas.len(),
            "lemma dictionary loaded"
        );
        Ok(dict)
    }

    /// Write the artifact files into `dir`, creating it if needed.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<(), LexiconError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| LexiconError::io(dir, e))?;

        let postings = PostingsFile {
            schema_version: DICTIONARY_SCHEMA_VERSION,
            postings: self.postings.clone(),
        };

        write_file(&dir.join(FST_FILE), self.map.as_fst().as_bytes())?;
        write_file(&dir.join(POSTINGS_FILE), &encode_to_vec(&postings, standard())?)?;
        write_file(
            &dir.join(LEMMAS_FILE),
            &encode_to_vec(self.lemmas.values(), standard())?,
        )?;
        write_file(
            &dir.join(LABELS_FILE),
            &encode_to_vec(self.labels.values(), standard())?,
        )?;

        info!(path = %dir.display(), keys = self.len(), "lemma dictionary saved");
        Ok(())
    }

    /// Every record stored under `term` for any label type.
    ///
    /// Results follow key order and are deduplicated by label and lemma id.
    /// Unknown terms yield an empty list.
    pub fn lookup(&self, term: &str) -> Vec<LemmaRecord> {
        let prefix = format!("{term}{KEY_SEPARATOR}");
        let mut stream = self
            .map
            .search(Str::new(&prefix).starts_with())
            .into_stream();

        let mut seen = HashSet::new();
        let mut records = Vec::new();

        while let Some((key, posting)) = stream.next() {
            let Some(label) = key
                .get(prefix.len()..)
                .and_then(|suffix| std::str::from_utf8(suffix).ok())
                .and_then(|suffix| suffix.parse::<LemmaLabel>().ok())
            else {
                continue;
            };

            let Some(payloads) = self.postings.get(posting as usize) else {
                continue;
            };

            for payload in payloads {
                if seen.insert((label, payload.lemma_id)) {
                    records.push(LemmaRecord {
                        term: term.to_string(),
                        label,
                        lemma_id: payload.lemma_id,
                        aux_labels: payload.aux_labels.clone(),
                    });
                }
            }
        }

        records
    }

    /// Lemma string for an interned id.
    pub fn lemma(&self, id: u32) -> Option<&str> {
        self.lemmas.get(id)
    }

    /// Auxiliary label string for an interned id.
    pub fn aux_label(&self, id: u32) -> Option<&str> {
        self.labels.get(id)
    }

    /// Number of distinct `(term, label)` keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    fn validate(&self) -> Result<(), LexiconError> {
        let mut stream = self.map.stream();
        while let Some((key, posting)) = stream.next() {
            if posting as usize >= self.postings.len() {
                return Err(LexiconError::Corrupt(format!(
                    "key {:?} points at missing posting list {posting}",
                    String::from_utf8_lossy(key)
                )));
            }
        }

        for payload in self.postings.iter().flatten() {
            if self.lemmas.get(payload.lemma_id).is_none() {
                return Err(LexiconError::Corrupt(format!(
                    "lemma id {} out of range",
                    payload.lemma_id
                )));
            }
            if let Some(id) = payload
                .aux_labels
                .iter()
                .find(|&&id| self.labels.get(id).is_none())
            {
                return Err(LexiconError::Corrupt(format!("label id {id} out of range")));
            }
        }

        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, LexiconError> {
    fs::read(path).map_err(|e| LexiconError::io(path, e))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), LexiconError> {
    fs::write(path, bytes).map_err(|e| LexiconError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::DictionaryBuilder;
    use crate::record::BuildRecord;

    fn record(term: &str, lemma: &str, tag: &str) -> BuildRecord {
        BuildRecord {
            term: term.to_string(),
            lemma: lemma.to_string(),
            lemma_labels: vec!["lemma".to_string(), tag.to_string()],
            labels: vec!["uk".to_string()],
            properties: serde_json::Value::Null,
        }
    }

    fn sample() -> LemmaDictionary {
        let mut builder = DictionaryBuilder::new();
        builder
            .push(record("Іван", "Іван", "lemma-firstname"))
            .expect("valid record");
        builder
            .push(record("Іван", "Іванов", "lemma-lastname"))
            .expect("valid record");
        builder
            .push(record("Івана", "Іван", "lemma-firstname"))
            .expect("valid record");
        builder
            .push(record("Іван", "Іван", "lemma-firstname-typo"))
            .expect("valid record");
        builder.build().expect("build dictionary")
    }

    #[test]
    fn lookup_matches_exact_term_only() {
        let dict = sample();

        let hits = dict.lookup("Іван");
        let labels: Vec<LemmaLabel> = hits.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![LemmaLabel::Firstname, LemmaLabel::Lastname]);
        assert!(hits.iter().all(|r| r.term == "Іван"));

        assert_eq!(dict.lookup("Івана").len(), 1);
        assert!(dict.lookup("Іва").is_empty());
        assert!(dict.lookup("").is_empty());
    }

    #[test]
    fn duplicate_rows_collapse() {
        let dict = sample();
        let firstnames: Vec<_> = dict
            .lookup("Іван")
            .into_iter()
            .filter(|r| r.label == LemmaLabel::Firstname)
            .collect();
        assert_eq!(firstnames.len(), 1);
        assert_eq!(dict.lemma(firstnames[0].lemma_id), Some("Іван"));
    }

    #[test]
    fn aux_labels_resolve_through_side_table() {
        let dict = sample();
        let hit = &dict.lookup("Івана")[0];
        let aux: Vec<&str> = hit
            .aux_labels
            .iter()
            .filter_map(|&id| dict.aux_label(id))
            .collect();
        assert_eq!(aux, vec!["uk"]);
    }

    #[test]
    fn key_format() {
        assert_eq!(dictionary_key("Іван", LemmaLabel::Patronymic), "Іван|patronymic");
    }
}
