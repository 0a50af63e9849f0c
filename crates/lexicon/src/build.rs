use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use canonical::normalize_charset;
use fst::{Map, MapBuilder};
use tracing::{debug, info};

use crate::dictionary::{dictionary_key, LemmaDictionary, KEY_SEPARATOR};
use crate::error::LexiconError;
use crate::label::LemmaLabel;
use crate::record::{BuildRecord, StoredPayload};
use crate::table::IdTable;

/// Generic tag present on every lemma row; it carries no label type.
const GENERIC_LEMMA_TAG: &str = "lemma";

/// Accumulates validated build records and produces a [`LemmaDictionary`].
///
/// Every record is validated on `push`; nothing is produced until `build`
/// is called, so a bad record aborts the whole build.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: BTreeMap<String, Vec<StoredPayload>>,
    lemmas: IdTable,
    labels: IdTable,
    records: usize,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records accepted so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Validate and add one record.
    pub fn push(&mut self, record: BuildRecord) -> Result<(), LexiconError> {
        let line = self.records + 1;
        let label = label_type(&record.lemma_labels, line)?;

        let term = normalize_charset(&record.term);
        if term.trim().is_empty() || term.contains(KEY_SEPARATOR) {
            return Err(LexiconError::InvalidTerm {
                line,
                term: record.term,
            });
        }

        let lemma_id = self.lemmas.intern(&record.lemma);
        let mut aux_labels = Vec::with_capacity(record.labels.len());
        for aux in &record.labels {
            let id = self.labels.intern(aux);
            if !aux_labels.contains(&id) {
                aux_labels.push(id);
            }
        }

        self.entries
            .entry(dictionary_key(&term, label))
            .or_default()
            .push(StoredPayload {
                lemma_id,
                aux_labels,
            });
        self.records = line;
        Ok(())
    }

    /// Read JSON-lines build input. Blank lines are skipped.
    pub fn read_jsonl<R: BufRead>(&mut self, reader: R) -> Result<usize, LexiconError> {
        let before = self.records;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| LexiconError::Read {
                line: line_no,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let record: BuildRecord =
                serde_json::from_str(&line).map_err(|source| LexiconError::Json {
                    line: line_no,
                    source,
                })?;
            self.push(record).map_err(|e| renumber(e, line_no))?;
        }

        Ok(self.records - before)
    }

    /// Read JSON-lines build input from a file.
    pub fn read_jsonl_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexiconError::io(path, e))?;
        let added = self.read_jsonl(BufReader::new(file))?;
        debug!(path = %path.display(), records = added, "build input read");
        Ok(added)
    }

    /// Compile the trie and side tables.
    pub fn build(self) -> Result<LemmaDictionary, LexiconError> {
        let mut map = MapBuilder::memory();
        let mut postings = Vec::with_capacity(self.entries.len());

        for (key, payloads) in self.entries {
            map.insert(key.as_bytes(), postings.len() as u64)?;
            postings.push(payloads);
        }

        let map = Map::new(map.into_inner()?)?;
        info!(
            records = self.records,
            keys = map.len(),
            lemmas = self.lemmas.len(),
            "lemma dictionary built"
        );
        LemmaDictionary::from_parts(map, postings, self.lemmas, self.labels)
    }
}

/// Derive the label type from a record's tag list.
fn label_type(tags: &[String], line: usize) -> Result<LemmaLabel, LexiconError> {
    let remaining: Vec<&String> = tags
        .iter()
        .filter(|tag| tag.as_str() != GENERIC_LEMMA_TAG)
        .collect();

    match remaining.as_slice() {
        [tag] => LemmaLabel::from_source_tag(tag).ok_or_else(|| LexiconError::UnknownLabel {
            line,
            label: (*tag).clone(),
        }),
        _ => Err(LexiconError::InvalidLabels {
            line,
            found: remaining.into_iter().cloned().collect(),
        }),
    }
}

/// `push` counts accepted records; input errors report the physical line.
fn renumber(err: LexiconError, line: usize) -> LexiconError {
    match err {
        LexiconError::InvalidLabels { found, .. } => LexiconError::InvalidLabels { line, found },
        LexiconError::UnknownLabel { label, .. } => LexiconError::UnknownLabel { line, label },
        LexiconError::InvalidTerm { term, .. } => LexiconError::InvalidTerm { line, term },
        other => other,
    }
}
