use std::path::PathBuf;

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors raised while building, saving or loading a lemma dictionary.
///
/// Query-time operations never fail; every variant here belongs to the
/// build or load phase.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record {line}: read failed: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("record {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("record {line}: expected exactly one lemma tag besides `lemma`, found {found:?}")]
    InvalidLabels { line: usize, found: Vec<String> },
    #[error("record {line}: unknown lemma label `{label}`")]
    UnknownLabel { line: usize, label: String },
    #[error("record {line}: invalid term {term:?}")]
    InvalidTerm { line: usize, term: String },
    #[error("fst error: {0}")]
    Fst(#[from] fst::Error),
    #[error("Serialization encode error: {0}")]
    Encode(String),
    #[error("Serialization decode error: {0}")]
    Decode(String),
    #[error("corrupt dictionary: {0}")]
    Corrupt(String),
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<EncodeError> for LexiconError {
    fn from(e: EncodeError) -> Self {
        LexiconError::Encode(e.to_string())
    }
}

impl From<DecodeError> for LexiconError {
    fn from(e: DecodeError) -> Self {
        LexiconError::Decode(e.to_string())
    }
}
