//! Workspace umbrella crate for namefp, a personal-name fingerprinting
//! pipeline.
//!
//! This crate stitches together normalization (`canonical`), dictionary
//! resolution (`lexicon`) and identity matching (`matcher`) so callers can
//! go from raw name strings to seeded identity ids with a single entry
//! point, [`NamePipeline`].
//!
//! ```rust
//! use std::sync::Arc;
//! use namefp::{BuildRecord, DictionaryBuilder, MatchConfig, NamePipeline, NormalizeConfig};
//!
//! let mut builder = DictionaryBuilder::new();
//! for (term, lemma, tag) in [
//!     ("Іван", "Іван", "lemma-firstname"),
//!     ("Івана", "Іван", "lemma-firstname"),
//!     ("Шевченко", "Шевченко", "lemma-lastname"),
//!     ("Шевченка", "Шевченко", "lemma-lastname"),
//! ] {
//!     builder.push(BuildRecord {
//!         term: term.into(),
//!         lemma: lemma.into(),
//!         lemma_labels: vec!["lemma".into(), tag.into()],
//!         labels: vec![],
//!         properties: serde_json::Value::Null,
//!     })?;
//! }
//!
//! let pipeline = NamePipeline::new(
//!     Arc::new(builder.build()?),
//!     NormalizeConfig::default(),
//!     MatchConfig::default(),
//! )?;
//!
//! pipeline.seed_name(7, "Іван Шевченко");
//! assert_eq!(pipeline.match_name("ІВАНА шевченка"), Some(vec![7]));
//! # Ok::<(), namefp::PipelineError>(())
//! ```

pub mod config;

pub use canonical::{normalize_name, tokenize, NormalizeConfig, Token};
pub use config::{
    CanonicalYamlConfig, ConfigLoadError, DictionaryYamlConfig, MatcherYamlConfig, NamefpConfig,
};
pub use lexicon::{
    no_match_lemma, BuildRecord, Candidate, CandidateSet, DictionaryBuilder, Hasher, Label,
    LemmaDictionary, LemmaLabel, LexiconError,
};
pub use matcher::{
    set_match_metrics, IdentityId, IdentitySet, MatchConfig, MatchError, MatchMetrics, Matcher,
    Schema, SharedMatcher,
};

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

/// Errors that can occur while assembling a [`NamePipeline`].
///
/// Resolution and matching never fail once the pipeline is built.
#[derive(Debug)]
pub enum PipelineError {
    Config(ConfigLoadError),
    Lexicon(LexiconError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
            PipelineError::Lexicon(err) => write!(f, "dictionary failure: {err}"),
            PipelineError::Match(err) => write!(f, "matcher failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Config(err) => Some(err),
            PipelineError::Lexicon(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

impl From<LexiconError> for PipelineError {
    fn from(value: LexiconError) -> Self {
        PipelineError::Lexicon(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// Normalization, dictionary resolution and matching behind one handle.
///
/// The pipeline is `Sync`: resolution is lock-free and the seed index sits
/// behind a [`SharedMatcher`], so one instance can serve many threads.
#[derive(Debug)]
pub struct NamePipeline {
    normalize: NormalizeConfig,
    hasher: Hasher,
    matcher: SharedMatcher,
}

impl NamePipeline {
    pub fn new(
        dictionary: Arc<LemmaDictionary>,
        normalize: NormalizeConfig,
        match_cfg: MatchConfig,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            normalize,
            hasher: Hasher::new(dictionary),
            matcher: SharedMatcher::new(Matcher::new(match_cfg)?),
        })
    }

    /// Load the dictionary named in `cfg` and build a pipeline around it.
    pub fn from_config(cfg: &NamefpConfig) -> Result<Self, PipelineError> {
        cfg.validate()?;
        let path = cfg.dictionary_path()?;
        let dictionary = LemmaDictionary::load(path)?;
        info!(
            path = %path.display(),
            generation_cap = cfg.matcher.generation_cap,
            schemas = cfg.matcher.schemas.len(),
            "name pipeline ready"
        );

        Self::new(
            Arc::new(dictionary),
            cfg.canonical.to_normalize_config(),
            cfg.matcher.to_match_config(),
        )
    }

    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }

    pub fn matcher(&self) -> &SharedMatcher {
        &self.matcher
    }

    /// Normalized tokens of `raw` under this pipeline's configuration.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        normalize_name(raw, &self.normalize)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    /// Normalize and resolve one raw name.
    pub fn resolve_name(&self, raw: &str) -> Vec<CandidateSet> {
        self.hasher.resolve(&self.tokenize(raw))
    }

    /// Normalize and resolve many raw names in parallel, preserving order.
    pub fn resolve_names<S>(&self, raws: &[S]) -> Vec<Vec<CandidateSet>>
    where
        S: AsRef<str> + Sync,
    {
        let tokens: Vec<Vec<String>> = raws
            .par_iter()
            .map(|raw| self.tokenize(raw.as_ref()))
            .collect();
        self.hasher.resolve_batch(&tokens)
    }

    /// Seed `id` under every identity set generated for `raw`.
    pub fn seed_name(&self, id: IdentityId, raw: &str) -> usize {
        self.matcher.seed(id, &self.resolve_name(raw))
    }

    /// Resolve all names in parallel, then seed them in input order.
    pub fn seed_names<S>(&self, names: &[(IdentityId, S)]) -> usize
    where
        S: AsRef<str> + Sync,
    {
        let raws: Vec<&str> = names.iter().map(|(_, raw)| raw.as_ref()).collect();
        let resolved = self.resolve_names(&raws);
        self.matcher.seed_all(
            names
                .iter()
                .map(|(id, _)| *id)
                .zip(resolved),
        )
    }

    /// Ids seeded under the first identity set shared with `raw`.
    pub fn match_name(&self, raw: &str) -> Option<Vec<IdentityId>> {
        self.matcher.match_identity(&self.resolve_name(raw))
    }
}
