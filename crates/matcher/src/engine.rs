use std::sync::{Arc, RwLock};
use std::time::Instant;

use lexicon::CandidateSet;
use tracing::debug;

use crate::generate::Combinations;
use crate::index::SeedIndex;
use crate::metrics::metrics_recorder;
use crate::types::{IdentityId, MatchConfig, MatchError, Schema};


/// Seeds identities and looks them up by the identity sets generated from
/// their resolved names.
#[derive(Debug, Clone)]
pub struct Matcher {
    cap: usize,
    schemas: Arc<[Schema]>,
    index: SeedIndex,
}

impl Matcher {
    /// Construct a matcher after validating `config`.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            cap: config.generation_cap,
            schemas: config.schemas.into(),
            index: SeedIndex::new(),
        })
    }

    pub fn generation_cap(&self) -> usize {
        self.cap
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    pub fn index(&self) -> &SeedIndex {
        &self.index
    }

    /// Lazily generate the identity sets for one resolved name.
    pub fn generate(&self, candidates: &[CandidateSet]) -> Combinations {
        Combinations::new(candidates, Arc::clone(&self.schemas), self.cap)
    }

    /// Register `id` under every identity set generated for `candidates`.
    ///
    /// Returns the number of sets generated.
    pub fn seed(&mut self, id: IdentityId, candidates: &[CandidateSet]) -> usize {
        let start = Instant::now();
        let mut combos = self.generate(candidates);

        for set in combos.by_ref() {
            self.index.insert(set, id);
        }

        let generated = combos.emitted();
        report_truncation(&combos, "seed");
        debug!(id, generated, sets = self.index.len(), "identity seeded");

        if let Some(recorder) = metrics_recorder() {
            recorder.record_seed(id, generated, start.elapsed());
        }
        generated
    }

    /// Seed many identities in order. Returns the total number of sets generated.
    pub fn seed_all<I>(&mut self, identities: I) -> usize
    where
        I: IntoIterator<Item = (IdentityId, Vec<CandidateSet>)>,
    {
        identities
            .into_iter()
            .map(|(id, candidates)| self.seed(id, &candidates))
            .sum()
    }

    /// Ids seeded under the first generated set present in the index.
    ///
    /// Returns `None` when no generated set was seeded.
    pub fn match_identity(&self, candidates: &[CandidateSet]) -> Option<Vec<IdentityId>> {
        let start = Instant::now();
        let mut combos = self.generate(candidates);

        let found = combos
            .by_ref()
            .find_map(|set| self.index.get(&set).map(<[IdentityId]>::to_vec));

        if found.is_none() {
            report_truncation(&combos, "match");
        }

        if let Some(recorder) = metrics_recorder() {
            let hits = found.as_ref().map_or(0, Vec::len);
            recorder.record_match(combos.emitted(), hits, start.elapsed());
        }
        found
    }
}

impl Default for Matcher {
    fn default() -> Self {
        let config = MatchConfig::default();
        Self {
            cap: config.generation_cap,
            schemas: config.schemas.into(),
            index: SeedIndex::new(),
        }
    }
}

fn report_truncation(combos: &Combinations, op: &'static str) {
    if !combos.truncated() {
        return;
    }

    debug!(op, cap = combos.emitted(), "identity set generation truncated at cap");
    if let Some(recorder) = metrics_recorder() {
        recorder.record_truncation(combos.emitted());
    }
}

/// A [`Matcher`] behind a read-write lock for interleaved seeding and
/// matching from several threads.
#[derive(Debug)]
pub struct SharedMatcher {
    inner: RwLock<Matcher>,
}

impl SharedMatcher {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            inner: RwLock::new(matcher),
        }
    }

    pub fn seed(&self, id: IdentityId, candidates: &[CandidateSet]) -> usize {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .seed(id, candidates)
    }

    pub fn seed_all<I>(&self, identities: I) -> usize
    where
        I: IntoIterator<Item = (IdentityId, Vec<CandidateSet>)>,
    {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .seed_all(identities)
    }

    pub fn match_identity(&self, candidates: &[CandidateSet]) -> Option<Vec<IdentityId>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .match_identity(candidates)
    }

    /// Number of distinct identity sets seeded so far.
    pub fn seeded_sets(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .index()
            .len()
    }

    pub fn into_inner(self) -> Matcher {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Matcher> for SharedMatcher {
    fn from(matcher: Matcher) -> Self {
        Self::new(matcher)
    }
}
