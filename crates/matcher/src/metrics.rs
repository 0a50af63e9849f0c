// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `Matcher` reports seeding and lookup activity to it. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::IdentityId;

/// Metrics observer for seed and match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record one `seed` call: the id, the number of identity sets generated
    /// for it and the wall-clock duration.
    fn record_seed(&self, id: IdentityId, sets: usize, latency: Duration);

    /// Record one `match_identity` call: how many sets were probed, how many
    /// ids were returned (zero on no-match) and the wall-clock duration.
    fn record_match(&self, probed: usize, hit_count: usize, latency: Duration);

    /// Generation stopped at the cap before exhausting all combinations.
    fn record_truncation(&self, _cap: usize) {}
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during startup so all matchers share the
/// same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
