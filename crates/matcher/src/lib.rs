//! # namefp Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the lexicon layer (`lexicon`). Given the
//! per-token candidate sets of a resolved name, it generates a bounded,
//! deterministic sequence of identity sets (unordered sets of lemmas) and
//! uses them as keys into an in-memory seed index.
//!
//! In a typical deployment you will:
//! - Resolve known identities with `lexicon::Hasher` and [`Matcher::seed`]
//!   them under caller-chosen ids.
//! - Resolve incoming names the same way and call [`Matcher::match_identity`]
//!   to find the ids seeded under the first shared identity set.
//!
//! ## Generation order
//!
//! 1. Every single candidate, grouped firstname, patronymic, lastname,
//!    no-match.
//! 2. Firstname × lastname pairs from different token positions.
//! 3. Each configured [`Schema`] (three or more labels), as a cross product
//!    with the last slot varying fastest, skipping shared positions.
//!
//! Generation stops after [`MatchConfig::generation_cap`] sets.
//!
//! ## Example Usage
//!
//! ```
//! use lexicon::{Candidate, Label};
//! use matcher::{MatchConfig, Matcher};
//!
//! let name = vec![
//!     vec![Candidate::new("Івана", Label::Firstname, "Іван")],
//!     vec![Candidate::new("Шевченка", Label::Lastname, "Шевченко")],
//! ];
//!
//! let mut matcher = Matcher::new(MatchConfig::default())?;
//! matcher.seed(42, &name);
//! assert_eq!(matcher.match_identity(&name), Some(vec![42]));
//! # Ok::<(), matcher::MatchError>(())
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! seeding and lookup activity, including cap truncation. Truncation is also
//! logged at `debug` through `tracing`.

pub mod engine;
pub mod generate;
pub mod index;
pub mod metrics;
pub mod types;

pub use crate::engine::{Matcher, SharedMatcher};
pub use crate::generate::Combinations;
pub use crate::index::SeedIndex;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{IdentityId, IdentitySet, MatchConfig, MatchError, Schema};
