//! # rss-skyline
//!
//! An incremental skyline-maintenance engine over a sliding window of
//! multi-dimensional numeric tuples, using minimization dominance: tuple
//! `p` dominates `q` iff `p[i] <= q[i]` for every dimension `i` and
//! `p[i] < q[i]` for at least one. The skyline is the set of tuples in
//! the current window that no other resident tuple dominates.
//!
//! Two window modes share the same core algorithm and differ only in
//! eviction strategy and cache backend:
//!
//! - **Count mode** ([`engine::count::CountEngine`]) — the window is the
//!   last `W` arrivals; expiration is deterministic index arithmetic.
//! - **Time mode** ([`engine::time::TimeEngine`]) — the window is the
//!   last `W` seconds of wall-clock time; expiration is a variable-length
//!   FIFO batch driven by a [`clock::Clock`].
//!
//! ## Core pieces
//!
//! - [`entry`] — [`entry::Stamp`] (a totally-ordered arrival identity)
//!   and [`entry::Entry`] (a per-dimension index entry).
//! - [`index`] — [`index::IndexSet`], one ordered [`index::DimensionIndex`]
//!   per dimension.
//! - [`bound`] — the bound estimator picking the cheapest dimension to
//!   scan for a candidate dominator.
//! - [`dominance`] — the strict dominance test.
//! - [`tree`] — [`tree::DominanceTree`], mapping skyline members to the
//!   tuples they currently dominate.
//! - [`cache`] — the two window-mode tuple stores,
//!   [`cache::count::RingCache`] and [`cache::time::PoolCache`].
//! - [`engine`] — the two update drivers tying the above together.
//!
//! ## Ambient stack
//!
//! - [`error`] and [`stream`] — CLI input plumbing (opening a file or
//!   stdin, parsing one tuple per line).
//! - [`output`] — per-tuple status line formatting.
//! - [`config`] — [`config::Config`], the tunable knobs (cache capacity,
//!   dominance-tree shard count, post-warm-up budget, ...).
//! - [`validation`] — [`validation::Validate`] and
//!   [`validation::ValidationError`] for CLI argument checks.
//! - [`clock`] — [`clock::Clock`], [`clock::SystemClock`].
//! - [`metrics`] (feature `metrics`, on by default) — dominance-test
//!   counter and per-tuple runtime histogram.
//! - [`testing`] — fixtures, builders, and invariant assertions for the
//!   test suite.

pub mod bound;
pub mod cache;
pub mod clock;
pub mod config;
pub mod dominance;
pub mod engine;
pub mod entry;
pub mod error;
pub mod index;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod output;
pub mod stream;
pub mod testing;
pub mod tree;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use dominance::dominate;
pub use engine::{Inspect, Outcome};
pub use engine::count::CountEngine;
pub use engine::time::TimeEngine;
pub use entry::{Entry, Stamp};
pub use validation::{EngineArgs, Validate, ValidationError, ValidationResult};
