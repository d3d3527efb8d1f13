//! The pairwise dominance test.

#[cfg(feature = "metrics")]
use crate::metrics::DOMINANCE_TESTS;

/// `true` iff `p` dominates `q` under minimization semantics: every
/// coordinate of `p` is `<=` the matching coordinate of `q`, and at
/// least one is strictly `<`.
pub fn dominate(p: &[f64], q: &[f64]) -> bool {
    #[cfg(feature = "metrics")]
    DOMINANCE_TESTS.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

    let mut strictly_less = false;
    for (a, b) in p.iter().zip(q.iter()) {
        if a > b {
            return false;
        } else if a < b {
            strictly_less = true;
        }
    }
    strictly_less
}
