//! A brute-force skyline oracle and engine-state dumps, for comparing
//! against the incremental engine in tests and for failure messages.

use crate::dominance::dominate;
use crate::engine::Inspect;
use crate::entry::Stamp;

/// Indices into `rows` that are undominated by any other row in `rows`,
/// computed by the naive O(n^2) definition rather than the incremental
/// algorithm. Used as a reference to check the engine against on
/// randomized streams.
#[must_use]
pub fn brute_force_skyline(rows: &[Vec<f64>]) -> Vec<usize> {
    (0..rows.len())
        .filter(|&i| {
            !(0..rows.len()).any(|j| j != i && dominate(&rows[j], &rows[i]))
        })
        .collect()
}

/// Print the engine's current skyline membership to stderr, for use in
/// a failing test's diagnostic output.
pub fn dump_skyline<E: Inspect>(label: &str, engine: &E) {
    let mut stamps = engine.skyline_stamps();
    stamps.sort();
    eprintln!("[{label}] skyline size={}", engine.skyline_size());
    for stamp in stamps {
        match engine.get(stamp) {
            Some(values) => eprintln!("  {stamp:?}: {values:?}"),
            None => eprintln!("  {stamp:?}: <missing from cache>"),
        }
    }
}

/// Compare the engine's resident skyline stamps against the brute-force
/// oracle's expected set (by row index, translated through `stamps`).
///
/// # Panics
///
/// Panics with a diff if the sets disagree.
pub fn assert_matches_brute_force<E: Inspect>(engine: &E, stamps: &[Stamp], rows: &[Vec<f64>]) {
    let expected: std::collections::HashSet<Stamp> = brute_force_skyline(rows)
        .into_iter()
        .map(|i| stamps[i])
        .collect();
    let actual: std::collections::HashSet<Stamp> = engine.skyline_stamps().into_iter().collect();

    if actual != expected {
        dump_skyline("actual", engine);
        let missing: Vec<_> = expected.difference(&actual).collect();
        let extra: Vec<_> = actual.difference(&expected).collect();
        panic!("skyline mismatch against brute-force oracle:\n  missing: {missing:?}\n  extra: {extra:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_keeps_incomparable_rows() {
        let rows = vec![
            vec![1.0, 4.0],
            vec![2.0, 3.0],
            vec![3.0, 2.0],
            vec![4.0, 1.0],
        ];
        let skyline = brute_force_skyline(&rows);
        assert_eq!(skyline.len(), 4);
    }

    #[test]
    fn brute_force_drops_dominated_rows() {
        let rows = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![0.5, 0.5]];
        assert_eq!(brute_force_skyline(&rows), vec![2]);
    }
}
