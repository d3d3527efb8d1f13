//! Assertion functions checking skyline invariants against a live engine.

use crate::dominance::dominate;
use crate::engine::Inspect;
use crate::entry::Stamp;
use std::fmt::Debug;

/// Check core skyline properties against an engine and its
/// believed-resident tuples: soundness (every skyline member is
/// undominated by any other resident), completeness (every non-member
/// is dominated by some member), and flag agreement (`is_skyline`
/// matches membership in `skyline_stamps`).
///
/// # Panics
///
/// Panics with a description of the violated property.
pub fn assert_skyline_invariants<E: Inspect>(engine: &E, resident: &[(Stamp, Vec<f64>)]) {
    let skyline_stamps = engine.skyline_stamps();

    assert_eq!(
        skyline_stamps.len(),
        engine.skyline_size(),
        "skyline_stamps length disagrees with skyline_size"
    );

    for (stamp, row) in resident {
        let member = skyline_stamps.contains(stamp);
        assert_eq!(
            member,
            engine.is_skyline(*stamp),
            "is_skyline disagrees with skyline_stamps for stamp {stamp:?}"
        );

        if member {
            for (other_stamp, other_row) in resident {
                if other_stamp == stamp {
                    continue;
                }
                assert!(
                    !dominate(other_row, row),
                    "skyline member {stamp:?} ({row:?}) is dominated by resident {other_stamp:?} ({other_row:?})"
                );
            }
        } else {
            let dominator = resident
                .iter()
                .any(|(other_stamp, other_row)| other_stamp != stamp && dominate(other_row, row));
            assert!(
                dominator,
                "non-member {stamp:?} ({row:?}) has no dominator among resident tuples"
            );
        }
    }
}

/// Assert that every element in a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "predicate failed for element at index {i}: {item:?}"
        );
    }
}

/// Assert that at least one element in a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if no elements satisfy the predicate.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(&predicate),
        "no elements satisfied the predicate: {collection:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::count::CountEngine;

    #[test]
    fn invariants_hold_on_incomparable_quartet() {
        let mut e = CountEngine::new(2, 4, &Config::default());
        let rows = [[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]];
        let mut resident = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let outcome = e.ingest(row);
            resident.push((outcome.stamp, row.to_vec()));
            let _ = i;
        }
        assert_skyline_invariants(&e, &resident);
    }

    #[test]
    fn assert_all_passes_for_matching_predicate() {
        assert_all(&[2, 4, 6], |x| x % 2 == 0);
    }

    #[test]
    fn assert_any_passes_when_one_matches() {
        assert_any(&[1, 2, 3], |x| *x == 2);
    }
}
