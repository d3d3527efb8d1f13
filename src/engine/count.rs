//! Count-window update driver: expiration and insertion for the
//! last-W-arrivals window mode.

use crate::bound::{lower_dimension, upper_dimension};
use crate::cache::count::RingCache;
use crate::config::Config;
use crate::dominance::dominate;
use crate::engine::Outcome;
use crate::entry::Stamp;
use crate::index::IndexSet;
use crate::tree::DominanceTree;
use std::collections::HashSet;

pub struct CountEngine {
    width: usize,
    window: usize,
    indexes: IndexSet,
    tree: DominanceTree,
    cache: RingCache,
    next: u64,
    post_window_count: usize,
}

impl CountEngine {
    pub fn new(width: usize, window: usize, config: &Config) -> Self {
        Self {
            width,
            window,
            indexes: IndexSet::new(width),
            tree: DominanceTree::new(config.slice),
            cache: RingCache::new(width, window.max(1)),
            next: 0,
            post_window_count: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` once the configured post-warm-up tuple budget has been
    /// spent; callers stop pulling from the stream when this is set.
    pub fn post_window_exhausted(&self, config: &Config) -> bool {
        self.post_window_count >= config.post_window_count
    }

    /// Process one arriving tuple and report what happened to it.
    pub fn ingest(&mut self, values: &[f64]) -> Outcome {
        debug_assert_eq!(values.len(), self.width);
        let stamp = Stamp::from_count(self.next);

        if self.next == 0 {
            self.indexes.insert_tuple(values, stamp);
            self.cache.put(values, stamp, true);
            self.tree.add(stamp);
            self.next = 1;
            return Outcome {
                stamp,
                dominated: false,
                skyline_size: self.tree.size(),
                post_window_count: 0,
                warmup: true,
            };
        }

        if self.next as usize >= self.window {
            self.post_window_count += 1;
            let remove_stamp = Stamp::from_count(self.next - self.window as u64);
            self.expire(remove_stamp);
        }

        let warmup = stamp.get() < self.window as f64;

        let dominated = self.insert(values, stamp);
        self.indexes.insert_tuple(values, stamp);
        self.cache.put(values, stamp, !dominated);
        self.next += 1;

        Outcome {
            stamp,
            dominated,
            skyline_size: self.tree.size(),
            post_window_count: self.post_window_count,
            warmup,
        }
    }

    /// Step A: retire `remove_stamp` and recover any tuples that were
    /// dominated only by it.
    fn expire(&mut self, remove_stamp: Stamp) {
        let removed_values = self
            .cache
            .get(remove_stamp)
            .expect("expiring stamp missing from cache")
            .to_vec();

        if self.tree.contains(remove_stamp) {
            let tail: Vec<Stamp> = self
                .tree
                .get(remove_stamp)
                .iter()
                .map(|t| t.stamp)
                .filter(|&s| s >= remove_stamp)
                .collect();

            let mut deal: HashSet<Stamp> = HashSet::new();
            for update_stamp in tail {
                deal.insert(update_stamp);
                let update_values = self
                    .cache
                    .get(update_stamp)
                    .expect("tail stamp missing from cache")
                    .to_vec();

                let dim = lower_dimension(&update_values, &self.indexes);
                let bound = update_values[dim];
                let found = self.scan_for_dominator(dim, bound, Some(remove_stamp), &update_values);

                if let Some(dominator) = found {
                    self.tree.append(dominator, update_stamp);
                } else {
                    self.cache.set_skyline(update_stamp, true);
                    self.tree.add(update_stamp);
                }

                // Local BNL: tail entries aren't collected in dimension
                // order, so members of `deal` may dominate each other.
                for &other in deal.iter() {
                    if other != update_stamp && self.tree.contains(other) {
                        let other_values = self
                            .cache
                            .get(other)
                            .expect("deal stamp missing from cache")
                            .to_vec();
                        if dominate(&update_values, &other_values) {
                            self.cache.set_skyline(other, false);
                            self.tree.move_tail(other, update_stamp);
                        }
                    }
                }
            }
            self.cache.set_skyline(remove_stamp, false);
            self.tree.remove(remove_stamp);
        }

        self.indexes.remove_tuple(&removed_values, remove_stamp);
    }

    /// Step B: insert `t` (stamp `s`), return whether it was dominated.
    fn insert(&mut self, t: &[f64], s: Stamp) -> bool {
        let lower_dim = lower_dimension(t, &self.indexes);
        let lower_bound_value = t[lower_dim];

        let mut dominated = false;
        let candidates: Vec<(Stamp, f64)> = self
            .indexes
            .dim(lower_dim)
            .iter()
            .take_while(|e| e.value <= lower_bound_value)
            .map(|e| (e.stamp, e.value))
            .collect();

        for (stamp, value) in candidates {
            if !self.tree.contains(stamp) {
                continue;
            }
            let candidate_values = self
                .cache
                .get(stamp)
                .expect("index stamp missing from cache")
                .to_vec();
            if dominate(&candidate_values, t) {
                dominated = true;
                self.tree.append(stamp, s);
                break;
            }
            if value == lower_bound_value && dominate(t, &candidate_values) {
                self.cache.set_skyline(stamp, false);
                self.tree.move_tail(stamp, s);
            }
        }

        if !dominated {
            self.tree.add(s);

            let upper_dim = upper_dimension(t, &self.indexes);
            let upper_bound_value = t[upper_dim];

            let repeats: Vec<Stamp> = self
                .indexes
                .dim(upper_dim)
                .equal_value(upper_bound_value)
                .rev()
                .map(|e| e.stamp)
                .collect();
            for stamp in repeats {
                if !self.tree.contains(stamp) {
                    continue;
                }
                let values = self.cache.get(stamp).expect("repeat stamp missing").to_vec();
                if dominate(t, &values) {
                    self.cache.set_skyline(stamp, false);
                    self.tree.move_tail(stamp, s);
                }
            }

            let uppers: Vec<Stamp> = self
                .indexes
                .dim(upper_dim)
                .from_upper_bound(upper_bound_value)
                .map(|e| e.stamp)
                .collect();
            for stamp in uppers {
                if !self.tree.contains(stamp) {
                    continue;
                }
                let values = self.cache.get(stamp).expect("upper stamp missing").to_vec();
                if dominate(t, &values) {
                    self.cache.set_skyline(stamp, false);
                    self.tree.move_tail(stamp, s);
                }
            }
        }

        dominated
    }

    fn scan_for_dominator(
        &self,
        dim: usize,
        bound: f64,
        exclude: Option<Stamp>,
        target: &[f64],
    ) -> Option<Stamp> {
        for entry in self.indexes.dim(dim).iter() {
            if entry.value > bound {
                break;
            }
            if Some(entry.stamp) == exclude || !self.tree.contains(entry.stamp) {
                continue;
            }
            let candidate = self.cache.get(entry.stamp)?;
            if dominate(candidate, target) {
                return Some(entry.stamp);
            }
        }
        None
    }

    pub fn skyline_size(&self) -> usize {
        self.tree.size()
    }

    pub fn is_skyline(&self, stamp: Stamp) -> bool {
        self.tree.contains(stamp)
    }

    pub fn get(&self, stamp: Stamp) -> Option<&[f64]> {
        self.cache.get(stamp)
    }

    pub fn skyline_stamps(&self) -> Vec<Stamp> {
        self.tree.skyline_stamps().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(width: usize, window: usize) -> CountEngine {
        CountEngine::new(width, window, &Config::default())
    }

    fn run(engine: &mut CountEngine, rows: &[[f64; 2]]) -> Vec<Outcome> {
        rows.iter().map(|r| engine.ingest(r)).collect()
    }

    #[test]
    fn scenario_a_monotone_improving_stream_ends_with_singleton_skyline() {
        let mut e = engine(2, 4);
        run(&mut e, &[[3.0, 3.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]]);
        assert_eq!(e.skyline_size(), 1);
        assert!(e.is_skyline(Stamp::from_count(3)));
    }

    #[test]
    fn scenario_b_incomparable_stream_keeps_all_four() {
        let mut e = engine(2, 4);
        run(&mut e, &[[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]]);
        assert_eq!(e.skyline_size(), 4);
    }

    #[test]
    fn scenario_c_expiration_recovery() {
        let mut e = engine(2, 3);
        run(&mut e, &[[0.0, 5.0], [5.0, 0.0], [1.0, 1.0]]);
        assert_eq!(e.skyline_size(), 3);
        e.ingest(&[2.0, 2.0]);
        assert_eq!(e.skyline_size(), 2);
        assert!(e.is_skyline(Stamp::from_count(1)));
        assert!(e.is_skyline(Stamp::from_count(2)));
        assert!(!e.is_skyline(Stamp::from_count(3)));
    }

    #[test]
    fn scenario_d_equal_value_reverse_domination() {
        let mut e = engine(2, 4);
        e.ingest(&[2.0, 2.0]);
        e.ingest(&[2.0, 1.0]);
        assert_eq!(e.skyline_size(), 1);
        assert!(e.is_skyline(Stamp::from_count(1)));
        assert!(!e.is_skyline(Stamp::from_count(0)));
    }

    #[test]
    fn scenario_e_expired_skyline_rescue() {
        let mut e = engine(2, 2);
        e.ingest(&[1.0, 3.0]);
        e.ingest(&[3.0, 1.0]);
        e.ingest(&[2.0, 2.0]);
        assert_eq!(e.skyline_size(), 2);
        assert!(e.is_skyline(Stamp::from_count(1)));
        assert!(e.is_skyline(Stamp::from_count(2)));
    }

    #[test]
    fn scenario_f_post_warmup_budget_stops_the_run() {
        let config = Config {
            post_window_count: 2,
            ..Config::default()
        };
        let mut e = CountEngine::new(1, 3, &config);
        let stream: [[f64; 1]; 6] = [[1.0], [2.0], [3.0], [4.0], [5.0], [6.0]];
        let mut processed = 0;
        for row in stream.iter() {
            if e.post_window_exhausted(&config) {
                break;
            }
            let outcome = e.ingest(row);
            // Indices 0, 1, 2 are warm-up (stamp < window); indices 3
            // and 4 are the counted post-warm-up tuples.
            assert_eq!(outcome.warmup, processed < 3, "stamp {processed} warmup flag");
            processed += 1;
        }
        assert_eq!(processed, 5);
        assert_eq!(e.post_window_count, 2);
    }

    #[test]
    fn duplicate_values_are_not_mutually_dominant() {
        let mut e = engine(2, 4);
        e.ingest(&[1.0, 1.0]);
        e.ingest(&[1.0, 1.0]);
        assert_eq!(e.skyline_size(), 2);
    }

    /// Regression: the lower-bound scan's equal-value demote can fire
    /// for an arrival that hasn't been added to the tree yet (`tree.add`
    /// only runs once the whole scan reports the arrival undominated).
    /// The demoted entry's tail must still land under the new arrival.
    #[test]
    fn lower_dimension_tie_demote_attaches_to_not_yet_registered_arrival() {
        let mut e = engine(2, 8);
        e.ingest(&[100.0, 1.0]); // stamp 0, spreads dim0's range wide
        e.ingest(&[5.0, 3.0]); // stamp 1, the tie partner on dim0's low end
        // stamp 2: ties stamp 1 on dim0 (est(dim0) == 0, chosen as
        // lower_dim immediately) and dominates it via dim1 (2 < 3).
        e.ingest(&[5.0, 2.0]);
        assert!(!e.is_skyline(Stamp::from_count(1)));
        assert!(e.is_skyline(Stamp::from_count(2)));
        let tail: Vec<_> = e.tree.get(Stamp::from_count(2)).iter().map(|t| t.stamp).collect();
        assert!(tail.iter().any(|s| *s == Stamp::from_count(1)));
    }
}
