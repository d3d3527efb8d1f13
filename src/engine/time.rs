//! Time-window update driver: expiration and insertion for the
//! last-W-seconds window mode.
//!
//! The structure mirrors `engine::count` closely; it differs in that
//! expiration is a variable-length FIFO batch rather than one
//! deterministic stamp, and the "warm-up" prefix is a one-way latch
//! (`display`) tripped once the stream has spanned a full window,
//! rather than a simple stamp/window comparison.

use crate::bound::{lower_dimension, upper_dimension};
use crate::cache::time::PoolCache;
use crate::clock::Clock;
use crate::config::Config;
use crate::dominance::dominate;
use crate::engine::Outcome;
use crate::entry::Stamp;
use crate::index::IndexSet;
use crate::tree::DominanceTree;
use std::collections::HashSet;

pub struct TimeEngine {
    width: usize,
    window: f64,
    indexes: IndexSet,
    tree: DominanceTree,
    cache: PoolCache,
    start: Option<Stamp>,
    display: bool,
    post_window_count: usize,
}

impl TimeEngine {
    pub fn new(width: usize, window: f64, config: &Config) -> Self {
        Self {
            width,
            window,
            indexes: IndexSet::new(width),
            tree: DominanceTree::new(config.slice),
            cache: PoolCache::new(width, window, config.cache_capacity, config.block),
            start: None,
            display: false,
            post_window_count: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn post_window_exhausted(&self, config: &Config) -> bool {
        self.post_window_count >= config.post_window_count
    }

    /// Process one arriving tuple, stamped with `clock`'s current time.
    pub fn ingest(&mut self, values: &[f64], clock: &mut dyn Clock) -> Outcome {
        debug_assert_eq!(values.len(), self.width);
        let stamp = Stamp::from_seconds(clock.now_seconds());

        if self.start.is_none() {
            self.cache.put(values, stamp);
            self.indexes.insert_tuple(values, stamp);
            self.tree.add(stamp);
            self.start = Some(stamp);
            return Outcome {
                stamp,
                dominated: false,
                skyline_size: self.tree.size(),
                post_window_count: 0,
                warmup: true,
            };
        }

        self.cache.put(values, stamp);
        if !self.display && stamp.get() - self.start.unwrap().get() > self.window {
            self.display = true;
            self.post_window_count = 0;
        }

        let expired = self.cache.expired(stamp);
        if !expired.is_empty() {
            for remove_stamp in expired {
                self.expire_one(remove_stamp);
            }
            self.cache.clean(stamp);
        }

        let dominated = self.insert(values, stamp);
        self.indexes.insert_tuple(values, stamp);

        if self.display {
            self.post_window_count += 1;
        }

        Outcome {
            stamp,
            dominated,
            skyline_size: self.tree.size(),
            post_window_count: self.post_window_count,
            warmup: !self.display,
        }
    }

    fn expire_one(&mut self, remove_stamp: Stamp) {
        let Some(removed_values) = self.cache.get(remove_stamp).map(|v| v.to_vec()) else {
            return;
        };
        self.indexes.remove_tuple(&removed_values, remove_stamp);

        if self.tree.contains(remove_stamp) {
            let tail: Vec<Stamp> = self
                .tree
                .get(remove_stamp)
                .iter()
                .map(|t| t.stamp)
                .filter(|&s| self.cache.contains(s) && s >= remove_stamp)
                .collect();

            let mut deal: HashSet<Stamp> = HashSet::new();
            for update_stamp in tail {
                deal.insert(update_stamp);
                let update_values = match self.cache.get(update_stamp) {
                    Some(v) => v.to_vec(),
                    None => continue,
                };

                let dim = lower_dimension(&update_values, &self.indexes);
                let bound = update_values[dim];
                let found = self.scan_for_dominator(dim, bound, Some(remove_stamp), &update_values);

                if let Some(dominator) = found {
                    self.tree.append(dominator, update_stamp);
                } else {
                    self.tree.add(update_stamp);
                }

                for &other in deal.iter() {
                    if other != update_stamp && self.tree.contains(other) {
                        let other_values = match self.cache.get(other) {
                            Some(v) => v.to_vec(),
                            None => continue,
                        };
                        if dominate(&update_values, &other_values) {
                            self.tree.move_tail(other, update_stamp);
                        }
                    }
                }
            }
            self.tree.remove(remove_stamp);
        }
    }

    fn insert(&mut self, t: &[f64], s: Stamp) -> bool {
        let lower_dim = lower_dimension(t, &self.indexes);
        let lower_bound_value = t[lower_dim];

        let mut dominated = false;
        let candidates: Vec<(Stamp, f64)> = self
            .indexes
            .dim(lower_dim)
            .iter()
            .filter(|e| e.stamp < s)
            .take_while(|e| e.value <= lower_bound_value)
            .map(|e| (e.stamp, e.value))
            .collect();

        for (stamp, value) in candidates {
            if !self.tree.contains(stamp) {
                continue;
            }
            let candidate_values = match self.cache.get(stamp) {
                Some(v) => v.to_vec(),
                None => continue,
            };
            if dominate(&candidate_values, t) {
                dominated = true;
                self.tree.append(stamp, s);
                break;
            }
            if value == lower_bound_value && dominate(t, &candidate_values) {
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
                .filter(|e| e.stamp < s)
                .map(|e| e.stamp)
                .collect();
            for stamp in repeats {
                if !self.tree.contains(stamp) {
                    continue;
                }
                let values = match self.cache.get(stamp) {
                    Some(v) => v.to_vec(),
                    None => continue,
                };
                if dominate(t, &values) {
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
                let values = match self.cache.get(stamp) {
                    Some(v) => v.to_vec(),
                    None => continue,
                };
                if dominate(t, &values) {
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
    use crate::testing::ManualClock;

    fn engine(width: usize, window: f64) -> TimeEngine {
        TimeEngine::new(width, window, &Config::default())
    }

    #[test]
    fn scenario_a_monotone_improving_stream_ends_with_singleton_skyline() {
        let mut e = engine(2, 4.0);
        let mut clock = ManualClock::new();
        for row in [[3.0, 3.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]] {
            e.ingest(&row, &mut clock);
            clock.advance(1.0);
        }
        assert_eq!(e.skyline_size(), 1);
    }

    #[test]
    fn scenario_b_incomparable_stream_keeps_all_four() {
        let mut e = engine(2, 4.0);
        let mut clock = ManualClock::new();
        for row in [[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]] {
            e.ingest(&row, &mut clock);
            clock.advance(1.0);
        }
        assert_eq!(e.skyline_size(), 4);
    }

    #[test]
    fn expiration_recovers_skyline_membership() {
        let mut e = engine(2, 3.0);
        let mut clock = ManualClock::new();
        e.ingest(&[0.0, 5.0], &mut clock); // t=0
        clock.advance(1.0);
        e.ingest(&[5.0, 0.0], &mut clock); // t=1
        clock.advance(1.0);
        e.ingest(&[1.0, 1.0], &mut clock); // t=2
        clock.advance(2.0);
        e.ingest(&[2.0, 2.0], &mut clock); // t=4, evicts t=0 (4-0=4>3)
        assert_eq!(e.skyline_size(), 2);
    }
}
