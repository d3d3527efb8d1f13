//! The dominance tree: a sharded map from skyline stamp to the stamps it
//! dominates.

use crate::entry::Stamp;
use std::collections::HashMap;

/// A tail entry: a stamp dominated by some skyline tuple, plus the
/// stamp it was attached under at the time — needed because a tail
/// entry can outlive the skyline tuple it was first attached to, via
/// [`DominanceTree::move_tail`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailEntry {
    pub stamp: Stamp,
    pub attached_at: Stamp,
}

/// Sharded dominance tree. Shard count mirrors the original's `SLICE`
/// compile-time constant, now a runtime parameter so both window modes
/// can share one `Config`.
pub struct DominanceTree {
    shards: Vec<HashMap<u64, Vec<TailEntry>>>,
    slice: usize,
    count: usize,
}

impl DominanceTree {
    pub fn new(slice: usize) -> Self {
        Self {
            shards: (0..slice).map(|_| HashMap::new()).collect(),
            slice,
            count: 0,
        }
    }

    fn shard(&self, stamp: Stamp) -> usize {
        (stamp.get() as i64).rem_euclid(self.slice as i64) as usize
    }

    fn key(stamp: Stamp) -> u64 {
        stamp.get().to_bits()
    }

    /// Register `stamp` as a skyline point with an empty tail, unless
    /// it is already present.
    pub fn add(&mut self, stamp: Stamp) {
        let shard = self.shard(stamp);
        let key = Self::key(stamp);
        if self.shards[shard].contains_key(&key) {
            return;
        }
        self.shards[shard].insert(key, Vec::new());
        self.count += 1;
    }

    /// Attach `dominated` to the tail of skyline point `stamp`, creating
    /// `stamp`'s entry if it isn't already a skyline point.
    pub fn append(&mut self, stamp: Stamp, dominated: Stamp) {
        let shard = self.shard(stamp);
        let key = Self::key(stamp);
        self.shards[shard]
            .entry(key)
            .or_insert_with(Vec::new)
            .push(TailEntry {
                stamp: dominated,
                attached_at: stamp,
            });
    }

    /// `true` iff `stamp` is currently a skyline point.
    pub fn contains(&self, stamp: Stamp) -> bool {
        let shard = self.shard(stamp);
        self.shards[shard].contains_key(&Self::key(stamp))
    }

    /// The tail of `stamp` (the stamps it dominates), empty if `stamp`
    /// is not a skyline point or has no tail.
    pub fn get(&self, stamp: Stamp) -> &[TailEntry] {
        let shard = self.shard(stamp);
        self.shards[shard]
            .get(&Self::key(stamp))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Demote skyline point `from` to a tail entry of skyline point
    /// `to`: `from`'s own tail is appended to `to`'s tail ahead of
    /// `from` itself, and `from`'s entry is removed. No-op if `from` is
    /// absent. `to` is created with an empty tail if it isn't already a
    /// skyline point (mirroring `append`'s auto-vivify) — the update
    /// driver may demote an old entry into a brand new arrival's tail
    /// before that arrival has itself been registered via `add`.
    pub fn move_tail(&mut self, from: Stamp, to: Stamp) {
        let from_shard = self.shard(from);
        let from_key = Self::key(from);
        if !self.shards[from_shard].contains_key(&from_key) {
            return;
        }
        let mut tail = self.shards[from_shard].remove(&from_key).unwrap();
        self.count -= 1;
        let mut moved = vec![TailEntry {
            stamp: from,
            attached_at: to,
        }];
        moved.append(&mut tail);

        let to_shard = self.shard(to);
        let to_key = Self::key(to);
        if !self.shards[to_shard].contains_key(&to_key) {
            self.shards[to_shard].insert(to_key, Vec::new());
            self.count += 1;
        }
        self.shards[to_shard].get_mut(&to_key).unwrap().append(&mut moved);
    }

    /// Remove `stamp`'s skyline entry entirely (its tail goes with it;
    /// callers must have already redistributed any tail entries that
    /// still need a home).
    pub fn remove(&mut self, stamp: Stamp) {
        let shard = self.shard(stamp);
        if self.shards[shard].remove(&Self::key(stamp)).is_some() {
            self.count -= 1;
        }
    }

    /// Number of current skyline points.
    pub fn size(&self) -> usize {
        self.count
    }

    /// All current skyline stamps, in no particular order.
    pub fn skyline_stamps(&self) -> impl Iterator<Item = Stamp> + '_ {
        self.shards
            .iter()
            .flat_map(|shard| shard.keys())
            .map(|bits| Stamp(f64::from_bits(*bits)))
    }
}
