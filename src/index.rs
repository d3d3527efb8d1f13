//! Per-dimension ordered indexes.
//!
//! Each dimension gets its own ordered set of `(value, stamp)` entries
//! over every window-resident tuple, keyed by stable stamps rather than
//! raw tuple-header pointers so the index can be tested in isolation
//! from the cache it describes.

use crate::entry::{Entry, Stamp};
use std::collections::BTreeSet;
use std::ops::Bound;

/// A single dimension's ordered `(value, stamp)` set.
#[derive(Default)]
pub struct DimensionIndex {
    entries: BTreeSet<Entry>,
}

impl DimensionIndex {
    pub fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry);
    }

    pub fn remove(&mut self, entry: Entry) {
        self.entries.remove(&entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Smallest and largest value currently indexed, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(lo), Some(hi)) => Some((lo.value, hi.value)),
            _ => None,
        }
    }

    /// Forward iterator over every entry, ascending `(value, stamp)`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Iterator starting at the first entry whose value is `> value`
    /// (the original's `std::set::upper_bound`), ascending to the end.
    /// Used for the forward half of the upper-bound dominance scan.
    pub fn from_upper_bound(&self, value: f64) -> impl Iterator<Item = &Entry> {
        let sentinel = Entry::new(value, Stamp(f64::INFINITY));
        self.entries.range((Bound::Included(sentinel), Bound::Unbounded))
    }

    /// Every entry whose value equals `value` exactly, ascending by
    /// stamp (callers wanting the original's highest-stamp-first
    /// traversal call `.rev()`).
    ///
    /// The original walks this set via a reverse iterator seeded from
    /// `lower_bound` of an entry carrying the *incoming* tuple's stamp
    /// (always larger than anything already indexed); since existing
    /// same-value entries all sort before that sentinel, the reverse
    /// walk visits them from the highest stamp down, then stops at the
    /// first entry with a smaller value. Pinning both ends of the range
    /// to `value` gets the same set directly.
    pub fn equal_value(&self, value: f64) -> impl DoubleEndedIterator<Item = &Entry> {
        let lo = Entry::new(value, Stamp(f64::NEG_INFINITY));
        let hi = Entry::new(value, Stamp(f64::INFINITY));
        self.entries.range(lo..=hi)
    }
}

/// The `d` per-dimension indexes for a single engine instance.
pub struct IndexSet {
    dims: Vec<DimensionIndex>,
}

impl IndexSet {
    pub fn new(width: usize) -> Self {
        Self {
            dims: (0..width).map(|_| DimensionIndex::new()).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.dims.len()
    }

    pub fn dim(&self, d: usize) -> &DimensionIndex {
        &self.dims[d]
    }

    /// Insert one entry per dimension for a freshly arrived tuple.
    pub fn insert_tuple(&mut self, values: &[f64], stamp: Stamp) {
        for (d, index) in self.dims.iter_mut().enumerate() {
            index.insert(Entry::new(values[d], stamp));
        }
    }

    /// Remove one entry per dimension for an expiring tuple.
    pub fn remove_tuple(&mut self, values: &[f64], stamp: Stamp) {
        for (d, index) in self.dims.iter_mut().enumerate() {
            index.remove(Entry::new(values[d], stamp));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u64) -> Stamp {
        Stamp::from_count(n)
    }

    #[test]
    fn upper_bound_excludes_equal_values() {
        let mut idx = DimensionIndex::new();
        idx.insert(Entry::new(2.0, s(0)));
        idx.insert(Entry::new(2.0, s(1)));
        idx.insert(Entry::new(3.0, s(2)));
        let vals: Vec<_> = idx.from_upper_bound(2.0).map(|e| e.stamp.get()).collect();
        assert_eq!(vals, vec![2.0]);
    }

    #[test]
    fn equal_value_is_descending_by_stamp() {
        let mut idx = DimensionIndex::new();
        idx.insert(Entry::new(1.0, s(0)));
        idx.insert(Entry::new(2.0, s(1)));
        idx.insert(Entry::new(2.0, s(2)));
        let vals: Vec<_> = idx.equal_value(2.0).rev().map(|e| e.stamp.get()).collect();
        assert_eq!(vals, vec![2.0, 1.0]);
    }

    #[test]
    fn insert_and_remove_tuple_keeps_indexes_consistent() {
        let mut set = IndexSet::new(2);
        set.insert_tuple(&[1.0, 2.0], s(0));
        assert_eq!(set.dim(0).len(), 1);
        assert_eq!(set.dim(1).len(), 1);
        set.remove_tuple(&[1.0, 2.0], s(0));
        assert!(set.dim(0).is_empty());
        assert!(set.dim(1).is_empty());
    }
}
