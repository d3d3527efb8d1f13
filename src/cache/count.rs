//! Count-window tuple cache: a flat ring buffer. One `f64` array of
//! `width * window`, one `bool` skyline flag per slot, both indexed by
//! `stamp % window`.

use crate::entry::Stamp;

pub struct RingCache {
    width: usize,
    window: usize,
    values: Vec<f64>,
    occupant: Vec<Option<Stamp>>,
    skyline: Vec<bool>,
}

impl RingCache {
    pub fn new(width: usize, window: usize) -> Self {
        Self {
            width,
            window,
            values: vec![0.0; width * window],
            occupant: vec![None; window],
            skyline: vec![false; window],
        }
    }

    fn slot(&self, stamp: Stamp) -> usize {
        (stamp.get() as u64 % self.window as u64) as usize
    }

    /// Overwrite the slot `stamp` maps to with `values`, recording
    /// `stamp` as that slot's current occupant.
    pub fn put(&mut self, values: &[f64], stamp: Stamp, skyline: bool) {
        let slot = self.slot(stamp);
        let base = slot * self.width;
        self.values[base..base + self.width].copy_from_slice(values);
        self.occupant[slot] = Some(stamp);
        self.skyline[slot] = skyline;
    }

    /// The tuple stored under `stamp`, or `None` if that stamp's slot
    /// currently holds a different (later) occupant.
    pub fn get(&self, stamp: Stamp) -> Option<&[f64]> {
        let slot = self.slot(stamp);
        if self.occupant[slot] != Some(stamp) {
            return None;
        }
        let base = slot * self.width;
        Some(&self.values[base..base + self.width])
    }

    pub fn is_skyline(&self, stamp: Stamp) -> bool {
        let slot = self.slot(stamp);
        self.occupant[slot] == Some(stamp) && self.skyline[slot]
    }

    pub fn set_skyline(&mut self, stamp: Stamp, flag: bool) {
        let slot = self.slot(stamp);
        if self.occupant[slot] == Some(stamp) {
            self.skyline[slot] = flag;
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
    fn put_then_get_round_trips() {
        let mut cache = RingCache::new(2, 4);
        cache.put(&[1.0, 2.0], s(0), true);
        assert_eq!(cache.get(s(0)), Some(&[1.0, 2.0][..]));
        assert!(cache.is_skyline(s(0)));
    }

    #[test]
    fn wraparound_overwrites_and_invalidates_old_stamp() {
        let mut cache = RingCache::new(1, 2);
        cache.put(&[10.0], s(0), false);
        cache.put(&[20.0], s(1), false);
        cache.put(&[30.0], s(2), true);
        assert_eq!(cache.get(s(0)), None);
        assert_eq!(cache.get(s(2)), Some(&[30.0][..]));
        assert!(cache.is_skyline(s(2)));
    }

    #[test]
    fn set_skyline_is_noop_for_stale_stamp() {
        let mut cache = RingCache::new(1, 2);
        cache.put(&[10.0], s(0), false);
        cache.put(&[20.0], s(2), false);
        cache.set_skyline(s(0), true);
        assert!(!cache.is_skyline(s(2)));
    }
}
