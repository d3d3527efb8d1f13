//! The `lower`/`upper` dimension-selection heuristics: pick the dimension
//! where an incoming tuple sits closest to the low or high end of its
//! current value range, so the dominance scan on that side visits the
//! fewest candidates.

use crate::index::IndexSet;

/// How close `value` sits to the low end (`0.0`) or high end (`1.0`) of
/// the dimension's current value range.
fn estimate(value: f64, range: Option<(f64, f64)>) -> f64 {
    let Some((first, last)) = range else {
        return 0.0;
    };
    if first == last {
        return 1.0;
    }
    if value < first {
        return 0.0;
    }
    if value > last {
        return 1.0;
    }
    (value - first).abs() / (last - first).abs()
}

/// Pick the dimension where `values` sits closest to the low end of its
/// current range: scanning from that dimension's start visits the
/// fewest candidates before finding a dominating point.
pub fn lower_dimension(values: &[f64], indexes: &IndexSet) -> usize {
    let mut chosen = 0;
    let mut lower = 1.0;
    for d in 0..indexes.width() {
        let est = estimate(values[d], indexes.dim(d).value_range());
        if est == 0.0 {
            return d;
        }
        if est < lower {
            lower = est;
            chosen = d;
        }
    }
    chosen
}

/// Pick the dimension where `values` sits closest to the high end of its
/// current range.
pub fn upper_dimension(values: &[f64], indexes: &IndexSet) -> usize {
    let mut chosen = 0;
    let mut upper = 0.0;
    for d in 0..indexes.width() {
        let est = estimate(values[d], indexes.dim(d).value_range());
        if est == 1.0 {
            return d;
        }
        if est > upper {
            upper = est;
            chosen = d;
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, Stamp};

    fn indexes_from(rows: &[[f64; 2]]) -> IndexSet {
        let mut set = IndexSet::new(2);
        for (i, row) in rows.iter().enumerate() {
            set.insert_tuple(row, Stamp::from_count(i as u64));
        }
        set
    }

    #[test]
    fn empty_index_estimates_zero_everywhere() {
        let set = IndexSet::new(2);
        assert_eq!(lower_dimension(&[1.0, 1.0], &set), 0);
        assert_eq!(upper_dimension(&[1.0, 1.0], &set), 0);
    }

    #[test]
    fn lower_dimension_favors_value_near_minimum() {
        let set = indexes_from(&[[0.0, 10.0], [5.0, 20.0], [10.0, 0.0]]);
        // dim 0 ranges 0..10, dim 1 ranges 0..20. A value of 1 on dim 0
        // is near the minimum (est ~0.1); a value of 18 on dim 1 is near
        // the maximum (est = 0.9). lower() should pick dim 0.
        assert_eq!(lower_dimension(&[1.0, 18.0], &set), 0);
        assert_eq!(upper_dimension(&[1.0, 18.0], &set), 1);
    }

    #[test]
    fn degenerate_range_estimates_one() {
        let set = indexes_from(&[[5.0, 5.0], [5.0, 5.0]]);
        assert_eq!(estimate(5.0, set.dim(0).value_range()), 1.0);
    }

    fn estimate(value: f64, range: Option<(f64, f64)>) -> f64 {
        super::estimate(value, range)
    }
}
