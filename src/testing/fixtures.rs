//! Named streams covering a handful of canonical skyline scenarios, each
//! `(dimensionality, window, stream)`.

/// A. Monotone improving stream: each arrival dominates everything
/// before it, so the skyline ends as the singleton last tuple.
#[must_use]
pub fn monotone_improving() -> (usize, usize, Vec<Vec<f64>>) {
    (
        2,
        4,
        vec![vec![3.0, 3.0], vec![2.0, 2.0], vec![1.0, 1.0], vec![0.0, 0.0]],
    )
}

/// B. Incomparable quartet: four mutually non-dominating tuples, all
/// survive in the skyline.
#[must_use]
pub fn incomparable_quartet() -> (usize, usize, Vec<Vec<f64>>) {
    (
        2,
        4,
        vec![vec![1.0, 4.0], vec![2.0, 3.0], vec![3.0, 2.0], vec![4.0, 1.0]],
    )
}

/// C. Expiration recovery (W=3): the fourth arrival expires the first
/// tuple and is itself dominated by the third, leaving a skyline of 2.
#[must_use]
pub fn expiration_recovery() -> (usize, usize, Vec<Vec<f64>>) {
    (
        2,
        3,
        vec![vec![0.0, 5.0], vec![5.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]],
    )
}

/// D. Equal-value reverse domination: the second tuple shares dimension
/// 0's value with the first and strictly dominates it, demoting it.
#[must_use]
pub fn equal_value_reverse_domination() -> (usize, usize, Vec<Vec<f64>>) {
    (2, 4, vec![vec![2.0, 2.0], vec![2.0, 1.0]])
}

/// E. Expired-skyline rescue (W=2): the third arrival expires the
/// first, leaving a two-member skyline.
#[must_use]
pub fn expired_skyline_rescue() -> (usize, usize, Vec<Vec<f64>>) {
    (2, 2, vec![vec![1.0, 3.0], vec![3.0, 1.0], vec![2.0, 2.0]])
}

/// F. Post-warm-up counting (W=3): six arrivals, used together with
/// `POST_WINDOW_COUNT = 2` to check the run stops after processing
/// indices 3 and 4.
#[must_use]
pub fn post_warmup_counting() -> (usize, usize, Vec<Vec<f64>>) {
    (
        1,
        3,
        vec![
            vec![1.0],
            vec![2.0],
            vec![3.0],
            vec![4.0],
            vec![5.0],
            vec![6.0],
        ],
    )
}
