//! Fluent construction of tuple streams for skyline tests.

/// A fluent builder for a stream of fixed-width tuples.
///
/// ```
/// use rss_skyline::testing::TupleStreamBuilder;
///
/// let stream = TupleStreamBuilder::new(2)
///     .push(&[1.0, 4.0])
///     .push(&[2.0, 3.0])
///     .repeat(&[0.0, 0.0], 3)
///     .build();
///
/// assert_eq!(stream.len(), 5);
/// ```
pub struct TupleStreamBuilder {
    width: usize,
    rows: Vec<Vec<f64>>,
}

impl TupleStreamBuilder {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if `row.len()` doesn't match the builder's configured width.
    #[must_use]
    pub fn push(mut self, row: &[f64]) -> Self {
        assert_eq!(row.len(), self.width, "tuple width mismatch");
        self.rows.push(row.to_vec());
        self
    }

    #[must_use]
    pub fn repeat(mut self, row: &[f64], count: usize) -> Self {
        for _ in 0..count {
            self = self.push(row);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

/// Deterministic pseudo-random tuple stream using a fixed-seed linear
/// congruential generator, so property tests are reproducible without
/// pulling in a `rand` dependency.
#[must_use]
pub fn pseudo_random_tuples(count: usize, width: usize, min: f64, max: f64) -> Vec<Vec<f64>> {
    let mut seed: u32 = 12_345;
    let span = max - min;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        min + span * (f64::from(seed / 65536) / 65536.0)
    };

    (0..count)
        .map(|_| (0..width).map(|_| next()).collect())
        .collect()
}
