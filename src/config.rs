//! Tunable knobs, exposed as a runtime `Config` so both `rss-count` and
//! `rss-time` can override them from the command line instead of
//! requiring a recompile.

/// Tunables governing cache capacity, sharding, and run length.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of tuples to process after the window first fills before
    /// the run stops. Default 2000.
    pub post_window_count: usize,
    /// Time-mode cache pool capacity. Default 1_000_000.
    pub cache_capacity: usize,
    /// Time-mode stamp-lookup shard count. Default 16.
    pub block: usize,
    /// Dominance-tree shard count. Default 32.
    pub slice: usize,
    /// Input line buffer size in bytes. Default 4096.
    pub buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            post_window_count: 2000,
            cache_capacity: 1_000_000,
            block: 16,
            slice: 32,
            buffer: 4096,
        }
    }
}
