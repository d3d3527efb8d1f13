//! Tuple storage: two window-mode-specific backends sharing the same
//! `(values, skyline flag)` contract.
//!
//! The two modes differ enough in eviction shape (deterministic ring
//! slot vs. a FIFO pool with possibly many evictions per arrival) that
//! one generic backend would blur both into something neither variant
//! actually is.

pub mod count;
pub mod time;
