//! Dominance-test counting and per-tuple runtime histograms, gated
//! behind the `metrics` feature.

use serde::Serialize;
use std::sync::atomic::AtomicU64;

/// Process-wide dominance-test counter, incremented by
/// [`crate::dominance::dominate`]. Kept as a single counter rather than
/// per-engine state since this diagnostic is never meant to distinguish
/// multiple concurrent engines — one engine runs per process.
pub static DOMINANCE_TESTS: AtomicU64 = AtomicU64::new(0);

/// Running p50/p95/p99 estimate of per-tuple processing time, built by
/// sorting every sample collected so far. Adequate for the run lengths
/// this engine targets (a bounded `POST_WINDOW_COUNT` tail); a streaming
/// quantile sketch would be overkill for a single-process diagnostic.
#[derive(Default)]
pub struct RuntimeHistogram {
    samples_seconds: Vec<f64>,
}

impl RuntimeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, seconds: f64) {
        self.samples_seconds.push(seconds);
    }

    pub fn stats(&self) -> HistogramStats {
        if self.samples_seconds.is_empty() {
            return HistogramStats::default();
        }
        let mut sorted = self.samples_seconds.clone();
        sorted.sort_by(f64::total_cmp);
        let at = |q: f64| -> f64 {
            let idx = ((sorted.len() - 1) as f64 * q).round() as usize;
            sorted[idx]
        };
        HistogramStats {
            count: sorted.len(),
            p50_seconds: at(0.50),
            p95_seconds: at(0.95),
            p99_seconds: at(0.99),
            mean_seconds: sorted.iter().sum::<f64>() / sorted.len() as f64,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct HistogramStats {
    pub count: usize,
    pub p50_seconds: f64,
    pub p95_seconds: f64,
    pub p99_seconds: f64,
    pub mean_seconds: f64,
}

/// End-of-run diagnostic summary, printed by the CLI binaries when the
/// `metrics` feature is enabled.
#[derive(Debug, Serialize)]
pub struct Report {
    pub dominance_tests: u64,
    pub runtime: HistogramStats,
}

impl Report {
    pub fn capture(histogram: &RuntimeHistogram) -> Self {
        Self {
            dominance_tests: DOMINANCE_TESTS.load(std::sync::atomic::Ordering::Relaxed),
            runtime: histogram.stats(),
        }
    }

    pub fn print(&self) {
        println!(
            "# dominance tests: {}, p50: {:.9}s, p95: {:.9}s, p99: {:.9}s, mean: {:.9}s",
            self.dominance_tests,
            self.runtime.p50_seconds,
            self.runtime.p95_seconds,
            self.runtime.p99_seconds,
            self.runtime.mean_seconds,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_reports_quantiles_over_samples() {
        let mut hist = RuntimeHistogram::new();
        for s in [0.001, 0.002, 0.003, 0.004, 0.100] {
            hist.record(s);
        }
        let stats = hist.stats();
        assert_eq!(stats.count, 5);
        assert!(stats.p99_seconds >= stats.p95_seconds);
        assert!(stats.p95_seconds >= stats.p50_seconds);
    }

    #[test]
    fn empty_histogram_reports_zeroed_stats() {
        let hist = RuntimeHistogram::new();
        assert_eq!(hist.stats().count, 0);
    }
}
