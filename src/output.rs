//! Per-tuple status line formatting. `std::io::Write` only — no crate
//! dependency needed for plain line output.

use crate::engine::Outcome;
use std::io::{self, Write};

/// `[# ]<stamp> <+|-> <runtime_seconds> <skyline_size> <count>`.
///
/// `stamp_display` is caller-formatted since the two window modes print
/// their stamp differently: count mode as a bare arrival index, time
/// mode as a wall-clock offset in seconds.
pub fn format_line(stamp_display: &str, outcome: &Outcome, runtime_seconds: f64) -> String {
    let sign = if outcome.dominated { '-' } else { '+' };
    let body = format!(
        "{stamp_display} {sign} {runtime_seconds} {} {}",
        outcome.skyline_size, outcome.post_window_count
    );
    if outcome.warmup {
        format!("# {body}")
    } else {
        body
    }
}

/// The end-of-run summary line.
pub fn format_mean_line(mean_seconds: f64) -> String {
    format!("# Mean processing time: {mean_seconds} sec/tuple")
}

/// Write `line` to `out` followed by a newline, propagating I/O errors.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Stamp;

    fn outcome(dominated: bool, warmup: bool) -> Outcome {
        Outcome {
            stamp: Stamp::from_count(3),
            dominated,
            skyline_size: 2,
            post_window_count: 1,
            warmup,
        }
    }

    #[test]
    fn added_tuple_gets_plus_sign() {
        let line = format_line("3", &outcome(false, false), 0.000123);
        assert_eq!(line, "3 + 0.000123 2 1");
    }

    #[test]
    fn dominated_tuple_gets_minus_sign() {
        let line = format_line("3", &outcome(true, false), 0.000123);
        assert_eq!(line, "3 - 0.000123 2 1");
    }

    #[test]
    fn warmup_tuple_gets_hash_prefix() {
        let line = format_line("3", &outcome(false, true), 0.000123);
        assert_eq!(line, "# 3 + 0.000123 2 1");
    }

    #[test]
    fn mean_line_has_expected_shape() {
        assert_eq!(
            format_mean_line(0.000042),
            "# Mean processing time: 0.000042 sec/tuple"
        );
    }
}
