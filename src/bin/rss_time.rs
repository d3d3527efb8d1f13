//! `rss-time`: time-window skyline maintenance over a tuple stream.
//!
//! Same positional shape as `rss-count`, but `WINDOW` is a
//! floating-point seconds span and the stamp source is wall-clock time
//! ([`rss_skyline::clock::SystemClock`]) rather than an arrival index.

use anyhow::Result;
use clap::Parser;
use rss_skyline::clock::SystemClock;
use rss_skyline::config::Config;
use rss_skyline::engine::time::TimeEngine;
use rss_skyline::error::open_input;
#[cfg(feature = "metrics")]
use rss_skyline::metrics::{Report, RuntimeHistogram};
use rss_skyline::output::{format_line, format_mean_line, write_line};
use rss_skyline::stream::read_tuple;
use rss_skyline::validation::{EngineArgs, Validate};
use std::path::PathBuf;
use std::time::Instant;

/// Maintain a time-windowed skyline over a stream of tuples.
#[derive(Parser, Debug)]
#[command(name = "rss-time", version, about = "Time-window skyline maintenance")]
struct Args {
    /// Number of dimensions per tuple.
    dimensionality: Option<String>,
    /// Window width in seconds.
    window: Option<String>,
    /// Input stream path; stdin when omitted.
    stream: Option<PathBuf>,

    /// Tuples to process once the window first fills, before the run stops.
    #[arg(long)]
    post_window_count: Option<usize>,
    /// Cache pool capacity.
    #[arg(long)]
    cache_capacity: Option<usize>,
    /// Stamp-lookup shard count.
    #[arg(long)]
    block: Option<usize>,
    /// Dominance-tree shard count.
    #[arg(long)]
    slice: Option<usize>,
    /// Input line buffer size in bytes.
    #[arg(long)]
    buffer: Option<usize>,
}

fn print_usage() {
    eprintln!("usage: rss-time DIMENSIONALITY WINDOW [STREAM]");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let (Some(dim_arg), Some(window_arg)) = (args.dimensionality.as_deref(), args.window.as_deref())
    else {
        print_usage();
        return Ok(());
    };

    let dimensionality: usize = dim_arg.parse().unwrap_or(0);
    let window: f64 = window_arg.parse().unwrap_or(0.0);

    let mut config = Config::default();
    if let Some(v) = args.post_window_count {
        config.post_window_count = v;
    }
    if let Some(v) = args.cache_capacity {
        config.cache_capacity = v;
    }
    if let Some(v) = args.block {
        config.block = v;
    }
    if let Some(v) = args.slice {
        config.slice = v;
    }
    if let Some(v) = args.buffer {
        config.buffer = v;
    }

    #[cfg(feature = "metrics")]
    let mut histogram = RuntimeHistogram::new();

    let mut total_seconds = 0.0;
    let mut count: u64 = 0;

    let engine_args = EngineArgs { dimensionality, window };

    if let Err(errors) = engine_args.validate() {
        for error in &errors {
            eprintln!("{error}");
        }
        tracing::warn!(dimensionality, window, "zero-sized run, skipping engine");
    } else {
        tracing::info!(dimensionality, window, "starting run");
        let mut input = open_input(args.stream.as_deref())?;
        let mut engine = TimeEngine::new(dimensionality, window, &config);
        let mut clock = SystemClock::new();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        while !engine.post_window_exhausted(&config) {
            let Some(values) = read_tuple(&mut input, dimensionality, config.buffer) else {
                break;
            };

            let start = Instant::now();
            let outcome = engine.ingest(&values, &mut clock);
            let runtime_seconds = start.elapsed().as_secs_f64();

            total_seconds += runtime_seconds;
            count += 1;
            #[cfg(feature = "metrics")]
            histogram.record(runtime_seconds);

            let stamp_display = format!("{}", outcome.stamp.get());
            write_line(&mut out, &format_line(&stamp_display, &outcome, runtime_seconds))?;
        }
    }

    let mean_seconds = if count > 0 { total_seconds / count as f64 } else { 0.0 };
    println!("{}", format_mean_line(mean_seconds));

    #[cfg(feature = "metrics")]
    Report::capture(&histogram).print();

    Ok(())
}
