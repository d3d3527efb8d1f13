//! Error handling for the CLI boundary.
//!
//! The engine itself never returns `Result` for recoverable conditions —
//! a missing cache entry during dominance-tree recovery or a short input
//! line are represented as `Option`/`bool` instead. `anyhow` is reserved
//! for the two genuinely fallible boundary operations: opening the input
//! stream and parsing CLI arguments.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Stdin};
use std::path::Path;

/// Either a file or standard input: the CLI accepts an optional
/// `STREAM` path argument and falls back to stdin when absent.
///
/// Both variants are buffered so `stream::read_tuple`'s `R: BufRead`
/// bound is satisfied without the caller wrapping this again.
pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            InputSource::File(f) => f.read(buf),
            InputSource::Stdin(s) => s.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            InputSource::File(f) => f.fill_buf(),
            InputSource::Stdin(s) => s.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(f) => f.consume(amt),
            InputSource::Stdin(s) => s.consume(amt),
        }
    }
}

/// Open `path`, or standard input when `path` is `None`. Fails fast with
/// context on an unreadable path.
pub fn open_input(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input stream {}", path.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        None => Ok(InputSource::Stdin(BufReader::new(std::io::stdin()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_an_error_with_context() {
        let err = open_input(Some(Path::new("/does/not/exist/stream.txt"))).unwrap_err();
        assert!(err.to_string().contains("opening input stream"));
    }

    #[test]
    fn none_path_opens_stdin() {
        assert!(open_input(None).is_ok());
    }
}
