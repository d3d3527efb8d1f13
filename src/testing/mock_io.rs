//! In-memory stand-ins for the CLI binaries' stdin/stdout, replacing
//! actual files with `Cursor<Vec<u8>>` buffers.

use std::io::Cursor;

/// An in-memory readable stream, for feeding [`crate::stream::read_tuple`]
/// a fixture without touching the filesystem.
#[must_use]
pub fn mock_input(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

/// An in-memory writable sink, for capturing what
/// [`crate::output::write_line`] would print.
#[must_use]
pub fn mock_output() -> Cursor<Vec<u8>> {
    Cursor::new(Vec::new())
}

/// Decode a [`mock_output`] sink's contents into newline-separated lines.
#[must_use]
pub fn captured_lines(sink: &Cursor<Vec<u8>>) -> Vec<String> {
    String::from_utf8_lossy(sink.get_ref())
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::read_tuple;

    #[test]
    fn mock_input_round_trips_through_read_tuple() {
        let mut input = mock_input(&["1.0,2.0", "3.0,4.0"]);
        assert_eq!(read_tuple(&mut input, 2, 4096), Some(vec![1.0, 2.0]));
        assert_eq!(read_tuple(&mut input, 2, 4096), Some(vec![3.0, 4.0]));
        assert_eq!(read_tuple(&mut input, 2, 4096), None);
    }

    #[test]
    fn mock_output_captures_written_lines() {
        use crate::output::write_line;

        let mut sink = mock_output();
        write_line(&mut sink, "first").unwrap();
        write_line(&mut sink, "second").unwrap();
        assert_eq!(captured_lines(&sink), vec!["first", "second"]);
    }
}
