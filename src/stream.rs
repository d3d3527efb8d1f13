//! Line-oriented tuple parsing: comma- or whitespace-separated numeric
//! fields, one tuple per line, adjacent separators collapsing together.

use std::io::BufRead;

/// Read one tuple of `width` doubles from `reader`.
///
/// Returns `None` on EOF, an empty line, a line exceeding `buffer` bytes
/// without a newline, or a line with fewer than `width` parseable
/// numeric fields — all of these terminate the reading loop, EOF and
/// parse failure being indistinguishable to the caller.
pub fn read_tuple<R: BufRead>(reader: &mut R, width: usize, buffer: usize) -> Option<Vec<f64>> {
    let mut line = String::new();
    let mut limited = reader.by_ref().take(buffer as u64);
    let read = limited.read_line(&mut line).ok()?;
    if read == 0 {
        return None;
    }
    if !line.ends_with('\n') && line.len() as u64 >= buffer as u64 {
        return None;
    }

    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return None;
    }

    let mut values = Vec::with_capacity(width);
    for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if let Ok(value) = token.parse::<f64>() {
            values.push(value);
            if values.len() == width {
                break;
            }
        }
    }

    if values.len() < width {
        return None;
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_comma_separated_line() {
        let mut cursor = Cursor::new("1.0,2.0,3.0\n");
        let tuple = read_tuple(&mut cursor, 3, 4096).unwrap();
        assert_eq!(tuple, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn parses_space_separated_line() {
        let mut cursor = Cursor::new("1.0 2.0 3.0\n");
        let tuple = read_tuple(&mut cursor, 3, 4096).unwrap();
        assert_eq!(tuple, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn collapses_mixed_adjacent_separators() {
        let mut cursor = Cursor::new("1.0,  2.0 ,,3.0\n");
        let tuple = read_tuple(&mut cursor, 3, 4096).unwrap();
        assert_eq!(tuple, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn ignores_extra_trailing_fields() {
        let mut cursor = Cursor::new("1.0,2.0,3.0,4.0,5.0\n");
        let tuple = read_tuple(&mut cursor, 2, 4096).unwrap();
        assert_eq!(tuple, vec![1.0, 2.0]);
    }

    #[test]
    fn short_line_returns_none() {
        let mut cursor = Cursor::new("1.0,2.0\n");
        assert_eq!(read_tuple(&mut cursor, 3, 4096), None);
    }

    #[test]
    fn empty_line_returns_none() {
        let mut cursor = Cursor::new("\n");
        assert_eq!(read_tuple(&mut cursor, 2, 4096), None);
    }

    #[test]
    fn eof_returns_none() {
        let mut cursor = Cursor::new("");
        assert_eq!(read_tuple(&mut cursor, 2, 4096), None);
    }

    #[test]
    fn non_numeric_fields_are_skipped_not_counted() {
        let mut cursor = Cursor::new("abc,1.0,2.0\n");
        let tuple = read_tuple(&mut cursor, 2, 4096).unwrap();
        assert_eq!(tuple, vec![1.0, 2.0]);
    }

    #[test]
    fn reads_successive_lines_from_the_same_reader() {
        let mut cursor = Cursor::new("1.0,1.0\n2.0,2.0\n");
        assert_eq!(read_tuple(&mut cursor, 2, 4096), Some(vec![1.0, 1.0]));
        assert_eq!(read_tuple(&mut cursor, 2, 4096), Some(vec![2.0, 2.0]));
        assert_eq!(read_tuple(&mut cursor, 2, 4096), None);
    }
}
