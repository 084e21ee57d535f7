//! Line sources consumed by the menu parser.

use std::io::{self, BufRead};

/// A source of newline-delimited lines.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Any buffered reader is a line source. Both `\n` and `\r\n` terminators
/// are stripped; a final line without a terminator is still returned.
impl<R: BufRead> LineSource for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if BufRead::read_line(self, &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &str) -> Vec<String> {
        let mut source = Cursor::new(input.as_bytes());
        let mut out = Vec::new();
        while let Some(line) = LineSource::read_line(&mut source).unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn strips_terminators() {
        assert_eq!(lines("a\nb\r\n\nc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(lines("a\n"), vec!["a"]);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let mut source = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let err = LineSource::read_line(&mut source).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
