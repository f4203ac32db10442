/*!
Buffered character source for a single input file, per spec.md §4.1.

`otter_sat::builder::dimacs::read_dimacs` reads a DIMACS file a whole
line at a time via `BufRead::read_line`, which is enough for whitespace-
delimited integers but not for the column-precise error reporting the
text format here requires. [LineReader] instead pulls bytes one at a
time from a `BufReader`, which already performs the same buffered
refilling `read_line` relies on, just exposed at byte granularity.
*/

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::types::err::ParseError;

/// Size of the read buffer `BufReader` refills on demand, matching
/// spec.md's "a single 1 MiB read buffer per file."
const BUFFER_SIZE: usize = 1024 * 1024;

/// A buffered, position-tracking byte source over a single named file.
pub struct LineReader {
    inner: BufReader<File>,
    file_name: String,
    line: usize,
    col: usize,
    /// Set once a `\n` has been returned, so the next byte starts a new
    /// line/column count.
    at_line_start: bool,
}

impl LineReader {
    /// Opens `path` for reading.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = File::open(path)?;
        log::debug!(target: crate::misc::log::targets::READER, "opened {path}");
        Ok(LineReader {
            inner: BufReader::with_capacity(BUFFER_SIZE, file),
            file_name: path.to_string(),
            line: 1,
            col: 0,
            at_line_start: true,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Reads a single raw byte, or `None` at end of file.
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(byte[0]),
        }
    }

    /// Pulls the next byte as a `char`, advancing line/column tracking.
    /// Returns `Ok(None)` at end of file. `\r\n` is folded to a single
    /// `\n`, mirroring `next_line_without_printing`'s own CR/LF folding; a
    /// bare `\r` not immediately followed by `\n` is a [ParseError].
    pub fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        let mut ch = match self.read_byte() {
            None => return Ok(None),
            Some(b) => b as char,
        };

        if ch == '\r' {
            match self.peek_char() {
                Some('\n') => {
                    self.read_byte();
                    ch = '\n';
                }
                _ => {
                    return Err(ParseError::BadCarriageReturn {
                        line: self.line,
                        file: self.file_name.clone(),
                    })
                }
            }
        }

        if self.at_line_start {
            self.col = 1;
            self.at_line_start = false;
        } else {
            self.col += 1;
        }
        if ch == '\n' {
            self.line += 1;
            self.at_line_start = true;
        }
        Ok(Some(ch))
    }

    /// Peeks the next raw byte without consuming it. Never folds `\r\n`:
    /// callers only ever use this to look ahead for a digit, so a bare
    /// `\r` byte is simply "not a digit" and falls through to [Self::next_char]
    /// for the actual (folding, error-checked) consumption.
    pub fn peek_char(&mut self) -> Option<char> {
        let buf = self.inner.fill_buf().ok()?;
        buf.first().map(|&b| b as char)
    }

    /// Skips a `c`-prefixed comment line, consuming through (and
    /// including) its terminating line feed.
    pub fn skip_comment(&mut self) -> Result<(), ParseError> {
        loop {
            match self.next_char()? {
                Some('\n') => return Ok(()),
                Some(_) => continue,
                None => {
                    return Err(ParseError::EndOfFileInComment {
                        line: self.line,
                        file: self.file_name.clone(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reader_over(contents: &str) -> LineReader {
        let mut path = std::env::temp_dir();
        path.push(format!("lidrup_check_reader_test_{:p}", contents));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        LineReader::open(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn tracks_line_and_column() {
        let mut r = reader_over("ab\ncd");
        assert_eq!(r.next_char(), Ok(Some('a')));
        assert_eq!(r.col(), 1);
        assert_eq!(r.next_char(), Ok(Some('b')));
        assert_eq!(r.col(), 2);
        assert_eq!(r.next_char(), Ok(Some('\n')));
        assert_eq!(r.line(), 2);
        assert_eq!(r.next_char(), Ok(Some('c')));
        assert_eq!(r.col(), 1);
    }

    #[test]
    fn skip_comment_stops_after_newline() {
        let mut r = reader_over("c a comment\nx");
        r.next_char().unwrap();
        r.skip_comment().unwrap();
        assert_eq!(r.next_char(), Ok(Some('x')));
    }

    #[test]
    fn lone_carriage_return_is_an_error() {
        let mut r = reader_over("a\rb");
        r.next_char().unwrap();
        assert!(r.next_char().is_err());
    }

    #[test]
    fn crlf_is_folded_to_a_single_newline() {
        let mut r = reader_over("ab\r\ncd");
        assert_eq!(r.next_char(), Ok(Some('a')));
        assert_eq!(r.next_char(), Ok(Some('b')));
        assert_eq!(r.next_char(), Ok(Some('\n')));
        assert_eq!(r.line(), 2);
        assert_eq!(r.next_char(), Ok(Some('c')));
        assert_eq!(r.col(), 1);
    }
}
