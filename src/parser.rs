/*!
The record-level parser, per spec.md §4.2.

Built directly over [crate::reader::LineReader], one character at a
time, mirroring the character-dispatch loop of
`original_source/lidrup-check.c`'s `next_line_without_printing` rather
than `otter_sat::builder::dimacs`'s whitespace-split `read_line`
approach — the column-precise errors this format demands need a
byte-at-a-time cursor, which `read_line` alone cannot give.
*/

use crate::reader::LineReader;
use crate::types::err::ParseError;
use crate::types::{ClauseId, Header, Lit, RecordKind, Status};

/// One parsed record: a header, a status line, or a content line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Header(Header),
    Status(Status),
    Line(LineRecord),
}

/// A single content line: its kind, optional identifier, literal list,
/// and antecedent-identifier list, per the per-type table of spec.md §4.2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord {
    pub kind: RecordKind,
    pub id: Option<ClauseId>,
    pub lits: Vec<Lit>,
    pub ids: Vec<i64>,
}

impl RecordKind {
    fn from_letter(letter: char) -> Option<RecordKind> {
        Some(match letter {
            'i' => RecordKind::Input,
            'l' => RecordKind::Lemma,
            'd' => RecordKind::Delete,
            'w' => RecordKind::Weaken,
            'r' => RecordKind::Restore,
            'q' => RecordKind::Query,
            'm' => RecordKind::Model,
            'v' => RecordKind::Values,
            'u' => RecordKind::Core,
            'f' => RecordKind::Failed,
            _ => return None,
        })
    }
}

/// Parses records out of one [LineReader].
///
/// `is_interactions` mirrors the C source's `file != interactions` guard:
/// the interactions stream never carries clause identifiers or
/// antecedent-identifier lists, since those are only ever assigned by the
/// proof stream.
pub struct Parser {
    reader: LineReader,
    is_interactions: bool,
}

impl Parser {
    pub fn new(reader: LineReader, is_interactions: bool) -> Self {
        Parser { reader, is_interactions }
    }

    pub fn file_name(&self) -> &str {
        self.reader.file_name()
    }

    pub fn line(&self) -> usize {
        self.reader.line()
    }

    fn unexpected(&self, found: char) -> ParseError {
        ParseError::UnexpectedCharacter {
            line: self.reader.line(),
            col: self.reader.col(),
            file: self.reader.file_name().to_string(),
            found,
        }
    }

    fn missing_delim(&self) -> ParseError {
        ParseError::MissingDelimiter {
            line: self.reader.line(),
            col: self.reader.col(),
            file: self.reader.file_name().to_string(),
        }
    }

    fn require(&mut self, ch: char, expected: char) -> Result<(), ParseError> {
        if ch == expected {
            Ok(())
        } else {
            Err(self.unexpected(ch))
        }
    }

    fn require_char(&mut self, expected: char) -> Result<(), ParseError> {
        match self.reader.next_char()? {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.unexpected(c)),
            None => Err(ParseError::UnexpectedEndOfFile {
                file: self.reader.file_name().to_string(),
                expected: "more input",
            }),
        }
    }

    /// Parses the next record, or `Ok(None)` at end of file. Blank lines
    /// and `c`-prefixed comments are skipped transparently.
    pub fn next_record(&mut self) -> Result<Option<Record>, ParseError> {
        let ch = loop {
            match self.reader.next_char()? {
                None => return Ok(None),
                Some('\n') => continue,
                Some('c') => {
                    self.reader.skip_comment()?;
                    continue;
                }
                Some(c) => break c,
            }
        };

        if ch == 'p' {
            return self.parse_header().map(|h| Some(Record::Header(h)));
        }

        if !ch.is_ascii_lowercase() {
            return Err(self.unexpected(ch));
        }

        let parsed_letter = ch;
        self.require_char(' ').map_err(|_| ParseError::MissingSpaceAfterType {
            line: self.reader.line(),
            col: self.reader.col(),
            file: self.reader.file_name().to_string(),
            letter: parsed_letter,
        })?;

        let actual = if parsed_letter == 'a' { 'q' } else { parsed_letter };

        if actual == 's' {
            let status = self.parse_status()?;
            return Ok(Some(Record::Status(status)));
        }

        let kind = RecordKind::from_letter(actual).ok_or_else(|| self.unexpected(actual))?;

        let mut id = None;
        if !self.is_interactions && kind.has_id() {
            id = Some(self.parse_clause_id()?);
            self.require_char(' ')?;
        }

        let mut lits = Vec::new();
        let mut ids = Vec::new();

        if kind.has_lits() {
            let has_trailing_ids = !self.is_interactions && kind.has_ids();
            loop {
                let (lit_value, next) = self.parse_signed_literal()?;
                if lit_value == 0 {
                    if has_trailing_ids {
                        self.require(next, ' ')?;
                        break;
                    } else {
                        self.require(next, '\n')?;
                        return Ok(Some(Record::Line(LineRecord { kind, id, lits, ids })));
                    }
                } else {
                    lits.push(Lit::new(lit_value));
                    self.require(next, ' ')?;
                }
            }
        }

        if !self.is_interactions && kind.has_ids() {
            loop {
                let (id_value, next) = self.parse_signed_id()?;
                if id_value == 0 {
                    self.require(next, '\n')?;
                    break;
                } else {
                    ids.push(id_value);
                    self.require(next, ' ')?;
                }
            }
        }

        Ok(Some(Record::Line(LineRecord { kind, id, lits, ids })))
    }

    fn parse_header(&mut self) -> Result<Header, ParseError> {
        self.require_char(' ')?;
        let ch = self
            .reader
            .next_char()?
            .ok_or_else(|| ParseError::UnexpectedEndOfFile { file: self.reader.file_name().to_string(), expected: "header" })?;
        let header = match ch {
            'i' => {
                for expected in "cnf".chars() {
                    self.require_char(expected)?;
                }
                Header::Icnf
            }
            'l' => {
                for expected in "idrup".chars() {
                    self.require_char(expected)?;
                }
                Header::Lidrup
            }
            other => return Err(self.unexpected(other)),
        };
        self.require_char('\n')?;
        Ok(header)
    }

    fn parse_status(&mut self) -> Result<Status, ParseError> {
        let ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
            file: self.reader.file_name().to_string(),
            expected: "status",
        })?;
        let status = match ch {
            'S' => {
                for expected in "ATISFIABLE".chars() {
                    self.require_char(expected)?;
                }
                Status::Satisfiable
            }
            'U' => {
                self.require_char('N')?;
                let next = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
                    file: self.reader.file_name().to_string(),
                    expected: "status",
                })?;
                match next {
                    'S' => {
                        for expected in "ATISFIABLE".chars() {
                            self.require_char(expected)?;
                        }
                        Status::Unsatisfiable
                    }
                    'K' => {
                        for expected in "NOWN".chars() {
                            self.require_char(expected)?;
                        }
                        Status::Unknown
                    }
                    other => return Err(self.unexpected(other)),
                }
            }
            other => return Err(self.unexpected(other)),
        };
        self.require_char('\n')?;
        Ok(status)
    }

    /// Parses a non-negative, nonzero clause identifier, returning the
    /// identifier. The delimiter after it is left for the caller.
    fn parse_clause_id(&mut self) -> Result<ClauseId, ParseError> {
        let ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
            file: self.reader.file_name().to_string(),
            expected: "clause identifier",
        })?;
        if ch == '-' {
            return Err(self.unexpected(ch));
        }
        if !ch.is_ascii_digit() {
            return Err(self.unexpected(ch));
        }
        if ch == '0' {
            return Err(ParseError::ZeroAfterMinus {
                line: self.reader.line(),
                col: self.reader.col(),
                file: self.reader.file_name().to_string(),
            });
        }
        let mut value: i64 = (ch as u8 - b'0') as i64;
        loop {
            match self.reader.peek_char() {
                Some(d) if d.is_ascii_digit() => {
                    self.reader.next_char()?;
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((d as u8 - b'0') as i64))
                        .ok_or_else(|| ParseError::IdentifierOverflow {
                            line: self.reader.line(),
                            col: self.reader.col(),
                            file: self.reader.file_name().to_string(),
                        })?;
                }
                _ => break,
            }
        }
        Ok(ClauseId::new(value))
    }

    /// Parses one signed literal, returning its value (possibly `0` as a
    /// terminator) and the delimiter character immediately following it.
    fn parse_signed_literal(&mut self) -> Result<(i32, char), ParseError> {
        let mut ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
            file: self.reader.file_name().to_string(),
            expected: "literal",
        })?;
        let sign = if ch == '-' {
            ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
                file: self.reader.file_name().to_string(),
                expected: "literal",
            })?;
            if ch == '0' {
                return Err(ParseError::ZeroAfterMinus {
                    line: self.reader.line(),
                    col: self.reader.col(),
                    file: self.reader.file_name().to_string(),
                });
            }
            if !ch.is_ascii_digit() {
                return Err(self.unexpected(ch));
            }
            -1
        } else {
            if !ch.is_ascii_digit() {
                return Err(self.unexpected(ch));
            }
            1
        };

        let mut value: i32 = (ch as u8 - b'0') as i32;
        let delim;
        loop {
            match self.reader.peek_char() {
                Some(d) if d.is_ascii_digit() => {
                    if value == 0 {
                        return Err(ParseError::LeadingZero {
                            line: self.reader.line(),
                            col: self.reader.col(),
                            file: self.reader.file_name().to_string(),
                        });
                    }
                    self.reader.next_char()?;
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((d as u8 - b'0') as i32))
                        .ok_or_else(|| ParseError::LiteralOverflow {
                            line: self.reader.line(),
                            col: self.reader.col(),
                            file: self.reader.file_name().to_string(),
                        })?;
                }
                Some(_) => {
                    // Source the delimiter from the actual consuming read, not
                    // the peek above: `next_char` folds a `\r\n` pair into a
                    // single `\n`, which the raw peeked byte would not reflect.
                    delim = self.reader.next_char()?.expect("peek_char returned Some");
                    break;
                }
                None => return Err(self.missing_delim()),
            }
        }
        Ok((sign * value, delim))
    }

    /// Parses one signed antecedent identifier the same way, returning the
    /// value (possibly `0` as a terminator) and the following delimiter.
    fn parse_signed_id(&mut self) -> Result<(i64, char), ParseError> {
        let mut ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
            file: self.reader.file_name().to_string(),
            expected: "antecedent identifier",
        })?;
        let sign = if ch == '-' {
            ch = self.reader.next_char()?.ok_or_else(|| ParseError::UnexpectedEndOfFile {
                file: self.reader.file_name().to_string(),
                expected: "antecedent identifier",
            })?;
            if ch == '0' {
                return Err(ParseError::ZeroAfterMinus {
                    line: self.reader.line(),
                    col: self.reader.col(),
                    file: self.reader.file_name().to_string(),
                });
            }
            if !ch.is_ascii_digit() {
                return Err(self.unexpected(ch));
            }
            -1
        } else {
            if !ch.is_ascii_digit() {
                return Err(self.unexpected(ch));
            }
            1
        };

        let mut value: i64 = (ch as u8 - b'0') as i64;
        let delim;
        loop {
            match self.reader.peek_char() {
                Some(d) if d.is_ascii_digit() => {
                    if value == 0 {
                        return Err(ParseError::LeadingZero {
                            line: self.reader.line(),
                            col: self.reader.col(),
                            file: self.reader.file_name().to_string(),
                        });
                    }
                    self.reader.next_char()?;
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((d as u8 - b'0') as i64))
                        .ok_or_else(|| ParseError::IdentifierOverflow {
                            line: self.reader.line(),
                            col: self.reader.col(),
                            file: self.reader.file_name().to_string(),
                        })?;
                }
                Some(_) => {
                    delim = self.reader.next_char()?.expect("peek_char returned Some");
                    break;
                }
                None => return Err(self.missing_delim()),
            }
        }
        Ok((sign * value, delim))
    }
}
