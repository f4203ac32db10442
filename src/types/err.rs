/*!
Error types used by the checker.

Following spec.md §7, every fatal condition the checker can raise falls
into one of four top-level kinds. As in `otter_sat::types::err`, each
kind is its own small enum with a `From` impl folding it into the union
[CheckerError], so call sites can use `?` freely and match on either the
specific or the general type as convenient.
*/

use crate::types::ClauseId;

/// A union of the four top-level error kinds of spec.md §7.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckerError {
    /// A malformed byte sequence or structurally invalid record.
    Parse(ParseError),

    /// A check failed: mismatched saved line, inconsistent set, unsatisfied
    /// model, core not a subset of the query, etc.
    Check(CheckError),

    /// A record-level failure that should echo the offending line.
    Line(LineError),

    /// An unreachable state or invariant violation: a bug in the checker
    /// itself, not in the input.
    Fatal(FatalError),
}

impl std::fmt::Display for CheckerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckerError::Parse(e) => write!(f, "parse error: {e}"),
            CheckerError::Check(e) => write!(f, "error: {e}"),
            CheckerError::Line(e) => write!(f, "error: {e}"),
            CheckerError::Fatal(e) => write!(f, "fatal internal error: {e}"),
        }
    }
}

impl std::error::Error for CheckerError {}

impl From<ParseError> for CheckerError {
    fn from(e: ParseError) -> Self {
        CheckerError::Parse(e)
    }
}

impl From<CheckError> for CheckerError {
    fn from(e: CheckError) -> Self {
        CheckerError::Check(e)
    }
}

impl From<LineError> for CheckerError {
    fn from(e: LineError) -> Self {
        CheckerError::Line(e)
    }
}

impl From<FatalError> for CheckerError {
    fn from(e: FatalError) -> Self {
        CheckerError::Fatal(e)
    }
}

/// Errors raised while reading or tokenising a record, per spec.md §4.1–4.2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A stray carriage return not followed by a line feed.
    BadCarriageReturn { line: usize, file: String },

    /// A `c` comment line that ran into end-of-file before a line feed.
    EndOfFileInComment { line: usize, file: String },

    /// A type letter was not followed by a space.
    MissingSpaceAfterType { line: usize, col: usize, file: String, letter: char },

    /// A digit, or bare `0`, was not followed by the delimiter the grammar
    /// requires at that point.
    MissingDelimiter { line: usize, col: usize, file: String },

    /// A leading zero in a multi-digit literal or identifier.
    LeadingZero { line: usize, col: usize, file: String },

    /// `0` appeared directly after a unary minus.
    ZeroAfterMinus { line: usize, col: usize, file: String },

    /// The literal magnitude overflowed the signed 31-bit literal range.
    LiteralOverflow { line: usize, col: usize, file: String },

    /// The clause identifier overflowed the signed 64-bit identifier range.
    IdentifierOverflow { line: usize, col: usize, file: String },

    /// A byte that cannot begin any valid record in this state.
    UnexpectedCharacter { line: usize, col: usize, file: String, found: char },

    /// End of file where a specific record type was required.
    UnexpectedEndOfFile { file: String, expected: &'static str },

    /// A record of a type the current state machine state does not accept.
    UnexpectedRecord { line: usize, file: String, found: char, expected: &'static str },

    /// A mandatory header (pedantic mode) was absent or did not match.
    MissingHeader { line: usize, file: String, expected: &'static str },

    /// The `i64`/`p cnf` et al. niceties spec.md leaves undefined (§9, Open
    /// Question): multi-line value/model records and bare `p cnf` headers.
    UnsupportedConstruct { line: usize, file: String, what: &'static str },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::BadCarriageReturn { line, file } => {
                write!(f, "at line {line} in '{file}': expected new-line after carriage return")
            }
            ParseError::EndOfFileInComment { line, file } => {
                write!(f, "at line {line} in '{file}': end-of-file in comment")
            }
            ParseError::MissingSpaceAfterType { line, col, file, letter } => {
                write!(f, "at line {line} column {col} in '{file}': expected space after '{letter}'")
            }
            ParseError::MissingDelimiter { line, col, file } => {
                write!(f, "at line {line} column {col} in '{file}': missing delimiter")
            }
            ParseError::LeadingZero { line, col, file } => {
                write!(f, "at line {line} column {col} in '{file}': invalid leading '0' digit")
            }
            ParseError::ZeroAfterMinus { line, col, file } => {
                write!(f, "at line {line} column {col} in '{file}': expected non-zero digit after '-'")
            }
            ParseError::LiteralOverflow { line, col, file } => {
                write!(f, "at line {line} column {col} in '{file}': literal magnitude too large")
            }
            ParseError::IdentifierOverflow { line, col, file } => {
                write!(f, "at line {line} column {col} in '{file}': clause identifier too large")
            }
            ParseError::UnexpectedCharacter { line, col, file, found } => {
                write!(f, "at line {line} column {col} in '{file}': unexpected character '{found}'")
            }
            ParseError::UnexpectedEndOfFile { file, expected } => {
                write!(f, "in '{file}': unexpected end-of-file (expected {expected})")
            }
            ParseError::UnexpectedRecord { line, file, found, expected } => {
                write!(f, "at line {line} in '{file}': unexpected '{found}' line (expected {expected})")
            }
            ParseError::MissingHeader { line, file, expected } => {
                write!(f, "at line {line} in '{file}': expected '{expected}' header")
            }
            ParseError::UnsupportedConstruct { line, file, what } => {
                write!(f, "at line {line} in '{file}': unsupported construct: {what}")
            }
        }
    }
}

/// Errors raised by a consistency or satisfaction check, per spec.md §4.6, §7.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// A record did not match the saved record from the other stream.
    SavedLineMismatch { line: usize, file: String, other_line: usize, other_file: String },

    /// A literal set contained both a literal and its negation.
    InconsistentLine { line: usize, file: String },

    /// A model line failed to satisfy some input clause.
    ModelDoesNotSatisfyClause { line: usize, file: String, is_input: bool },

    /// A model failed to satisfy a query literal.
    ModelDoesNotSatisfyQuery { line: usize, file: String, lit: i32 },

    /// A claimed core was not a subset of the active query.
    CoreNotSubsetOfQuery { line: usize, file: String, lit: i32 },

    /// A failed-literal line contained a variable absent from the query.
    FailedNotSubsetOfQuery { line: usize, file: String, lit: i32 },

    /// A `u` core in the proof contradicted the saved `f` failed-literal set.
    FailedCoreMismatch { line: usize, file: String, lit: i32 },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::SavedLineMismatch { line, file, other_line, other_file } => write!(
                f,
                "at line {line} in '{file}': line does not match saved line {other_line} in '{other_file}'"
            ),
            CheckError::InconsistentLine { line, file } => {
                write!(f, "at line {line} in '{file}': inconsistent line")
            }
            CheckError::ModelDoesNotSatisfyClause { line, file, is_input } => write!(
                f,
                "at line {line} in '{file}': model does not satisfy {} clause",
                if *is_input { "input" } else { "derived" }
            ),
            CheckError::ModelDoesNotSatisfyQuery { line, file, lit } => write!(
                f,
                "at line {line} in '{file}': model does not satisfy query literal {lit}"
            ),
            CheckError::CoreNotSubsetOfQuery { line, file, lit } => {
                write!(f, "at line {line} in '{file}': core literal {lit} not in query")
            }
            CheckError::FailedNotSubsetOfQuery { line, file, lit } => {
                write!(f, "at line {line} in '{file}': failed literal {lit} not in query")
            }
            CheckError::FailedCoreMismatch { line, file, lit } => write!(
                f,
                "at line {line} in '{file}': core literal {lit} contradicts a failed literal"
            ),
        }
    }
}

/// Errors raised at record level that should echo the offending record,
/// per spec.md §7.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineError {
    /// The antecedent list referenced an identifier not in either index.
    UnknownAntecedent { line: usize, file: String, id: ClauseId },

    /// The antecedent referenced a currently weakened clause.
    WeakenedAntecedent { line: usize, file: String, id: ClauseId },

    /// A negative antecedent identifier was supplied.
    NegativeAntecedent { line: usize, file: String, id: i64 },

    /// Resolution through the antecedent list did not reach a conflict.
    ResolutionFailed { line: usize, file: String, what: &'static str },

    /// Two non-falsified literals in one antecedent differed.
    NotResolvable { line: usize, file: String, id: ClauseId },

    /// A clause identifier was reused while reuse is disabled, or while
    /// still present in either index.
    IdentifierAlreadyUsed { line: usize, file: String, id: ClauseId },

    /// `d`/`w`/`r` named a clause absent from the expected index.
    ClauseNotFound { line: usize, file: String, id: ClauseId, op: &'static str },
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::UnknownAntecedent { line, file, id } => {
                write!(f, "at line {line} in '{file}': could not find antecedent {id}")
            }
            LineError::WeakenedAntecedent { line, file, id } => {
                write!(f, "at line {line} in '{file}': antecedent {id} weakened")
            }
            LineError::NegativeAntecedent { line, file, id } => {
                write!(f, "at line {line} in '{file}': negative antecedent {id} unsupported")
            }
            LineError::ResolutionFailed { line, file, what } => {
                write!(f, "at line {line} in '{file}': {what} resolution check failed")
            }
            LineError::NotResolvable { line, file, id } => {
                write!(f, "at line {line} in '{file}': antecedent {id} not resolvable")
            }
            LineError::IdentifierAlreadyUsed { line, file, id } => {
                write!(f, "at line {line} in '{file}': clause identifier {id} already used")
            }
            LineError::ClauseNotFound { line, file, id, op } => {
                write!(f, "at line {line} in '{file}': could not find and {op} clause {id}")
            }
        }
    }
}

/// Unreachable states and invariant violations: a bug in the checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FatalError {
    InvalidState { state: &'static str },
    QueryAlreadyStarted,
    QueryNotStarted,
}

impl std::fmt::Display for FatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FatalError::InvalidState { state } => write!(f, "invalid parser state reached: {state}"),
            FatalError::QueryAlreadyStarted => write!(f, "query already started"),
            FatalError::QueryNotStarted => write!(f, "query already concluded"),
        }
    }
}
