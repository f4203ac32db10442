/*!
Shared scalar types used throughout the checker.

[Lit] and [ClauseId] are thin newtypes over the primitive integers spec.md
assigns them, so that the sign/magnitude conventions of the text format
are not confused with plain arithmetic elsewhere in the crate.
*/

pub mod err;

/// A literal: a non-zero signed integer whose absolute value names a
/// variable and whose sign gives its polarity.
///
/// The literal `0` is never represented by this type; it is only ever a
/// terminator at the parser layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit(i32);

impl Lit {
    /// Builds a literal from a non-zero signed integer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero. Callers at the parser boundary are
    /// expected to have already rejected `0` as a literal.
    pub fn new(value: i32) -> Self {
        assert!(value != 0, "0 is not a literal");
        Lit(value)
    }

    /// The variable this literal names (always positive).
    pub fn var(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// `true` for a positive literal, `false` for a negative one.
    pub fn polarity(self) -> bool {
        self.0 > 0
    }

    /// The negation of this literal.
    pub fn neg(self) -> Lit {
        Lit(-self.0)
    }

    /// The raw signed value, as it appears in the text format.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::ops::Neg for Lit {
    type Output = Lit;
    fn neg(self) -> Lit {
        self.neg()
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clause identifier: a positive 64-bit integer assigned by the producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId(i64);

impl ClauseId {
    /// Builds a clause identifier from a positive integer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not strictly positive.
    pub fn new(value: i64) -> Self {
        assert!(value > 0, "clause identifiers are strictly positive");
        ClauseId(value)
    }

    /// The raw value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single lowercase letter naming a record's type, per spec.md §4.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Input,
    Lemma,
    Delete,
    Weaken,
    Restore,
    Query,
    Model,
    Values,
    Core,
    Failed,
}

impl RecordKind {
    /// The canonical letter for this record kind, after `a` has been
    /// folded into `q` (spec.md §4.2).
    pub fn letter(self) -> char {
        match self {
            RecordKind::Input => 'i',
            RecordKind::Lemma => 'l',
            RecordKind::Delete => 'd',
            RecordKind::Weaken => 'w',
            RecordKind::Restore => 'r',
            RecordKind::Query => 'q',
            RecordKind::Model => 'm',
            RecordKind::Values => 'v',
            RecordKind::Core => 'u',
            RecordKind::Failed => 'f',
        }
    }

    /// Whether a record of this kind carries a clause identifier.
    pub fn has_id(self) -> bool {
        matches!(self, RecordKind::Input | RecordKind::Lemma)
    }

    /// Whether a record of this kind carries a literal list.
    pub fn has_lits(self) -> bool {
        matches!(
            self,
            RecordKind::Input
                | RecordKind::Lemma
                | RecordKind::Query
                | RecordKind::Model
                | RecordKind::Values
                | RecordKind::Core
                | RecordKind::Failed
        )
    }

    /// Whether a record of this kind carries an antecedent-identifier list.
    pub fn has_ids(self) -> bool {
        matches!(
            self,
            RecordKind::Lemma | RecordKind::Delete | RecordKind::Weaken | RecordKind::Restore | RecordKind::Core
        )
    }
}

/// The three statuses a solver may report, per spec.md §6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Satisfiable => write!(f, "SATISFIABLE"),
            Status::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The two header kinds of spec.md §6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    Icnf,
    Lidrup,
}
