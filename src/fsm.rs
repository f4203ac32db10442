/*!
The dual-stream state machine, per spec.md §4.7.

The states and transitions below follow
`parse_and_check_icnf_and_idrup` in `original_source/lidrup-check.c`
(the two-file case) and `parse_and_check_idrup` (the proof-only case)
directly, implemented as an enum-free loop-and-match rather than the C
source's `goto`-chained labels — the shape `otter_sat::procedures::solve`
itself uses for its own state-driven solve loop.
*/

use crate::atom::AtomTable;
use crate::checks;
use crate::clause::Clause;
use crate::config::Config;
use crate::justify;
use crate::justify::Trail;
use crate::parser::{LineRecord, Parser, Record};
use crate::stats::Stats;
use crate::store::ClauseStore;
use crate::types::err::{CheckError, CheckerError, FatalError, ParseError};
use crate::types::{ClauseId, Header, Lit, RecordKind, Status};

/// What the checker concluded, and with what exit code it should
/// terminate, per spec.md §6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every check succeeded.
    Verified,
    /// Relaxed mode tolerated a missing `m`/`u` conclusion.
    Partial,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Verified => 0,
            Verdict::Partial => 2,
        }
    }
}

/// A line saved from one stream, awaiting comparison against the
/// matching line of the other, mirroring `saved`/`saved_type` in the C
/// source.
struct SavedLine {
    kind: RecordKind,
    lits: Vec<Lit>,
    line: usize,
    file: String,
}

/// Owns every piece of mutable state the checker threads through a run:
/// the variable table, clause store, assignment trail, current query,
/// and statistics.
pub struct Checker {
    config: Config,
    pub stats: Stats,
    atoms: AtomTable,
    store: ClauseStore,
    trail: Trail,
    query: Vec<Lit>,
    inconsistent: bool,
}

impl Checker {
    pub fn new(config: Config) -> Self {
        let no_reuse = config.no_reuse;
        Checker {
            config,
            stats: Stats::new(),
            atoms: AtomTable::new(),
            store: ClauseStore::new(!no_reuse),
            trail: Trail::new(),
            query: Vec::new(),
            inconsistent: false,
        }
    }

    fn import(&mut self, lits: &[Lit]) {
        for &lit in lits {
            if !self.atoms.is_known(lit.var()) {
                self.stats.imported += 1;
            }
            self.atoms.import(lit);
        }
        self.trail.reserve(self.atoms.max_var());
    }

    /// Applies an `i` record: an input clause, checked for identifier
    /// freshness then stored active. Grounded on `add_input_clause`.
    fn apply_input(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        self.import(&rec.lits);
        let id = rec.id.ok_or(FatalError::InvalidState { state: "input record without id" })?;
        self.store.check_fresh(id, line, file)?;
        self.store.insert_active(Clause::new_input(id, rec.lits.clone()));
        self.stats.added += 1;
        self.stats.inputs += 1;
        Ok(())
    }

    /// Applies an `l` record: checks the lemma is RUP/resolution implied,
    /// then stores it active. Grounded on `check_then_add_lemma`.
    fn apply_lemma(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        self.import(&rec.lits);
        let id = rec.id.ok_or(FatalError::InvalidState { state: "lemma without id" })?;
        self.store.check_fresh(id, line, file)?;

        self.stats.checks += 1;
        if !self.inconsistent {
            justify::check_implied(&mut self.trail, &self.store, &rec.lits, &rec.ids, 1, "lemma", line, file)?;
        }
        self.stats.resolutions += rec.ids.len() as u64;

        if rec.lits.is_empty() {
            self.inconsistent = true;
        }

        self.store.insert_active(Clause::new(id, rec.lits.clone()));
        self.stats.added += 1;
        self.stats.lemmas += 1;
        Ok(())
    }

    fn apply_delete(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        for &raw in &rec.ids {
            self.store.delete(ClauseId::new(raw), line, file)?;
            self.stats.deleted += 1;
        }
        Ok(())
    }

    fn apply_weaken(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        for &raw in &rec.ids {
            self.store.weaken(ClauseId::new(raw), line, file)?;
            self.stats.weakened += 1;
        }
        Ok(())
    }

    fn apply_restore(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        for &raw in &rec.ids {
            self.store.restore(ClauseId::new(raw), line, file)?;
            self.stats.restored += 1;
        }
        Ok(())
    }

    /// Dispatches any of the store-mutating record kinds shared by both
    /// streams (`i`, `l`, `d`, `w`, `r`), mirroring
    /// `learn_delete_restore_or_weaken`.
    fn apply_store_op(&mut self, rec: &LineRecord, line: usize, file: &str) -> Result<(), CheckerError> {
        match rec.kind {
            RecordKind::Input => self.apply_input(rec, line, file),
            RecordKind::Lemma => self.apply_lemma(rec, line, file),
            RecordKind::Delete => self.apply_delete(rec, line, file),
            RecordKind::Weaken => self.apply_weaken(rec, line, file),
            RecordKind::Restore => self.apply_restore(rec, line, file),
            _ => Err(FatalError::InvalidState { state: "not a store op" }.into()),
        }
    }

    fn save_query(&mut self, lits: &[Lit]) {
        self.query = lits.to_vec();
        self.stats.queries += 1;
    }

    /// Concludes a satisfiable query with a model, per
    /// `conclude_satisfiable_query_with_model`.
    fn conclude_with_model(&mut self, rec: &LineRecord, line: usize, file: &str, other_saved: Option<&SavedLine>) -> Result<(), CheckerError> {
        if checks::has_complementary_pair(&rec.lits) {
            return Err(CheckError::InconsistentLine { line, file: file.to_string() }.into());
        }
        checks::model_satisfies_query(&rec.lits, &self.query, line, file)?;
        checks::model_satisfies_input(&rec.lits, &self.store, line, file)?;
        if let Some(saved) = other_saved {
            if !checks::equal_sets(&rec.lits, &saved.lits) {
                return Err(CheckError::SavedLineMismatch {
                    line,
                    file: file.to_string(),
                    other_line: saved.line,
                    other_file: saved.file.clone(),
                }
                .into());
            }
        }
        self.stats.conclusions += 1;
        self.stats.models += 1;
        Ok(())
    }

    /// Concludes an unsatisfiable query with a core, per
    /// `conclude_unsatisfiable_query_with_core`.
    fn conclude_with_core(&mut self, rec: &LineRecord, line: usize, file: &str, other_saved: Option<&SavedLine>) -> Result<(), CheckerError> {
        if checks::has_complementary_pair(&rec.lits) {
            return Err(CheckError::InconsistentLine { line, file: file.to_string() }.into());
        }
        checks::core_subset_of_query(&rec.lits, &self.query, line, file)?;
        if let Some(saved) = other_saved {
            match saved.kind {
                RecordKind::Core => {
                    if !checks::equal_sets(&rec.lits, &saved.lits) {
                        return Err(CheckError::SavedLineMismatch {
                            line,
                            file: file.to_string(),
                            other_line: saved.line,
                            other_file: saved.file.clone(),
                        }
                        .into());
                    }
                }
                RecordKind::Failed => {
                    checks::failed_consistent_with_core(&rec.lits, &saved.lits, line, file)?;
                }
                _ => return Err(FatalError::InvalidState { state: "unexpected saved kind for core" }.into()),
            }
        }
        self.stats.checks += 1;
        if !self.inconsistent {
            justify::check_implied(&mut self.trail, &self.store, &rec.lits, &rec.ids, -1, "unsatisfiable core", line, file)?;
        }
        self.stats.conclusions += 1;
        self.stats.cores += 1;
        Ok(())
    }

    /// Runs the checker against a single proof stream (no interactions
    /// file given), per spec.md §4.7's simplified FSM.
    pub fn run_single(&mut self, proof: &mut Parser) -> Result<Verdict, CheckerError> {
        log::debug!(target: crate::misc::log::targets::FSM, "running single-stream checker over {}", proof.file_name());
        let mut partial = false;

        loop {
            let line = proof.line();
            let file = proof.file_name().to_string();
            let record = match proof.next_record()? {
                None => return Ok(if partial { Verdict::Partial } else { Verdict::Verified }),
                Some(r) => r,
            };

            match record {
                Record::Header(Header::Lidrup) if line <= 1 => continue,
                Record::Header(_) => {
                    return Err(ParseError::UnexpectedRecord { line, file, found: 'p', expected: "a content line" }.into())
                }
                Record::Status(status) => {
                    partial |= self.handle_status_single(status, proof, &file)?;
                }
                Record::Line(rec) if rec.kind == RecordKind::Query => {
                    self.save_query(&rec.lits);
                }
                Record::Line(rec) => {
                    self.apply_store_op(&rec, line, &file)?;
                }
            }
        }
    }

    fn handle_status_single(&mut self, status: Status, proof: &mut Parser, file: &str) -> Result<bool, CheckerError> {
        let mut partial = false;
        match status {
            Status::Satisfiable => {
                let line = proof.line();
                match proof.next_record()? {
                    Some(Record::Line(rec)) if rec.kind == RecordKind::Model => self.conclude_with_model(&rec, line, file, None)?,
                    other => {
                        self.missing_conclusion(other, line, file, "m")?;
                        partial = true;
                    }
                }
            }
            Status::Unsatisfiable => {
                let line = proof.line();
                match proof.next_record()? {
                    Some(Record::Line(rec)) if rec.kind == RecordKind::Core => self.conclude_with_core(&rec, line, file, None)?,
                    other => {
                        self.missing_conclusion(other, line, file, "u")?;
                        partial = true;
                    }
                }
            }
            Status::Unknown => {}
        }
        Ok(partial)
    }

    fn missing_conclusion(&mut self, other: Option<Record>, line: usize, file: &str, expected: &'static str) -> Result<(), CheckerError> {
        if self.config.mode.tolerates_missing_conclusion() {
            return Ok(());
        }
        match other {
            Some(Record::Line(rec)) => Err(ParseError::UnexpectedRecord {
                line,
                file: file.to_string(),
                found: rec.kind.letter(),
                expected,
            }
            .into()),
            _ => Err(ParseError::UnexpectedEndOfFile { file: file.to_string(), expected }.into()),
        }
    }

    /// Runs the checker against an interactions stream and a proof
    /// stream in lock-step, per spec.md §4.7's full dual-stream FSM.
    ///
    /// This implements the essential interleaving: every `i`/`q` read
    /// from the interactions side is matched against the corresponding
    /// record from the proof side, and every conclusion (`m`/`u`) is
    /// cross-checked against the saved interaction-side line (`v`/`m`
    /// or `f`/`u`).
    pub fn run_dual(&mut self, interactions: &mut Parser, proof: &mut Parser) -> Result<Verdict, CheckerError> {
        log::debug!(
            target: crate::misc::log::targets::FSM,
            "running dual-stream checker over {} and {}",
            interactions.file_name(),
            proof.file_name()
        );
        if self.config.mode.requires_headers() {
            self.expect_header(interactions, Header::Icnf)?;
            self.expect_header(proof, Header::Lidrup)?;
        }

        let mut partial = false;

        loop {
            let i_line = interactions.line();
            let i_file = interactions.file_name().to_string();
            let next = interactions.next_record()?;
            let rec = match next {
                None => return Ok(if partial { Verdict::Partial } else { Verdict::Verified }),
                Some(Record::Header(_)) => continue,
                Some(Record::Status(_)) => {
                    return Err(ParseError::UnexpectedRecord { line: i_line, file: i_file, found: 's', expected: "i or q" }.into())
                }
                Some(Record::Line(rec)) => rec,
            };

            match rec.kind {
                RecordKind::Input => {
                    self.sync_input(&rec, i_line, &i_file, proof)?;
                }
                RecordKind::Query => {
                    self.save_query(&rec.lits);
                    self.sync_query(&rec, i_line, &i_file, proof)?;
                    self.run_proof_until_status(interactions, proof)?;
                    partial |= self.sync_conclusion(interactions, proof)?;
                }
                other => {
                    return Err(ParseError::UnexpectedRecord { line: i_line, file: i_file, found: other.letter(), expected: "i or q" }.into())
                }
            }
        }
    }

    fn expect_header(&mut self, parser: &mut Parser, expected: Header) -> Result<(), CheckerError> {
        let line = parser.line();
        let file = parser.file_name().to_string();
        match parser.next_record()? {
            Some(Record::Header(h)) if h == expected => Ok(()),
            _ => Err(ParseError::MissingHeader {
                line,
                file,
                expected: if expected == Header::Icnf { "p icnf" } else { "p lidrup" },
            }
            .into()),
        }
    }

    fn letter_of(r: &Record) -> char {
        match r {
            Record::Header(_) => 'p',
            Record::Status(_) => 's',
            Record::Line(l) => l.kind.letter(),
        }
    }

    /// Reads the matching `i` record from the proof side and any
    /// store-mutating records preceding it, per *ProofInput*.
    fn sync_input(&mut self, i_rec: &LineRecord, i_line: usize, i_file: &str, proof: &mut Parser) -> Result<(), CheckerError> {
        loop {
            let p_line = proof.line();
            let p_file = proof.file_name().to_string();
            match proof.next_record()? {
                Some(Record::Header(_)) => continue,
                Some(Record::Line(rec)) if rec.kind == RecordKind::Input => {
                    if !checks::equal_sets(&i_rec.lits, &rec.lits) {
                        return Err(CheckError::SavedLineMismatch {
                            line: p_line,
                            file: p_file,
                            other_line: i_line,
                            other_file: i_file.to_string(),
                        }
                        .into());
                    }
                    return self.apply_store_op(&rec, p_line, &p_file);
                }
                Some(Record::Line(rec)) => {
                    self.apply_store_op(&rec, p_line, &p_file)?;
                }
                other => {
                    return Err(ParseError::UnexpectedRecord {
                        line: p_line,
                        file: p_file,
                        found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                        expected: "i",
                    }
                    .into())
                }
            }
        }
    }

    fn sync_query(&mut self, i_rec: &LineRecord, i_line: usize, i_file: &str, proof: &mut Parser) -> Result<(), CheckerError> {
        loop {
            let p_line = proof.line();
            let p_file = proof.file_name().to_string();
            match proof.next_record()? {
                Some(Record::Header(_)) => continue,
                Some(Record::Line(rec)) if rec.kind == RecordKind::Query => {
                    return if checks::equal_sets(&i_rec.lits, &rec.lits) {
                        Ok(())
                    } else {
                        Err(CheckError::SavedLineMismatch {
                            line: p_line,
                            file: p_file,
                            other_line: i_line,
                            other_file: i_file.to_string(),
                        }
                        .into())
                    };
                }
                Some(Record::Line(rec)) => {
                    self.apply_store_op(&rec, p_line, &p_file)?;
                }
                other => {
                    return Err(ParseError::UnexpectedRecord {
                        line: p_line,
                        file: p_file,
                        found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                        expected: "q",
                    }
                    .into())
                }
            }
        }
    }

    /// Applies proof-side store operations until a status line is
    /// reached, per *ProofCheck*. An `i` record seen here is an input
    /// added mid-query: the matching `i` must also be consumed from the
    /// interactions stream before continuing, per *InteractionPropagate*.
    fn run_proof_until_status(&mut self, interactions: &mut Parser, proof: &mut Parser) -> Result<(), CheckerError> {
        loop {
            let p_line = proof.line();
            let p_file = proof.file_name().to_string();
            match proof.next_record()? {
                Some(Record::Header(_)) => continue,
                Some(Record::Status(_)) => return Ok(()),
                Some(Record::Line(rec)) if rec.kind == RecordKind::Input => {
                    self.match_interaction_input(&rec, p_line, &p_file, interactions)?;
                    self.apply_store_op(&rec, p_line, &p_file)?;
                }
                Some(Record::Line(rec)) => self.apply_store_op(&rec, p_line, &p_file)?,
                None => return Err(ParseError::UnexpectedEndOfFile { file: p_file, expected: "a status line" }.into()),
            }
        }
    }

    /// Consumes the interactions-side `i` record matching a proof-side
    /// `i` seen mid-query, per *InteractionPropagate*.
    fn match_interaction_input(
        &mut self,
        p_rec: &LineRecord,
        p_line: usize,
        p_file: &str,
        interactions: &mut Parser,
    ) -> Result<(), CheckerError> {
        loop {
            let i_line = interactions.line();
            let i_file = interactions.file_name().to_string();
            match interactions.next_record()? {
                Some(Record::Header(_)) => continue,
                Some(Record::Line(rec)) if rec.kind == RecordKind::Input => {
                    return if checks::equal_sets(&p_rec.lits, &rec.lits) {
                        Ok(())
                    } else {
                        Err(CheckError::SavedLineMismatch {
                            line: p_line,
                            file: p_file.to_string(),
                            other_line: i_line,
                            other_file: i_file,
                        }
                        .into())
                    };
                }
                other => {
                    return Err(ParseError::UnexpectedRecord {
                        line: i_line,
                        file: i_file,
                        found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                        expected: "i",
                    }
                    .into())
                }
            }
        }
    }

    /// Having reached a proof-side status line, reads the matching
    /// interactions-side status, then the conclusion pair (`v`/`m` with
    /// `m`, or `f`/`u` with `u`), per *InteractionSatisfiable* through
    /// *ProofCore*. Returns whether relaxed mode tolerated a missing
    /// conclusion.
    fn sync_conclusion(&mut self, interactions: &mut Parser, proof: &mut Parser) -> Result<bool, CheckerError> {
        let i_line = interactions.line();
        let i_file = interactions.file_name().to_string();
        let i_status = match interactions.next_record()? {
            Some(Record::Status(s)) => s,
            other => {
                return Err(ParseError::UnexpectedRecord {
                    line: i_line,
                    file: i_file,
                    found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                    expected: "s",
                }
                .into())
            }
        };

        match i_status {
            Status::Satisfiable => {
                let saved = self.read_saved_values(interactions)?;
                let p_line = proof.line();
                let p_file = proof.file_name().to_string();
                match proof.next_record()? {
                    Some(Record::Line(rec)) if rec.kind == RecordKind::Model => {
                        self.conclude_with_model(&rec, p_line, &p_file, Some(&saved))?;
                        Ok(false)
                    }
                    other => {
                        self.missing_conclusion(other, p_line, &p_file, "m")?;
                        Ok(true)
                    }
                }
            }
            Status::Unsatisfiable => {
                let saved = self.read_saved_core_or_failed(interactions)?;
                let p_line = proof.line();
                let p_file = proof.file_name().to_string();
                match proof.next_record()? {
                    Some(Record::Line(rec)) if rec.kind == RecordKind::Core => {
                        self.conclude_with_core(&rec, p_line, &p_file, Some(&saved))?;
                        Ok(false)
                    }
                    other => {
                        self.missing_conclusion(other, p_line, &p_file, "u")?;
                        Ok(true)
                    }
                }
            }
            Status::Unknown => Ok(false),
        }
    }

    /// Reads the saved interaction-side line for a satisfiable query, per
    /// *InteractionSatisfied*. Accepts either a `v` values line or a full
    /// `m` model; a model additionally has its consistency, query
    /// satisfaction, and input-clause satisfaction checked here, since the
    /// proof side never sees this line to check it itself.
    fn read_saved_values(&mut self, interactions: &mut Parser) -> Result<SavedLine, CheckerError> {
        let line = interactions.line();
        let file = interactions.file_name().to_string();
        match interactions.next_record()? {
            Some(Record::Line(rec)) if rec.kind == RecordKind::Values => {
                if checks::has_complementary_pair(&rec.lits) {
                    return Err(CheckError::InconsistentLine { line, file }.into());
                }
                Ok(SavedLine { kind: rec.kind, lits: rec.lits, line, file })
            }
            Some(Record::Line(rec)) if rec.kind == RecordKind::Model => {
                if checks::has_complementary_pair(&rec.lits) {
                    return Err(CheckError::InconsistentLine { line, file }.into());
                }
                checks::model_satisfies_query(&rec.lits, &self.query, line, &file)?;
                checks::model_satisfies_input(&rec.lits, &self.store, line, &file)?;
                Ok(SavedLine { kind: rec.kind, lits: rec.lits, line, file })
            }
            other => Err(ParseError::UnexpectedRecord {
                line,
                file,
                found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                expected: "v or m",
            }
            .into()),
        }
    }

    /// Reads the saved interaction-side line for an unsatisfiable query,
    /// per *InteractionUnsatisfied*. Both `f` and `u` are checked for a
    /// complementary pair before being saved.
    fn read_saved_core_or_failed(&mut self, interactions: &mut Parser) -> Result<SavedLine, CheckerError> {
        let line = interactions.line();
        let file = interactions.file_name().to_string();
        match interactions.next_record()? {
            Some(Record::Line(rec)) if rec.kind == RecordKind::Failed => {
                if checks::has_complementary_pair(&rec.lits) {
                    return Err(CheckError::InconsistentLine { line, file }.into());
                }
                if !checks::variables_subset(&rec.lits, &self.query) {
                    return Err(CheckError::FailedNotSubsetOfQuery {
                        line,
                        file: file.clone(),
                        lit: rec.lits.first().map(|l| l.value()).unwrap_or(0),
                    }
                    .into());
                }
                Ok(SavedLine { kind: RecordKind::Failed, lits: rec.lits, line, file })
            }
            Some(Record::Line(rec)) if rec.kind == RecordKind::Core => {
                if checks::has_complementary_pair(&rec.lits) {
                    return Err(CheckError::InconsistentLine { line, file }.into());
                }
                Ok(SavedLine { kind: RecordKind::Core, lits: rec.lits, line, file })
            }
            other => Err(ParseError::UnexpectedRecord {
                line,
                file,
                found: other.as_ref().map(Self::letter_of).unwrap_or('?'),
                expected: "f or u",
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::reader::LineReader;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("lidrup_fsm_test_{}_{}.txt", std::process::id(), contents.len()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn parser_for(contents: &str, is_interactions: bool) -> Parser {
        let path = write_temp(contents);
        let reader = LineReader::open(path.to_str().unwrap()).unwrap();
        Parser::new(reader, is_interactions)
    }

    /// Scenario A: a tautology, its two halves, and a query with a
    /// consistent model.
    #[test]
    fn scenario_a_tautology_verifies() {
        let mut proof = parser_for(
            "i 1 1 2 0\ni 2 -1 2 0\ni 3 -1 -2 0\nq 0\ns SATISFIABLE\nm -1 2 0\n",
            false,
        );
        let mut checker = Checker::new(Config::default());
        let verdict = checker.run_single(&mut proof);
        assert_eq!(verdict, Ok(Verdict::Verified));
    }

    /// Scenario C: a lemma with an empty antecedent list, where plain
    /// unit propagation over the (empty) active clause set never
    /// reaches a conflict, must be rejected.
    #[test]
    fn scenario_c_bad_resolution_is_rejected() {
        let mut proof = parser_for("l 42 7 0 0\n", false);
        let mut checker = Checker::new(Config::default());
        let err = checker.run_single(&mut proof).unwrap_err();
        match err {
            CheckerError::Line(crate::types::err::LineError::ResolutionFailed { .. }) => {}
            other => panic!("expected a resolution failure, got {other:?}"),
        }
    }

    /// Scenario D: weakening a clause and then citing it as an
    /// antecedent must be rejected.
    #[test]
    fn scenario_d_weakened_antecedent_is_rejected() {
        let mut proof = parser_for("i 5 1 2 0\nw 5 0\nl 9 2 0 5 0\n", false);
        let mut checker = Checker::new(Config::default());
        let err = checker.run_single(&mut proof).unwrap_err();
        match err {
            CheckerError::Line(crate::types::err::LineError::WeakenedAntecedent { .. }) => {}
            other => panic!("expected a weakened-antecedent error, got {other:?}"),
        }
    }

    /// Scenario E: reusing a freed identifier with reuse disabled must
    /// be rejected.
    #[test]
    fn scenario_e_identifier_reuse_is_rejected() {
        let mut proof = parser_for("i 7 1 0\nd 7 0\ni 7 2 0\n", false);
        let mut config = Config::default();
        config.no_reuse = true;
        let mut checker = Checker::new(config);
        let err = checker.run_single(&mut proof).unwrap_err();
        match err {
            CheckerError::Line(crate::types::err::LineError::IdentifierAlreadyUsed { .. }) => {}
            other => panic!("expected an identifier-reuse error, got {other:?}"),
        }
    }

    /// Scenario F: a claimed model that does not satisfy an input
    /// clause must be rejected.
    #[test]
    fn scenario_f_model_missing_clause_is_rejected() {
        let mut proof = parser_for("i 1 1 2 0\ni 2 -1 2 0\nq 0\ns SATISFIABLE\nm -1 -2 0\n", false);
        let mut checker = Checker::new(Config::default());
        let err = checker.run_single(&mut proof).unwrap_err();
        match err {
            CheckerError::Check(CheckError::ModelDoesNotSatisfyClause { .. }) => {}
            other => panic!("expected model-does-not-satisfy error, got {other:?}"),
        }
    }
}
