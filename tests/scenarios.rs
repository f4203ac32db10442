//! End-to-end scenarios, per spec.md §8's "End-to-end scenarios" list.
//!
//! Scenarios A, C, D, E, F are covered as proof-only, single-stream runs
//! inside `fsm`'s own `#[cfg(test)]` module; this file covers Scenario B
//! (which needs a second query continuing from A) and the dual-stream
//! (interactions + proof) path that Scenario A/B also exercise when two
//! files are supplied.

use lidrup_check::config::Config;
use lidrup_check::fsm::{Checker, Verdict};
use lidrup_check::parser::Parser;
use lidrup_check::reader::LineReader;

fn temp_parser(contents: &str, is_interactions: bool) -> Parser {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "lidrup_scenarios_{}_{}_{}.txt",
        std::process::id(),
        is_interactions,
        contents.len()
    ));
    std::fs::write(&path, contents).unwrap();
    let reader = LineReader::open(path.to_str().unwrap()).unwrap();
    Parser::new(reader, is_interactions)
}

/// Scenario B, single-stream: continuing A's tie-and-shirt tautology
/// with a second, failing query assuming literal `1`. The lemma
/// "-1 from 2 and 3" resolves the two clauses that conflict once `1`
/// is assumed, and the unsatisfiable core `{1}` is justified by that
/// lemma alone.
#[test]
fn scenario_b_failing_query_verifies() {
    let mut proof = temp_parser(
        "i 1 1 2 0\n\
         i 2 -1 2 0\n\
         i 3 -1 -2 0\n\
         q 0\n\
         s SATISFIABLE\n\
         m -1 2 0\n\
         q 1 0\n\
         l 4 -1 0 2 3 0\n\
         s UNSATISFIABLE\n\
         u 1 0 4 0\n",
        false,
    );
    let mut checker = Checker::new(Config::default());
    assert_eq!(checker.run_single(&mut proof), Ok(Verdict::Verified));
}

/// The same scenario, driven as a dual-stream run: an interactions file
/// (no clause identifiers, no antecedent lists) paired with the proof
/// file above. Exercises `sync_input`, `sync_query`,
/// `run_proof_until_status` and `sync_conclusion` together.
#[test]
fn scenario_a_and_b_dual_stream_verifies() {
    let mut interactions = temp_parser(
        "i 1 2 0\n\
         i -1 2 0\n\
         i -1 -2 0\n\
         q 0\n\
         s SATISFIABLE\n\
         v -1 2 0\n\
         q 1 0\n\
         s UNSATISFIABLE\n\
         f 1 0\n",
        true,
    );
    let mut proof = temp_parser(
        "i 1 1 2 0\n\
         i 2 -1 2 0\n\
         i 3 -1 -2 0\n\
         q 0\n\
         s SATISFIABLE\n\
         m -1 2 0\n\
         q 1 0\n\
         l 4 -1 0 2 3 0\n\
         s UNSATISFIABLE\n\
         u 1 0 4 0\n",
        false,
    );
    let mut checker = Checker::new(Config::default());
    assert_eq!(checker.run_dual(&mut interactions, &mut proof), Ok(Verdict::Verified));
}

/// Pedantic mode requires both headers; omitting them is a fatal parse
/// error rather than the silent tolerance strict/relaxed mode give it.
#[test]
fn pedantic_mode_requires_headers() {
    let mut interactions = temp_parser("i 1 2 0\n", true);
    let mut proof = temp_parser("i 1 1 2 0\n", false);
    let mut config = Config::default();
    config.mode = lidrup_check::config::Mode::Pedantic;
    let mut checker = Checker::new(config);
    assert!(checker.run_dual(&mut interactions, &mut proof).is_err());
}

/// Relaxed mode tolerates a missing `m` after `s SATISFIABLE` in the
/// proof stream, reporting `Verdict::Partial` (exit code 2) instead of
/// failing outright.
#[test]
fn relaxed_mode_tolerates_missing_model() {
    let mut proof = temp_parser("i 1 1 2 0\nq 0\ns SATISFIABLE\n", false);
    let mut config = Config::default();
    config.mode = lidrup_check::config::Mode::Relaxed;
    let mut checker = Checker::new(config);
    let verdict = checker.run_single(&mut proof).unwrap();
    assert_eq!(verdict, Verdict::Partial);
    assert_eq!(verdict.exit_code(), 2);
}
