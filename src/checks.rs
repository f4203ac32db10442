/*!
Reusable consistency and satisfaction predicates, per spec.md §4.6.

`original_source/lidrup-check.c` implements these with a single shared
mark array (`marks[lit]`), set and cleared around each call. A
`std::collections::HashSet<Lit>` serves the same purpose here: Design
Notes §9 licenses a standard hash-backed collection anywhere the C
source reaches for its own hand-rolled table.
*/

use std::collections::HashSet;

use crate::store::ClauseStore;
use crate::types::err::CheckError;
use crate::types::Lit;

/// `true` if `lits` contains both some literal and its negation, per
/// `check_line_consistency`.
pub fn has_complementary_pair(lits: &[Lit]) -> bool {
    let marks: HashSet<Lit> = lits.iter().copied().collect();
    lits.iter().any(|l| marks.contains(&l.neg()))
}

/// `true` if `a` and `b` contain exactly the same literals, per
/// `match_literals`.
pub fn equal_sets(a: &[Lit], b: &[Lit]) -> bool {
    subset(a, b) && subset(b, a)
}

/// `true` if every literal of `a` occurs in `b`, per `subset_literals`.
pub fn subset(a: &[Lit], b: &[Lit]) -> bool {
    let marks: HashSet<Lit> = b.iter().copied().collect();
    a.iter().all(|l| marks.contains(l))
}

/// `true` if, for every literal of `a`, either it or its negation occurs
/// in `b` — i.e. `a`'s variables are a subset of `b`'s, per
/// `check_line_variables_subset_of_query`.
pub fn variables_subset(a: &[Lit], b: &[Lit]) -> bool {
    let marks: HashSet<Lit> = b.iter().copied().collect();
    a.iter().all(|l| marks.contains(l) || marks.contains(&l.neg()))
}

/// Checks that `model` satisfies every input clause in `store`, per
/// `check_line_satisfies_input_clauses` / `check_satisfied_clause`.
/// Tautological clauses are trivially satisfied and skipped.
pub fn model_satisfies_input(model: &[Lit], store: &ClauseStore, line: usize, file: &str) -> Result<(), CheckError> {
    log::trace!(target: crate::misc::log::targets::CHECKS, "checking model against every input clause");
    let marks: HashSet<Lit> = model.iter().copied().collect();
    for clause in store.input_clauses() {
        if clause.is_tautological() {
            continue;
        }
        if !clause.literals().iter().any(|l| marks.contains(l)) {
            return Err(CheckError::ModelDoesNotSatisfyClause {
                line,
                file: file.to_string(),
                is_input: true,
            });
        }
    }
    Ok(())
}

/// Checks that `model` satisfies every literal of `query`, per
/// `check_line_satisfies_query`.
pub fn model_satisfies_query(model: &[Lit], query: &[Lit], line: usize, file: &str) -> Result<(), CheckError> {
    let marks: HashSet<Lit> = model.iter().copied().collect();
    for &lit in query {
        if !marks.contains(&lit) {
            return Err(CheckError::ModelDoesNotSatisfyQuery { line, file: file.to_string(), lit: lit.value() });
        }
    }
    Ok(())
}

/// Checks that `core` is a subset of `query`, per
/// `check_core_subset_of_query`.
pub fn core_subset_of_query(core: &[Lit], query: &[Lit], line: usize, file: &str) -> Result<(), CheckError> {
    let marks: HashSet<Lit> = query.iter().copied().collect();
    for &lit in core {
        if !marks.contains(&lit) {
            return Err(CheckError::CoreNotSubsetOfQuery { line, file: file.to_string(), lit: lit.value() });
        }
    }
    Ok(())
}

/// Checks that a saved `f` failed-literal set is consistent with a proof
/// `u` core: no literal of the core may occur negated in the failed set,
/// per `check_saved_failed_literals_match_core`.
pub fn failed_consistent_with_core(core: &[Lit], failed: &[Lit], line: usize, file: &str) -> Result<(), CheckError> {
    let marks: HashSet<Lit> = core.iter().copied().collect();
    for &lit in failed {
        if marks.contains(&lit.neg()) {
            return Err(CheckError::FailedCoreMismatch { line, file: file.to_string(), lit: lit.value() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;
    use crate::types::ClauseId;

    fn lits(values: &[i32]) -> Vec<Lit> {
        values.iter().map(|&v| Lit::new(v)).collect()
    }

    #[test]
    fn detects_complementary_pair() {
        assert!(has_complementary_pair(&lits(&[1, -1, 2])));
        assert!(!has_complementary_pair(&lits(&[1, 2, 3])));
    }

    #[test]
    fn equal_sets_ignores_order() {
        assert!(equal_sets(&lits(&[1, 2, 3]), &lits(&[3, 1, 2])));
        assert!(!equal_sets(&lits(&[1, 2]), &lits(&[1, 2, 3])));
    }

    #[test]
    fn model_must_satisfy_every_input_clause() {
        let mut store = ClauseStore::new(false);
        store.insert_active(Clause::new_input(ClauseId::new(1), lits(&[1, 2])));

        assert!(model_satisfies_input(&lits(&[1]), &store, 1, "t").is_ok());
        assert!(model_satisfies_input(&lits(&[-1, -2]), &store, 1, "t").is_err());
    }

    #[test]
    fn failed_literal_conflicting_with_core_is_rejected() {
        let core = lits(&[1]);
        let failed = lits(&[-1]);
        assert!(failed_consistent_with_core(&core, &failed, 1, "t").is_err());
    }
}
