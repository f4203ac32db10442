/*!
The clause store, per spec.md §4.4.

Clauses live in a stable arena (`Vec<Option<Clause>>`) indexed by arena
slot, so that moving a clause between the active and inactive (weakened)
index never touches its literal vector — see Testable Property 7. The
two indices themselves are `std::collections::HashMap<ClauseId, usize>`,
which Design Notes §9 of the underlying specification explicitly permits
in place of a hand-rolled open-addressing table with tombstones, provided
erase is constant-time and stable; `HashMap::remove`/`insert` satisfy
that. The slot-reuse list mirrors the `empty_keys` pool in
`otter_sat::db::clause::store::ClauseDB::store_long`.
*/

use std::collections::{HashMap, HashSet};

use crate::clause::Clause;
use crate::types::err::LineError;
use crate::types::ClauseId;

/// Owns every clause ever allocated and the active/inactive indices over
/// them.
#[derive(Debug, Default)]
pub struct ClauseStore {
    arena: Vec<Option<Clause>>,
    empty_slots: Vec<usize>,

    active: HashMap<ClauseId, usize>,
    inactive: HashMap<ClauseId, usize>,

    input_ids: Vec<ClauseId>,

    /// Identifiers that have been used, for collision detection when
    /// identifier reuse is disabled.
    used: HashSet<i64>,

    reuse_allowed: bool,
}

impl ClauseStore {
    pub fn new(reuse_allowed: bool) -> Self {
        ClauseStore { reuse_allowed, ..Default::default() }
    }

    /// Allocates arena storage for `clause` and returns its slot, without
    /// inserting it into either index.
    fn allocate(&mut self, clause: Clause) -> usize {
        if let Some(slot) = self.empty_slots.pop() {
            self.arena[slot] = Some(clause);
            slot
        } else {
            self.arena.push(Some(clause));
            self.arena.len() - 1
        }
    }

    /// Stores `clause` as active, recording it as an input clause if
    /// `clause.is_input()`.
    pub fn insert_active(&mut self, clause: Clause) {
        let id = clause.id();
        let is_input = clause.is_input();
        log::trace!(target: crate::misc::log::targets::CLAUSE_DB, "inserting {id} active, input={is_input}");
        let slot = self.allocate(clause);
        self.active.insert(id, slot);
        self.used.insert(id.value());
        if is_input {
            self.input_ids.push(id);
        }
    }

    /// Moves an active clause into the inactive (weakened) index.
    pub fn weaken(&mut self, id: ClauseId, line: usize, file: &str) -> Result<(), LineError> {
        match self.active.remove(&id) {
            Some(slot) => {
                log::trace!(target: crate::misc::log::targets::CLAUSE_DB, "weakening {id}");
                self.inactive.insert(id, slot);
                Ok(())
            }
            None => Err(LineError::ClauseNotFound {
                line,
                file: file.to_string(),
                id,
                op: "weaken",
            }),
        }
    }

    /// Moves an inactive clause back into the active index.
    pub fn restore(&mut self, id: ClauseId, line: usize, file: &str) -> Result<(), LineError> {
        match self.inactive.remove(&id) {
            Some(slot) => {
                self.active.insert(id, slot);
                Ok(())
            }
            None => Err(LineError::ClauseNotFound {
                line,
                file: file.to_string(),
                id,
                op: "restore",
            }),
        }
    }

    /// Removes an active clause entirely, freeing its arena slot unless it
    /// is an input clause (input clauses are never freed, only weakened).
    pub fn delete(&mut self, id: ClauseId, line: usize, file: &str) -> Result<(), LineError> {
        match self.active.remove(&id) {
            Some(slot) => {
                self.free_unless_input(id, slot);
                Ok(())
            }
            None => Err(LineError::ClauseNotFound {
                line,
                file: file.to_string(),
                id,
                op: "delete",
            }),
        }
    }

    fn free_unless_input(&mut self, id: ClauseId, slot: usize) {
        if self.input_ids.contains(&id) {
            return;
        }
        self.arena[slot] = None;
        self.empty_slots.push(slot);
    }

    /// Looks up a clause by identifier, active or inactive.
    pub fn find(&self, id: ClauseId) -> Option<&Clause> {
        let slot = self.active.get(&id).or_else(|| self.inactive.get(&id))?;
        self.arena[*slot].as_ref()
    }

    /// Whether `id` currently names an active clause.
    pub fn is_active(&self, id: ClauseId) -> bool {
        self.active.contains_key(&id)
    }

    /// Whether `id` currently names a weakened (inactive) clause.
    pub fn is_inactive(&self, id: ClauseId) -> bool {
        self.inactive.contains_key(&id)
    }

    /// Iterates every currently active clause.
    pub fn active_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.active.values().filter_map(move |slot| self.arena[*slot].as_ref())
    }

    /// Iterates every input clause, active or weakened.
    pub fn input_clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.input_ids.iter().filter_map(move |id| self.find(*id))
    }

    /// Whether `id` has already been assigned to some clause, ever.
    pub fn is_used(&self, id: ClauseId) -> bool {
        self.used.contains(&id.value())
    }

    /// Checks a fresh identifier for reuse, per the configured policy.
    pub fn check_fresh(&self, id: ClauseId, line: usize, file: &str) -> Result<(), LineError> {
        if self.is_used(id) && (!self.reuse_allowed || self.active.contains_key(&id) || self.inactive.contains_key(&id)) {
            return Err(LineError::IdentifierAlreadyUsed { line, file: file.to_string(), id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> ClauseId {
        ClauseId::new(n)
    }

    #[test]
    fn weaken_then_restore_round_trips() {
        let mut store = ClauseStore::new(false);
        store.insert_active(Clause::new(id(1), vec![]));
        store.weaken(id(1), 0, "t").unwrap();
        assert!(store.is_inactive(id(1)));
        assert!(!store.is_active(id(1)));
        store.restore(id(1), 0, "t").unwrap();
        assert!(store.is_active(id(1)));
    }

    #[test]
    fn delete_frees_a_non_input_clause() {
        let mut store = ClauseStore::new(false);
        store.insert_active(Clause::new(id(1), vec![]));
        store.insert_active(Clause::new_input(id(2), vec![]));

        store.delete(id(1), 0, "t").unwrap();
        assert!(store.find(id(1)).is_none());
        assert!(store.find(id(2)).is_some());
    }

    #[test]
    fn weaken_missing_clause_errors() {
        let mut store = ClauseStore::new(false);
        assert!(store.weaken(id(9), 3, "t").is_err());
    }

    #[test]
    fn reuse_is_rejected_unless_allowed() {
        let mut store = ClauseStore::new(false);
        store.insert_active(Clause::new(id(1), vec![]));
        store.delete(id(1), 0, "t").unwrap();
        assert!(store.check_fresh(id(1), 1, "t").is_err());

        let mut reusing = ClauseStore::new(true);
        reusing.insert_active(Clause::new(id(1), vec![]));
        reusing.delete(id(1), 0, "t").unwrap();
        assert!(reusing.check_fresh(id(1), 1, "t").is_ok());
    }
}
