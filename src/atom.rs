/*!
The variable ("atom") table, per spec.md §4.3.

Grows by doubling as larger variables are imported, mirroring the
resize-on-demand discipline of `otter_sat::db::atom::AtomDB` and its
per-atom valuation array (`otter_sat::db::atom::valuation`). Unlike the
solver's `AtomDB`, which tracks activity and decision levels, this table
only needs to remember whether a variable has been seen before: the
trail itself (see [crate::justify]) carries the current value.
*/

use crate::types::Lit;

/// Tracks which variables have appeared in the interactions or proof
/// stream so far, growing its backing storage by doubling.
#[derive(Debug, Default)]
pub struct AtomTable {
    /// `imported[v]` is `true` once variable `v` has been seen, for `v` in
    /// `1..=max_var`. Index `0` is unused padding so variables can index
    /// directly.
    imported: Vec<bool>,
}

impl AtomTable {
    /// Builds an empty table.
    pub fn new() -> Self {
        AtomTable { imported: vec![false] }
    }

    /// The largest variable imported so far, or `0` if none has been.
    pub fn max_var(&self) -> u32 {
        self.imported.len() as u32 - 1
    }

    /// Records that `lit`'s variable has been seen, growing the backing
    /// storage by doubling if needed.
    pub fn import(&mut self, lit: Lit) {
        log::trace!(target: crate::misc::log::targets::ATOM_TABLE, "importing variable {}", lit.var());
        let var = lit.var() as usize;
        if var >= self.imported.len() {
            let mut new_len = self.imported.len().max(1);
            while new_len <= var {
                new_len *= 2;
            }
            self.imported.resize(new_len, false);
        }
        self.imported[var] = true;
    }

    /// Whether `var` has been imported.
    pub fn is_known(&self, var: u32) -> bool {
        (var as usize) < self.imported.len() && self.imported[var as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_grows_and_records() {
        let mut table = AtomTable::new();
        assert_eq!(table.max_var(), 0);

        table.import(Lit::new(5));
        assert!(table.is_known(5));
        assert!(!table.is_known(3));
        assert!(table.max_var() >= 5);
    }

    #[test]
    fn import_is_idempotent() {
        let mut table = AtomTable::new();
        table.import(Lit::new(-7));
        table.import(Lit::new(7));
        assert!(table.is_known(7));
    }
}
