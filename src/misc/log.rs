/*!
Miscelanous items related to [logging](log).

Mirrors `otter_sat::misc::log::targets`: one string constant per pipeline
stage, so a user can filter diagnostic traces with e.g.
`RUST_LOG=clause_db=trace` without the crate needing to know anything
about which `log` backend is installed.
*/

pub mod targets {
    pub const READER: &str = "reader";
    pub const PARSER: &str = "parser";
    pub const ATOM_TABLE: &str = "atom_table";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const JUSTIFY: &str = "justify";
    pub const CHECKS: &str = "checks";
    pub const FSM: &str = "fsm";
    pub const STATS: &str = "stats";
}
