/*!
Runtime configuration, per spec.md §4.7 (mode table) and §6 (CLI flags).

Smaller in shape than `otter_sat::config::Config` (which carries a dozen
tunable `ConfigOption<T>` fields for the solver's heuristics), since a
checker's configuration surface is just the verification mode plus a
handful of CLI switches.
*/

/// Governs header strictness and how a missing `m`/`u` conclusion in the
/// proof stream is treated, per spec.md §4.7's mode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Headers mandatory in both streams; a missing `m`/`u` is rejected.
    Pedantic,

    /// Headers optional; `m`/`u` mandatory in the proof stream.
    #[default]
    Strict,

    /// Headers optional; a missing `m`/`u` is tolerated, reflected in the
    /// exit code.
    Relaxed,
}

impl Mode {
    pub fn requires_headers(self) -> bool {
        matches!(self, Mode::Pedantic)
    }

    pub fn tolerates_missing_conclusion(self) -> bool {
        matches!(self, Mode::Relaxed)
    }
}

/// The checker's full configuration, populated from CLI arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,

    /// `-n`/`--no-reuse`: once an identifier is freed it may never be
    /// reassigned to a fresh clause.
    pub no_reuse: bool,

    /// `-q`/`--quiet`: suppress the `c ...` progress messages spec.md §6
    /// otherwise prints to stdout.
    pub quiet: bool,

    /// `-v`/`--verbose`, repeatable.
    pub verbosity: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config { mode: Mode::default(), no_reuse: false, quiet: false, verbosity: 0 }
    }
}
