/*!
A checker for incremental DRUP proofs in the `lidrup` dialect.

# Orientation

The crate is organised around the pipeline a single invocation drives:

- [reader] turns a file into a stream of characters with line/column
  tracking.
- [parser] turns that character stream into [parser::Record]s: headers,
  status lines, and the `i`/`l`/`d`/`w`/`r`/`q`/`a`/`m`/`v`/`u`/`f`
  record kinds.
- [atom] remembers which variables have been seen.
- [clause] and [store] hold the clause set, with weakened clauses kept
  alive (but inactive) until their owning query concludes.
- [justify] re-derives each lemma and unsatisfiable core by unit
  propagation or an explicit resolution chain, per §4.5.
- [checks] carries the set-level consistency checks of §4.6: model
  satisfaction, core and failed-assumption subset tests.
- [fsm] drives the dual-stream (interactions + proof) or single-stream
  (proof only) state machine of §4.7, producing a [fsm::Verdict].
- [stats] accumulates the counters printed on exit.
- [config] and [cli] turn command-line arguments into a run.

# Examples

```
use lidrup_check::config::Config;
use lidrup_check::fsm::Checker;

let checker = Checker::new(Config::default());
assert_eq!(checker.stats.checks, 0);
```

# Guiding principles

**Modularity.** Each pipeline stage above is a separate module with a
narrow interface to its neighbours; [fsm::Checker] is the only thing
that touches all of them at once.

**Verification.** A lemma or core is never taken on the proof's say-so:
[justify] re-derives it, and [checks] re-checks every model and core
against the clauses actually seen, independent of what the proof
author claims.

**Simple efficiency.** The clause store is a stable arena indexed by
slot, so clause identifiers never need remapping; the trail used for
unit propagation is reused across every check rather than rebuilt.

# Logs

Diagnostic tracing is organised by pipeline stage; see [misc::log::targets]
for the target name used at each stage.
*/

pub mod atom;
pub mod checks;
pub mod clause;
pub mod cli;
pub mod config;
pub mod fsm;
pub mod justify;
pub mod misc;
pub mod parser;
pub mod reader;
pub mod stats;
pub mod store;
pub mod types;
