/*!
Counters and the shutdown summary, per spec.md §4.8.

The column layout of [Stats]'s `Display` impl mirrors
`original_source/lidrup-check.c`'s `print_statistics`: a label, a raw
count, and a derived percentage or rate against some other counter.
*/

use std::time::Instant;

/// Counters incremented at the call sites spec.md §4.8 names.
#[derive(Debug)]
pub struct Stats {
    pub added: u64,
    pub inputs: u64,
    pub lemmas: u64,
    pub deleted: u64,
    pub weakened: u64,
    pub restored: u64,
    pub queries: u64,
    pub conclusions: u64,
    pub models: u64,
    pub cores: u64,
    pub checks: u64,
    pub resolutions: u64,
    pub imported: u64,

    started: Instant,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            added: 0,
            inputs: 0,
            lemmas: 0,
            deleted: 0,
            weakened: 0,
            restored: 0,
            queries: 0,
            conclusions: 0,
            models: 0,
            cores: 0,
            checks: 0,
            resolutions: 0,
            imported: 0,
            started: Instant::now(),
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

fn average(part: u64, over: u64) -> f64 {
    if over == 0 {
        0.0
    } else {
        part as f64 / over as f64
    }
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn wall_clock_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wall = self.wall_clock_seconds();
        writeln!(f, "c {:<20} {:>20} {:>12.2} per variable", "added:", self.added, average(self.added, self.imported))?;
        writeln!(
            f,
            "c {:<20} {:>20} {:>12.2} % queries",
            "conclusions:",
            self.conclusions,
            percent(self.conclusions, self.queries)
        )?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % conclusions", "cores:", self.cores, percent(self.cores, self.conclusions))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % lemmas", "checks:", self.checks, percent(self.lemmas, self.checks))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % added", "deleted:", self.deleted, percent(self.deleted, self.added))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % added", "inputs:", self.inputs, percent(self.inputs, self.added))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % added", "lemmas:", self.lemmas, percent(self.lemmas, self.added))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % conclusions", "models:", self.models, percent(self.models, self.conclusions))?;
        writeln!(
            f,
            "c {:<20} {:>20} {:>12.2} per check",
            "resolutions:",
            self.resolutions,
            average(self.resolutions, self.checks)
        )?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} per second", "queries:", self.queries, average(self.queries, wall as u64))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % weakened", "restored:", self.restored, percent(self.restored, self.weakened))?;
        writeln!(f, "c {:<20} {:>20} {:>12.2} % inputs", "weakened:", self.weakened, percent(self.weakened, self.inputs))?;
        writeln!(f, "c")?;
        writeln!(f, "c {:<20} {:>20.2} seconds {:>4.0} % wall-clock", "process-time:", wall, 100.0)?;
        writeln!(f, "c {:<20} {:>20.2} seconds  100 %", "wall-clock-time:", wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent(3, 0), 0.0);
    }

    #[test]
    fn display_does_not_panic_on_fresh_stats() {
        let stats = Stats::new();
        let rendered = format!("{stats}");
        assert!(rendered.contains("added:"));
    }
}
