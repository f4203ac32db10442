//! Command line argument parsing, per spec.md §6.

use lidrup_check::config::{Config, Mode};

/// Paths supplied on the command line: either a single proof file, or an
/// interactions file followed by a proof file.
#[derive(Debug, Default)]
pub struct Paths {
    pub interactions: Option<String>,
    pub proof: Option<String>,
}

/// Flags that govern the CLI's own behaviour rather than the checker's,
/// so they are kept out of [Config].
#[derive(Debug, Default)]
pub struct CliOptions {
    pub help: bool,
    pub version: bool,
}

const HELP: &str = "\
usage: lidrup_check [options] <icnf> <lidrup>
       lidrup_check [options] <lidrup>

options:
  -h, --help        print this message and exit
  -q, --quiet       suppress informational output
  -v, --verbose     increase verbosity (repeatable)
  -l, --logging     enable debug logging (debug builds only)
  -n, --no-reuse    reject reuse of a freed clause identifier
      --strict      headers optional, m/u mandatory (default)
      --relaxed     tolerate a missing m/u, exit 2 instead of 0
      --pedantic    headers mandatory, m/u mandatory
      --version     print the version and exit";

/// Parses `args` (excluding the program name) into a [Config], the
/// positional file [Paths], and CLI-only [CliOptions].
///
/// On an unrecognised or malformed argument a message is printed to
/// stdout and the process exits with code `1`, matching the rest of the
/// checker's fatal-error handling.
pub fn parse_args(args: &[String]) -> (Config, Paths, CliOptions) {
    let mut config = Config::default();
    let mut paths = Paths::default();
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-q" | "--quiet" => config.quiet = true,
            "-v" | "--verbose" => config.verbosity += 1,
            "-l" | "--logging" => {
                // debug-only switch; logging is wired up via RUST_LOG regardless.
            }
            "-n" | "--no-reuse" => config.no_reuse = true,
            "--strict" => config.mode = Mode::Strict,
            "--relaxed" => config.mode = Mode::Relaxed,
            "--pedantic" => config.mode = Mode::Pedantic,
            "--version" => options.version = true,
            other if other.starts_with('-') => {
                println!("Unable to parse argument: {other:?}");
                std::process::exit(1);
            }
            positional => {
                if paths.interactions.is_none() && paths.proof.is_none() {
                    paths.interactions = Some(positional.to_string());
                } else if paths.proof.is_none() {
                    paths.proof = Some(positional.to_string());
                } else {
                    println!("Unexpected extra argument: {positional:?}");
                    std::process::exit(1);
                }
            }
        }
    }

    // With a single positional path the first slot actually holds the
    // proof stream: `program [options] <lidrup>`.
    if paths.proof.is_none() {
        std::mem::swap(&mut paths.interactions, &mut paths.proof);
    }

    (config, paths, options)
}

pub fn print_help() {
    println!("{HELP}");
}
