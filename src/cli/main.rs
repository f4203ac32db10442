//! Entry point: wires CLI arguments to a [lidrup_check::fsm::Checker] run.

mod parse_args;

use lidrup_check::fsm::Checker;
use lidrup_check::parser::Parser;
use lidrup_check::reader::LineReader;
use parse_args::{parse_args, print_help};

fn open_parser(path: &str, is_interactions: bool) -> Parser {
    match LineReader::open(path) {
        Ok(reader) => Parser::new(reader, is_interactions),
        Err(err) => {
            eprintln!("lidrup_check: cannot open '{path}': {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, paths, options) = parse_args(&args);

    if options.help {
        print_help();
        std::process::exit(0);
    }

    if options.version {
        println!("lidrup_check {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let Some(proof_path) = paths.proof else {
        eprintln!("lidrup_check: missing proof file argument");
        print_help();
        std::process::exit(1);
    };

    let mut checker = Checker::new(config.clone());

    let verdict = match paths.interactions {
        Some(interactions_path) => {
            let mut interactions = open_parser(&interactions_path, true);
            let mut proof = open_parser(&proof_path, false);
            checker.run_dual(&mut interactions, &mut proof)
        }
        None => {
            let mut proof = open_parser(&proof_path, false);
            checker.run_single(&mut proof)
        }
    };

    match verdict {
        Ok(verdict) => {
            if !config.quiet {
                print!("{}", checker.stats);
            }
            println!("s VERIFIED");
            std::process::exit(verdict.exit_code());
        }
        Err(err) => {
            eprintln!("{err}");
            if !config.quiet {
                print!("{}", checker.stats);
            }
            println!("s FAILED");
            std::process::exit(1);
        }
    }
}
