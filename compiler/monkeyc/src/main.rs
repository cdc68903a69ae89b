//! Monkey interpreter CLI.

use monkeyc::commands::{lex_file, parse_file, parse_options, report_error, run_file, CliError};
use monkeyc::{repl, Session};
use std::io;

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args, |key| std::env::var(key).ok()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match options.positional.as_slice() {
        [] => {
            println!("Monkey {} (Ctrl-D to exit)", env!("CARGO_PKG_VERSION"));
            let session = Session::with_config(options.config);
            repl::start_with(session, io::stdin().lock(), &mut out).map_err(CliError::from)
        }
        [command, rest @ ..] => match (command.as_str(), rest) {
            ("run", [path]) => run_file(path, options.config, &mut out),
            ("lex", [path]) => lex_file(path, &mut out),
            ("parse", [path]) => parse_file(path, &mut out),
            ("run" | "lex" | "parse", _) => {
                eprintln!("Usage: monkey {command} <file.monkey>");
                std::process::exit(1);
            }
            ("help" | "--help" | "-h", _) => {
                print_usage();
                return;
            }
            ("version" | "--version" | "-V", _) => {
                println!("monkey {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            _ => {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        },
    };

    if let Err(err) = result {
        // Nothing more useful to do if stderr itself is gone.
        let _ = report_error(&mut io::stderr(), &err);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Monkey interpreter");
    eprintln!();
    eprintln!("Usage: monkey [options] [command]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  (none)               Start the interactive REPL");
    eprintln!("  run <file>           Evaluate a file and print its result");
    eprintln!("  lex <file>           Print the token stream of a file");
    eprintln!("  parse <file>         Print the parsed program of a file");
    eprintln!("  help                 Show this message");
    eprintln!("  version              Show the version");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict-arity       Reject calls with the wrong number of arguments");
    eprintln!("  --max-depth=<n>      Call depth limit, or 'none' (default: 10000)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MONKEY_MAX_DEPTH     Same as --max-depth");
    eprintln!("  MONKEY_STRICT_ARITY  Same as --strict-arity when set to 1");
    eprintln!("  RUST_LOG             Enable tracing output (e.g. monkey_eval=debug)");
    eprintln!("  MONKEY_LOG_TREE      Set to 1 for hierarchical tracing output");
}
