//! Lox CLI
//!
//! `lox [--ast] [script]`: run a script file, or start a prompt when no
//! script is given.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lox_diagnostic::Reporter;
use lox_eval::{stdout_handler, Interpreter};
use loxc::{exit_code, init_tracing, Outcome, Session};

fn main() -> ExitCode {
    init_tracing();

    let mut dump_ast = false;
    let mut scripts = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--ast" => dump_ast = true,
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ => scripts.push(arg),
        }
    }

    match scripts.as_slice() {
        [] => run_prompt(dump_ast),
        [path] => run_file(path, dump_ast),
        _ => {
            print_usage();
            ExitCode::from(exit_code::USAGE)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: lox [--ast] [script]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --ast    Print the syntax tree of each statement instead of running it");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) to enable logging on stderr.");
}

fn new_session() -> Session {
    let interpreter = Interpreter::builder()
        .print_handler(stdout_handler())
        .build();
    Session::new(interpreter, Reporter::stderr())
}

fn run_source(session: &mut Session, source: &str, dump_ast: bool) -> Outcome {
    if dump_ast {
        session.dump_ast(source)
    } else {
        session.run(source)
    }
}

fn run_file(path: &str, dump_ast: bool) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read '{path}': {err}");
            return ExitCode::from(exit_code::IO_ERR);
        }
    };

    let mut session = new_session();
    let outcome = run_source(&mut session, &source, dump_ast);
    ExitCode::from(outcome.exit_code())
}

/// Read-eval-print loop. Ends on end of input, `quit` or `q`.
///
/// Errors on one line never end the session; flags are reset before the
/// next line.
fn run_prompt(dump_ast: bool) -> ExitCode {
    let mut session = new_session();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::from(exit_code::IO_ERR);
        }

        let line = match lines.next() {
            None => break,
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("error: could not read input: {err}");
                return ExitCode::from(exit_code::IO_ERR);
            }
        };

        match line.trim() {
            "quit" | "q" => break,
            "" => continue,
            _ => {}
        }

        run_source(&mut session, &line, dump_ast);
        session.reset_errors();
    }

    ExitCode::SUCCESS
}
