//! CLI that dumps the tokens of a Lox script, or of each line typed at
//! an interactive prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use loxscan::{Scan, scan};

// sysexits(3) codes.
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.as_slice() {
        [_] => run_prompt(),
        [_, path] if path == "--help" || path == "-h" => {
            eprintln!("Usage: loxscan [script]");
            ExitCode::SUCCESS
        }
        [_, path] => run_file(path),
        _ => {
            eprintln!("Usage: loxscan [script]");
            ExitCode::from(EX_USAGE)
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::from(EX_NOINPUT);
        }
    };

    let result = run(&content);
    if let Err(e) = print_tokens(&result) {
        eprintln!("{e}");
        return ExitCode::from(EX_IOERR);
    }

    if result.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EX_DATAERR)
    }
}

fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("{e}");
            return ExitCode::from(EX_IOERR);
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("{e}");
                return ExitCode::from(EX_IOERR);
            }
            None => return ExitCode::SUCCESS,
        };

        // Each line gets a fresh scanner; nothing carries over.
        let result = run(&line);
        if let Err(e) = print_tokens(&result) {
            eprintln!("{e}");
            return ExitCode::from(EX_IOERR);
        }
    }
}

/// Scan `source` and echo its diagnostics to stderr in order.
fn run(source: &str) -> Scan {
    let result = scan(source);
    for error in &result.errors {
        eprintln!("{error}");
    }
    result
}

fn print_tokens(result: &Scan) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for token in &result.tokens {
        writeln!(out, "Token: `{}', Type: {}", token.lexeme, token.kind)?;
    }
    out.flush()
}
