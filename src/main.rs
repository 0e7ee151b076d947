// mallow - A small Lisp interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use mallow_core::Interpreter;
use mallow_parser::MallowVal;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Mallow v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // Create interpreter with builtins and prelude
    let interp = match Interpreter::new() {
        Ok(interp) => interp,
        Err(e) => {
            eprintln!("Failed to load prelude: {}", e);
            process::exit(1);
        }
    };

    // If a file is provided, load it; otherwise start REPL
    if let Some((file, script_args)) = args.get(1..).and_then(<[String]>::split_first) {
        run_file(&interp, file, script_args);
    } else {
        run_repl(&interp);
    }
}

/// Load a source file with the remaining arguments bound to *ARGV*
fn run_file(interp: &Interpreter, file: &str, script_args: &[String]) {
    let argv = script_args
        .iter()
        .map(|arg| MallowVal::string(arg.as_str()))
        .collect();
    interp.define("*ARGV*", MallowVal::list(argv));

    if let Err(e) = interp.load_file(file) {
        log::warn!("error loading '{}': {}", file, e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the interactive REPL
fn run_repl(interp: &Interpreter) {
    println!("Mallow v{}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("user> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Write error: {}", e);
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Read error: {}", e);
                break;
            }
            None => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        // Errors are reported and the loop resumes with the next line
        match interp.rep(&line) {
            Ok(printed) if printed.is_empty() => {}
            Ok(printed) => println!("{}", printed),
            Err(e) => {
                log::warn!("{}: {}", e.kind_name(), e);
                eprintln!("Error: {}", e);
            }
        }
    }
}
