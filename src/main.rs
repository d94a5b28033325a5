// volt - The Volt programming language CLI
// Copyright (c) 2026 The Volt Authors. MIT licensed.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use volt_core::{Interpreter, Value};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Volt v{}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    if args.len() > 1 {
        run_file(&args[1]);
    } else {
        run_repl();
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  volt <file.volt>    Run a Volt program");
    println!("  volt                Start the interactive REPL");
    println!("  volt --version      Show version");
}

/// Run a single source file. Exits non-zero on a syntax error or an
/// uncaught runtime error.
fn run_file(file_path: &str) {
    let path = Path::new(file_path);
    match path.extension().and_then(|e| e.to_str()) {
        Some("volt") => {}
        Some(ext) => {
            eprintln!(
                "Error: unsupported file extension '.{}' for '{}'",
                ext, file_path
            );
            process::exit(1);
        }
        None => {
            eprintln!(
                "Error: file '{}' has no extension (expected .volt)",
                file_path
            );
            process::exit(1);
        }
    }

    let interp = Interpreter::new();
    if let Err(e) = interp.run_file(file_path) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// The interactive REPL. Lines whose braces have not balanced yet keep
/// reading continuation lines, so blocks can be typed across lines.
fn run_repl() {
    println!("Volt v{}", env!("CARGO_PKG_VERSION"));

    let interp = Interpreter::new();

    loop {
        print!("volt> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let mut source = line.to_string();
        let mut depth = brace_depth(line);
        while depth > 0 {
            print!("  ... ");
            io::stdout().flush().unwrap();
            let mut continuation = String::new();
            match io::stdin().read_line(&mut continuation) {
                Ok(0) => {
                    println!();
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Read error: {}", e);
                    break;
                }
            }
            depth += brace_depth(&continuation);
            source.push('\n');
            source.push_str(continuation.trim_end());
        }

        match interp.run(&source) {
            Ok(Value::Null) => {}
            Ok(value) => match volt_core::stringify(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("{}", e),
            },
            Err(e) => eprintln!("{}", e),
        }
    }
}

/// Net `{`/`}` balance of a line, used for multi-line REPL input.
fn brace_depth(line: &str) -> i32 {
    let mut depth = 0;
    for ch in line.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth
}
