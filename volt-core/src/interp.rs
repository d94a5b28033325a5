// volt-core - Interpreter entry point
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The `Interpreter` struct - the main entry point for running Volt code.
//!
//! Holds the global environment (whose root carries the runtime context)
//! and keeps state across `run` calls, which the REPL relies on.

use std::path::Path;

use volt_parser::Parser;

use crate::context::{Ctx, IoHandler};
use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval;
use crate::value::Value;

/// The Volt interpreter.
///
/// **Not thread-safe**: values and environments use `Rc`/`RefCell`
/// internally. Create one interpreter per thread if needed.
///
/// # Example
///
/// ```
/// use volt_core::Interpreter;
///
/// let interp = Interpreter::new();
/// let result = interp.run("set x = 2\nx * 21").unwrap();
/// assert_eq!(result.to_string(), "42");
/// ```
pub struct Interpreter {
    env: Env,
}

impl Interpreter {
    /// Create an interpreter bound to process stdio.
    pub fn new() -> Self {
        Interpreter { env: Env::new() }
    }

    /// Create an interpreter with a custom I/O handler (tests, embedding).
    pub fn with_io(io: Box<dyn IoHandler>) -> Self {
        Interpreter {
            env: Env::with_ctx(Ctx::with_io(io)),
        }
    }

    /// The global environment.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The runtime context.
    pub fn ctx(&self) -> Ctx {
        self.env.ctx()
    }

    /// Parse and evaluate source code, returning the last statement's
    /// value. Parse errors are fatal and reported before execution starts.
    pub fn run(&self, source: &str) -> Result<Value> {
        let program =
            Parser::parse_program(source).map_err(|e| Error::Parse(e.to_string()))?;
        eval::eval_program(&program, &self.env)
    }

    /// Read and run a source file.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::io("read file", Some(path.display().to_string()), e))?;
        self.run(&source)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
