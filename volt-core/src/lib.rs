// volt-core - Runtime and evaluator for the Volt programming language
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! # volt-core
//!
//! Runtime and evaluator for the Volt programming language: the value
//! model, lexical environments with closures, the tree-walking evaluator,
//! the object system, built-in method tables, and the standard modules
//! (`math`, `random`, `time`, `file`).
//!
//! # Quick Start
//!
//! ```
//! use volt_core::{CaptureIo, Interpreter};
//!
//! let io = CaptureIo::new();
//! let interp = Interpreter::with_io(Box::new(io.clone()));
//!
//! interp
//!     .run("func square(x) { return x * x }\nshow square(7)")
//!     .unwrap();
//!
//! assert_eq!(io.output(), vec!["49".to_string()]);
//! ```
//!
//! # Core Components
//!
//! - [`Interpreter`] - parse + evaluate entry point
//! - [`Value`] - the runtime value model
//! - [`Env`] - lexical environments (closures capture these by handle)
//! - [`Ctx`] - injected runtime state: I/O handler, RNG, clock
//! - [`Error`] - runtime errors and control-flow signals

pub mod builtins;
pub mod context;
pub mod env;
pub mod error;
pub mod eval;
pub mod interp;
pub mod methods;
pub mod modules;
pub mod value;

pub use context::{CaptureIo, Ctx, IoHandler, StdIo};
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{call_value, eval_expr, eval_program, eval_stmt, stringify};
pub use interp::Interpreter;
pub use value::{Value, VoltClass, VoltFn, VoltInstance, VoltModule};
