// volt-core - Common test utilities
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Shared helpers for Volt integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`run_str`] - run a program, returning the lines `show` printed
//! - [`run_with_input`] - same, with queued `ask`/`input` lines
//! - [`eval_value`] - run a program, returning the last statement's value
//!
//! # Macros
//!
//! - [`assert_shows!`] - assert that a program prints the expected lines
//! - [`assert_run_err!`] - assert that a program fails with a message
//!   containing a pattern

pub use volt_core::{CaptureIo, Interpreter, Value};

/// Run a Volt program in a fresh interpreter with captured I/O.
///
/// # Returns
///
/// The lines written by `show`/`print`, or the error message.
pub fn run_str(source: &str) -> Result<Vec<String>, String> {
    run_with_input(source, &[])
}

/// Run a Volt program with queued input lines for `ask`/`input`.
pub fn run_with_input(source: &str, input: &[&str]) -> Result<Vec<String>, String> {
    let io = CaptureIo::new();
    for line in input {
        io.push_input(*line);
    }
    let interp = Interpreter::with_io(Box::new(io.clone()));
    interp.run(source).map_err(|e| e.to_string())?;
    Ok(io.output())
}

/// Run a Volt program and return the value of its last statement.
#[allow(dead_code)]
pub fn eval_value(source: &str) -> Result<Value, String> {
    let interp = Interpreter::with_io(Box::new(CaptureIo::new()));
    interp.run(source).map_err(|e| e.to_string())
}

/// Assert that running `source` prints exactly the expected lines.
///
/// # Example
///
/// ```ignore
/// assert_shows!("show 1 + 2", ["3"]);
/// ```
#[macro_export]
macro_rules! assert_shows {
    ($source:expr, [$($line:expr),* $(,)?]) => {
        let result = $crate::common::run_str($source);
        assert!(
            result.is_ok(),
            "Failed to run {:?}: {}",
            $source,
            result.err().unwrap()
        );
        let expected: Vec<String> = vec![$($line.to_string()),*];
        assert_eq!(result.unwrap(), expected, "Output of {:?} did not match", $source);
    };
}

/// Assert that running `source` fails with a message containing `pattern`.
///
/// # Example
///
/// ```ignore
/// assert_run_err!("show 1 / 0", "Division by zero");
/// ```
#[macro_export]
macro_rules! assert_run_err {
    ($source:expr, $pattern:expr) => {
        let result = $crate::common::run_str($source);
        assert!(
            result.is_err(),
            "Expected error for {:?} but got {:?}",
            $source,
            result.ok()
        );
        let message = result.unwrap_err();
        assert!(
            message.contains($pattern),
            "Error message '{}' does not contain '{}'",
            message,
            $pattern
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_str_captures_show_lines() {
        assert_eq!(run_str("show 42").unwrap(), vec!["42".to_string()]);
    }

    #[test]
    fn run_str_reports_errors() {
        assert!(run_str("show missing").is_err());
    }

    #[test]
    fn run_with_input_feeds_ask() {
        let output = run_with_input("ask \"? \" -> name\nshow name", &["Ada"]).unwrap();
        assert_eq!(output, vec!["Ada".to_string()]);
    }
}
