// volt-core - Runtime context
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Injected runtime state: the output/input handler used by `show`, `ask`
//! and `print`, the RNG backing the `random` module, and the monotonic
//! clock origin used by `time.elapsed`.
//!
//! The context lives on the root environment; evaluation code reaches it
//! through `Env::ctx()`.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::time::Instant;

use crate::error::{Error, Result};

// LCG constants (same as used in glibc)
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Where `show`/`print` write and where `ask`/`input` read from.
///
/// The interpreter never touches stdio directly, so embedders and tests can
/// substitute their own handler.
pub trait IoHandler {
    /// Write one line of output (the newline is appended by the handler).
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write `prompt` without a newline, then read one line of input with
    /// the trailing newline stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Standard I/O handler: stdout/stdin of the host process.
#[derive(Debug, Default)]
pub struct StdIo;

impl IoHandler for StdIo {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Capturing I/O handler for tests and embedding: collects output lines and
/// serves input lines from a queue. Cloning shares the underlying buffers.
#[derive(Debug, Clone, Default)]
pub struct CaptureIo {
    output: Rc<RefCell<Vec<String>>>,
    input: Rc<RefCell<VecDeque<String>>>,
}

impl CaptureIo {
    pub fn new() -> Self {
        CaptureIo::default()
    }

    /// Queue a line to be returned by the next `read_line`.
    pub fn push_input(&self, line: impl Into<String>) {
        self.input.borrow_mut().push_back(line.into());
    }

    /// The output lines written so far.
    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }
}

impl IoHandler for CaptureIo {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.input.borrow_mut().pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no queued input")
        })
    }
}

/// The runtime context injected into the evaluator at construction.
#[derive(Clone)]
pub struct Ctx {
    inner: Rc<CtxInner>,
}

struct CtxInner {
    io: RefCell<Box<dyn IoHandler>>,
    /// Persistent RNG state, seeded lazily from VOLT_SEED or system time.
    rng_state: Cell<u64>,
    rng_seeded: Cell<bool>,
    /// Monotonic origin for `time.elapsed`.
    clock: Instant,
}

impl std::fmt::Debug for Ctx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ctx").finish_non_exhaustive()
    }
}

impl Ctx {
    /// Create a context backed by process stdio.
    pub fn new() -> Self {
        Ctx::with_io(Box::new(StdIo))
    }

    /// Create a context with a custom I/O handler.
    pub fn with_io(io: Box<dyn IoHandler>) -> Self {
        Ctx {
            inner: Rc::new(CtxInner {
                io: RefCell::new(io),
                rng_state: Cell::new(0),
                rng_seeded: Cell::new(false),
                clock: Instant::now(),
            }),
        }
    }

    /// Whether two handles refer to the same context.
    pub fn same_as(&self, other: &Ctx) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Write one output line (used by `show` and `print`).
    pub fn show(&self, text: &str) -> Result<()> {
        self.inner
            .io
            .borrow_mut()
            .write_line(text)
            .map_err(|e| Error::io("write output", None, e))
    }

    /// Prompt and read one input line (used by `ask` and `input`).
    pub fn ask(&self, prompt: &str) -> Result<String> {
        self.inner
            .io
            .borrow_mut()
            .read_line(prompt)
            .map_err(|e| Error::io("read input", None, e))
    }

    /// Reseed the RNG deterministically.
    pub fn seed_rng(&self, seed: u64) {
        self.inner.rng_state.set(seed);
        self.inner.rng_seeded.set(true);
    }

    /// Next random u64, advancing the LCG state. Seeds lazily from the
    /// VOLT_SEED environment variable when set, else from system time.
    pub fn rand_u64(&self) -> u64 {
        if !self.inner.rng_seeded.get() {
            let seed = match std::env::var("VOLT_SEED")
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
            {
                Some(seed) => seed,
                None => {
                    use std::time::{SystemTime, UNIX_EPOCH};
                    SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .map(|d| d.as_nanos() as u64)
                        .unwrap_or(0x9E3779B97F4A7C15)
                }
            };
            self.inner.rng_state.set(seed);
            self.inner.rng_seeded.set(true);
        }
        let next = self
            .inner
            .rng_state
            .get()
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.inner.rng_state.set(next);
        next
    }

    /// Random f64 in [0, 1).
    pub fn rand_f64(&self) -> f64 {
        // Use the top 53 bits for a uniform double in [0, 1).
        (self.rand_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Monotonic seconds since the context was created.
    pub fn elapsed_secs(&self) -> f64 {
        self.inner.clock.elapsed().as_secs_f64()
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new()
    }
}
