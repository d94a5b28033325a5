// volt-core - random module
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! `use "random"` — pseudo-random numbers and list helpers.
//!
//! Backed by the LCG state on the runtime context, so a `VOLT_SEED`
//! environment variable (or `random.seed(n)`) makes runs reproducible.

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::value::{Value, VoltModule};

use super::{check_args, want_int, want_number};

pub fn module() -> VoltModule {
    VoltModule {
        name: "random",
        consts: Vec::new(),
        funcs: vec![
            ("int", random_int),
            ("float", random_float),
            ("bool", random_bool),
            ("range", random_range),
            ("choice", random_choice),
            ("shuffle", random_shuffle),
            ("seed", random_seed),
        ],
    }
}

/// `random.int(lo, hi)` — uniform integer, both bounds inclusive.
fn random_int(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("random.int", args, 2)?;
    let lo = want_int("random.int", &args[0])?;
    let hi = want_int("random.int", &args[1])?;
    if lo > hi {
        return Err(Error::value_error("random.int: lo must not exceed hi"));
    }
    let span = (hi - lo) as u64 + 1;
    Ok(Value::Int(lo + (ctx.rand_u64() % span) as i64))
}

/// `random.float()` in [0, 1), or `random.float(a, b)` uniform in [a, b).
fn random_float(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [] => Ok(Value::Float(ctx.rand_f64())),
        [a, b] => {
            let a = want_number("random.float", a)?;
            let b = want_number("random.float", b)?;
            Ok(Value::Float(a + ctx.rand_f64() * (b - a)))
        }
        _ => Err(Error::value_error(
            "random.float() takes 0 or 2 arguments",
        )),
    }
}

/// `random.range(stop)`, `random.range(start, stop)` or
/// `random.range(start, stop, step)` — a uniform pick from the half-open
/// range, stop exclusive.
fn random_range(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    let (start, stop, step) = match args {
        [stop] => (0, want_int("random.range", stop)?, 1),
        [start, stop] => (
            want_int("random.range", start)?,
            want_int("random.range", stop)?,
            1,
        ),
        [start, stop, step] => (
            want_int("random.range", start)?,
            want_int("random.range", stop)?,
            want_int("random.range", step)?,
        ),
        _ => return Err(Error::arity_range("random.range", 1, 3, args.len())),
    };
    if step == 0 {
        return Err(Error::value_error("random.range: step must not be zero"));
    }
    let count = if step > 0 && stop > start {
        (stop - start + step - 1) / step
    } else if step < 0 && stop < start {
        (start - stop - step - 1) / -step
    } else {
        0
    };
    if count <= 0 {
        return Err(Error::value_error("random.range: empty range"));
    }
    let idx = (ctx.rand_u64() % count as u64) as i64;
    Ok(Value::Int(start + step * idx))
}

fn random_bool(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("random.bool", args, 0)?;
    Ok(Value::Bool(ctx.rand_u64() & 1 == 1))
}

fn random_choice(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("random.choice", args, 1)?;
    let items = match &args[0] {
        Value::List(items) => items.borrow().clone(),
        other => {
            return Err(Error::type_error_in(
                "random.choice",
                "list",
                other.type_name(),
            ));
        }
    };
    if items.is_empty() {
        return Err(Error::value_error("random.choice: list is empty"));
    }
    let idx = (ctx.rand_u64() % items.len() as u64) as usize;
    Ok(items[idx].clone())
}

/// `random.shuffle(list)` — returns a new shuffled list; the original is
/// left unchanged.
fn random_shuffle(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("random.shuffle", args, 1)?;
    let mut items = match &args[0] {
        Value::List(items) => items.borrow().clone(),
        other => {
            return Err(Error::type_error_in(
                "random.shuffle",
                "list",
                other.type_name(),
            ));
        }
    };
    // Fisher-Yates
    for i in (1..items.len()).rev() {
        let j = (ctx.rand_u64() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
    Ok(Value::list(items))
}

fn random_seed(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("random.seed", args, 1)?;
    let seed = want_int("random.seed", &args[0])?;
    ctx.seed_rng(seed as u64);
    Ok(Value::Null)
}
