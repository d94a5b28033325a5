// volt-core - math module
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! `use "math"` — constants and numeric functions.

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::methods::lists;
use crate::value::{Value, VoltModule};

use super::{check_args, want_int, want_number};

pub fn module() -> VoltModule {
    VoltModule {
        name: "math",
        consts: vec![
            ("pi", Value::Float(std::f64::consts::PI)),
            ("e", Value::Float(std::f64::consts::E)),
            ("tau", Value::Float(std::f64::consts::TAU)),
            ("inf", Value::Float(f64::INFINITY)),
            ("nan", Value::Float(f64::NAN)),
        ],
        funcs: vec![
            ("sqrt", math_sqrt),
            ("pow", math_pow),
            ("abs", math_abs),
            ("floor", math_floor),
            ("ceil", math_ceil),
            ("round", math_round),
            ("min", math_min),
            ("max", math_max),
            ("sin", math_sin),
            ("cos", math_cos),
            ("tan", math_tan),
            ("asin", math_asin),
            ("acos", math_acos),
            ("atan", math_atan),
            ("log", math_log),
            ("log10", math_log10),
            ("log2", math_log2),
            ("exp", math_exp),
            ("gcd", math_gcd),
            ("radians", math_radians),
            ("degrees", math_degrees),
            ("hypot", math_hypot),
        ],
    }
}

fn math_sqrt(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.sqrt", args, 1)?;
    let x = want_number("math.sqrt", &args[0])?;
    if x < 0.0 {
        return Err(Error::value_error("math.sqrt: negative argument"));
    }
    Ok(Value::Float(x.sqrt()))
}

fn math_pow(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.pow", args, 2)?;
    let x = want_number("math.pow", &args[0])?;
    let y = want_number("math.pow", &args[1])?;
    Ok(Value::Float(x.powf(y)))
}

fn math_abs(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.abs", args, 1)?;
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or(Error::IntegerOverflow { operation: "abs" }),
        Value::Float(n) => Ok(Value::Float(n.abs())),
        other => Err(Error::type_error_in(
            "math.abs",
            "number",
            other.type_name(),
        )),
    }
}

fn math_floor(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.floor", args, 1)?;
    let x = want_number("math.floor", &args[0])?;
    Ok(Value::Int(x.floor() as i64))
}

fn math_ceil(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.ceil", args, 1)?;
    let x = want_number("math.ceil", &args[0])?;
    Ok(Value::Int(x.ceil() as i64))
}

fn math_round(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [Value::Int(n)] => Ok(Value::Int(*n)),
        [value] => {
            let x = want_number("math.round", value)?;
            Ok(Value::Int(x.round() as i64))
        }
        [value, digits] => {
            let x = want_number("math.round", value)?;
            let digits = want_int("math.round", digits)?;
            let scale = 10f64.powi(digits as i32);
            Ok(Value::Float((x * scale).round() / scale))
        }
        _ => Err(Error::arity_range("math.round", 1, 2, args.len())),
    }
}

fn math_min(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [] => Err(Error::arity_at_least("math.min", 1, 0)),
        [Value::List(items)] => {
            lists::extremum(&items.borrow(), "math.min", std::cmp::Ordering::Less)
        }
        _ => lists::extremum(args, "math.min", std::cmp::Ordering::Less),
    }
}

fn math_max(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [] => Err(Error::arity_at_least("math.max", 1, 0)),
        [Value::List(items)] => {
            lists::extremum(&items.borrow(), "math.max", std::cmp::Ordering::Greater)
        }
        _ => lists::extremum(args, "math.max", std::cmp::Ordering::Greater),
    }
}

fn math_sin(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.sin", args, 1)?;
    Ok(Value::Float(want_number("math.sin", &args[0])?.sin()))
}

fn math_cos(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.cos", args, 1)?;
    Ok(Value::Float(want_number("math.cos", &args[0])?.cos()))
}

fn math_tan(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.tan", args, 1)?;
    Ok(Value::Float(want_number("math.tan", &args[0])?.tan()))
}

fn math_asin(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.asin", args, 1)?;
    Ok(Value::Float(want_number("math.asin", &args[0])?.asin()))
}

fn math_acos(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.acos", args, 1)?;
    Ok(Value::Float(want_number("math.acos", &args[0])?.acos()))
}

fn math_atan(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.atan", args, 1)?;
    Ok(Value::Float(want_number("math.atan", &args[0])?.atan()))
}

/// `log(x)` natural, `log(x, base)` in an arbitrary base.
fn math_log(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.is_empty() || args.len() > 2 {
        return Err(Error::arity_range("math.log", 1, 2, args.len()));
    }
    let x = want_number("math.log", &args[0])?;
    if x <= 0.0 {
        return Err(Error::value_error("math.log: argument must be positive"));
    }
    match args.get(1) {
        Some(base) => {
            let base = want_number("math.log", base)?;
            if base <= 0.0 || base == 1.0 {
                return Err(Error::value_error("math.log: invalid base"));
            }
            Ok(Value::Float(x.log(base)))
        }
        None => Ok(Value::Float(x.ln())),
    }
}

fn math_log10(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.log10", args, 1)?;
    let x = want_number("math.log10", &args[0])?;
    if x <= 0.0 {
        return Err(Error::value_error("math.log10: argument must be positive"));
    }
    Ok(Value::Float(x.log10()))
}

fn math_log2(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.log2", args, 1)?;
    let x = want_number("math.log2", &args[0])?;
    if x <= 0.0 {
        return Err(Error::value_error("math.log2: argument must be positive"));
    }
    Ok(Value::Float(x.log2()))
}

fn math_exp(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.exp", args, 1)?;
    Ok(Value::Float(want_number("math.exp", &args[0])?.exp()))
}

fn math_gcd(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.gcd", args, 2)?;
    let mut a = want_int("math.gcd", &args[0])?.unsigned_abs();
    let mut b = want_int("math.gcd", &args[1])?.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    Ok(Value::Int(a as i64))
}

fn math_radians(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.radians", args, 1)?;
    Ok(Value::Float(
        want_number("math.radians", &args[0])?.to_radians(),
    ))
}

fn math_degrees(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.degrees", args, 1)?;
    Ok(Value::Float(
        want_number("math.degrees", &args[0])?.to_degrees(),
    ))
}

fn math_hypot(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("math.hypot", args, 2)?;
    let x = want_number("math.hypot", &args[0])?;
    let y = want_number("math.hypot", &args[1])?;
    Ok(Value::Float(x.hypot(y)))
}
