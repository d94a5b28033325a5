// volt-core - Global built-in functions
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Global builtin functions (`len`, `str`, `range`, `print`, …).
//!
//! These are not values in the environment: a call through a bare
//! identifier consults this table only when the name has no binding in
//! scope, so user definitions shadow builtins.

use std::cmp::Ordering;

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::eval::{key_string, stringify};
use crate::methods::lists;
use crate::value::{values_equal, Value};

/// Signature of global builtin functions.
pub type BuiltinFn = fn(&Ctx, &[Value]) -> Result<Value>;

/// Look up a builtin by name.
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    let f: BuiltinFn = match name {
        "len" => builtin_len,
        "str" | "string" => builtin_str,
        "int" => builtin_int,
        "float" => builtin_float,
        "number" => builtin_number,
        "bool" => builtin_bool,
        "type" => builtin_type,
        "range" => builtin_range,
        "abs" => builtin_abs,
        "min" => builtin_min,
        "max" => builtin_max,
        "round" => builtin_round,
        "upper" => builtin_upper,
        "lower" => builtin_lower,
        "split" => builtin_split,
        "join" => builtin_join,
        "contains" => builtin_contains,
        "reverse" => builtin_reverse,
        "sort" => builtin_sort,
        "keys" => builtin_keys,
        "values" => builtin_values,
        "print" => builtin_print,
        "input" => builtin_input,
        "char" => builtin_char,
        "ord" => builtin_ord,
        _ => return None,
    };
    Some(f)
}

fn builtin_len(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("len", 1, args.len()));
    }
    match &args[0] {
        Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
        Value::List(items) => Ok(Value::Int(items.borrow().len() as i64)),
        Value::Dict(map) => Ok(Value::Int(map.borrow().len() as i64)),
        other => Err(Error::type_error_in(
            "len",
            "string, list, or dict",
            other.type_name(),
        )),
    }
}

fn builtin_str(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("str", 1, args.len()));
    }
    Ok(Value::str(stringify(&args[0])?))
}

fn builtin_int(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("int", 1, args.len()));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(n) => Ok(Value::Int(*n as i64)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Str(s) => s.trim().parse::<i64>().map(Value::Int).map_err(|_| {
            Error::value_error(format!("Cannot convert to int: '{}'", s))
        }),
        other => Err(Error::value_error(format!(
            "Cannot convert to int: {}",
            other.type_name()
        ))),
    }
}

fn builtin_float(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("float", 1, args.len()));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Float(n) => Ok(Value::Float(*n)),
        Value::Str(s) => s.trim().parse::<f64>().map(Value::Float).map_err(|_| {
            Error::value_error(format!("Cannot convert to float: '{}'", s))
        }),
        other => Err(Error::value_error(format!(
            "Cannot convert to float: {}",
            other.type_name()
        ))),
    }
}

/// `number(s)`: float when the text carries a decimal point, int otherwise.
fn builtin_number(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("number", 1, args.len()));
    }
    match &args[0] {
        Value::Int(_) | Value::Float(_) => Ok(args[0].clone()),
        Value::Str(s) => {
            if s.contains('.') {
                builtin_float(ctx, args)
            } else {
                builtin_int(ctx, args)
            }
        }
        other => Err(Error::value_error(format!(
            "Cannot convert to number: {}",
            other.type_name()
        ))),
    }
}

fn builtin_bool(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("bool", 1, args.len()));
    }
    Ok(Value::Bool(args[0].is_truthy()))
}

fn builtin_type(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("type", 1, args.len()));
    }
    Ok(Value::str(args[0].type_name()))
}

fn builtin_range(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    let (start, end, step) = match args {
        [end] => (0, want_int("range", end)?, 1),
        [start, end] => (want_int("range", start)?, want_int("range", end)?, 1),
        [start, end, step] => (
            want_int("range", start)?,
            want_int("range", end)?,
            want_int("range", step)?,
        ),
        _ => return Err(Error::arity_range("range", 1, 3, args.len())),
    };
    if step == 0 {
        return Err(Error::value_error("range: step must not be zero"));
    }
    let mut items = Vec::new();
    let mut i = start;
    while (step > 0 && i < end) || (step < 0 && i > end) {
        items.push(Value::Int(i));
        i += step;
    }
    Ok(Value::list(items))
}

fn builtin_abs(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("abs", 1, args.len()));
    }
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or(Error::IntegerOverflow { operation: "abs" }),
        Value::Float(n) => Ok(Value::Float(n.abs())),
        other => Err(Error::type_error_in("abs", "number", other.type_name())),
    }
}

fn builtin_min(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    extremum_of("min", args, Ordering::Less)
}

fn builtin_max(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    extremum_of("max", args, Ordering::Greater)
}

/// `min(list)` / `min(a, b, …)` and the `max` counterparts.
fn extremum_of(name: &str, args: &[Value], keep: Ordering) -> Result<Value> {
    match args {
        [] => Err(Error::arity_at_least(name, 1, 0)),
        [Value::List(items)] => lists::extremum(&items.borrow(), name, keep),
        _ => lists::extremum(args, name, keep),
    }
}

fn builtin_round(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [Value::Int(n)] => Ok(Value::Int(*n)),
        [Value::Float(n)] => Ok(Value::Int(n.round() as i64)),
        [value, digits] => {
            let n = value.as_number().ok_or_else(|| {
                Error::type_error_in("round", "number", value.type_name())
            })?;
            let digits = want_int("round", digits)?;
            let scale = 10f64.powi(digits as i32);
            Ok(Value::Float((n * scale).round() / scale))
        }
        [other] => Err(Error::type_error_in("round", "number", other.type_name())),
        _ => Err(Error::arity_range("round", 1, 2, args.len())),
    }
}

fn builtin_upper(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("upper", 1, args.len()));
    }
    Ok(Value::str(want_str("upper", &args[0])?.to_uppercase()))
}

fn builtin_lower(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("lower", 1, args.len()));
    }
    Ok(Value::str(want_str("lower", &args[0])?.to_lowercase()))
}

fn builtin_split(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [s] => {
            let s = want_str("split", s)?;
            Ok(Value::list(s.split_whitespace().map(Value::str).collect()))
        }
        [s, sep] => {
            let s = want_str("split", s)?;
            let sep = want_str("split", sep)?;
            if sep.is_empty() {
                return Err(Error::value_error("split: empty separator"));
            }
            Ok(Value::list(s.split(sep).map(Value::str).collect()))
        }
        _ => Err(Error::arity_range("split", 1, 2, args.len())),
    }
}

fn builtin_join(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 2 {
        return Err(Error::arity_named("join", 2, args.len()));
    }
    let sep = want_str("join", &args[0])?;
    let items = match &args[1] {
        Value::List(items) => items.borrow().clone(),
        other => return Err(Error::type_error_in("join", "list", other.type_name())),
    };
    let mut parts = Vec::with_capacity(items.len());
    for item in &items {
        parts.push(stringify(item)?);
    }
    Ok(Value::str(parts.join(sep)))
}

fn builtin_contains(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 2 {
        return Err(Error::arity_named("contains", 2, args.len()));
    }
    match &args[0] {
        Value::List(items) => Ok(Value::Bool(
            items.borrow().iter().any(|item| values_equal(item, &args[1])),
        )),
        Value::Str(s) => {
            let needle = want_str("contains", &args[1])?;
            Ok(Value::Bool(s.contains(needle)))
        }
        Value::Dict(map) => {
            let key = key_string(&args[1])?;
            Ok(Value::Bool(map.borrow().contains_key(&key)))
        }
        other => Err(Error::type_error_in(
            "contains",
            "list, string, or dict",
            other.type_name(),
        )),
    }
}

/// Returns a reversed copy (the list method of the same name mutates).
fn builtin_reverse(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("reverse", 1, args.len()));
    }
    match &args[0] {
        Value::List(items) => {
            let mut items = items.borrow().clone();
            items.reverse();
            Ok(Value::list(items))
        }
        Value::Str(s) => Ok(Value::str(s.chars().rev().collect::<String>())),
        other => Err(Error::type_error_in(
            "reverse",
            "list or string",
            other.type_name(),
        )),
    }
}

/// Returns a sorted copy (the list method of the same name mutates).
fn builtin_sort(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("sort", 1, args.len()));
    }
    match &args[0] {
        Value::List(items) => {
            let mut items = items.borrow().clone();
            items.sort_by(|a, b| {
                crate::value::compare_values(a, b).unwrap_or(Ordering::Equal)
            });
            Ok(Value::list(items))
        }
        other => Err(Error::type_error_in("sort", "list", other.type_name())),
    }
}

fn builtin_keys(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("keys", 1, args.len()));
    }
    match &args[0] {
        Value::Dict(map) => Ok(Value::list(map.borrow().keys().map(Value::str).collect())),
        other => Err(Error::type_error_in("keys", "dict", other.type_name())),
    }
}

fn builtin_values(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("values", 1, args.len()));
    }
    match &args[0] {
        Value::Dict(map) => Ok(Value::list(map.borrow().values().cloned().collect())),
        other => Err(Error::type_error_in("values", "dict", other.type_name())),
    }
}

/// `print(a, b, …)` — space-joined, one output line.
fn builtin_print(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        parts.push(stringify(arg)?);
    }
    ctx.show(&parts.join(" "))?;
    Ok(Value::Null)
}

fn builtin_input(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    let prompt = match args {
        [] => String::new(),
        [prompt] => stringify(prompt)?,
        _ => return Err(Error::arity_range("input", 0, 1, args.len())),
    };
    Ok(Value::str(ctx.ask(&prompt)?))
}

fn builtin_char(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("char", 1, args.len()));
    }
    let code = want_int("char", &args[0])?;
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .map(|ch| Value::str(ch.to_string()))
        .ok_or_else(|| Error::value_error(format!("char: invalid code point {}", code)))
}

fn builtin_ord(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::arity_named("ord", 1, args.len()));
    }
    let s = want_str("ord", &args[0])?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Value::Int(ch as i64)),
        _ => Err(Error::value_error("ord: expected a single-character string")),
    }
}

fn want_int(name: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(n) => Ok(*n as i64),
        other => Err(Error::type_error_in(name.to_string(), "int", other.type_name())),
    }
}

fn want_str<'a>(name: &str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::Str(s) => Ok(s.as_ref()),
        other => Err(Error::type_error_in(
            name.to_string(),
            "string",
            other.type_name(),
        )),
    }
}
