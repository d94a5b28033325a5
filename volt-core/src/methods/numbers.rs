// volt-core - Number methods
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Methods on ints and floats.

use crate::error::{Error, Result};
use crate::value::{format_float, Value};

use super::require_args;

pub fn call(value: &Value, method: &str, args: &[Value]) -> Result<Value> {
    match method {
        "toString" | "toStr" => {
            require_args(method, args, 0)?;
            match value {
                Value::Int(n) => Ok(Value::str(n.to_string())),
                Value::Float(n) => Ok(Value::str(format_float(*n))),
                _ => unreachable!(),
            }
        }
        "toInt" => {
            require_args("toInt", args, 0)?;
            match value {
                Value::Int(n) => Ok(Value::Int(*n)),
                Value::Float(n) => Ok(Value::Int(*n as i64)),
                _ => unreachable!(),
            }
        }
        "toFloat" => {
            require_args("toFloat", args, 0)?;
            match value {
                Value::Int(n) => Ok(Value::Float(*n as f64)),
                Value::Float(n) => Ok(Value::Float(*n)),
                _ => unreachable!(),
            }
        }
        "abs" => {
            require_args("abs", args, 0)?;
            match value {
                Value::Int(n) => n
                    .checked_abs()
                    .map(Value::Int)
                    .ok_or(Error::IntegerOverflow { operation: "abs" }),
                Value::Float(n) => Ok(Value::Float(n.abs())),
                _ => unreachable!(),
            }
        }
        "isEven" => {
            require_args("isEven", args, 0)?;
            Ok(Value::Bool(truncated(value) % 2 == 0))
        }
        "isOdd" => {
            require_args("isOdd", args, 0)?;
            Ok(Value::Bool(truncated(value) % 2 != 0))
        }
        "isPositive" => {
            require_args("isPositive", args, 0)?;
            Ok(Value::Bool(as_f64(value) > 0.0))
        }
        "isNegative" => {
            require_args("isNegative", args, 0)?;
            Ok(Value::Bool(as_f64(value) < 0.0))
        }
        "isZero" => {
            require_args("isZero", args, 0)?;
            Ok(Value::Bool(as_f64(value) == 0.0))
        }
        "clamp" => {
            require_args("clamp", args, 2)?;
            clamp(value, &args[0], &args[1])
        }
        _ => Err(Error::eval(format!("Number has no method '{}'", method))),
    }
}

fn as_f64(value: &Value) -> f64 {
    value.as_number().expect("number method on non-number")
}

fn truncated(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(n) => *n as i64,
        _ => unreachable!(),
    }
}

/// `n.clamp(lo, hi)` — stays an Int when all three are ints.
fn clamp(value: &Value, lo: &Value, hi: &Value) -> Result<Value> {
    match (value, lo, hi) {
        (Value::Int(n), Value::Int(lo), Value::Int(hi)) => {
            Ok(Value::Int((*lo).max((*n).min(*hi))))
        }
        _ => {
            let n = as_f64(value);
            let lo = lo.as_number().ok_or_else(|| {
                Error::type_error_in("clamp", "number", lo.type_name())
            })?;
            let hi = hi.as_number().ok_or_else(|| {
                Error::type_error_in("clamp", "number", hi.type_name())
            })?;
            Ok(Value::Float(lo.max(n.min(hi))))
        }
    }
}
