// volt-core - Standard modules
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The built-in modules loaded with `use "name"`: `math`, `random`,
//! `time` and `file`. Each is a namespace value exposing constants and
//! native functions.

pub mod file;
pub mod math;
pub mod random;
pub mod time;

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::Value;

/// Instantiate a built-in module by name.
pub fn load(name: &str) -> Result<Value> {
    let module = match name {
        "math" => math::module(),
        "random" => random::module(),
        "time" => time::module(),
        "file" => file::module(),
        _ => return Err(Error::ModuleNotFound(name.to_string())),
    };
    Ok(Value::Module(Rc::new(module)))
}

pub(crate) fn want_number(name: &str, value: &Value) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| Error::type_error_in(name.to_string(), "number", value.type_name()))
}

pub(crate) fn want_int(name: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(n) => Ok(*n as i64),
        other => Err(Error::type_error_in(
            name.to_string(),
            "int",
            other.type_name(),
        )),
    }
}

pub(crate) fn want_str_arg(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.to_string()),
        other => Err(Error::type_error_in(
            name.to_string(),
            "string",
            other.type_name(),
        )),
    }
}

pub(crate) fn check_args(name: &str, args: &[Value], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(Error::arity_named(name, count, args.len()));
    }
    Ok(())
}
