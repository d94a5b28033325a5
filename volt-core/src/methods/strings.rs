// volt-core - String methods
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The string method table. Strings are immutable; every method returns a
//! new value. Indexing is by code point throughout.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::Value;

use super::{require_args, require_range, resolve_bound, want_int, want_str};

pub fn call(s: &Rc<str>, method: &str, args: &[Value]) -> Result<Value> {
    let s: &str = s.as_ref();
    match method {
        "trim" => {
            require_args("trim", args, 0)?;
            Ok(Value::str(s.trim()))
        }
        "trimStart" => {
            require_args("trimStart", args, 0)?;
            Ok(Value::str(s.trim_start()))
        }
        "trimEnd" => {
            require_args("trimEnd", args, 0)?;
            Ok(Value::str(s.trim_end()))
        }
        "upper" => {
            require_args("upper", args, 0)?;
            Ok(Value::str(s.to_uppercase()))
        }
        "lower" => {
            require_args("lower", args, 0)?;
            Ok(Value::str(s.to_lowercase()))
        }
        "replace" => {
            require_args("replace", args, 2)?;
            let old = want_str("replace", &args[0])?;
            let new = want_str("replace", &args[1])?;
            Ok(Value::str(s.replace(old, new)))
        }
        "split" => {
            require_range("split", args, 0, 1)?;
            let parts: Vec<Value> = if args.is_empty() {
                s.split_whitespace().map(Value::str).collect()
            } else {
                let sep = want_str("split", &args[0])?;
                if sep.is_empty() {
                    return Err(Error::value_error("split: empty separator"));
                }
                s.split(sep).map(Value::str).collect()
            };
            Ok(Value::list(parts))
        }
        "startsWith" => {
            require_args("startsWith", args, 1)?;
            Ok(Value::Bool(s.starts_with(want_str("startsWith", &args[0])?)))
        }
        "endsWith" => {
            require_args("endsWith", args, 1)?;
            Ok(Value::Bool(s.ends_with(want_str("endsWith", &args[0])?)))
        }
        "contains" | "includes" => {
            require_args(method, args, 1)?;
            Ok(Value::Bool(s.contains(want_str(method, &args[0])?)))
        }
        "indexOf" => {
            require_args("indexOf", args, 1)?;
            let needle = want_str("indexOf", &args[0])?;
            Ok(Value::Int(char_index_of(s, needle, false)))
        }
        "lastIndexOf" => {
            require_args("lastIndexOf", args, 1)?;
            let needle = want_str("lastIndexOf", &args[0])?;
            Ok(Value::Int(char_index_of(s, needle, true)))
        }
        "slice" => slice(s, args),
        "charAt" => {
            require_args("charAt", args, 1)?;
            let idx = want_int("charAt", &args[0])?;
            let length = s.chars().count();
            if idx < 0 || idx as usize >= length {
                return Err(Error::IndexOutOfBounds { index: idx, length });
            }
            let ch = s.chars().nth(idx as usize).unwrap();
            Ok(Value::str(ch.to_string()))
        }
        "repeat" => {
            require_args("repeat", args, 1)?;
            let n = want_int("repeat", &args[0])?;
            if n < 0 {
                return Err(Error::value_error("repeat: negative count"));
            }
            Ok(Value::str(s.repeat(n as usize)))
        }
        "reverse" => {
            require_args("reverse", args, 0)?;
            Ok(Value::str(s.chars().rev().collect::<String>()))
        }
        "count" => {
            require_args("count", args, 1)?;
            let needle = want_str("count", &args[0])?;
            Ok(Value::Int(s.matches(needle).count() as i64))
        }
        "length" => {
            require_args("length", args, 0)?;
            Ok(Value::Int(s.chars().count() as i64))
        }
        "isEmpty" => {
            require_args("isEmpty", args, 0)?;
            Ok(Value::Bool(s.is_empty()))
        }
        "toInt" => {
            require_args("toInt", args, 0)?;
            s.trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::value_error(format!("Cannot convert '{}' to int", s)))
        }
        "toFloat" => {
            require_args("toFloat", args, 0)?;
            s.trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::value_error(format!("Cannot convert '{}' to float", s)))
        }
        "toList" => {
            require_args("toList", args, 0)?;
            let chars: Vec<Value> = s.chars().map(|ch| Value::str(ch.to_string())).collect();
            Ok(Value::list(chars))
        }
        "padStart" => pad(s, method, args, true),
        "padEnd" => pad(s, method, args, false),
        "isDigit" => {
            require_args("isDigit", args, 0)?;
            Ok(Value::Bool(!s.is_empty() && s.chars().all(char::is_numeric)))
        }
        "isAlpha" => {
            require_args("isAlpha", args, 0)?;
            Ok(Value::Bool(
                !s.is_empty() && s.chars().all(char::is_alphabetic),
            ))
        }
        _ => Err(Error::eval(format!("String has no method '{}'", method))),
    }
}

/// `slice(start, end?)`: code-point indexed, end exclusive; negative
/// bounds count from the end.
fn slice(s: &str, args: &[Value]) -> Result<Value> {
    require_range("slice", args, 1, 2)?;
    let chars: Vec<char> = s.chars().collect();
    let start = resolve_bound(want_int("slice", &args[0])?, chars.len());
    let end = if args.len() == 2 {
        resolve_bound(want_int("slice", &args[1])?, chars.len())
    } else {
        chars.len()
    };
    if start >= end {
        return Ok(Value::str(""));
    }
    Ok(Value::str(chars[start..end].iter().collect::<String>()))
}

fn pad(s: &str, method: &str, args: &[Value], at_start: bool) -> Result<Value> {
    require_range(method, args, 1, 2)?;
    let width = want_int(method, &args[0])?.max(0) as usize;
    let fill = if args.len() == 2 {
        let fill = want_str(method, &args[1])?;
        let mut chars = fill.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(Error::value_error(format!(
                    "{}: fill must be a single character",
                    method
                )));
            }
        }
    } else {
        ' '
    };

    let length = s.chars().count();
    if length >= width {
        return Ok(Value::str(s));
    }
    let padding: String = std::iter::repeat(fill).take(width - length).collect();
    let padded = if at_start {
        format!("{}{}", padding, s)
    } else {
        format!("{}{}", s, padding)
    };
    Ok(Value::str(padded))
}

/// Code-point index of a substring, or -1 when absent.
fn char_index_of(s: &str, needle: &str, from_end: bool) -> i64 {
    let byte_idx = if from_end {
        s.rfind(needle)
    } else {
        s.find(needle)
    };
    match byte_idx {
        Some(idx) => s[..idx].chars().count() as i64,
        None => -1,
    }
}
