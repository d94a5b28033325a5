// volt-core - List methods
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The list method table. Lists are reference-shared; mutators change the
//! receiver in place, while `unique`, `slice`, `map`, `filter` and friends
//! return fresh lists.
//!
//! Higher-order methods snapshot the elements before calling back into
//! user code, so callbacks may mutate the receiver freely.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::eval::{call_value, stringify};
use crate::value::{compare_values, values_equal, Value};

use super::{require_args, require_range, resolve_bound, want_int};

pub fn call(items: &Rc<RefCell<Vec<Value>>>, method: &str, args: &[Value]) -> Result<Value> {
    match method {
        "push" => {
            require_args("push", args, 1)?;
            let mut items = items.borrow_mut();
            items.push(args[0].clone());
            Ok(Value::Int(items.len() as i64))
        }
        "pop" => {
            require_args("pop", args, 0)?;
            items
                .borrow_mut()
                .pop()
                .ok_or_else(|| Error::eval("Cannot pop from empty list"))
        }
        "insert" => {
            require_args("insert", args, 2)?;
            let mut items = items.borrow_mut();
            let idx = want_int("insert", &args[0])?;
            let idx = resolve_bound(idx, items.len());
            items.insert(idx, args[1].clone());
            Ok(Value::Null)
        }
        "remove" => {
            require_args("remove", args, 1)?;
            let mut items = items.borrow_mut();
            match items.iter().position(|item| values_equal(item, &args[0])) {
                Some(idx) => {
                    items.remove(idx);
                    Ok(Value::Null)
                }
                None => Err(Error::value_error("remove: value not in list")),
            }
        }
        "length" => {
            require_args("length", args, 0)?;
            Ok(Value::Int(items.borrow().len() as i64))
        }
        "isEmpty" => {
            require_args("isEmpty", args, 0)?;
            Ok(Value::Bool(items.borrow().is_empty()))
        }
        "first" => {
            require_args("first", args, 0)?;
            items
                .borrow()
                .first()
                .cloned()
                .ok_or_else(|| Error::eval("Cannot get first of empty list"))
        }
        "last" => {
            require_args("last", args, 0)?;
            items
                .borrow()
                .last()
                .cloned()
                .ok_or_else(|| Error::eval("Cannot get last of empty list"))
        }
        "sort" => {
            require_args("sort", args, 0)?;
            // Stable ascending; elements with no mutual order keep their
            // input positions.
            items
                .borrow_mut()
                .sort_by(|a, b| compare_values(a, b).unwrap_or(Ordering::Equal));
            Ok(Value::List(items.clone()))
        }
        "reverse" => {
            require_args("reverse", args, 0)?;
            items.borrow_mut().reverse();
            Ok(Value::List(items.clone()))
        }
        "unique" => {
            require_args("unique", args, 0)?;
            let items = items.borrow();
            let mut seen: Vec<Value> = Vec::new();
            for item in items.iter() {
                if !seen.iter().any(|s| values_equal(s, item)) {
                    seen.push(item.clone());
                }
            }
            Ok(Value::list(seen))
        }
        "sum" => {
            require_args("sum", args, 0)?;
            sum(&items.borrow())
        }
        "min" => {
            require_args("min", args, 0)?;
            extremum(&items.borrow(), "min", Ordering::Less)
        }
        "max" => {
            require_args("max", args, 0)?;
            extremum(&items.borrow(), "max", Ordering::Greater)
        }
        "includes" | "contains" => {
            require_args(method, args, 1)?;
            let found = items
                .borrow()
                .iter()
                .any(|item| values_equal(item, &args[0]));
            Ok(Value::Bool(found))
        }
        "indexOf" => {
            require_args("indexOf", args, 1)?;
            let idx = items
                .borrow()
                .iter()
                .position(|item| values_equal(item, &args[0]));
            Ok(Value::Int(idx.map(|i| i as i64).unwrap_or(-1)))
        }
        "count" => {
            require_args("count", args, 1)?;
            let n = items
                .borrow()
                .iter()
                .filter(|item| values_equal(item, &args[0]))
                .count();
            Ok(Value::Int(n as i64))
        }
        "slice" => {
            require_range("slice", args, 1, 2)?;
            let items = items.borrow();
            let start = resolve_bound(want_int("slice", &args[0])?, items.len());
            let end = if args.len() == 2 {
                resolve_bound(want_int("slice", &args[1])?, items.len())
            } else {
                items.len()
            };
            if start >= end {
                return Ok(Value::list(Vec::new()));
            }
            Ok(Value::list(items[start..end].to_vec()))
        }
        "copy" => {
            require_args("copy", args, 0)?;
            Ok(Value::list(items.borrow().clone()))
        }
        "clear" => {
            require_args("clear", args, 0)?;
            items.borrow_mut().clear();
            Ok(Value::List(items.clone()))
        }
        "flat" => {
            require_args("flat", args, 0)?;
            let items = items.borrow();
            let mut out = Vec::new();
            for item in items.iter() {
                match item {
                    Value::List(inner) => out.extend(inner.borrow().iter().cloned()),
                    other => out.push(other.clone()),
                }
            }
            Ok(Value::list(out))
        }
        "enumerate" => {
            require_args("enumerate", args, 0)?;
            let items = items.borrow();
            let pairs = items
                .iter()
                .enumerate()
                .map(|(i, item)| Value::list(vec![Value::Int(i as i64), item.clone()]))
                .collect();
            Ok(Value::list(pairs))
        }
        "join" => {
            require_range("join", args, 0, 1)?;
            let sep = match args.first() {
                Some(sep) => stringify(sep)?,
                None => ",".to_string(),
            };
            let items: Vec<Value> = items.borrow().clone();
            let mut parts = Vec::with_capacity(items.len());
            for item in &items {
                parts.push(stringify(item)?);
            }
            Ok(Value::str(parts.join(&sep)))
        }
        "map" => {
            require_args("map", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            let mut out = Vec::with_capacity(snapshot.len());
            for item in snapshot {
                out.push(call_value(&args[0], vec![item])?);
            }
            Ok(Value::list(out))
        }
        "filter" => {
            require_args("filter", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            let mut out = Vec::new();
            for item in snapshot {
                if call_value(&args[0], vec![item.clone()])?.is_truthy() {
                    out.push(item);
                }
            }
            Ok(Value::list(out))
        }
        "reduce" => {
            require_range("reduce", args, 1, 2)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            let mut iter = snapshot.into_iter();
            let mut acc = match args.get(1) {
                Some(init) => init.clone(),
                None => iter.next().ok_or_else(|| {
                    Error::value_error("reduce of empty list with no initial value")
                })?,
            };
            for item in iter {
                acc = call_value(&args[0], vec![acc, item])?;
            }
            Ok(acc)
        }
        "find" => {
            require_args("find", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            for item in snapshot {
                if call_value(&args[0], vec![item.clone()])?.is_truthy() {
                    return Ok(item);
                }
            }
            Ok(Value::Null)
        }
        "findIndex" => {
            require_args("findIndex", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            for (i, item) in snapshot.into_iter().enumerate() {
                if call_value(&args[0], vec![item])?.is_truthy() {
                    return Ok(Value::Int(i as i64));
                }
            }
            Ok(Value::Int(-1))
        }
        "forEach" => {
            require_args("forEach", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            for item in snapshot {
                call_value(&args[0], vec![item])?;
            }
            Ok(Value::Null)
        }
        "every" => {
            require_args("every", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            for item in snapshot {
                if !call_value(&args[0], vec![item])?.is_truthy() {
                    return Ok(Value::Bool(false));
                }
            }
            Ok(Value::Bool(true))
        }
        "some" => {
            require_args("some", args, 1)?;
            let snapshot: Vec<Value> = items.borrow().clone();
            for item in snapshot {
                if call_value(&args[0], vec![item])?.is_truthy() {
                    return Ok(Value::Bool(true));
                }
            }
            Ok(Value::Bool(false))
        }
        _ => Err(Error::eval(format!("List has no method '{}'", method))),
    }
}

/// Numeric sum; Int unless any element is a float.
pub(crate) fn sum(items: &[Value]) -> Result<Value> {
    let mut int_total: i64 = 0;
    let mut float_total: f64 = 0.0;
    let mut saw_float = false;
    for item in items {
        match item {
            Value::Int(n) => {
                int_total = int_total
                    .checked_add(*n)
                    .ok_or(Error::IntegerOverflow { operation: "sum" })?;
            }
            Value::Float(n) => {
                saw_float = true;
                float_total += n;
            }
            other => {
                return Err(Error::type_error_in("sum", "number", other.type_name()));
            }
        }
    }
    if saw_float {
        Ok(Value::Float(float_total + int_total as f64))
    } else {
        Ok(Value::Int(int_total))
    }
}

/// Smallest or largest element under natural ordering.
pub(crate) fn extremum(items: &[Value], method: &str, keep: Ordering) -> Result<Value> {
    let mut iter = items.iter();
    let mut best = iter
        .next()
        .ok_or_else(|| Error::value_error(format!("{} of an empty list", method)))?
        .clone();
    for item in iter {
        let ordering = compare_values(item, &best).ok_or_else(|| {
            Error::eval(format!(
                "Cannot compare {} with {}",
                item.type_name(),
                best.type_name()
            ))
        })?;
        if ordering == keep {
            best = item.clone();
        }
    }
    Ok(best)
}
