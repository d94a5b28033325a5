// volt-core - Dict methods
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The dict method table. Dicts preserve insertion order: iteration and
//! `keys()` follow it, reassignment keeps a key's position, and `merge`
//! builds a new dict without touching the receiver.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::eval::{call_value, key_string};
use crate::value::Value;

use super::{require_args, require_range};

pub fn call(
    map: &Rc<RefCell<IndexMap<String, Value>>>,
    method: &str,
    args: &[Value],
) -> Result<Value> {
    match method {
        "keys" => {
            require_args("keys", args, 0)?;
            let keys = map.borrow().keys().map(Value::str).collect();
            Ok(Value::list(keys))
        }
        "values" => {
            require_args("values", args, 0)?;
            let values = map.borrow().values().cloned().collect();
            Ok(Value::list(values))
        }
        "entries" | "toList" => {
            require_args(method, args, 0)?;
            let entries = map
                .borrow()
                .iter()
                .map(|(k, v)| Value::list(vec![Value::str(k), v.clone()]))
                .collect();
            Ok(Value::list(entries))
        }
        "has" | "contains" => {
            require_args(method, args, 1)?;
            let key = key_string(&args[0])?;
            Ok(Value::Bool(map.borrow().contains_key(&key)))
        }
        "get" => {
            require_range("get", args, 1, 2)?;
            let key = key_string(&args[0])?;
            match map.borrow().get(&key) {
                Some(value) => Ok(value.clone()),
                None => Ok(args.get(1).cloned().unwrap_or(Value::Null)),
            }
        }
        "remove" | "delete" => {
            require_args(method, args, 1)?;
            let key = key_string(&args[0])?;
            // shift_remove keeps the remaining keys in insertion order.
            Ok(map
                .borrow_mut()
                .shift_remove(&key)
                .unwrap_or(Value::Null))
        }
        "size" | "length" => {
            require_args(method, args, 0)?;
            Ok(Value::Int(map.borrow().len() as i64))
        }
        "isEmpty" => {
            require_args("isEmpty", args, 0)?;
            Ok(Value::Bool(map.borrow().is_empty()))
        }
        "merge" => {
            require_args("merge", args, 1)?;
            let other = match &args[0] {
                Value::Dict(other) => other,
                other => {
                    return Err(Error::type_error_in(
                        "merge",
                        "dict",
                        other.type_name(),
                    ));
                }
            };
            let mut merged = map.borrow().clone();
            for (k, v) in other.borrow().iter() {
                merged.insert(k.clone(), v.clone());
            }
            Ok(Value::dict(merged))
        }
        "copy" => {
            require_args("copy", args, 0)?;
            Ok(Value::dict(map.borrow().clone()))
        }
        "clear" => {
            require_args("clear", args, 0)?;
            map.borrow_mut().clear();
            Ok(Value::Dict(map.clone()))
        }
        "filter" => {
            require_args("filter", args, 1)?;
            let snapshot: Vec<(String, Value)> = map
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let mut out = IndexMap::new();
            for (k, v) in snapshot {
                let keep =
                    call_value(&args[0], vec![Value::str(&k), v.clone()])?.is_truthy();
                if keep {
                    out.insert(k, v);
                }
            }
            Ok(Value::dict(out))
        }
        "map" => {
            require_args("map", args, 1)?;
            let snapshot: Vec<(String, Value)> = map
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let mut out = IndexMap::new();
            for (k, v) in snapshot {
                let mapped = call_value(&args[0], vec![Value::str(&k), v])?;
                out.insert(k, mapped);
            }
            Ok(Value::dict(out))
        }
        "forEach" => {
            require_args("forEach", args, 1)?;
            let snapshot: Vec<(String, Value)> = map
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            for (k, v) in snapshot {
                call_value(&args[0], vec![Value::str(&k), v])?;
            }
            Ok(Value::Null)
        }
        _ => Err(Error::eval(format!("Dict has no method '{}'", method))),
    }
}
