// volt-core - Exception handling
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! try/catch/finally evaluation.
//!
//! `catch` consumes user throws (binding the payload) and runtime errors
//! (binding their rendered message); the `return`/`break`/`continue`
//! signals pass through untouched. `finally` runs on every exit path, and
//! anything it raises replaces the in-flight result.

use volt_parser::Stmt;

use crate::env::Env;
use crate::error::Result;
use crate::eval::eval_block;
use crate::value::Value;

pub fn eval_try(
    body: &[Stmt],
    catch: Option<&(String, Vec<Stmt>)>,
    finally: Option<&Vec<Stmt>>,
    env: &Env,
) -> Result<Value> {
    let mut result = eval_block(body, env);

    if let Some((var, handler)) = catch {
        result = match result {
            Err(e) if !e.is_control() => {
                let catch_env = env.child();
                catch_env.define(var.clone(), e.into_caught_value());
                eval_block(handler, &catch_env)
            }
            other => other,
        };
    }

    if let Some(cleanup) = finally {
        eval_block(cleanup, env)?;
    }

    result
}
