// volt-core - Function application
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Function application for Volt: user functions, bound methods, and
//! class constructors.

use std::rc::Rc;

use volt_parser::FuncDecl;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::classes;
use crate::eval::eval_block;
use crate::value::{Value, VoltClass, VoltFn};

/// Apply a callable value to arguments.
pub fn call_value(callee: &Value, args: Vec<Value>) -> Result<Value> {
    match callee {
        Value::Func(func) => call_fn(func, None, args),
        Value::Bound(bound) => call_fn(
            &bound.func,
            Some((bound.receiver.clone(), bound.class.clone())),
            args,
        ),
        Value::Class(class) => classes::instantiate(class, args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Call a user-defined function. `receiver` carries `this` and the class
/// the method was resolved on (the `super` anchor) for method calls.
pub fn call_fn(
    func: &Rc<VoltFn>,
    receiver: Option<(Value, Rc<VoltClass>)>,
    args: Vec<Value>,
) -> Result<Value> {
    let local = func.env.child();
    if let Some((this, class)) = receiver {
        local.define(classes::THIS, this);
        local.define(classes::CLASS_SLOT, Value::Class(class));
    }
    bind_params(&func.decl, args, &local)?;

    match eval_block(&func.decl.body, &local) {
        Ok(_) => Ok(Value::Null),
        Err(Error::Return(value)) => Ok(value),
        Err(e) => Err(e),
    }
}

/// Bind arguments to parameters in `local`, filling omitted arguments from
/// default expressions. Defaults are evaluated fresh per call, in the
/// function's defining environment augmented with the parameters bound so
/// far (that is: in `local` itself).
fn bind_params(decl: &FuncDecl, args: Vec<Value>, local: &Env) -> Result<()> {
    if args.len() > decl.params.len() {
        let required = decl
            .params
            .iter()
            .filter(|p| p.default.is_none())
            .count();
        let err = if required == decl.params.len() {
            Error::arity_named(&decl.name, decl.params.len(), args.len())
        } else {
            Error::arity_range(&decl.name, required, decl.params.len(), args.len())
        };
        return Err(err);
    }

    let mut args = args.into_iter();
    for param in &decl.params {
        match args.next() {
            Some(value) => local.define(param.name.clone(), value),
            None => match &param.default {
                Some(default) => {
                    let value = crate::eval::eval_expr(default, local)?;
                    local.define(param.name.clone(), value);
                }
                None => {
                    return Err(Error::eval(format!(
                        "Missing argument '{}' in call to {}()",
                        param.name, decl.name
                    )));
                }
            },
        }
    }
    Ok(())
}
