// volt-core - Evaluator for Volt
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Tree-walking evaluator.
//!
//! Statements and expressions evaluate against an [`Env`]; non-local exits
//! (`return`, `break`, `continue`, `throw`) travel as error variants until
//! the construct that owns them intercepts them (see [`crate::error`]).

pub mod call;
pub mod classes;
pub mod exceptions;

use std::rc::Rc;

use indexmap::IndexMap;

use volt_parser::{BinOp, Expr, Program, Stmt, Target, UnOp};

use crate::builtins;
use crate::env::Env;
use crate::error::{Error, Result};
use crate::methods;
use crate::modules;
use crate::value::{
    compare_values, format_float, values_equal, Value, VoltClass, VoltFn,
};

pub use call::call_value;

/// Evaluate a whole program, returning the value of its last statement.
pub fn eval_program(program: &Program, env: &Env) -> Result<Value> {
    eval_block(&program.statements, env)
}

/// Evaluate a statement list, returning the value of the last statement.
/// Blocks do not open a new scope; only function calls do.
pub fn eval_block(statements: &[Stmt], env: &Env) -> Result<Value> {
    let mut result = Value::Null;
    for stmt in statements {
        result = eval_stmt(stmt, env)?;
    }
    Ok(result)
}

pub fn eval_stmt(stmt: &Stmt, env: &Env) -> Result<Value> {
    match stmt {
        Stmt::Set { target, value } => {
            let value = eval_expr(value, env)?;
            assign(target, value, env)?;
            Ok(Value::Null)
        }
        Stmt::DestructureList { names, value } => {
            let value = eval_expr(value, env)?;
            destructure_list(names, &value, env)?;
            Ok(Value::Null)
        }
        Stmt::DestructureDict { names, value } => {
            let value = eval_expr(value, env)?;
            destructure_dict(names, &value, env)?;
            Ok(Value::Null)
        }
        Stmt::Func(decl) => {
            let func = Value::Func(Rc::new(VoltFn {
                decl: decl.clone(),
                env: env.clone(),
            }));
            env.define(decl.name.clone(), func.clone());
            Ok(func)
        }
        Stmt::Class {
            name,
            parent,
            methods,
        } => classes::declare_class(name, parent.as_deref(), methods, env),
        Stmt::If {
            cond,
            body,
            elifs,
            else_body,
        } => {
            if eval_expr(cond, env)?.is_truthy() {
                return eval_block(body, env);
            }
            for (elif_cond, elif_body) in elifs {
                if eval_expr(elif_cond, env)?.is_truthy() {
                    return eval_block(elif_body, env);
                }
            }
            match else_body {
                Some(body) => eval_block(body, env),
                None => Ok(Value::Null),
            }
        }
        Stmt::While { cond, body } => {
            while eval_expr(cond, env)?.is_truthy() {
                match eval_block(body, env) {
                    Ok(_) => {}
                    Err(Error::Break) => break,
                    Err(Error::Continue) => continue,
                    Err(e) => return Err(e),
                }
            }
            Ok(Value::Null)
        }
        Stmt::ForRange {
            var,
            start,
            end,
            body,
        } => {
            let start = as_int(&eval_expr(start, env)?, "for range start")?;
            let end = as_int(&eval_expr(end, env)?, "for range end")?;
            let mut i = start;
            while i < end {
                env.define(var.clone(), Value::Int(i));
                match eval_block(body, env) {
                    Ok(_) => {}
                    Err(Error::Break) => break,
                    Err(Error::Continue) => {
                        i += 1;
                        continue;
                    }
                    Err(e) => return Err(e),
                }
                i += 1;
            }
            Ok(Value::Null)
        }
        Stmt::ForIn {
            var,
            var2,
            iterable,
            body,
        } => eval_for_in(var, var2.as_deref(), iterable, body, env),
        Stmt::Repeat { count, body } => {
            let times = as_int(&eval_expr(count, env)?, "loop count")?;
            for _ in 0..times.max(0) {
                match eval_block(body, env) {
                    Ok(_) => {}
                    Err(Error::Break) => break,
                    Err(Error::Continue) => continue,
                    Err(e) => return Err(e),
                }
            }
            Ok(Value::Null)
        }
        Stmt::Match {
            value,
            cases,
            default,
        } => {
            let value = eval_expr(value, env)?;
            for (pattern, body) in cases {
                let pattern = eval_expr(pattern, env)?;
                if values_equal(&value, &pattern) {
                    return eval_block(body, env);
                }
            }
            match default {
                Some(body) => eval_block(body, env),
                None => Ok(Value::Null),
            }
        }
        Stmt::Try {
            body,
            catch,
            finally,
        } => exceptions::eval_try(body, catch.as_ref(), finally.as_ref(), env),
        Stmt::Throw(expr) => {
            let value = eval_expr(expr, env)?;
            Err(Error::Thrown(value))
        }
        Stmt::Return(expr) => {
            let value = match expr {
                Some(expr) => eval_expr(expr, env)?,
                None => Value::Null,
            };
            Err(Error::Return(value))
        }
        Stmt::Break => Err(Error::Break),
        Stmt::Continue => Err(Error::Continue),
        Stmt::Use(name) => {
            let module = modules::load(name)?;
            env.define(name.clone(), module.clone());
            Ok(module)
        }
        Stmt::Show(expr) => {
            let value = eval_expr(expr, env)?;
            let text = stringify(&value)?;
            env.ctx().show(&text)?;
            Ok(Value::Null)
        }
        Stmt::Ask { prompt, var } => {
            let prompt = stringify(&eval_expr(prompt, env)?)?;
            let line = env.ctx().ask(&prompt)?;
            let value = Value::str(line);
            env.define(var.clone(), value.clone());
            Ok(value)
        }
        Stmt::Expr(expr) => eval_expr(expr, env),
    }
}

pub fn eval_expr(expr: &Expr, env: &Env) -> Result<Value> {
    match expr {
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Float(n) => Ok(Value::Float(*n)),
        Expr::Str(s) => Ok(Value::str(s)),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Null => Ok(Value::Null),
        Expr::Interp(parts) => {
            let mut out = String::new();
            for part in parts {
                let value = eval_expr(part, env)?;
                out.push_str(&stringify(&value)?);
            }
            Ok(Value::str(out))
        }
        Expr::List(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(eval_expr(element, env)?);
            }
            Ok(Value::list(items))
        }
        Expr::Dict(pairs) => {
            let mut map = IndexMap::with_capacity(pairs.len());
            for (key, value) in pairs {
                let key = key_string(&eval_expr(key, env)?)?;
                let value = eval_expr(value, env)?;
                map.insert(key, value);
            }
            Ok(Value::dict(map))
        }
        Expr::Ident(name) => env.lookup(name),
        Expr::This => env
            .try_lookup(classes::THIS)
            .ok_or_else(|| Error::eval("'this' used outside of a method")),
        Expr::Member { object, name } => {
            let object = eval_expr(object, env)?;
            member_get(&object, name)
        }
        Expr::Index { object, index } => {
            let object = eval_expr(object, env)?;
            let index = eval_expr(index, env)?;
            index_get(&object, &index)
        }
        Expr::Call { callee, args } => {
            let args = eval_args(args, env)?;
            if let Expr::Ident(name) = callee.as_ref() {
                // User bindings shadow global builtins.
                match env.try_lookup(name) {
                    Some(value) => call::call_value(&value, args),
                    None => match builtins::lookup(name) {
                        Some(builtin) => builtin(&env.ctx(), &args),
                        None => Err(Error::UndefinedName(name.clone())),
                    },
                }
            } else {
                let callee = eval_expr(callee, env)?;
                call::call_value(&callee, args)
            }
        }
        Expr::MethodCall {
            object,
            method,
            args,
        } => {
            let object = eval_expr(object, env)?;
            let args = eval_args(args, env)?;
            eval_method_call(&object, method, args, env)
        }
        Expr::SuperCall { method, args } => {
            let args = eval_args(args, env)?;
            classes::super_call(env, method, args)
        }
        Expr::New { class, args } => {
            let class_value = env.lookup(class)?;
            let class = match class_value {
                Value::Class(class) => class,
                other => {
                    return Err(Error::type_error_in(
                        "new",
                        "class",
                        other.type_name(),
                    ));
                }
            };
            let args = eval_args(args, env)?;
            classes::instantiate(&class, args)
        }
        Expr::IsInstance { value, class } => {
            let value = eval_expr(value, env)?;
            let class = eval_expr(class, env)?;
            classes::isinstance_check(&value, &class)
        }
        Expr::Lambda(decl) => Ok(Value::Func(Rc::new(VoltFn {
            decl: decl.clone(),
            env: env.clone(),
        }))),
        Expr::Unary { op, operand } => {
            let operand = eval_expr(operand, env)?;
            unary_op(*op, &operand)
        }
        Expr::Binary { op, left, right } => match op {
            BinOp::And => {
                let left = eval_expr(left, env)?;
                if left.is_truthy() {
                    eval_expr(right, env)
                } else {
                    Ok(left)
                }
            }
            BinOp::Or => {
                let left = eval_expr(left, env)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    eval_expr(right, env)
                }
            }
            _ => {
                let left = eval_expr(left, env)?;
                let right = eval_expr(right, env)?;
                binary_op(*op, &left, &right)
            }
        },
    }
}

fn eval_args(args: &[Expr], env: &Env) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval_expr(arg, env)?);
    }
    Ok(values)
}

// ============================================================================
// Method dispatch
// ============================================================================

fn eval_method_call(
    object: &Value,
    method: &str,
    args: Vec<Value>,
    env: &Env,
) -> Result<Value> {
    match object {
        Value::Instance(instance) => {
            classes::call_instance_method(instance, object, method, args)
        }
        Value::Module(module) => match module.function(method) {
            Some(func) => func(&env.ctx(), &args),
            None => Err(Error::eval(format!(
                "Module '{}' has no function '{}'",
                module.name, method
            ))),
        },
        Value::Str(s) => methods::strings::call(s, method, &args),
        Value::List(items) => methods::lists::call(items, method, &args),
        Value::Dict(map) => methods::dicts::call(map, method, &args),
        Value::Int(_) | Value::Float(_) => methods::numbers::call(object, method, &args),
        other => Err(Error::eval(format!(
            "Cannot call method '{}' on {}",
            method,
            other.type_name()
        ))),
    }
}

// ============================================================================
// Assignment
// ============================================================================

fn assign(target: &Target, value: Value, env: &Env) -> Result<()> {
    match target {
        Target::Name(name) => {
            // Rebind where defined, or declare in the innermost scope.
            if !env.assign(name, value.clone()) {
                env.define(name.clone(), value);
            }
            Ok(())
        }
        Target::Member { object, name } => {
            let object = eval_expr(object, env)?;
            member_set(&object, name, value)
        }
        Target::Index { object, index } => {
            let object = eval_expr(object, env)?;
            let index = eval_expr(index, env)?;
            index_set(&object, &index, value)
        }
    }
}

fn destructure_list(names: &[String], value: &Value, env: &Env) -> Result<()> {
    let items = match value {
        Value::List(items) => items.borrow().clone(),
        other => {
            return Err(Error::type_error_in(
                "destructuring",
                "list",
                other.type_name(),
            ));
        }
    };
    if names.len() > items.len() {
        return Err(Error::value_error(format!(
            "Not enough values to destructure: expected {}, got {}",
            names.len(),
            items.len()
        )));
    }
    for (name, item) in names.iter().zip(items) {
        env.define(name.clone(), item);
    }
    Ok(())
}

fn destructure_dict(names: &[String], value: &Value, env: &Env) -> Result<()> {
    match value {
        Value::Dict(map) => {
            let map = map.borrow();
            for name in names {
                let item = map
                    .get(name)
                    .cloned()
                    .ok_or_else(|| Error::KeyNotFound(name.clone()))?;
                env.define(name.clone(), item);
            }
            Ok(())
        }
        Value::Instance(instance) => {
            let attrs = instance.attrs.borrow();
            for name in names {
                let item = attrs.get(name).cloned().ok_or_else(|| {
                    Error::eval(format!("Property '{}' not found on instance", name))
                })?;
                env.define(name.clone(), item);
            }
            Ok(())
        }
        other => Err(Error::type_error_in(
            "destructuring",
            "dict",
            other.type_name(),
        )),
    }
}

// ============================================================================
// Member and index access
// ============================================================================

fn member_get(object: &Value, name: &str) -> Result<Value> {
    match object {
        Value::Instance(instance) => classes::instance_member(instance, object, name),
        Value::Module(module) => {
            if let Some(value) = module.constant(name) {
                return Ok(value);
            }
            if module.function(name).is_some() {
                return Err(Error::eval(format!(
                    "'{}.{}' is a function; call it as {}.{}(...)",
                    module.name, name, module.name, name
                )));
            }
            Err(Error::eval(format!(
                "Module '{}' has no property '{}'",
                module.name, name
            )))
        }
        Value::Class(class) => match VoltClass::find_method(class, name) {
            Some((func, _)) => Ok(Value::Func(func)),
            None => Err(Error::eval(format!(
                "Class '{}' has no method '{}'",
                class.name, name
            ))),
        },
        Value::Dict(map) => map
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(name.to_string())),
        Value::Str(s) => match name {
            "length" => Ok(Value::Int(s.chars().count() as i64)),
            _ => Err(Error::eval(format!(
                "String has no property '{}'; use .{}() for methods",
                name, name
            ))),
        },
        Value::List(items) => match name {
            "length" => Ok(Value::Int(items.borrow().len() as i64)),
            _ => Err(Error::eval(format!(
                "List has no property '{}'; use .{}() for methods",
                name, name
            ))),
        },
        other => Err(Error::eval(format!(
            "Cannot access property '{}' on {}",
            name,
            other.type_name()
        ))),
    }
}

fn member_set(object: &Value, name: &str, value: Value) -> Result<()> {
    match object {
        Value::Instance(instance) => {
            instance.attrs.borrow_mut().insert(name.to_string(), value);
            Ok(())
        }
        Value::Dict(map) => {
            map.borrow_mut().insert(name.to_string(), value);
            Ok(())
        }
        other => Err(Error::eval(format!(
            "Cannot set property on {}",
            other.type_name()
        ))),
    }
}

fn index_get(object: &Value, index: &Value) -> Result<Value> {
    match object {
        Value::List(items) => {
            let items = items.borrow();
            let idx = want_index(index)?;
            if idx < 0 || idx as usize >= items.len() {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    length: items.len(),
                });
            }
            Ok(items[idx as usize].clone())
        }
        Value::Str(s) => {
            let idx = want_index(index)?;
            let length = s.chars().count();
            if idx < 0 || idx as usize >= length {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    length,
                });
            }
            let ch = s.chars().nth(idx as usize).unwrap();
            Ok(Value::str(ch.to_string()))
        }
        Value::Dict(map) => {
            let key = key_string(index)?;
            map.borrow()
                .get(&key)
                .cloned()
                .ok_or(Error::KeyNotFound(key))
        }
        other => Err(Error::eval(format!(
            "Cannot index {}",
            other.type_name()
        ))),
    }
}

fn index_set(object: &Value, index: &Value, value: Value) -> Result<()> {
    match object {
        Value::List(items) => {
            let mut items = items.borrow_mut();
            let idx = want_index(index)?;
            if idx < 0 || idx as usize >= items.len() {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    length: items.len(),
                });
            }
            items[idx as usize] = value;
            Ok(())
        }
        Value::Dict(map) => {
            // Inserts a new key or updates in place, keeping its position.
            let key = key_string(index)?;
            map.borrow_mut().insert(key, value);
            Ok(())
        }
        other => Err(Error::eval(format!(
            "Cannot index-assign on {}",
            other.type_name()
        ))),
    }
}

fn want_index(index: &Value) -> Result<i64> {
    match index {
        Value::Int(n) => Ok(*n),
        other => Err(Error::type_error_in("index", "int", other.type_name())),
    }
}

/// Integer view used by range bounds and repeat counts; floats truncate.
fn as_int(value: &Value, context: &str) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(n) => Ok(*n as i64),
        other => Err(Error::type_error_in(
            context.to_string(),
            "number",
            other.type_name(),
        )),
    }
}

// ============================================================================
// Loops over collections
// ============================================================================

fn eval_for_in(
    var: &str,
    var2: Option<&str>,
    iterable: &Expr,
    body: &[Stmt],
    env: &Env,
) -> Result<Value> {
    let iterable = eval_expr(iterable, env)?;

    // Snapshot the elements so the body may mutate the collection freely.
    let pairs: Vec<(Value, Value)> = match &iterable {
        Value::List(items) => items
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, item)| (Value::Int(i as i64), item.clone()))
            .collect(),
        Value::Dict(map) => map
            .borrow()
            .iter()
            .map(|(k, v)| (Value::str(k), v.clone()))
            .collect(),
        Value::Str(s) => s
            .chars()
            .enumerate()
            .map(|(i, ch)| (Value::Int(i as i64), Value::str(ch.to_string())))
            .collect(),
        other => {
            return Err(Error::eval(format!(
                "Cannot iterate over {}",
                other.type_name()
            )));
        }
    };

    let keyed = matches!(iterable, Value::Dict(_));
    for (key, item) in pairs {
        match var2 {
            Some(var2) => {
                env.define(var.to_string(), key);
                env.define(var2.to_string(), item);
            }
            None => {
                // Dicts iterate over keys; lists and strings over elements.
                let single = if keyed { key } else { item };
                env.define(var.to_string(), single);
            }
        }
        match eval_block(body, env) {
            Ok(_) => {}
            Err(Error::Break) => break,
            Err(Error::Continue) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(Value::Null)
}

// ============================================================================
// Operators
// ============================================================================

fn unary_op(op: UnOp, operand: &Value) -> Result<Value> {
    match op {
        UnOp::Neg => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or(Error::IntegerOverflow { operation: "-" }),
            Value::Float(n) => Ok(Value::Float(-n)),
            other => Err(Error::type_error_in(
                "unary '-'",
                "number",
                other.type_name(),
            )),
        },
        UnOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

fn binary_op(op: BinOp, left: &Value, right: &Value) -> Result<Value> {
    match op {
        BinOp::Add => add_values(left, right),
        BinOp::Sub => arith("-", left, right, i64::checked_sub, |a, b| a - b),
        BinOp::Mul => arith("*", left, right, i64::checked_mul, |a, b| a * b),
        BinOp::Div => {
            let (a, b) = want_numbers("/", left, right)?;
            if b == 0.0 {
                return Err(Error::DivisionByZero);
            }
            Ok(Value::Float(a / b))
        }
        BinOp::Rem => match (left, right) {
            (Value::Int(a), Value::Int(b)) => {
                if *b == 0 {
                    return Err(Error::DivisionByZero);
                }
                a.checked_rem(*b)
                    .map(Value::Int)
                    .ok_or(Error::IntegerOverflow { operation: "%" })
            }
            _ => {
                let (a, b) = want_numbers("%", left, right)?;
                if b == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(Value::Float(a % b))
            }
        },
        BinOp::Eq => Ok(Value::Bool(values_equal(left, right))),
        BinOp::Ne => Ok(Value::Bool(!values_equal(left, right))),
        BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => {
            let ordering = compare_values(left, right).ok_or_else(|| {
                Error::eval(format!(
                    "Cannot compare {} with {}",
                    left.type_name(),
                    right.type_name()
                ))
            })?;
            let result = match op {
                BinOp::Lt => ordering.is_lt(),
                BinOp::Le => ordering.is_le(),
                BinOp::Gt => ordering.is_gt(),
                BinOp::Ge => ordering.is_ge(),
                _ => unreachable!(),
            };
            Ok(Value::Bool(result))
        }
        BinOp::And | BinOp::Or => unreachable!("short-circuit ops are handled in eval_expr"),
    }
}

/// `+`: string concatenation when either side is a string, list/dict
/// concatenation and merge, numeric addition otherwise.
fn add_values(left: &Value, right: &Value) -> Result<Value> {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        let mut out = stringify(left)?;
        out.push_str(&stringify(right)?);
        return Ok(Value::str(out));
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(*b)
            .map(Value::Int)
            .ok_or(Error::IntegerOverflow { operation: "+" }),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        (Value::Dict(a), Value::Dict(b)) => {
            let mut map = a.borrow().clone();
            for (k, v) in b.borrow().iter() {
                map.insert(k.clone(), v.clone());
            }
            Ok(Value::dict(map))
        }
        _ => {
            let (a, b) = want_numbers("+", left, right)?;
            Ok(Value::Float(a + b))
        }
    }
}

fn arith(
    symbol: &'static str,
    left: &Value,
    right: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_op(*a, *b)
            .map(Value::Int)
            .ok_or(Error::IntegerOverflow { operation: symbol }),
        _ => {
            let (a, b) = want_numbers(symbol, left, right)?;
            Ok(Value::Float(float_op(a, b)))
        }
    }
}

fn want_numbers(op: &'static str, left: &Value, right: &Value) -> Result<(f64, f64)> {
    let a = left.as_number().ok_or_else(|| {
        Error::type_error_in(format!("operator '{}'", op), "number", left.type_name())
    })?;
    let b = right.as_number().ok_or_else(|| {
        Error::type_error_in(format!("operator '{}'", op), "number", right.type_name())
    })?;
    Ok((a, b))
}

// ============================================================================
// Stringification
// ============================================================================

/// Render a value the way `show` prints it. Instances with a `toString`
/// method delegate to it; other instances render as `ClassName(k=v, …)`.
pub fn stringify(value: &Value) -> Result<String> {
    match value {
        Value::Instance(instance) => {
            if let Some((func, defining)) =
                VoltClass::find_method(&instance.class, "toString")
            {
                let rendered =
                    call::call_fn(&func, Some((value.clone(), defining)), Vec::new())?;
                return stringify(&rendered);
            }
            let attrs: Vec<(String, Value)> = instance
                .attrs
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let mut parts = Vec::with_capacity(attrs.len());
            for (key, attr) in &attrs {
                parts.push(format!("{}={}", key, stringify(attr)?));
            }
            Ok(format!("{}({})", instance.class.name, parts.join(", ")))
        }
        Value::List(items) => {
            let items: Vec<Value> = items.borrow().clone();
            let mut parts = Vec::with_capacity(items.len());
            for item in &items {
                parts.push(stringify(item)?);
            }
            Ok(format!("[{}]", parts.join(", ")))
        }
        Value::Dict(map) => {
            let pairs: Vec<(String, Value)> = map
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let mut parts = Vec::with_capacity(pairs.len());
            for (key, item) in &pairs {
                parts.push(format!("{}: {}", key, stringify(item)?));
            }
            Ok(format!("{{{}}}", parts.join(", ")))
        }
        other => Ok(other.to_string()),
    }
}

/// The stable string form used for dict keys.
pub fn key_string(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(s.to_string()),
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(n) => Ok(format_float(*n)),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(Error::type_error_in(
            "dict key",
            "string",
            other.type_name(),
        )),
    }
}
