// volt-core - Value types for Volt
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Core value type for the Volt runtime.
//!
//! `Value` is the central enum representing all Volt values. Lists, dicts,
//! instances and modules are reference-shared (`Rc` handles around interior
//! mutability); numbers, strings, booleans and null are value-shared.
//! Dicts preserve insertion order and use string keys.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use volt_parser::FuncDecl;

use crate::context::Ctx;
use crate::env::Env;
use crate::error::Result;

/// Signature of native functions exported by standard modules.
pub type NativeFn = fn(&Ctx, &[Value]) -> Result<Value>;

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    List(Rc<RefCell<Vec<Value>>>),
    Dict(Rc<RefCell<IndexMap<String, Value>>>),
    Func(Rc<VoltFn>),
    Bound(Rc<BoundMethod>),
    Class(Rc<VoltClass>),
    Instance(Rc<VoltInstance>),
    Module(Rc<VoltModule>),
}

/// A user-defined function or lambda: its declaration plus the environment
/// captured at the definition site.
#[derive(Debug)]
pub struct VoltFn {
    pub decl: Rc<FuncDecl>,
    pub env: Env,
}

/// A method plucked off an instance: the function, the receiver it is bound
/// to, and the class the method was found on (the anchor for `super`).
#[derive(Debug)]
pub struct BoundMethod {
    pub func: Rc<VoltFn>,
    /// Always an `Instance`; never null.
    pub receiver: Value,
    pub class: Rc<VoltClass>,
}

/// A class: name, optional parent, and its own method table.
#[derive(Debug)]
pub struct VoltClass {
    pub name: String,
    pub parent: Option<Rc<VoltClass>>,
    pub methods: IndexMap<String, Rc<VoltFn>>,
}

impl VoltClass {
    /// Find a method by walking the inheritance chain. Returns the function
    /// together with the class that defines it.
    pub fn find_method(
        class: &Rc<VoltClass>,
        name: &str,
    ) -> Option<(Rc<VoltFn>, Rc<VoltClass>)> {
        let mut current = class.clone();
        loop {
            if let Some(func) = current.methods.get(name) {
                let func = func.clone();
                return Some((func, current));
            }
            let parent = current.parent.clone()?;
            current = parent;
        }
    }

    /// True when `class` appears in `self`'s inheritance chain.
    pub fn derives_from(class: &Rc<VoltClass>, ancestor: &Rc<VoltClass>) -> bool {
        let mut current = class.clone();
        loop {
            if Rc::ptr_eq(&current, ancestor) {
                return true;
            }
            match current.parent.clone() {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

/// An object: its class and a mutable attribute map.
#[derive(Debug)]
pub struct VoltInstance {
    pub class: Rc<VoltClass>,
    pub attrs: RefCell<IndexMap<String, Value>>,
}

/// A built-in module: named constants plus native functions.
#[derive(Debug)]
pub struct VoltModule {
    pub name: &'static str,
    pub consts: Vec<(&'static str, Value)>,
    pub funcs: Vec<(&'static str, NativeFn)>,
}

impl VoltModule {
    /// Look up an exported constant.
    pub fn constant(&self, name: &str) -> Option<Value> {
        self.consts
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.clone())
    }

    /// Look up an exported function.
    pub fn function(&self, name: &str) -> Option<NativeFn> {
        self.funcs.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }
}

impl Value {
    /// Create a string value.
    pub fn str(s: impl AsRef<str>) -> Value {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Create a list value from elements.
    pub fn list(elements: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(elements)))
    }

    /// Create a dict value from entries.
    pub fn dict(entries: IndexMap<String, Value>) -> Value {
        Value::Dict(Rc::new(RefCell::new(entries)))
    }

    /// Volt truthiness: `false`, `null`, `0`, `0.0`, `""`, the empty list
    /// and the empty dict are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Dict(map) => !map.borrow().is_empty(),
            _ => true,
        }
    }

    /// The type name used in diagnostics. Instances report their class name.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "boolean".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::List(_) => "list".to_string(),
            Value::Dict(_) => "dict".to_string(),
            Value::Func(_) | Value::Bound(_) => "function".to_string(),
            Value::Class(_) => "class".to_string(),
            Value::Instance(instance) => instance.class.name.clone(),
            Value::Module(_) => "module".to_string(),
        }
    }

    /// Numeric view of ints and floats.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// Deep equality. Numbers compare numerically across Int/Float; lists and
/// dicts compare element-wise; functions, instances, classes and modules
/// compare by identity. Cross-type equality is false.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => {
            *x as f64 == *y
        }
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::List(x), Value::List(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let x = x.borrow();
            let y = y.borrow();
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| values_equal(a, b))
        }
        (Value::Dict(x), Value::Dict(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let x = x.borrow();
            let y = y.borrow();
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        (Value::Func(x), Value::Func(y)) => Rc::ptr_eq(x, y),
        (Value::Bound(x), Value::Bound(y)) => Rc::ptr_eq(x, y),
        (Value::Class(x), Value::Class(y)) => Rc::ptr_eq(x, y),
        (Value::Instance(x), Value::Instance(y)) => Rc::ptr_eq(x, y),
        (Value::Module(x), Value::Module(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Ordering for `<`/`<=`/`>`/`>=` and `sort`. Numbers order numerically,
/// strings lexicographically by code point. Everything else (including
/// cross-type pairs) has no defined order.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Str(x), Value::Str(y)) => Some(x.cmp(y)),
        _ => {
            let x = a.as_number()?;
            let y = b.as_number()?;
            x.partial_cmp(&y)
        }
    }
}

/// Format a float the way Volt prints numbers: whole floats lose the
/// decimal point (`5`, not `5.0`), everything else uses the shortest
/// round-trip form.
pub fn format_float(n: f64) -> String {
    format!("{}", n)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other)
    }
}

impl fmt::Display for Value {
    /// Basic rendering without user `toString` dispatch; the evaluator's
    /// stringify routine is the authoritative one for `show`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", format_float(*n)),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Dict(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Func(func) => {
                let params: Vec<&str> = func
                    .decl
                    .params
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect();
                write!(f, "<func {}({})>", func.decl.name, params.join(", "))
            }
            Value::Bound(bound) => {
                write!(f, "<method {}.{}>", bound.class.name, bound.func.decl.name)
            }
            Value::Class(class) => write!(f, "<class {}>", class.name),
            Value::Instance(instance) => {
                write!(f, "{}(", instance.class.name)?;
                for (i, (k, v)) in instance.attrs.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                write!(f, ")")
            }
            Value::Module(module) => write!(f, "<module '{}'>", module.name),
        }
    }
}
