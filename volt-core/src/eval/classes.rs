// volt-core - Classes, instances and method dispatch
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! The object system: class declaration, instantiation, attribute and
//! method resolution, `super` dispatch, and `isinstance`.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use volt_parser::FuncDecl;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::call;
use crate::value::{BoundMethod, Value, VoltClass, VoltFn, VoltInstance};

/// Binding name of the receiver inside methods.
pub const THIS: &str = "this";

/// Hidden binding carrying the class a running method was defined on;
/// `super` resolves from its parent.
pub const CLASS_SLOT: &str = "__class__";

/// Evaluate a class declaration and bind the class in `env`.
///
/// A parentless class without a declared `init` gets a synthesized zero-arg
/// one, so `new` always finds an initializer on the chain. Subclasses
/// without their own `init` inherit the parent's.
pub fn declare_class(
    name: &str,
    parent_name: Option<&str>,
    method_decls: &[Rc<FuncDecl>],
    env: &Env,
) -> Result<Value> {
    let parent = match parent_name {
        Some(pname) => match env.lookup(pname)? {
            Value::Class(parent) => Some(parent),
            other => {
                return Err(Error::type_error_in(
                    format!("class {}", name),
                    "class",
                    other.type_name(),
                ));
            }
        },
        None => None,
    };

    let mut methods: IndexMap<String, Rc<VoltFn>> = IndexMap::new();
    for decl in method_decls {
        methods.insert(
            decl.name.clone(),
            Rc::new(VoltFn {
                decl: decl.clone(),
                env: env.clone(),
            }),
        );
    }

    if parent.is_none() && !methods.contains_key("init") {
        let decl = Rc::new(FuncDecl {
            name: "init".to_string(),
            params: Vec::new(),
            body: Vec::new(),
        });
        methods.insert(
            "init".to_string(),
            Rc::new(VoltFn {
                decl,
                env: env.clone(),
            }),
        );
    }

    let class = Rc::new(VoltClass {
        name: name.to_string(),
        parent,
        methods,
    });
    let value = Value::Class(class);
    env.define(name.to_string(), value.clone());
    Ok(value)
}

/// Allocate a fresh instance and run the chain's `init` bound to it.
pub fn instantiate(class: &Rc<VoltClass>, args: Vec<Value>) -> Result<Value> {
    let instance = Value::Instance(Rc::new(VoltInstance {
        class: class.clone(),
        attrs: RefCell::new(IndexMap::new()),
    }));

    let (init, defining) = VoltClass::find_method(class, "init").ok_or_else(|| {
        Error::eval(format!("Class '{}' has no 'init' method", class.name))
    })?;
    // The constructor's return value is discarded.
    call::call_fn(&init, Some((instance.clone(), defining)), args)?;
    Ok(instance)
}

/// Resolve `obj.name` on an instance: attribute first, then a method from
/// the class chain, yielding a bound method.
pub fn instance_member(
    instance: &Rc<VoltInstance>,
    receiver: &Value,
    name: &str,
) -> Result<Value> {
    if let Some(value) = instance.attrs.borrow().get(name) {
        return Ok(value.clone());
    }
    if let Some((func, defining)) = VoltClass::find_method(&instance.class, name) {
        return Ok(Value::Bound(Rc::new(BoundMethod {
            func,
            receiver: receiver.clone(),
            class: defining,
        })));
    }
    Err(Error::eval(format!(
        "'{}' has no property or method '{}'",
        instance.class.name, name
    )))
}

/// Call `obj.name(args)` on an instance. A function stored as an attribute
/// takes precedence over class methods, matching attribute lookup order.
pub fn call_instance_method(
    instance: &Rc<VoltInstance>,
    receiver: &Value,
    name: &str,
    args: Vec<Value>,
) -> Result<Value> {
    let attr = instance.attrs.borrow().get(name).cloned();
    if let Some(value) = attr {
        return match value {
            Value::Func(_) | Value::Bound(_) => call::call_value(&value, args),
            _ => Err(Error::eval(format!("'{}' is not a method", name))),
        };
    }

    let (func, defining) = VoltClass::find_method(&instance.class, name).ok_or_else(|| {
        Error::eval(format!(
            "'{}' has no method '{}'",
            instance.class.name, name
        ))
    })?;
    call::call_fn(&func, Some((receiver.clone(), defining)), args)
}

/// Dispatch `super.method(args)`: look the method up starting at the parent
/// of the class the running method was defined on.
pub fn super_call(env: &Env, method: &str, args: Vec<Value>) -> Result<Value> {
    let this = env
        .try_lookup(THIS)
        .ok_or_else(|| Error::eval("'super' used outside of a class method"))?;
    let current = match env.try_lookup(CLASS_SLOT) {
        Some(Value::Class(class)) => class,
        _ => return Err(Error::eval("'super' used outside of a class method")),
    };
    let parent = current
        .parent
        .clone()
        .ok_or_else(|| Error::eval("'super' used outside of a subclass method"))?;

    let (func, defining) = VoltClass::find_method(&parent, method).ok_or_else(|| {
        Error::eval(format!("Parent class has no method '{}'", method))
    })?;
    call::call_fn(&func, Some((this, defining)), args)
}

/// `isinstance(obj, Class)`: true iff `obj` is an instance and `Class`
/// appears in its inheritance chain.
pub fn isinstance_check(value: &Value, class_value: &Value) -> Result<Value> {
    let class = match class_value {
        Value::Class(class) => class,
        other => {
            return Err(Error::type_error_in(
                "isinstance",
                "class",
                other.type_name(),
            ));
        }
    };
    let result = match value {
        Value::Instance(instance) => VoltClass::derives_from(&instance.class, class),
        _ => false,
    };
    Ok(Value::Bool(result))
}
