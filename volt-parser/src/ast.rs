// volt-parser - Syntax tree for Volt
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Syntax tree produced by the parser and walked by the evaluator.

use std::rc::Rc;

/// A parsed source file: a sequence of top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A function parameter, optionally carrying a default-value expression.
///
/// Defaults are stored unevaluated; the evaluator re-evaluates them on every
/// call where the argument is omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<Expr>,
}

/// A function declaration: named functions, methods, and lambdas
/// (lambdas are desugared to a body of one `return` statement).
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

/// The left-hand side of a `set` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// `set x = …`
    Name(String),
    /// `set obj.field = …`
    Member { object: Expr, name: String },
    /// `set obj[index] = …`
    Index { object: Expr, index: Expr },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `set TARGET = EXPR`
    Set { target: Target, value: Expr },
    /// `set [a, b, c] = EXPR`
    DestructureList { names: Vec<String>, value: Expr },
    /// `set {name, age} = EXPR`
    DestructureDict { names: Vec<String>, value: Expr },
    /// `func name(params) { … }`
    Func(Rc<FuncDecl>),
    /// `class Name (extends Parent)? { … }`
    Class {
        name: String,
        parent: Option<String>,
        methods: Vec<Rc<FuncDecl>>,
    },
    If {
        cond: Expr,
        body: Vec<Stmt>,
        elifs: Vec<(Expr, Vec<Stmt>)>,
        else_body: Option<Vec<Stmt>>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    /// `for i in start to end { … }` — start inclusive, end exclusive
    ForRange {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
    /// `for x in expr { … }` / `for a, b in expr { … }`
    ForIn {
        var: String,
        var2: Option<String>,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    /// `for EXPR { … }` — run the body N times
    Repeat {
        count: Expr,
        body: Vec<Stmt>,
    },
    Match {
        value: Expr,
        cases: Vec<(Expr, Vec<Stmt>)>,
        default: Option<Vec<Stmt>>,
    },
    Try {
        body: Vec<Stmt>,
        catch: Option<(String, Vec<Stmt>)>,
        finally: Option<Vec<Stmt>>,
    },
    Throw(Expr),
    Return(Option<Expr>),
    Break,
    Continue,
    /// `use "name"`
    Use(String),
    Show(Expr),
    Ask {
        prompt: Expr,
        var: String,
    },
    Expr(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
    /// F-string: literal pieces became `Expr::Str`, fragments were re-parsed.
    Interp(Vec<Expr>),
    List(Vec<Expr>),
    /// Dict literal; keys are arbitrary expressions (bare identifiers were
    /// converted to string literals by the parser).
    Dict(Vec<(Expr, Expr)>),
    Ident(String),
    This,
    Member {
        object: Box<Expr>,
        name: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MethodCall {
        object: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    SuperCall {
        method: String,
        args: Vec<Expr>,
    },
    New {
        class: String,
        args: Vec<Expr>,
    },
    IsInstance {
        value: Box<Expr>,
        class: Box<Expr>,
    },
    Lambda(Rc<FuncDecl>),
    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
