// volt-parser - Parser for Volt
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Recursive descent parser for Volt source code.
//!
//! Statements are terminated by newlines or closing braces; expression
//! parsing uses one level of precedence climbing per operator tier. The
//! parser works over a buffered token stream so that it can backtrack when
//! deciding between a parenthesised expression and a lambda literal.

use std::fmt;
use std::rc::Rc;

use crate::ast::{BinOp, Expr, FuncDecl, Param, Program, Stmt, Target, UnOp};
use crate::lexer::{Lexer, LexerError, SpannedToken, StrPart, Token};

/// Parser error with position information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The name of a lambda in diagnostics and stringified values.
pub const LAMBDA_NAME: &str = "<lambda>";

/// The parser converts tokens into a [`Program`].
pub struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given source code.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::tokenize(source)?;
        Ok(Parser { tokens, pos: 0 })
    }

    /// Parse a whole program.
    pub fn parse_program(source: &str) -> Result<Program, ParseError> {
        let mut parser = Parser::new(source)?;
        parser.program()
    }

    /// Parse a single expression, requiring that it consumes all input.
    /// Used for f-string fragments.
    pub fn parse_expression_str(source: &str) -> Result<Expr, ParseError> {
        let mut parser = Parser::new(source)?;
        let expr = parser.expression()?;
        parser.skip_newlines();
        if !parser.at_end() {
            return Err(parser.error_here(format!(
                "unexpected '{}' after expression",
                parser.current().token
            )));
        }
        Ok(expr)
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn current(&self) -> &SpannedToken {
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos].token
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        // The token stream always ends with Eof, so clamp to the last token.
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].token
    }

    fn at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof)
    }

    fn advance(&mut self) -> SpannedToken {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let t = self.current();
        ParseError {
            message: message.into(),
            line: t.line,
            column: t.column,
        }
    }

    fn expect(&mut self, expected: &Token, message: &str) -> Result<SpannedToken, ParseError> {
        if self.peek() == expected {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("{}, got '{}'", message, self.peek())))
        }
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == token {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Token::Newline) {
            self.advance();
        }
    }

    fn expect_ident(&mut self, message: &str) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(_) => {
                if let Token::Ident(name) = self.advance().token {
                    Ok(name)
                } else {
                    unreachable!()
                }
            }
            other => Err(self.error_here(format!("{}, got '{}'", message, other))),
        }
    }

    /// Accept an identifier or any keyword as a property/method name after `.`.
    fn property_name(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(_) = self.peek() {
            if let Token::Ident(name) = self.advance().token {
                return Ok(name);
            }
            unreachable!()
        }
        match keyword_text(self.peek()) {
            Some(text) => {
                self.advance();
                Ok(text.to_string())
            }
            None => Err(self.error_here("Expected property name after '.'")),
        }
    }

    // ========================================================================
    // Program and statements
    // ========================================================================

    fn program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        self.skip_newlines();
        while !self.at_end() {
            statements.push(self.statement()?);
            self.skip_newlines();
        }
        Ok(Program { statements })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek() {
            Token::Set => self.set_statement(),
            Token::Show => {
                self.advance();
                Ok(Stmt::Show(self.expression()?))
            }
            Token::Ask => self.ask_statement(),
            Token::If => self.if_statement(),
            Token::While => self.while_statement(),
            Token::For => self.for_statement(),
            Token::Func => {
                let decl = self.func_declaration()?;
                Ok(Stmt::Func(Rc::new(decl)))
            }
            Token::Return => self.return_statement(),
            Token::Break => {
                self.advance();
                Ok(Stmt::Break)
            }
            Token::Continue => {
                self.advance();
                Ok(Stmt::Continue)
            }
            Token::Class => self.class_declaration(),
            Token::Match => self.match_statement(),
            Token::Try => self.try_statement(),
            Token::Throw => {
                self.advance();
                Ok(Stmt::Throw(self.expression()?))
            }
            Token::Use => self.use_statement(),
            Token::Import => Err(self.error_here("'import' is reserved; use 'use \"name\"'")),
            _ => Ok(Stmt::Expr(self.expression()?)),
        }
    }

    // ── set / assignment ────────────────────────────────────────────────

    fn set_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&Token::Set, "Expected 'set'")?;

        if matches!(self.peek(), Token::LBracket) {
            return self.destructure_list();
        }
        if matches!(self.peek(), Token::LBrace) {
            return self.destructure_dict();
        }

        let target = self.assign_target()?;
        self.expect(&Token::Assign, "Expected '=' in assignment")?;
        let value = self.expression()?;
        Ok(Stmt::Set { target, value })
    }

    /// Parse the left-hand side of an assignment: an identifier or `this`
    /// followed by any chain of member and index accesses.
    fn assign_target(&mut self) -> Result<Target, ParseError> {
        let mut expr = if self.eat(&Token::This) {
            Expr::This
        } else {
            Expr::Ident(self.expect_ident("Expected variable name")?)
        };

        loop {
            match self.peek() {
                Token::Dot => {
                    self.advance();
                    let name = self.property_name()?;
                    expr = Expr::Member {
                        object: Box::new(expr),
                        name,
                    };
                }
                Token::LBracket => {
                    self.advance();
                    let index = self.expression()?;
                    self.expect(&Token::RBracket, "Expected ']'")?;
                    expr = Expr::Index {
                        object: Box::new(expr),
                        index: Box::new(index),
                    };
                }
                _ => break,
            }
        }

        match expr {
            Expr::Ident(name) => Ok(Target::Name(name)),
            Expr::Member { object, name } => Ok(Target::Member {
                object: *object,
                name,
            }),
            Expr::Index { object, index } => Ok(Target::Index {
                object: *object,
                index: *index,
            }),
            Expr::This => Err(self.error_here(
                "Cannot assign directly to 'this'; use 'set this.property = value'",
            )),
            _ => Err(self.error_here("Invalid assignment target")),
        }
    }

    fn destructure_list(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // [
        let mut names = vec![self.expect_ident("Expected variable name")?];
        while self.eat(&Token::Comma) {
            names.push(self.expect_ident("Expected variable name")?);
        }
        self.expect(&Token::RBracket, "Expected ']' in destructuring")?;
        self.expect(&Token::Assign, "Expected '=' in destructuring")?;
        let value = self.expression()?;
        Ok(Stmt::DestructureList { names, value })
    }

    fn destructure_dict(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // {
        let mut names = vec![self.expect_ident("Expected variable name")?];
        while self.eat(&Token::Comma) {
            if matches!(self.peek(), Token::RBrace) {
                break;
            }
            names.push(self.expect_ident("Expected variable name")?);
        }
        self.expect(&Token::RBrace, "Expected '}' in destructuring")?;
        self.expect(&Token::Assign, "Expected '=' in destructuring")?;
        let value = self.expression()?;
        Ok(Stmt::DestructureDict { names, value })
    }

    // ── simple statements ───────────────────────────────────────────────

    fn ask_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // ask
        let prompt = self.expression()?;
        self.expect(&Token::Arrow, "Expected '->' after prompt")?;
        let var = self.expect_ident("Expected variable name after '->'")?;
        Ok(Stmt::Ask { prompt, var })
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // return
        let value = match self.peek() {
            Token::Newline | Token::Eof | Token::RBrace => None,
            _ => Some(self.expression()?),
        };
        Ok(Stmt::Return(value))
    }

    fn use_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // use
        match self.peek() {
            Token::Str(_) => {
                if let Token::Str(name) = self.advance().token {
                    Ok(Stmt::Use(name))
                } else {
                    unreachable!()
                }
            }
            other => Err(self.error_here(format!(
                "Expected module name string after 'use', got '{}'",
                other
            ))),
        }
    }

    // ── control flow ────────────────────────────────────────────────────

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // if
        let cond = self.expression()?;
        let body = self.block()?;

        let mut elifs = Vec::new();
        let mut else_body = None;

        self.skip_newlines();
        while matches!(self.peek(), Token::Else) {
            // Look past 'else' (and newlines) to see whether this is 'else if'.
            let mut offset = 1;
            while matches!(self.peek_ahead(offset), Token::Newline) {
                offset += 1;
            }
            if matches!(self.peek_ahead(offset), Token::If) {
                self.advance(); // else
                self.skip_newlines();
                self.advance(); // if
                let elif_cond = self.expression()?;
                let elif_body = self.block()?;
                elifs.push((elif_cond, elif_body));
                self.skip_newlines();
            } else {
                self.advance(); // else
                else_body = Some(self.block()?);
                break;
            }
        }

        Ok(Stmt::If {
            cond,
            body,
            elifs,
            else_body,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // while
        let cond = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::While { cond, body })
    }

    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // for

        if matches!(self.peek(), Token::Ident(_)) {
            let saved = self.pos;
            let var = self.expect_ident("Expected variable name")?;

            if self.eat(&Token::In) {
                let first = self.expression()?;
                if self.eat(&Token::To) {
                    let end = self.expression()?;
                    let body = self.block()?;
                    return Ok(Stmt::ForRange {
                        var,
                        start: first,
                        end,
                        body,
                    });
                }
                let body = self.block()?;
                return Ok(Stmt::ForIn {
                    var,
                    var2: None,
                    iterable: first,
                    body,
                });
            }

            if self.eat(&Token::Comma) {
                let var2 = self.expect_ident("Expected second variable name")?;
                self.expect(&Token::In, "Expected 'in' after variables in for loop")?;
                let iterable = self.expression()?;
                let body = self.block()?;
                return Ok(Stmt::ForIn {
                    var,
                    var2: Some(var2),
                    iterable,
                    body,
                });
            }

            // Neither a range nor an iteration: re-parse as a repeat count.
            self.pos = saved;
        }

        let count = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::Repeat { count, body })
    }

    // ── functions & classes ─────────────────────────────────────────────

    fn func_declaration(&mut self) -> Result<FuncDecl, ParseError> {
        self.expect(&Token::Func, "Expected 'func'")?;
        let name = self.property_name()?; // keywords allowed as names
        self.expect(&Token::LParen, "Expected '(' after function name")?;
        let params = self.param_list()?;
        self.expect(&Token::RParen, "Expected ')' after parameters")?;
        let body = self.block()?;
        Ok(FuncDecl { name, params, body })
    }

    fn param_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if matches!(self.peek(), Token::RParen) {
            return Ok(params);
        }
        params.push(self.single_param()?);
        while self.eat(&Token::Comma) {
            params.push(self.single_param()?);
        }
        Ok(params)
    }

    fn single_param(&mut self) -> Result<Param, ParseError> {
        let name = self.expect_ident("Expected parameter name")?;
        let default = if self.eat(&Token::Assign) {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Param { name, default })
    }

    fn class_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // class
        let name = self.expect_ident("Expected class name")?;
        let parent = if self.eat(&Token::Extends) {
            Some(self.expect_ident("Expected parent class name")?)
        } else {
            None
        };

        self.skip_newlines();
        self.expect(&Token::LBrace, "Expected '{' in class declaration")?;
        self.skip_newlines();

        let mut methods = Vec::new();
        while !self.at_end() && !matches!(self.peek(), Token::RBrace) {
            match self.peek() {
                Token::Func => methods.push(Rc::new(self.func_declaration()?)),
                Token::Newline => {
                    self.advance();
                }
                _ => return Err(self.error_here("Expected method declaration in class body")),
            }
            self.skip_newlines();
        }

        self.expect(&Token::RBrace, "Expected '}' after class body")?;
        Ok(Stmt::Class {
            name,
            parent,
            methods,
        })
    }

    // ── match / try ─────────────────────────────────────────────────────

    fn match_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // match
        let value = self.expression()?;

        self.skip_newlines();
        self.expect(&Token::LBrace, "Expected '{' after match expression")?;
        self.skip_newlines();

        let mut cases = Vec::new();
        let mut default = None;

        while !self.at_end() && !matches!(self.peek(), Token::RBrace) {
            match self.peek() {
                Token::Case => {
                    self.advance();
                    let pattern = self.expression()?;
                    let body = self.block()?;
                    cases.push((pattern, body));
                }
                Token::Default => {
                    self.advance();
                    default = Some(self.block()?);
                }
                Token::Newline => {
                    self.advance();
                }
                _ => return Err(self.error_here("Expected 'case' or 'default' in match")),
            }
            self.skip_newlines();
        }

        self.expect(&Token::RBrace, "Expected '}' after match body")?;
        Ok(Stmt::Match {
            value,
            cases,
            default,
        })
    }

    fn try_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // try
        let body = self.block()?;

        self.skip_newlines();
        let catch = if matches!(self.peek(), Token::Catch) {
            self.advance();
            let var = self.expect_ident("Expected variable name after 'catch'")?;
            Some((var, self.block()?))
        } else {
            None
        };

        self.skip_newlines();
        let finally = if matches!(self.peek(), Token::Finally) {
            self.advance();
            Some(self.block()?)
        } else {
            None
        };

        if catch.is_none() && finally.is_none() {
            return Err(self.error_here("Expected 'catch' or 'finally' after try block"));
        }

        Ok(Stmt::Try {
            body,
            catch,
            finally,
        })
    }

    // ── blocks ──────────────────────────────────────────────────────────

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.skip_newlines();
        self.expect(&Token::LBrace, "Expected '{'")?;
        self.skip_newlines();

        let mut statements = Vec::new();
        while !self.at_end() && !matches!(self.peek(), Token::RBrace) {
            statements.push(self.statement()?);
            self.skip_newlines();
        }

        self.expect(&Token::RBrace, "Expected '}'")?;
        Ok(statements)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and_expr()?;
        while self.eat(&Token::Or) {
            let right = self.and_expr()?;
            left = Expr::Binary {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.not_expr()?;
        while self.eat(&Token::And) {
            let right = self.not_expr()?;
            left = Expr::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Not) {
            let operand = self.not_expr()?;
            return Ok(Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(operand),
            });
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.addition()?;
        loop {
            let op = match self.peek() {
                Token::Eq => BinOp::Eq,
                Token::Ne => BinOp::Ne,
                Token::Lt => BinOp::Lt,
                Token::Gt => BinOp::Gt,
                Token::Le => BinOp::Le,
                Token::Ge => BinOp::Ge,
                _ => break,
            };
            self.advance();
            let right = self.addition()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn addition(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.multiplication()?;
        loop {
            let op = match self.peek() {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.multiplication()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn multiplication(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                Token::Percent => BinOp::Rem,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(operand),
            });
        }
        self.postfix()
    }

    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            match self.peek() {
                Token::Dot => {
                    self.advance();
                    let name = self.property_name()?;
                    if self.eat(&Token::LParen) {
                        let args = self.arg_list()?;
                        expr = Expr::MethodCall {
                            object: Box::new(expr),
                            method: name,
                            args,
                        };
                    } else {
                        expr = Expr::Member {
                            object: Box::new(expr),
                            name,
                        };
                    }
                }
                Token::LBracket => {
                    self.advance();
                    let index = self.expression()?;
                    self.expect(&Token::RBracket, "Expected ']'")?;
                    expr = Expr::Index {
                        object: Box::new(expr),
                        index: Box::new(index),
                    };
                }
                Token::LParen => {
                    let callable = matches!(
                        expr,
                        Expr::Ident(_)
                            | Expr::Member { .. }
                            | Expr::Index { .. }
                            | Expr::Call { .. }
                            | Expr::MethodCall { .. }
                            | Expr::Lambda(_)
                    );
                    if !callable {
                        break;
                    }
                    self.advance();
                    let args = self.arg_list()?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                    };
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parse comma-separated arguments until `)`; the `(` has been consumed.
    fn arg_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        self.skip_newlines();
        if !matches!(self.peek(), Token::RParen) {
            args.push(self.expression()?);
            while self.eat(&Token::Comma) {
                self.skip_newlines();
                args.push(self.expression()?);
            }
        }
        self.skip_newlines();
        self.expect(&Token::RParen, "Expected ')'")?;
        Ok(args)
    }

    // ── primaries ───────────────────────────────────────────────────────

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().clone() {
            Token::Int(n) => {
                self.advance();
                Ok(Expr::Int(n))
            }
            Token::Float(n) => {
                self.advance();
                Ok(Expr::Float(n))
            }
            Token::Str(s) => {
                self.advance();
                Ok(Expr::Str(s))
            }
            Token::FStr(parts) => {
                self.advance();
                self.interp_string(&parts)
            }
            Token::True => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            Token::False => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            Token::Null => {
                self.advance();
                Ok(Expr::Null)
            }
            Token::This => {
                self.advance();
                Ok(Expr::This)
            }
            Token::Super => {
                self.advance();
                self.expect(&Token::Dot, "Expected '.' after 'super'")?;
                let method = self.expect_ident("Expected method name after 'super.'")?;
                self.expect(&Token::LParen, "Expected '(' after super method name")?;
                let args = self.arg_list()?;
                Ok(Expr::SuperCall { method, args })
            }
            Token::New => {
                self.advance();
                let class = self.expect_ident("Expected class name after 'new'")?;
                self.expect(&Token::LParen, "Expected '(' after class name")?;
                let args = self.arg_list()?;
                Ok(Expr::New { class, args })
            }
            Token::IsInstance => {
                self.advance();
                self.expect(&Token::LParen, "Expected '(' after 'isinstance'")?;
                let value = self.expression()?;
                self.expect(&Token::Comma, "Expected ',' in isinstance")?;
                let class = self.expression()?;
                self.expect(&Token::RParen, "Expected ')'")?;
                Ok(Expr::IsInstance {
                    value: Box::new(value),
                    class: Box::new(class),
                })
            }
            Token::Ident(name) => {
                self.advance();
                Ok(Expr::Ident(name))
            }
            Token::LBracket => self.list_literal(),
            Token::LBrace => self.dict_literal(),
            Token::LParen => self.paren_or_lambda(),
            other => Err(self.error_here(format!("Unexpected token '{}'", other))),
        }
    }

    /// Rebuild an f-string token into an interpolation expression by
    /// re-parsing each expression fragment.
    fn interp_string(&mut self, parts: &[StrPart]) -> Result<Expr, ParseError> {
        let mut exprs = Vec::new();
        for part in parts {
            match part {
                StrPart::Text(text) => exprs.push(Expr::Str(text.clone())),
                StrPart::Expr(source) => {
                    let expr = Parser::parse_expression_str(source).map_err(|e| {
                        self.error_here(format!("in f-string expression: {}", e.message))
                    })?;
                    exprs.push(expr);
                }
            }
        }
        if exprs.is_empty() {
            return Ok(Expr::Str(String::new()));
        }
        Ok(Expr::Interp(exprs))
    }

    fn list_literal(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // [
        let mut elements = Vec::new();
        self.skip_newlines();
        if !matches!(self.peek(), Token::RBracket) {
            elements.push(self.expression()?);
            while self.eat(&Token::Comma) {
                self.skip_newlines();
                if matches!(self.peek(), Token::RBracket) {
                    break;
                }
                elements.push(self.expression()?);
            }
        }
        self.skip_newlines();
        self.expect(&Token::RBracket, "Expected ']'")?;
        Ok(Expr::List(elements))
    }

    fn dict_literal(&mut self) -> Result<Expr, ParseError> {
        self.advance(); // {
        self.skip_newlines();
        let mut pairs = Vec::new();
        if !matches!(self.peek(), Token::RBrace) {
            pairs.push(self.dict_entry()?);
            while self.eat(&Token::Comma) {
                self.skip_newlines();
                if matches!(self.peek(), Token::RBrace) {
                    break;
                }
                pairs.push(self.dict_entry()?);
            }
        }
        self.skip_newlines();
        self.expect(&Token::RBrace, "Expected '}'")?;
        Ok(Expr::Dict(pairs))
    }

    fn dict_entry(&mut self) -> Result<(Expr, Expr), ParseError> {
        self.skip_newlines();
        // Bare identifier key: {name: "Alice"}
        let key = if matches!(self.peek(), Token::Ident(_))
            && matches!(self.peek_ahead(1), Token::Colon)
        {
            if let Token::Ident(name) = self.advance().token {
                Expr::Str(name)
            } else {
                unreachable!()
            }
        } else {
            self.expression()?
        };
        self.expect(&Token::Colon, "Expected ':' in dictionary entry")?;
        let value = self.expression()?;
        Ok((key, value))
    }

    /// Distinguish `(expr)`, `() => expr` and `(params) => expr`.
    fn paren_or_lambda(&mut self) -> Result<Expr, ParseError> {
        let saved = self.pos;
        self.advance(); // (

        // () => expr
        if matches!(self.peek(), Token::RParen) {
            self.advance();
            if self.eat(&Token::FatArrow) {
                let body = self.expression()?;
                return Ok(lambda_expr(Vec::new(), body));
            }
            return Err(self.error_here("Expected expression inside parentheses"));
        }

        // Try (params) => expr, falling back to a grouped expression.
        if matches!(self.peek(), Token::Ident(_)) {
            if let Some(lambda) = self.try_lambda()? {
                return Ok(lambda);
            }
            self.pos = saved;
            self.advance(); // (
        }

        let expr = self.expression()?;
        self.expect(&Token::RParen, "Expected ')'")?;
        Ok(expr)
    }

    /// Attempt to parse `params) => expr` from just after the opening paren.
    /// Returns `None` (without consuming anything definitive) when the
    /// tokens do not form a lambda.
    fn try_lambda(&mut self) -> Result<Option<Expr>, ParseError> {
        let saved = self.pos;

        let mut params = Vec::new();
        loop {
            match self.peek() {
                Token::Ident(_) => {
                    let name = self.expect_ident("Expected parameter name")?;
                    let default = if self.eat(&Token::Assign) {
                        match self.checked_expression() {
                            Some(expr) => Some(expr),
                            None => {
                                self.pos = saved;
                                return Ok(None);
                            }
                        }
                    } else {
                        None
                    };
                    params.push(Param { name, default });
                }
                _ => {
                    self.pos = saved;
                    return Ok(None);
                }
            }
            if self.eat(&Token::Comma) {
                continue;
            }
            break;
        }

        if !self.eat(&Token::RParen) || !self.eat(&Token::FatArrow) {
            self.pos = saved;
            return Ok(None);
        }

        let body = self.expression()?;
        Ok(Some(lambda_expr(params, body)))
    }

    /// Parse an expression, converting failure into `None` so lambda
    /// detection can backtrack.
    fn checked_expression(&mut self) -> Option<Expr> {
        let saved = self.pos;
        match self.expression() {
            Ok(expr) => Some(expr),
            Err(_) => {
                self.pos = saved;
                None
            }
        }
    }
}

/// Build a lambda expression: a function whose body returns one expression.
fn lambda_expr(params: Vec<Param>, body: Expr) -> Expr {
    Expr::Lambda(Rc::new(FuncDecl {
        name: LAMBDA_NAME.to_string(),
        params,
        body: vec![Stmt::Return(Some(body))],
    }))
}

/// Textual form of a keyword token, for use as a property name after `.`.
fn keyword_text(token: &Token) -> Option<&'static str> {
    let text = match token {
        Token::Set => "set",
        Token::Func => "func",
        Token::Class => "class",
        Token::Extends => "extends",
        Token::New => "new",
        Token::This => "this",
        Token::Super => "super",
        Token::If => "if",
        Token::Else => "else",
        Token::While => "while",
        Token::For => "for",
        Token::In => "in",
        Token::To => "to",
        Token::Return => "return",
        Token::Break => "break",
        Token::Continue => "continue",
        Token::Match => "match",
        Token::Case => "case",
        Token::Default => "default",
        Token::Try => "try",
        Token::Catch => "catch",
        Token::Finally => "finally",
        Token::Throw => "throw",
        Token::True => "true",
        Token::False => "false",
        Token::Null => "null",
        Token::And => "and",
        Token::Or => "or",
        Token::Not => "not",
        Token::Use => "use",
        Token::Show => "show",
        Token::Ask => "ask",
        Token::IsInstance => "isinstance",
        Token::Import => "import",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        Parser::parse_program(source).unwrap()
    }

    fn first_stmt(source: &str) -> Stmt {
        parse(source).statements.into_iter().next().unwrap()
    }

    #[test]
    fn set_declares_a_name() {
        match first_stmt("set x = 1") {
            Stmt::Set {
                target: Target::Name(name),
                value: Expr::Int(1),
            } => assert_eq!(name, "x"),
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn set_member_target() {
        match first_stmt("set this.count = 0") {
            Stmt::Set {
                target: Target::Member { object, name },
                ..
            } => {
                assert_eq!(object, Expr::This);
                assert_eq!(name, "count");
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn set_index_target() {
        assert!(matches!(
            first_stmt("set xs[0] = 5"),
            Stmt::Set {
                target: Target::Index { .. },
                ..
            }
        ));
    }

    #[test]
    fn destructuring_patterns() {
        assert!(matches!(
            first_stmt("set [a, b, c] = xs"),
            Stmt::DestructureList { ref names, .. } if names == &["a", "b", "c"]
        ));
        assert!(matches!(
            first_stmt("set {name, age} = user"),
            Stmt::DestructureDict { ref names, .. } if names == &["name", "age"]
        ));
    }

    #[test]
    fn operator_precedence() {
        match first_stmt("1 + 2 * 3") {
            Stmt::Expr(Expr::Binary {
                op: BinOp::Add,
                right,
                ..
            }) => {
                assert!(matches!(*right, Expr::Binary { op: BinOp::Mul, .. }));
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn comparison_binds_looser_than_addition() {
        assert!(matches!(
            first_stmt("a + 1 < b"),
            Stmt::Expr(Expr::Binary { op: BinOp::Lt, .. })
        ));
    }

    #[test]
    fn lambda_versus_grouping() {
        assert!(matches!(
            first_stmt("(x) => x * 2"),
            Stmt::Expr(Expr::Lambda(_))
        ));
        assert!(matches!(
            first_stmt("(x)"),
            Stmt::Expr(Expr::Ident(ref name)) if name == "x"
        ));
        assert!(matches!(
            first_stmt("(a + b) * c"),
            Stmt::Expr(Expr::Binary { op: BinOp::Mul, .. })
        ));
    }

    #[test]
    fn empty_lambda() {
        match first_stmt("() => 1") {
            Stmt::Expr(Expr::Lambda(decl)) => assert!(decl.params.is_empty()),
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn lambda_body_is_a_return() {
        match first_stmt("(x) => x") {
            Stmt::Expr(Expr::Lambda(decl)) => {
                assert_eq!(decl.body.len(), 1);
                assert!(matches!(decl.body[0], Stmt::Return(Some(_))));
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn method_call_chain() {
        assert!(matches!(
            first_stmt(r#""a".upper().trim()"#),
            Stmt::Expr(Expr::MethodCall { ref method, .. }) if method == "trim"
        ));
    }

    #[test]
    fn keyword_as_property_name() {
        assert!(matches!(
            first_stmt("xs.push(1)"),
            Stmt::Expr(Expr::MethodCall { ref method, .. }) if method == "push"
        ));
        assert!(matches!(
            first_stmt("m.default"),
            Stmt::Expr(Expr::Member { ref name, .. }) if name == "default"
        ));
    }

    #[test]
    fn dict_literal_bare_and_expr_keys() {
        match first_stmt(r#"{name: "a", "k" + "1": 2}"#) {
            Stmt::Expr(Expr::Dict(pairs)) => {
                assert_eq!(pairs.len(), 2);
                assert!(matches!(pairs[0].0, Expr::Str(ref s) if s == "name"));
                assert!(matches!(pairs[1].0, Expr::Binary { .. }));
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn for_variants() {
        assert!(matches!(
            first_stmt("for i in 1 to 5 { show i }"),
            Stmt::ForRange { .. }
        ));
        assert!(matches!(
            first_stmt("for x in xs { show x }"),
            Stmt::ForIn { var2: None, .. }
        ));
        assert!(matches!(
            first_stmt("for k, v in d { show k }"),
            Stmt::ForIn { var2: Some(_), .. }
        ));
        assert!(matches!(
            first_stmt("for 3 { show 1 }"),
            Stmt::Repeat { .. }
        ));
    }

    #[test]
    fn if_elif_else() {
        match first_stmt("if a { } else if b { } else { }") {
            Stmt::If {
                elifs, else_body, ..
            } => {
                assert_eq!(elifs.len(), 1);
                assert!(else_body.is_some());
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn try_requires_catch_or_finally() {
        assert!(Parser::parse_program("try { show 1 }").is_err());
        assert!(Parser::parse_program("try { } catch e { }").is_ok());
        assert!(Parser::parse_program("try { } finally { }").is_ok());
    }

    #[test]
    fn class_with_parent_and_methods() {
        match first_stmt("class B extends A {\n func init(n) { }\n func hi() { }\n}") {
            Stmt::Class {
                name,
                parent,
                methods,
            } => {
                assert_eq!(name, "B");
                assert_eq!(parent.as_deref(), Some("A"));
                assert_eq!(methods.len(), 2);
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn super_and_new() {
        assert!(matches!(
            first_stmt("super.init(n)"),
            Stmt::Expr(Expr::SuperCall { .. })
        ));
        assert!(matches!(
            first_stmt("new Dog(\"Rex\")"),
            Stmt::Expr(Expr::New { .. })
        ));
    }

    #[test]
    fn isinstance_form() {
        assert!(matches!(
            first_stmt("isinstance(d, Animal)"),
            Stmt::Expr(Expr::IsInstance { .. })
        ));
    }

    #[test]
    fn fstring_becomes_interpolation() {
        match first_stmt(r#"f"x is {x}!""#) {
            Stmt::Expr(Expr::Interp(parts)) => {
                assert_eq!(parts.len(), 3);
                assert!(matches!(parts[1], Expr::Ident(ref name) if name == "x"));
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn fstring_fragment_parses_full_expressions() {
        assert!(matches!(
            first_stmt(r#"f"{xs.map((x) => x * x)}""#),
            Stmt::Expr(Expr::Interp(_))
        ));
    }

    #[test]
    fn use_statement_takes_a_string() {
        assert!(matches!(first_stmt(r#"use "math""#), Stmt::Use(ref m) if m == "math"));
        assert!(Parser::parse_program("use math").is_err());
    }

    #[test]
    fn ask_statement() {
        match first_stmt(r#"ask "Name: " -> name"#) {
            Stmt::Ask { var, .. } => assert_eq!(var, "name"),
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn return_without_value() {
        assert!(matches!(first_stmt("return"), Stmt::Return(None)));
        assert!(matches!(first_stmt("return 1"), Stmt::Return(Some(_))));
    }

    #[test]
    fn import_is_reserved() {
        assert!(Parser::parse_program("import \"math\"").is_err());
    }

    #[test]
    fn match_statement_shape() {
        let src = "match x {\n case 1 { show 1 }\n case 2 { show 2 }\n default { show 0 }\n}";
        match first_stmt(src) {
            Stmt::Match { cases, default, .. } => {
                assert_eq!(cases.len(), 2);
                assert!(default.is_some());
            }
            other => panic!("unexpected statement: {:?}", other),
        }
    }

    #[test]
    fn calls_on_call_results() {
        assert!(matches!(
            first_stmt("makeCounter()()"),
            Stmt::Expr(Expr::Call { ref callee, .. }) if matches!(**callee, Expr::Call { .. })
        ));
    }

    #[test]
    fn parse_error_has_position() {
        let err = Parser::parse_program("set = 3").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("Expected variable name"));
    }
}
