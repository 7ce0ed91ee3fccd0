//! Declaration and statement productions.
//!
//! ```text
//! declaration → varDecl | statement
//! varDecl     → "var" IDENTIFIER ("=" expression)? ";"
//! statement   → exprStmt | printStmt | block | ifStmt | whileStmt
//! ```

use lox_ir::{Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::ParseResult;
use crate::recovery::synchronize;
use crate::Parser;

impl Parser<'_, '_> {
    /// The recovery point. A failed declaration yields `None` after the
    /// cursor is moved to the next statement boundary.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.cursor.eat(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                let found = synchronize(&mut self.cursor);
                trace!(line = error.line, resumed = found, "synchronized after parse error");
                None
            }
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            if self.cursor.eat(TokenKind::Print) {
                self.print_statement()
            } else if self.cursor.eat(TokenKind::LeftBrace) {
                Ok(Stmt::Block(self.block()?))
            } else if self.cursor.eat(TokenKind::If) {
                self.if_statement()
            } else if self.cursor.eat(TokenKind::While) {
                self.while_statement()
            } else {
                self.expression_statement()
            }
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Statements up to the closing `}`. Failed inner declarations recover
    /// locally and are left out.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// `else` binds to the nearest `if`, since the inner `if` consumes it first.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }
}
