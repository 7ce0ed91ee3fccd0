//! Expression productions, lowest to highest precedence.
//!
//! ```text
//! assignment → IDENTIFIER "=" assignment | logic_or
//! logic_or   → logic_and ("or" logic_and)*
//! logic_and  → equality ("and" equality)*
//! equality   → comparison (("!=" | "==") comparison)*
//! comparison → term ((">" | ">=" | "<" | "<=") term)*
//! term       → factor (("-" | "+") factor)*
//! factor     → unary (("/" | "*") unary)*
//! unary      → ("!" | "-") unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER
//!            | "(" expression ")"
//! ```

use lox_ir::{BinaryOp, Expr, LogicalOp, TokenKind, UnaryOp, Value};
use lox_stack::ensure_sufficient_stack;

use crate::error::ParseResult;
use crate::{Parser, TokenSet};

const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

type Rule<'a, 'r> = fn(&mut Parser<'a, 'r>) -> ParseResult<Expr>;

impl<'a, 'r> Parser<'a, 'r> {
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Right-associative. An invalid target is reported but does not fail
    /// the rule; the left-hand expression is returned unchanged.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if !self.cursor.eat(TokenKind::Equal) {
            return Ok(expr);
        }
        let equals = self.cursor.previous().clone();
        let value = self.expression()?;

        if let Expr::Variable { name } = &expr {
            return Ok(Expr::assign(name.clone(), value));
        }
        self.reporter.error_at(&equals, "Invalid assignment target.");
        Ok(expr)
    }

    fn logic_or(&mut self) -> ParseResult<Expr> {
        self.logical_level(LogicalOp::Or, TokenKind::Or, Self::logic_and)
    }

    fn logic_and(&mut self) -> ParseResult<Expr> {
        self.logical_level(LogicalOp::And, TokenKind::And, Self::equality)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(COMPARISON_OPS, Self::term)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(FACTOR_OPS, Self::unary)
    }

    /// One left-associative precedence level over `ops`.
    fn binary_level(&mut self, ops: TokenSet, operand: Rule<'a, 'r>) -> ParseResult<Expr> {
        let mut expr = operand(self)?;
        while let Some((op, line)) = self.binary_operator(ops) {
            let right = operand(self)?;
            expr = Expr::binary(expr, op, line, right);
        }
        Ok(expr)
    }

    fn binary_operator(&mut self, ops: TokenSet) -> Option<(BinaryOp, u32)> {
        let token = self.cursor.current();
        if !ops.contains(token.kind) {
            return None;
        }
        let op = BinaryOp::from_token_kind(token.kind)?;
        let line = token.line;
        self.cursor.advance();
        Some((op, line))
    }

    fn logical_level(
        &mut self,
        op: LogicalOp,
        kind: TokenKind,
        operand: Rule<'a, 'r>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;
        while self.cursor.check(kind) {
            let line = self.cursor.advance().line;
            let right = operand(self)?;
            expr = Expr::logical(expr, op, line, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            let token = self.cursor.current();
            let Some(op) = UnaryOp::from_token_kind(token.kind) else {
                return self.primary();
            };
            let line = token.line;
            self.cursor.advance();
            let operand = self.unary()?;
            Ok(Expr::unary(op, line, operand))
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        let kind = token.kind;
        let expr = match kind {
            TokenKind::False => Expr::Literal(Value::Boolean(false)),
            TokenKind::True => Expr::Literal(Value::Boolean(true)),
            TokenKind::Nil => Expr::Literal(Value::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::Literal(token.literal.clone().unwrap_or(Value::Nil))
            }
            TokenKind::Identifier => Expr::Variable {
                name: token.clone(),
            },
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_at_current("Expect expression.")),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
