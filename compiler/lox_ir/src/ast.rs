//! Syntax tree node model.
//!
//! Tagged unions with one case per grammar production. Each node owns its
//! children exclusively; the tree is never mutated after parsing.
//!
//! Operators are lowered from tokens to closed enums at parse time, so the
//! interpreter matches exhaustively instead of re-inspecting token kinds.
//! The source line of the operator token is kept for runtime diagnostics.
//!
//! `Expr` and `Stmt` implement `Drop` with an explicit worklist, so tearing
//! down a tree nested tens of thousands of levels deep uses constant native
//! stack.

use std::fmt;

use crate::{Token, TokenKind, Value};

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!` - logical not of the operand's truthiness.
    Not,
    /// `-` - arithmetic negation, numbers only.
    Neg,
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}

/// Strict infix operators. Both operands are always evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEqual => Some(BinaryOp::LessEqual),
            TokenKind::EqualEqual => Some(BinaryOp::Equal),
            TokenKind::BangEqual => Some(BinaryOp::NotEqual),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
        }
    }
}

/// Short-circuiting operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(LogicalOp::And),
            TokenKind::Or => Some(LogicalOp::Or),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Value),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        /// Line of the operator token.
        line: u32,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        line: u32,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        line: u32,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, line: u32, operand: Expr) -> Self {
        Expr::Unary {
            op,
            line,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, line: u32, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            line,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, op: LogicalOp, line: u32, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            line,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    /// Gets its own child environment when executed.
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

impl Expr {
    /// Move every boxed child into `out`, leaving cheap placeholders behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_) | Expr::Variable { .. } => {}
            Expr::Grouping(inner) => out.push(take_expr(inner)),
            Expr::Unary { operand, .. } => out.push(take_expr(operand)),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                out.push(take_expr(left));
                out.push(take_expr(right));
            }
            Expr::Assign { value, .. } => out.push(take_expr(value)),
        }
    }
}

#[inline]
fn take_expr(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::Literal(Value::Nil))
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Stmt {
    /// Move every nested statement into `out`. Expressions stay in place.
    fn take_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => {}
            Stmt::Block(statements) => out.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(take_stmt(then_branch));
                if let Some(else_branch) = else_branch.take() {
                    out.push(*else_branch);
                }
            }
            Stmt::While { body, .. } => out.push(take_stmt(body)),
        }
    }
}

#[inline]
fn take_stmt(slot: &mut Stmt) -> Stmt {
    std::mem::replace(slot, Stmt::Block(Vec::new()))
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.take_children(&mut pending);
        }
    }
}

#[cfg(test)]
mod tests;
