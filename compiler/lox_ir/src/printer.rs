//! Parenthesized prefix rendering of syntax trees.
//!
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`. Used by `lox --ast` and by parser
//! tests, where comparing one line of text is easier to read than comparing
//! nested node constructors.

use lox_stack::ensure_sufficient_stack;

use crate::{Expr, Stmt};

/// Render an expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = AstPrinter::default();
    printer.expr(expr);
    printer.out
}

/// Render a statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = AstPrinter::default();
    printer.stmt(stmt);
    printer.out
}

#[derive(Default)]
struct AstPrinter {
    out: String,
}

impl AstPrinter {
    fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(value) => self.out.push_str(&value.to_string()),
            Expr::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            Expr::Unary { op, operand, .. } => self.parenthesize(op.symbol(), &[&**operand]),
            Expr::Binary { left, op, right, .. } => {
                self.parenthesize(op.symbol(), &[&**left, &**right]);
            }
            Expr::Logical { left, op, right, .. } => {
                self.parenthesize(op.symbol(), &[&**left, &**right]);
            }
            Expr::Variable { name } => self.out.push_str(&name.lexeme),
            Expr::Assign { name, value } => {
                self.out.push_str("(= ");
                self.out.push_str(&name.lexeme);
                self.out.push(' ');
                self.expr(value);
                self.out.push(')');
            }
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => self.parenthesize(";", &[expr]),
            Stmt::Print(expr) => self.parenthesize("print", &[expr]),
            Stmt::Var { name, initializer } => {
                self.out.push_str("(var ");
                self.out.push_str(&name.lexeme);
                if let Some(init) = initializer {
                    self.out.push(' ');
                    self.expr(init);
                }
                self.out.push(')');
            }
            Stmt::Block(statements) => {
                self.out.push_str("(block");
                for statement in statements {
                    self.out.push(' ');
                    self.stmt(statement);
                }
                self.out.push(')');
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("(if ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.out.push(')');
            }
            Stmt::While { condition, body } => {
                self.out.push_str("(while ");
                self.expr(condition);
                self.out.push(' ');
                self.stmt(body);
                self.out.push(')');
            }
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) {
        self.out.push('(');
        self.out.push_str(name);
        for expr in exprs {
            self.out.push(' ');
            self.expr(expr);
        }
        self.out.push(')');
    }
}
