//! Tree-walking interpreter for Lox.
//!
//! `evaluate` and `execute` are single exhaustive matches over the node
//! kinds. Runtime errors travel up as `Err(RuntimeError)` to
//! [`Interpreter::interpret`], the only place that reports them.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_diagnostic::{ErrorGuaranteed, Reporter};
use lox_ir::{Expr, LogicalOp, Stmt, Value};
use lox_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{evaluate_binary, evaluate_unary, Environment, EvalResult, SharedPrintHandler};

/// Executes statements against one environment chain.
///
/// The global scope persists across calls to [`interpret`](Self::interpret),
/// so a REPL can feed one line at a time.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout with a fresh root environment.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run `statements` in order, stopping at the first runtime error.
    ///
    /// The error is reported to `reporter` on the runtime channel. Effects
    /// of statements before the failing one are kept.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(
        &mut self,
        statements: &[Stmt],
        reporter: &mut Reporter,
    ) -> Result<(), ErrorGuaranteed> {
        for (index, stmt) in statements.iter().enumerate() {
            trace!(index, "execute");
            if let Err(error) = self.execute(stmt) {
                debug!(index, line = error.line, kind = ?error.kind, "runtime error");
                return Err(reporter.runtime_error(error.line, error.kind.to_string()));
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                self.env.define(&name.lexeme, value);
            }
            Stmt::Block(statements) => self.execute_block(statements)?,
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
            }
        }
        Ok(())
    }

    /// Run `statements` in a new child scope of the current one.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.with_env_scope(|scoped| {
            statements
                .iter()
                .try_for_each(|statement| scoped.execute(statement))
        })
    }

    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, line, operand } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(&value, *op).map_err(|kind| {
                    debug!(%op, operand = value.type_name(), line, "operand type fault");
                    kind.at(*line)
                })
            }
            Expr::Binary {
                left,
                op,
                line,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, &right, *op).map_err(|kind| {
                    debug!(
                        %op,
                        left = left.type_name(),
                        right = right.type_name(),
                        line,
                        "operand type fault"
                    );
                    kind.at(*line)
                })
            }
            Expr::Logical {
                left, op, right, ..
            } => {
                let left = self.evaluate(left)?;
                let short_circuit = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable { name } => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
