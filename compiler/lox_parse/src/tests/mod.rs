//! Parser tests, driven from source text and compared via the AST printer.

mod recovery;

use lox_diagnostic::Reporter;
use lox_ir::printer::{print_expr, print_stmt};
use lox_ir::{Expr, Stmt};

use crate::{ParseError, Parser};

/// Scan and parse `source`, returning the slots and the reporter.
fn parse_with_reporter(source: &str) -> (Vec<Option<Stmt>>, Reporter) {
    let mut reporter = Reporter::capture();
    let tokens = lox_lexer::scan(source, &mut reporter);
    let statements = crate::parse(&tokens, &mut reporter);
    (statements, reporter)
}

/// Parse a program that must be free of errors, one rendered line per statement.
fn parse_ok(source: &str) -> Vec<String> {
    let (statements, reporter) = parse_with_reporter(source);
    assert!(
        !reporter.had_static_fault(),
        "unexpected errors for {source:?}:\n{}",
        reporter.rendered()
    );
    statements
        .iter()
        .map(|stmt| print_stmt(stmt.as_ref().unwrap()))
        .collect()
}

fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    let mut reporter = Reporter::capture();
    let tokens = lox_lexer::scan(source, &mut reporter);
    Parser::new(&tokens, &mut reporter).parse_expression()
}

/// Render a single expression that must parse.
fn expr(source: &str) -> String {
    print_expr(&parse_expr(source).unwrap())
}

/// Diagnostics produced while parsing `source`, as stderr would show them.
fn errors(source: &str) -> String {
    let (_, reporter) = parse_with_reporter(source);
    reporter.rendered()
}
