use pretty_assertions::assert_eq;

use super::{errors, parse_with_reporter};
use lox_ir::printer::print_stmt;

#[test]
fn missing_expression() {
    assert_eq!(errors("print ;"), "[line 1] Error at ';': Expect expression.\n");
}

#[test]
fn missing_semicolon_at_end() {
    assert_eq!(errors("print 1"), "[line 1] Error at end: Expect ';' after value.\n");
    assert_eq!(
        errors("1 + 2"),
        "[line 1] Error at end: Expect ';' after expression.\n"
    );
}

#[test]
fn missing_closing_paren() {
    assert_eq!(
        errors("print (1 + 2;"),
        "[line 1] Error at ';': Expect ')' after expression.\n"
    );
}

#[test]
fn var_declaration_messages() {
    assert_eq!(errors("var 1;"), "[line 1] Error at '1': Expect variable name.\n");
    assert_eq!(
        errors("var a = 1"),
        "[line 1] Error at end: Expect ';' after variable declaration.\n"
    );
}

#[test]
fn block_and_control_flow_messages() {
    assert_eq!(errors("{ print 1;"), "[line 1] Error at end: Expect '}' after block.\n");
    assert_eq!(errors("if true) print 1;"), "[line 1] Error at 'true': Expect '(' after 'if'.\n");
    assert_eq!(
        errors("if (true print 1;"),
        "[line 1] Error at 'print': Expect ')' after if condition.\n"
    );
    assert_eq!(
        errors("while true) print 1;"),
        "[line 1] Error at 'true': Expect '(' after 'while'.\n"
    );
    assert_eq!(
        errors("while (true print 1;"),
        "[line 1] Error at 'print': Expect ')' after condition.\n"
    );
}

#[test]
fn invalid_assignment_target_is_reported_without_failing() {
    let (statements, reporter) = parse_with_reporter("1 + 2 = 3; print 4;");
    assert_eq!(
        reporter.rendered(),
        "[line 1] Error at '=': Invalid assignment target.\n"
    );
    // The statement still parses; the left side is kept as-is.
    let rendered: Vec<_> = statements.iter().flatten().map(print_stmt).collect();
    assert_eq!(rendered, vec!["(; (+ 1 2))", "(print 4)"]);
}

#[test]
fn grouped_variable_is_not_an_assignment_target() {
    assert_eq!(
        errors("(a) = 1;"),
        "[line 1] Error at '=': Invalid assignment target.\n"
    );
}

#[test]
fn failed_declaration_leaves_absent_slot() {
    let (statements, reporter) = parse_with_reporter("print 1; print ; print 3;");
    assert!(reporter.had_static_fault());
    assert_eq!(statements.len(), 3);
    assert!(statements[0].is_some());
    assert!(statements[1].is_none());
    assert!(statements[2].is_some());
}

#[test]
fn independent_faults_are_all_reported() {
    let source = "var = 1;\nprint (;\nvar ok = 2;\nprint ok\nprint 5;";
    assert_eq!(
        errors(source),
        "[line 1] Error at '=': Expect variable name.\n\
         [line 2] Error at ';': Expect expression.\n\
         [line 5] Error at 'print': Expect ';' after value.\n"
    );
}

#[test]
fn recovery_resumes_before_statement_keyword() {
    let (statements, reporter) = parse_with_reporter("1 + ) junk junk var x = 1;");
    assert_eq!(reporter.diagnostics().len(), 1);
    let rendered: Vec<_> = statements.iter().flatten().map(print_stmt).collect();
    assert_eq!(rendered, vec!["(var x 1)"]);
}

#[test]
fn error_inside_block_recovers_within_block() {
    let (statements, reporter) = parse_with_reporter("{ print ; print 2; }");
    assert_eq!(reporter.diagnostics().len(), 1);
    let rendered: Vec<_> = statements.iter().flatten().map(print_stmt).collect();
    assert_eq!(rendered, vec!["(block (print 2))"]);
}

#[test]
fn lexical_and_syntax_errors_share_one_pass() {
    assert_eq!(
        errors("print @;\nprint;"),
        "[line 1] Error: Unexpected character: @\n\
         [line 1] Error at ';': Expect expression.\n\
         [line 2] Error at ';': Expect expression.\n"
    );
}
