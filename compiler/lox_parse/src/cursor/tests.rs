use super::*;
use lox_diagnostic::Reporter;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    let mut reporter = Reporter::capture();
    lox_lexer::scan(source, &mut reporter)
}

#[test]
fn advance_returns_consumed_token() {
    let tokens = tokens("var x");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.current_kind(), TokenKind::Var);
    assert_eq!(cursor.advance().kind, TokenKind::Var);
    assert_eq!(cursor.previous().kind, TokenKind::Var);
    assert_eq!(cursor.current().lexeme, "x");
}

#[test]
fn advance_stops_at_eof() {
    let tokens = tokens("x");
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.previous().lexeme, "x");
}

#[test]
fn eat_only_consumes_matching_kind() {
    let tokens = tokens("( )");
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.eat(TokenKind::RightParen));
    assert!(cursor.eat(TokenKind::LeftParen));
    assert!(cursor.check(TokenKind::RightParen));
}

#[test]
fn empty_slice_behaves_as_eof() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current().line, 1);
    assert!(cursor.previous().is_eof());
}

#[test]
fn missing_eof_is_synthesized_on_last_line() {
    let tokens = vec![Token::new(TokenKind::Identifier, "a", 3)];
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current().line, 3);
}
