use super::*;
use pretty_assertions::assert_eq;

#[test]
fn advance_walks_characters() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.advance(), Some('b'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.current(), None);
}

#[test]
fn peek_at_end_is_none() {
    let cursor = Cursor::new("x");
    assert_eq!(cursor.peek(), None);
}

#[test]
fn eat_only_consumes_on_match() {
    let mut cursor = Cursor::new("=>");
    assert!(!cursor.eat('>'));
    assert!(cursor.eat('='));
    assert!(cursor.eat('>'));
    assert!(cursor.is_eof());
}

#[test]
fn eat_pair_requires_both() {
    let mut cursor = Cursor::new("*x*/");
    assert!(!cursor.eat_pair('*', '/'));
    cursor.advance();
    cursor.advance();
    assert!(cursor.eat_pair('*', '/'));
    assert!(cursor.is_eof());
}

#[test]
fn lexeme_spans_from_mark() {
    let mut cursor = Cursor::new("let abc");
    cursor.eat_while(|c| c != ' ');
    cursor.advance();
    cursor.mark_start();
    cursor.eat_while(char::is_alphabetic);
    assert_eq!(cursor.lexeme(), "abc");
}

#[test]
fn multibyte_characters_advance_by_whole_char() {
    let mut cursor = Cursor::new("é1");
    cursor.mark_start();
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.lexeme(), "é");
    assert_eq!(cursor.current(), Some('1'));
}

#[test]
fn line_counter_starts_at_one() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.line(), 1);
    cursor.newline();
    assert_eq!(cursor.line(), 2);
}
