use super::*;
use std::rc::Rc;
use pretty_assertions::assert_eq;

#[test]
fn unary_ops_from_tokens() {
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Bang), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Minus), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Plus), None);
}

#[test]
fn binary_ops_round_trip_through_symbols() {
    let kinds = [
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Greater, ">"),
        (TokenKind::GreaterEqual, ">="),
        (TokenKind::Less, "<"),
        (TokenKind::LessEqual, "<="),
        (TokenKind::EqualEqual, "=="),
        (TokenKind::BangEqual, "!="),
    ];
    for (kind, symbol) in kinds {
        let op = BinaryOp::from_token_kind(kind);
        assert_eq!(op.map(BinaryOp::symbol), Some(symbol), "for {kind}");
    }
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Equal), None);
    assert_eq!(BinaryOp::from_token_kind(TokenKind::And), None);
}

#[test]
fn logical_ops_are_keywords() {
    assert_eq!(LogicalOp::from_token_kind(TokenKind::And), Some(LogicalOp::And));
    assert_eq!(LogicalOp::from_token_kind(TokenKind::Or), Some(LogicalOp::Or));
    assert_eq!(LogicalOp::Or.to_string(), "or");
}

#[test]
fn constructors_box_children() {
    let expr = Expr::binary(
        Expr::Literal(Value::Number(1.0)),
        BinaryOp::Add,
        4,
        Expr::grouping(Expr::Literal(Value::Number(2.0))),
    );
    let Expr::Binary { left, op, line, right } = &expr else {
        panic!("expected a binary node");
    };
    assert_eq!(**left, Expr::Literal(Value::Number(1.0)));
    assert_eq!(*op, BinaryOp::Add);
    assert_eq!(*line, 4);
    assert_eq!(**right, Expr::Grouping(Box::new(Expr::Literal(Value::Number(2.0)))));
}

fn nested_grouping(depth: usize) -> Expr {
    let mut expr = Expr::Literal(Value::Number(1.0));
    for _ in 0..depth {
        expr = Expr::grouping(expr);
    }
    expr
}

#[test]
fn dropping_a_deep_expression_tree_does_not_overflow() {
    let mut expr = nested_grouping(200_000);
    for line in 0..1_000 {
        expr = Expr::binary(expr, BinaryOp::Add, line, nested_grouping(100));
    }
    drop(expr);
}

#[test]
fn dropping_deep_statement_trees_does_not_overflow() {
    let mut block = Stmt::Print(nested_grouping(10));
    for _ in 0..200_000 {
        block = Stmt::Block(vec![block]);
    }
    drop(block);

    let mut branch = Stmt::Expression(Expr::Literal(Value::Nil));
    for _ in 0..100_000 {
        branch = Stmt::If {
            condition: Expr::Literal(Value::Boolean(true)),
            then_branch: Box::new(Stmt::While {
                condition: Expr::Literal(Value::Boolean(false)),
                body: Box::new(branch),
            }),
            else_branch: Some(Box::new(Stmt::Block(Vec::new()))),
        };
    }
    drop(branch);
}

#[test]
fn dropping_releases_every_child() {
    let text: Rc<str> = Rc::from("kept");
    let literal = || Expr::Literal(Value::String(Rc::clone(&text)));
    let tree = Stmt::Block(vec![
        Stmt::Print(literal()),
        Stmt::While {
            condition: Expr::grouping(literal()),
            body: Box::new(Stmt::Print(Expr::unary(UnaryOp::Not, 1, literal()))),
        },
    ]);
    assert_eq!(Rc::strong_count(&text), 4);
    drop(tree);
    assert_eq!(Rc::strong_count(&text), 1);
}
