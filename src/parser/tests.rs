//! Unit tests for the parser module.
//!
//! Token streams are built literally (bare strings are identifiers) and
//! the results compared structurally against hand-built trees. The exact
//! rendered format is covered by the AST tests instead.

use super::expr::parse_expr;
use super::lookups::{create_token_lookups, BindingPower};
use super::parser::{parse, Parser};
use crate::ast::ast::AstNode;
use crate::errors::errors::Error;
use crate::token::tokens::Token;

fn ident(name: &str) -> AstNode {
    AstNode::Ident(Token::ident(name))
}

fn decl_runtime(names: &[&str], type_name: &str) -> AstNode {
    AstNode::DeclRuntime {
        names: names.iter().map(|name| ident(name)).collect(),
        explicit_type: Some(Box::new(ident(type_name))),
        values: vec![],
    }
}

#[test]
fn test_parse_single_identifier() {
    let result = parse(vec!["x".into()]).unwrap();

    assert_eq!(result, vec![ident("x")]);
}

#[test]
fn test_parse_empty_stream_yields_nothing() {
    let result = parse(vec![]).unwrap();

    assert_eq!(result, vec![]);
}

#[test]
fn test_parse_comma_chain_flattens_to_one_list() {
    let result = parse(vec![
        "a".into(),
        Token::comma(),
        "b".into(),
        Token::comma(),
        "c".into(),
        Token::comma(),
        "d".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::List(vec![
            ident("a"),
            ident("b"),
            ident("c"),
            ident("d"),
        ])]
    );
}

#[test]
fn test_parse_runtime_declaration() {
    let result = parse(vec!["x".into(), Token::colon(), "f32".into()]).unwrap();

    assert_eq!(result, vec![decl_runtime(&["x"], "f32")]);
}

#[test]
fn test_parse_const_declaration() {
    let result = parse(vec![
        "x".into(),
        Token::colon(),
        Token::colon(),
        "y".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::DeclConst {
            names: vec![ident("x")],
            explicit_type: None,
            values: vec![ident("y")],
        }]
    );
}

#[test]
fn test_parse_double_colon_with_name_list_is_const() {
    let result = parse(vec![
        "a".into(),
        Token::comma(),
        "b".into(),
        Token::colon(),
        Token::colon(),
        "c".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::DeclConst {
            names: vec![ident("a"), ident("b")],
            explicit_type: None,
            values: vec![ident("c")],
        }]
    );
}

#[test]
fn test_parse_const_declaration_with_grouped_values() {
    let result = parse(vec![
        "x".into(),
        Token::colon(),
        Token::colon(),
        Token::open_paren(),
        "a".into(),
        Token::comma(),
        "b".into(),
        Token::close_paren(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::DeclConst {
            names: vec![ident("x")],
            explicit_type: None,
            values: vec![ident("a"), ident("b")],
        }]
    );
}

#[test]
fn test_parse_declaration_sequence() {
    // x, y, z: f32, w: f64
    let result = parse(vec![
        "x".into(),
        Token::comma(),
        "y".into(),
        Token::comma(),
        "z".into(),
        Token::colon(),
        "f32".into(),
        Token::comma(),
        "w".into(),
        Token::colon(),
        "f64".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::List(vec![
            decl_runtime(&["x", "y", "z"], "f32"),
            decl_runtime(&["w"], "f64"),
        ])]
    );
}

#[test]
fn test_parse_grouped_declaration_sequence_is_transparent() {
    // (x, y, z: f32, w: f64) - same structure as without the parens
    let result = parse(vec![
        Token::open_paren(),
        "x".into(),
        Token::comma(),
        "y".into(),
        Token::comma(),
        "z".into(),
        Token::colon(),
        "f32".into(),
        Token::comma(),
        "w".into(),
        Token::colon(),
        "f64".into(),
        Token::close_paren(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::List(vec![
            decl_runtime(&["x", "y", "z"], "f32"),
            decl_runtime(&["w"], "f64"),
        ])]
    );
}

#[test]
fn test_parse_group_reenables_comma_in_type_position() {
    // x: (a, b), y - the comma inside the group joins a and b, the comma
    // after it ends the declaration
    let result = parse(vec![
        "x".into(),
        Token::colon(),
        Token::open_paren(),
        "a".into(),
        Token::comma(),
        "b".into(),
        Token::close_paren(),
        Token::comma(),
        "y".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::List(vec![
            AstNode::DeclRuntime {
                names: vec![ident("x")],
                explicit_type: Some(Box::new(AstNode::List(vec![ident("a"), ident("b")]))),
                values: vec![],
            },
            ident("y"),
        ])]
    );
}

#[test]
fn test_parse_comma_after_type_ends_declaration() {
    // x: f32, y - without suppression the comma would be swallowed into
    // the type
    let result = parse(vec![
        "x".into(),
        Token::colon(),
        "f32".into(),
        Token::comma(),
        "y".into(),
    ])
    .unwrap();

    assert_eq!(
        result,
        vec![AstNode::List(vec![
            decl_runtime(&["x"], "f32"),
            ident("y"),
        ])]
    );
}

#[test]
fn test_parse_leading_comma_is_skipped() {
    let result = parse(vec![Token::comma(), "x".into()]).unwrap();

    assert_eq!(result, vec![ident("x")]);
}

#[test]
fn test_parse_unexpected_prefix_token_becomes_invalid() {
    let result = parse(vec![Token::colon(), "x".into()]).unwrap();

    assert_eq!(result, vec![AstNode::Invalid(Token::colon()), ident("x")]);
}

#[test]
fn test_parse_stray_close_paren_becomes_invalid() {
    let result = parse(vec!["x".into(), Token::close_paren()]).unwrap();

    assert_eq!(
        result,
        vec![ident("x"), AstNode::Invalid(Token::close_paren())]
    );
}

#[test]
fn test_parse_empty_group_is_fatal() {
    // The stream empties while the group still needs an inner expression
    let result = parse(vec![Token::open_paren()]);

    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
}

#[test]
fn test_parse_unterminated_group_is_fatal() {
    // The inner expression parses, then the stream empties where the
    // closing paren should be
    let result = parse(vec![Token::open_paren(), "x".into()]);

    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
}

#[test]
fn test_parse_group_with_wrong_close_yields_invalid() {
    // 'y' sits where the ')' belongs; the group collapses to an invalid
    // node wrapping it
    let result = parse(vec![Token::open_paren(), "x".into(), "y".into()]).unwrap();

    assert_eq!(result, vec![AstNode::Invalid(Token::ident("y"))]);
}

#[test]
fn test_parse_grouped_identifiers() {
    let result = parse(vec![
        Token::open_paren(),
        "a".into(),
        Token::comma(),
        "b".into(),
        Token::close_paren(),
    ])
    .unwrap();

    assert_eq!(result, vec![AstNode::List(vec![ident("a"), ident("b")])]);
}

#[test]
fn test_parse_adjacent_expressions_need_no_separator() {
    let result = parse(vec!["x".into(), "y".into()]).unwrap();

    assert_eq!(result, vec![ident("x"), ident("y")]);
}

#[test]
fn test_colon_leaves_comma_suppressed_at_same_level() {
    let mut parser = Parser::new(vec!["x".into(), Token::colon(), "f32".into()]);
    create_token_lookups(&mut parser);

    let node = parse_expr(&mut parser, BindingPower::Default).unwrap();

    assert_eq!(node, decl_runtime(&["x"], "f32"));
    // The flag set by ':' is never cleared at this level; only entering
    // a group resets it
    assert!(parser.state().disallow_comma);
}

#[test]
fn test_parse_missing_declaration_type_is_fatal() {
    let result = parse(vec!["x".into(), Token::colon()]);

    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
}

#[test]
fn test_parse_missing_const_value_is_fatal() {
    let result = parse(vec!["x".into(), Token::colon(), Token::colon()]);

    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
}
