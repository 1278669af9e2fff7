use std::collections::HashMap;

use crate::{ast::ast::AstNode, errors::errors::Error, token::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence. Higher binds tighter; `Default` means a token
/// never continues the expression to its left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Group = 20,
    Declaration = 30,
    Sequence = 40,
}

pub type NUDHandler = fn(&mut Parser) -> Result<AstNode, Error>;
pub type LEDHandler = fn(&mut Parser, AstNode, BindingPower) -> Result<AstNode, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Comma, BindingPower::Sequence, parse_sequence_expr);
    parser.led(TokenKind::Colon, BindingPower::Declaration, parse_decl_expr);
    // '(' only ever starts an expression in this grammar; the infix entry
    // is defensive so a stray one is swallowed instead of looping.
    parser.led(TokenKind::OpenParen, BindingPower::Group, parse_unexpected_infix);

    parser.nud(TokenKind::Identifier, parse_ident_expr);
    parser.nud(TokenKind::OpenParen, parse_group_expr);
    // A comma where an expression should start is skipped, not an error.
    parser.nud(TokenKind::Comma, parse_leading_separator);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
