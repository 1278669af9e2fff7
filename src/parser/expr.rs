use crate::{ast::ast::AstNode, errors::errors::Error, token::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

/// The precedence-climbing loop. Parses one expression whose operators all
/// bind more tightly than `bp`.
///
/// A token with no NUD handler cannot start an expression; it is consumed
/// and wrapped in an `Invalid` node rather than aborting the parse. The
/// same applies to a continuing token with binding power but no LED
/// handler.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<AstNode, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind()?;
    let mut left = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser)?,
        None => AstNode::Invalid(parser.advance()?),
    };

    // While the next token binds tighter than the threshold, fold it into
    // the left operand via its LED
    while parser.has_tokens() {
        let token_kind = parser.current_token_kind()?;
        let token_bp = parser.binding_power(token_kind);
        if token_bp <= bp {
            break;
        }

        left = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(handler) => handler(parser, left, token_bp)?,
            None => AstNode::Invalid(parser.advance()?),
        };
    }

    Ok(left)
}

pub fn parse_ident_expr(parser: &mut Parser) -> Result<AstNode, Error> {
    Ok(AstNode::Ident(parser.advance()?))
}

/// A comma sitting where an expression should start is skipped and the
/// expression after it is parsed in its place.
pub fn parse_leading_separator(parser: &mut Parser) -> Result<AstNode, Error> {
    parser.advance()?;
    parse_expr(parser, BindingPower::Default)
}

/// Parenthesized grouping.
///
/// The enclosing state is saved and forced back to the default for the
/// group's duration, so commas parse again inside regardless of context,
/// and restored on every exit path.
pub fn parse_group_expr(parser: &mut Parser) -> Result<AstNode, Error> {
    parser.advance()?;
    let saved = parser.reset_state();
    let result = parse_group_body(parser);
    parser.restore_state(saved);
    result
}

fn parse_group_body(parser: &mut Parser) -> Result<AstNode, Error> {
    let mut node = parse_expr(parser, BindingPower::Default)?;

    // Commas stripped of binding power by a declaration inside the group
    // still separate expressions here.
    while parser.has_tokens() && parser.current_token_kind()? == TokenKind::Comma {
        parser.advance()?;
        node = node.append(parse_expr(parser, BindingPower::Default)?);
    }

    let close = parser.advance()?;
    if close.kind != TokenKind::CloseParen {
        eprintln!("expected `)` to close group, found `{}`", close);
        return Ok(AstNode::Invalid(close));
    }

    Ok(node)
}

/// Comma as infix: collect the right-hand expression and splice both sides
/// into one flat list. Parsing the right side at the comma's own binding
/// power keeps the chain left-associated, one element per step.
pub fn parse_sequence_expr(
    parser: &mut Parser,
    left: AstNode,
    bp: BindingPower,
) -> Result<AstNode, Error> {
    parser.advance()?;
    let right = parse_expr(parser, bp)?;

    Ok(left.append(right))
}

/// Colon as infix: a declaration. `::` binds the left-hand names to a
/// value list at compile time; a single `:` binds them to a type.
///
/// Comma continuation is switched off before the operand is parsed and
/// stays off at this nesting level, so a comma after the declaration ends
/// it instead of being swallowed into the type.
pub fn parse_decl_expr(
    parser: &mut Parser,
    left: AstNode,
    bp: BindingPower,
) -> Result<AstNode, Error> {
    parser.advance()?;
    parser.disallow_comma();

    if parser.has_tokens() && parser.current_token_kind()? == TokenKind::Colon {
        parser.advance()?;
        let values = parse_expr(parser, bp)?;

        return Ok(AstNode::DeclConst {
            names: left.into_elements(),
            explicit_type: None,
            values: values.into_elements(),
        });
    }

    let explicit_type = parse_expr(parser, bp)?;

    // TODO: parse initializer values after the type
    Ok(AstNode::DeclRuntime {
        names: left.into_elements(),
        explicit_type: Some(Box::new(explicit_type)),
        values: vec![],
    })
}

/// Defensive LED for tokens that carry binding power but never legally
/// continue an expression.
pub fn parse_unexpected_infix(
    parser: &mut Parser,
    _left: AstNode,
    _bp: BindingPower,
) -> Result<AstNode, Error> {
    Ok(AstNode::Invalid(parser.advance()?))
}
