//! Parser state and the top-level driver.
//!
//! The `Parser` struct owns the token stream and the lookup tables the
//! Pratt loop consults:
//!
//! - NUD (null denotation) handlers for tokens that start an expression
//! - LED (left denotation) handlers for tokens that continue one
//! - Binding powers for operator precedence
//!
//! It also carries the one piece of contextual state the grammar needs:
//! a flag that turns commas into terminators while a declaration's type
//! operand is being parsed.

use std::collections::HashMap;

use crate::{
    ast::ast::AstNode,
    errors::errors::Error,
    token::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
};

/// Contextual parser state.
///
/// `disallow_comma` is set by the colon handler and deliberately never
/// cleared by it: once a declaration's type position has been entered,
/// a comma at the same nesting level ends the expression. Only entering
/// a parenthesized group resets the state (and restores it on exit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub disallow_comma: bool,
}

/// The main parser structure.
///
/// Holds the token stream, the current cursor position, the handler
/// lookup tables and the contextual state. The stream is consumed
/// destructively by a single pass; nothing is ever pushed back.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    state: ParserState,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            state: ParserState::default(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing. Underflow is the one
    /// fatal error in this parser.
    pub fn current_token(&self) -> Result<&Token, Error> {
        self.tokens.get(self.pos).ok_or(Error::UnexpectedEndOfInput)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<TokenKind, Error> {
        Ok(self.current_token()?.kind)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(Error::UnexpectedEndOfInput)?;
        self.pos += 1;
        Ok(token)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// The binding power of a token kind in the current state. Commas lose
    /// their power entirely while `disallow_comma` is set; unregistered
    /// kinds never continue an expression.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        if kind == TokenKind::Comma && self.state.disallow_comma {
            return BindingPower::Default;
        }

        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token, along with
    /// its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. Prefix
    /// tokens carry no binding power of their own here: an identifier never
    /// continues the expression to its left.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Marks the current nesting level as comma-terminated.
    pub fn disallow_comma(&mut self) {
        self.state.disallow_comma = true;
    }

    /// Forces the state back to its default and hands the previous state
    /// to the caller for restoring.
    pub fn reset_state(&mut self) -> ParserState {
        std::mem::take(&mut self.state)
    }

    pub fn restore_state(&mut self, saved: ParserState) {
        self.state = saved;
    }

    pub fn state(&self) -> ParserState {
        self.state
    }
}

/// Parses a stream of tokens into a sequence of top-level syntax nodes.
///
/// Expressions are parsed one after another until the stream runs out; no
/// separator is required between them. A comma that survives expression
/// parsing (which happens after a declaration has suppressed comma
/// continuation) is consumed here and the following expression is merged
/// into the same flat list, mirroring what a parenthesized group does with
/// its content.
///
/// An empty stream yields an empty sequence; an exhausted stream in the
/// middle of an expression aborts the whole parse.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<AstNode>, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut nodes = vec![];

    while parser.has_tokens() {
        let mut node = parse_expr(&mut parser, BindingPower::Default)?;

        while parser.has_tokens() && parser.current_token_kind()? == TokenKind::Comma {
            parser.advance()?;
            node = node.append(parse_expr(&mut parser, BindingPower::Default)?);
        }

        nodes.push(node);
    }

    Ok(nodes)
}
