//! Parser module for building the syntax tree.
//!
//! This is a Pratt parser: NUD (null denotation) handlers produce a node
//! when a token starts an expression, LED (left denotation) handlers extend
//! an already-parsed left operand, and a binding power table decides
//! whether the next token continues the current expression or ends it.
//!
//! The grammar it covers:
//!
//! - identifier leaves
//! - comma-joined sequences, flattened into one list
//! - parenthesized grouping
//! - `name :: value` compile-time declarations
//! - `name : Type` runtime declarations
//!
//! A single state flag suppresses comma continuation while the type operand
//! of a declaration is being parsed; entering a parenthesized group saves
//! the state and re-enables commas for the group's duration.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
