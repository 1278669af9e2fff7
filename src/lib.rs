#![allow(clippy::module_inception)]

//! A Pratt parser for a small declarative token language.
//!
//! The input is a flat sequence of tokens (identifiers, commas, colons and
//! parentheses); the output is a tree of list and declaration nodes. Two
//! declaration forms exist:
//!
//! - `name :: value` - a compile-time binding
//! - `name : Type` - a runtime, typed binding
//!
//! Comma-joined expressions flatten into a single ordered list, and
//! parentheses group a sub-sequence while re-enabling comma parsing inside
//! them. There is no lexer: token streams are built directly by the caller.

pub mod ast;
pub mod errors;
pub mod parser;
pub mod token;
