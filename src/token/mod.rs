//! Token model for the parser.
//!
//! The vocabulary is deliberately tiny: identifiers, commas, colons and
//! parentheses. Tokens carry their lexical text so trees can be rendered
//! back to something readable. There is no tokenizer here; streams are
//! constructed directly (see the `From<&str>` identifier convenience).

pub mod tokens;
