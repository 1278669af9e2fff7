//! Error types for the parser.
//!
//! Only stream underflow is a hard error: an empty token stream where an
//! expression is required aborts the whole parse. Every other malformed
//! input degrades into an `Invalid` node in the tree instead.

pub mod errors;
