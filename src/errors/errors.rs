use thiserror::Error;

/// Fatal parse failures. No partial result survives one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of input: an expression was expected")]
    UnexpectedEndOfInput,
}
