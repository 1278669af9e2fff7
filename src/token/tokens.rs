use std::fmt::Display;

/// The closed set of token kinds understood by the parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    Colon,
    Comma,

    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical atom. Immutable once built; equal when both the kind
/// and the payload text match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn ident(value: impl Into<String>) -> Token {
        Token {
            kind: TokenKind::Identifier,
            value: value.into(),
        }
    }

    pub fn colon() -> Token {
        Token {
            kind: TokenKind::Colon,
            value: String::from(":"),
        }
    }

    pub fn comma() -> Token {
        Token {
            kind: TokenKind::Comma,
            value: String::from(","),
        }
    }

    pub fn open_paren() -> Token {
        Token {
            kind: TokenKind::OpenParen,
            value: String::from("("),
        }
    }

    pub fn close_paren() -> Token {
        Token {
            kind: TokenKind::CloseParen,
            value: String::from(")"),
        }
    }
}

/// Lets token streams be written literally in tests and demos:
/// a bare string is an identifier.
impl From<&str> for Token {
    fn from(value: &str) -> Token {
        Token::ident(value)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
