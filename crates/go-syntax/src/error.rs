//! Lexing and parsing error types.

use thiserror::Error;

use crate::syntax::TokenKind;

/// Any error produced by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Raised when the lexer encounters a character that matches no token
/// rule. Fatal to the whole invocation; lexing stops at the first
/// offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Illegal character '{ch}'")]
pub struct LexError {
    /// The offending character.
    pub ch: char,
    /// Byte offset of the character in the canonicalized source.
    pub offset: usize,
}

/// Raised when no grammar production matches the token sequence.
/// The parser does not attempt recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected token {kind:?} ({lexeme:?})")]
    UnexpectedToken { kind: TokenKind, lexeme: String },

    #[error("expected {expected:?}, found {found:?} ({lexeme:?})")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        lexeme: String,
    },
}
