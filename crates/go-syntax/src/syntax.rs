//! This module contains the token kind declarations
//! and a Logos-based lexer implementation.

#![allow(non_camel_case_types)]

use logos::{Lexer as LogosLexer, Logos};
use serde::{Deserialize, Serialize};

use crate::error::LexError;

/// `TokenKind` represents all the lexical categories found in the grammar.
///
/// Operator names follow the spelling of Go's own `token` package
/// (`ADD`, `QUO`, `AND_NOT`, `DEFINE`, ...), keywords and literals are
/// prefixed to keep the keyword `int` apart from an integer literal.
#[derive(
    Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u16)]
pub enum TokenKind {
    // region: Keywords
    #[token("package")]
    KW_PACKAGE,
    #[token("func")]
    KW_FUNC,
    #[token("return")]
    KW_RETURN,
    #[token("import")]
    KW_IMPORT,
    #[token("var")]
    KW_VAR,
    #[token("const")]
    KW_CONST,
    #[token("type")]
    KW_TYPE,
    #[token("for")]
    KW_FOR,
    #[token("range")]
    KW_RANGE,
    #[token("break")]
    KW_BREAK,
    #[token("continue")]
    KW_CONTINUE,
    #[token("goto")]
    KW_GOTO,
    #[token("fallthrough")]
    KW_FALLTHROUGH,
    #[token("if")]
    KW_IF,
    #[token("else")]
    KW_ELSE,
    #[token("switch")]
    KW_SWITCH,
    #[token("case")]
    KW_CASE,
    #[token("default")]
    KW_DEFAULT,
    #[token("map")]
    KW_MAP,
    #[token("struct")]
    KW_STRUCT,
    #[token("interface")]
    KW_INTERFACE,
    // endregion

    // region: Primitive type keywords
    // These are lexed as keywords so that `var x int` never sees
    // `int` as a plain identifier, but the parser treats them as
    // type names.
    #[token("bool")]
    KW_BOOL,
    #[token("int8")]
    KW_INT8,
    #[token("int16")]
    KW_INT16,
    #[token("int32")]
    KW_INT32,
    #[token("int64")]
    KW_INT64,
    #[token("uint8")]
    KW_UINT8,
    #[token("uint16")]
    KW_UINT16,
    #[token("uint32")]
    KW_UINT32,
    #[token("uint64")]
    KW_UINT64,
    #[token("int")]
    KW_INT,
    #[token("uint")]
    KW_UINT,
    #[token("rune")]
    KW_RUNE,
    #[token("byte")]
    KW_BYTE,
    #[token("uintptr")]
    KW_UINTPTR,
    #[token("float32")]
    KW_FLOAT32,
    #[token("float64")]
    KW_FLOAT64,
    #[token("complex64")]
    KW_COMPLEX64,
    #[token("complex128")]
    KW_COMPLEX128,
    #[token("string")]
    KW_STRING,
    // endregion

    // region: Operators and delimiters
    #[token("+=")]
    ADD_ASSIGN,
    #[token("-=")]
    SUB_ASSIGN,
    #[token("*=")]
    MUL_ASSIGN,
    #[token("/=")]
    QUO_ASSIGN,
    #[token("%=")]
    REM_ASSIGN,
    #[token("&=")]
    AND_ASSIGN,
    #[token("|=")]
    OR_ASSIGN,
    #[token("^=")]
    XOR_ASSIGN,
    #[token("&^=")]
    AND_NOT_ASSIGN,
    #[token("<<=")]
    SHL_ASSIGN,
    #[token(">>=")]
    SHR_ASSIGN,

    #[token("&&")]
    LAND,
    #[token("||")]
    LOR,
    #[token("<-")]
    ARROW,
    #[token("++")]
    INC,
    #[token("--")]
    DEC,
    #[token("==")]
    EQL,
    #[token("<<")]
    SHL,
    #[token(">>")]
    SHR,
    #[token("&^")]
    AND_NOT,
    #[token("!=")]
    NEQ,
    #[token("<=")]
    LEQ,
    #[token(">=")]
    GEQ,
    #[token(":=")]
    DEFINE,
    #[token("...")]
    ELLIPSIS,

    #[token("+")]
    ADD,
    #[token("-")]
    SUB,
    #[token("*")]
    MUL,
    #[token("/")]
    QUO,
    #[token("%")]
    REM,
    #[token("&")]
    AND,
    #[token("|")]
    OR,
    #[token("^")]
    XOR,
    #[token("<")]
    LSS,
    #[token(">")]
    GTR,
    #[token("=")]
    ASSIGN,
    #[token("!")]
    NOT,

    #[token("(")]
    LPAREN,
    #[token("[")]
    LBRACK,
    #[token("{")]
    LBRACE,
    #[token(",")]
    COMMA,
    #[token(".")]
    PERIOD,
    #[token(")")]
    RPAREN,
    #[token("]")]
    RBRACK,
    #[token("}")]
    RBRACE,
    #[token(";")]
    SEMICOLON,
    #[token(":")]
    COLON,
    // endregion

    // region: Literals
    #[regex(r"[0-9]+(\.[0-9]+)?i")]
    LIT_IMAG,

    #[regex(r"[0-9]+\.[0-9]+")]
    LIT_FLOAT,

    #[regex(r"[0-9]+(e[0-9]+)?")]
    LIT_INT,

    #[token("true")]
    LIT_TRUE,
    #[token("false")]
    LIT_FALSE,

    #[token("\"", lex_str)]
    LIT_STR,

    #[token("'", lex_char)]
    LIT_CHAR,
    // endregion

    // region: Other
    #[regex("[A-Za-z_][0-9A-Za-z_]*")]
    IDENT,

    // The terminating newline is part of the comment token.
    #[regex(r"//[^\n]*\n")]
    COMMENT,

    /// A literal line break, significant to the grammar.
    #[token("\n")]
    NEWLINE,

    #[regex(r"[ \t]+", logos::skip)]
    WHITESPACE,

    #[error]
    ILLEGAL,

    /// Never produced by the lexer, only used in diagnostics.
    EOF,
    // endregion
}

impl TokenKind {
    /// Whether the kind is one of the primitive type keywords
    /// (`bool`, `int` ... `string`).
    #[must_use]
    pub fn is_type_keyword(&self) -> bool {
        self >= &TokenKind::KW_BOOL && self <= &TokenKind::KW_STRING
    }

    /// Whether a token of this kind can begin a type expression.
    #[must_use]
    pub fn starts_type(&self) -> bool {
        self.is_type_keyword()
            || matches!(
                self,
                TokenKind::IDENT
                    | TokenKind::MUL
                    | TokenKind::LBRACK
                    | TokenKind::KW_MAP
                    | TokenKind::KW_FUNC
                    | TokenKind::KW_STRUCT
                    | TokenKind::KW_INTERFACE
            )
    }
}

/// A single lexed token: its kind and the matched source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

/// Tokenize a whole source string.
///
/// Spaces and tabs are discarded, everything else (including newlines
/// and comments) becomes a token. The first character that matches no
/// rule aborts lexing with a [`LexError`].
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer: LogosLexer<TokenKind> = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        if kind == TokenKind::ILLEGAL {
            let ch = lexer.slice().chars().next().unwrap_or('\0');
            return Err(LexError {
                ch,
                offset: lexer.span().start,
            });
        }
        tokens.push(Token {
            kind,
            text: lexer.slice(),
        });
    }

    Ok(tokens)
}

fn lex_str(lex: &mut LogosLexer<TokenKind>) -> Option<()> {
    lex_quoted(lex, b'"')
}

fn lex_char(lex: &mut LogosLexer<TokenKind>) -> Option<()> {
    lex_quoted(lex, b'\'')
}

// Strings and chars share one scanner: a `\` escapes the next
// character, and `${` ... `}` interpolation segments pass through
// unscanned, so a quote inside an interpolation does not terminate
// the literal.
fn lex_quoted(lex: &mut LogosLexer<TokenKind>, quote: u8) -> Option<()> {
    let mut escaped = false;
    let mut last_char = 0_u8;
    let mut interpolation_level = 0;

    for (i, b) in lex.remainder().bytes().enumerate() {
        if escaped {
            escaped = false;
            last_char = b;
            continue;
        }

        if b == b'{' && last_char == b'$' {
            interpolation_level += 1;
            last_char = b;
            continue;
        }

        if interpolation_level > 0 {
            if b == b'}' {
                interpolation_level -= 1;
            }
            last_char = b;
            continue;
        }

        if b == quote {
            lex.bump(i + 1);
            return Some(());
        }

        escaped = b == b'\\';
        last_char = b;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        use TokenKind::*;
        assert_eq!(kinds("package main"), vec![KW_PACKAGE, IDENT]);
        // ...but only on exact matches.
        assert_eq!(kinds("packages"), vec![IDENT]);
        assert_eq!(kinds("interfaces"), vec![IDENT]);
    }

    #[test]
    fn operators_use_maximal_munch() {
        use TokenKind::*;
        assert_eq!(kinds("&^="), vec![AND_NOT_ASSIGN]);
        assert_eq!(kinds("&^"), vec![AND_NOT]);
        assert_eq!(kinds("&&"), vec![LAND]);
        assert_eq!(kinds("&"), vec![AND]);
        assert_eq!(kinds(":="), vec![DEFINE]);
        assert_eq!(kinds(":"), vec![COLON]);
        assert_eq!(kinds("..."), vec![ELLIPSIS]);
        assert_eq!(kinds(". ."), vec![PERIOD, PERIOD]);
        assert_eq!(kinds("<<="), vec![SHL_ASSIGN]);
        assert_eq!(kinds("<-"), vec![ARROW]);
    }

    #[test]
    fn numeric_literal_kinds() {
        use TokenKind::*;
        assert_eq!(kinds("42"), vec![LIT_INT]);
        assert_eq!(kinds("1e3"), vec![LIT_INT]);
        assert_eq!(kinds("3.14"), vec![LIT_FLOAT]);
        assert_eq!(kinds("2i"), vec![LIT_IMAG]);
        assert_eq!(kinds("1.5i"), vec![LIT_IMAG]);
    }

    #[test]
    fn string_escapes_and_interpolation() {
        let tokens = tokenize(r#""a \" b""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::LIT_STR);
        assert_eq!(tokens[0].text, r#""a \" b""#);

        // A quote inside `${ ... }` does not close the literal.
        let tokens = tokenize(r#""pre ${f("x")} post""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, r#""pre ${f("x")} post""#);

        let tokens = tokenize(r"'\n'").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::LIT_CHAR);
    }

    #[test]
    fn comment_absorbs_trailing_newline() {
        let tokens = tokenize("// hi\nx\n").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::COMMENT);
        assert_eq!(tokens[0].text, "// hi\n");
        assert_eq!(tokens[1].kind, TokenKind::IDENT);
        assert_eq!(tokens[2].kind, TokenKind::NEWLINE);
    }

    #[test]
    fn newline_is_a_token_but_spaces_are_not() {
        use TokenKind::*;
        assert_eq!(kinds("a \t b\nc"), vec![IDENT, IDENT, NEWLINE, IDENT]);
    }

    #[test]
    fn illegal_character_aborts_lexing() {
        let err = tokenize("package ~\n").unwrap_err();
        assert_eq!(err.ch, '~');
        assert_eq!(err.offset, 8);
        assert_eq!(err.to_string(), "Illegal character '~'");
    }
}
