//! A hand-written recursive-descent parser over the buffered token
//! stream.
//!
//! Declarations live here, statements in [`stmt`], expressions in
//! [`expr`], type expressions in [`ty`]. The newline-sensitive
//! statement heads (`if init; cond`, three-clause `for`, `range`
//! heads, `switch init; tag`) are resolved with bounded backtracking
//! via [`Parser::try_parse`].

mod expr;
mod stmt;
mod ty;

use tracing::instrument;

use crate::ast::{
    BasicLit, Comment, Decl, DeclTok, FieldList, File, FuncDecl, GenDecl, Ident, ImportSpec,
    LitKind, Node, Package, Spec,
};
use crate::error::ParseError;
use crate::syntax::{Token, TokenKind, TokenKind::*};

pub(crate) type Result<T> = std::result::Result<T, ParseError>;

/// The parser owns a buffered token vector and a cursor into it.
/// All state is scoped to one invocation.
pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole token stream into a root node.
    ///
    /// A leading `package` clause produces a [`Node::File`]; otherwise
    /// the top-level items become a single [`Node::Decl`] or a
    /// [`Node::Seq`], which lets snippet inputs round-trip.
    #[instrument(level = "trace", skip(self))]
    pub fn parse_root(&mut self) -> Result<Node> {
        self.skip_newlines();

        if self.at(KW_PACKAGE) {
            self.bump();
            let name = self.expect(IDENT)?.to_string();
            self.terminator()?;
            let decls = self.parse_decls()?;
            return Ok(Node::File(File {
                package: Package { name },
                decls,
            }));
        }

        let mut decls = self.parse_decls()?;
        match decls.len() {
            0 => Err(ParseError::UnexpectedEof),
            1 => Ok(Node::Decl(decls.remove(0))),
            _ => Ok(Node::Seq(decls)),
        }
    }

    fn parse_decls(&mut self) -> Result<Vec<Decl>> {
        let mut decls = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_eof() {
                break;
            }
            decls.push(self.parse_decl()?);
        }
        Ok(decls)
    }

    #[instrument(level = "trace", skip(self))]
    fn parse_decl(&mut self) -> Result<Decl> {
        match self.peek() {
            KW_IMPORT => {
                let decl = self.parse_import_decl()?;
                self.terminator()?;
                Ok(Decl::Gen(decl))
            }
            COMMENT => Ok(Decl::Comment(self.parse_comment())),
            KW_FUNC if self.nth(1) == IDENT => {
                let decl = self.parse_func_decl()?;
                self.terminator()?;
                Ok(Decl::Func(decl))
            }
            KW_FUNC if self.nth(1) == LPAREN => {
                // Either a method declaration (`func (r T) Name(...)`)
                // or a statement starting with a function literal.
                if let Some(decl) = self.try_parse(|p| {
                    let decl = p.parse_func_decl()?;
                    p.terminator()?;
                    Ok(decl)
                }) {
                    Ok(Decl::Func(decl))
                } else {
                    Ok(Decl::Stmt(self.parse_stmt()?))
                }
            }
            _ => Ok(Decl::Stmt(self.parse_stmt()?)),
        }
    }

    /// `import "p"`, `import f "p"`, `import . "p"`, or the grouped
    /// parenthesized form with one spec per line.
    fn parse_import_decl(&mut self) -> Result<GenDecl> {
        self.expect(KW_IMPORT)?;

        let mut specs = Vec::new();
        if self.eat(LPAREN) {
            self.skip_newlines();
            while !self.at(RPAREN) {
                specs.push(Spec::Import(self.parse_import_spec()?));
                self.skip_newlines();
            }
            self.expect(RPAREN)?;
        } else {
            specs.push(Spec::Import(self.parse_import_spec()?));
        }

        Ok(GenDecl {
            tok: DeclTok::Import,
            specs,
        })
    }

    fn parse_import_spec(&mut self) -> Result<ImportSpec> {
        let name = match self.peek() {
            IDENT if self.nth(1) == LIT_STR => Some(Ident::new(self.bump())),
            PERIOD if self.nth(1) == LIT_STR => {
                self.bump();
                Some(Ident::new("."))
            }
            _ => None,
        };
        let path = self.expect(LIT_STR)?;
        Ok(ImportSpec {
            name,
            path: BasicLit::new(LitKind::Str, strip_quotes(path)),
        })
    }

    fn parse_func_decl(&mut self) -> Result<FuncDecl> {
        self.expect(KW_FUNC)?;

        let recv = if self.at(LPAREN) {
            self.bump();
            let field = self.parse_field()?;
            self.expect(RPAREN)?;
            Some(FieldList::new(vec![field]))
        } else {
            None
        };

        let name = self.expect(IDENT)?.to_string();
        let ty = self.parse_func_signature()?;
        let body = self.parse_block()?;

        Ok(FuncDecl {
            recv,
            name,
            ty,
            body,
        })
    }

    pub(crate) fn parse_comment(&mut self) -> Comment {
        let text = self.bump();
        Comment {
            text: text[2..].trim().to_string(),
        }
    }
}

// Cursor primitives.
impl<'src> Parser<'src> {
    pub(crate) fn peek(&self) -> TokenKind {
        self.nth(0)
    }

    pub(crate) fn nth(&self, n: usize) -> TokenKind {
        self.tokens.get(self.pos + n).map_or(EOF, |t| t.kind)
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Advance one token and return its lexeme.
    pub(crate) fn bump(&mut self) -> &'src str {
        let text = self.tokens.get(self.pos).map_or("", |t| t.text);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        text
    }

    /// Advance past the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, expected: TokenKind) -> Result<&'src str> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token.text)
            }
            Some(token) => Err(ParseError::ExpectedToken {
                expected,
                found: token.kind,
                lexeme: token.text.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    /// Fail on the current token.
    pub(crate) fn unexpected<T>(&self) -> Result<T> {
        match self.tokens.get(self.pos) {
            Some(token) => Err(ParseError::UnexpectedToken {
                kind: token.kind,
                lexeme: token.text.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.eat(NEWLINE) {}
    }

    /// A statement terminator: a newline, or the closing brace / end of
    /// input that the caller will consume.
    pub(crate) fn terminator(&mut self) -> Result<()> {
        if self.eat(NEWLINE) || self.at(RBRACE) || self.at_eof() {
            Ok(())
        } else {
            self.unexpected()
        }
    }

    /// Run `f`, rewinding the cursor when it fails.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Option<T> {
        let checkpoint = self.pos;
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.pos = checkpoint;
                None
            }
        }
    }
}

/// Drop the surrounding quotes of a string or char lexeme.
pub(crate) fn strip_quotes(lexeme: &str) -> &str {
    &lexeme[1..lexeme.len() - 1]
}
