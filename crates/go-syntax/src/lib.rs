//! Lexer, AST, and parser for a subset of the Go programming language.
//!
//! The pipeline is strictly linear: source text is tokenized
//! ([`syntax::tokenize`]), the token stream is parsed into an owned
//! tree of tagged variants ([`ast`]), and the companion `go-fmt` crate
//! renders the tree back to source. The guiding property is textual
//! round-tripping: for every supported canonicalized input,
//! unparsing the parse result reproduces the input exactly.
//!
//! ```
//! use go_syntax::{ast::Node, parse};
//!
//! let node = parse("package main\n").unwrap();
//! assert!(matches!(node, Node::File(_)));
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod syntax;
pub mod visitor;

pub use error::{Error, LexError, ParseError};

use ast::Node;
use parser::Parser;

/// Parse a source string into its root node.
///
/// The input is canonicalized the same way the round-trip fixtures
/// are: surrounding whitespace is trimmed and a single trailing
/// newline is guaranteed. A source without a `package` clause is
/// still accepted and yields a top-level item or sequence instead of
/// a file.
///
/// # Errors
///
/// Returns [`Error::Lex`] on the first illegal character and
/// [`Error::Parse`] on the first unmatched production; the pipeline
/// never recovers.
pub fn parse(source: &str) -> Result<Node, Error> {
    let src = canonicalize(source);
    let tokens = syntax::tokenize(&src)?;
    let node = Parser::new(tokens).parse_root()?;
    Ok(node)
}

fn canonicalize(source: &str) -> String {
    let mut src = source.trim().to_string();
    src.push('\n');
    src
}
