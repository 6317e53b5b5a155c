//! Folio Parser
//!
//! Parses a token stream into an Abstract Syntax Tree.
//! Includes the document parser (recursive descent with single-token
//! lookahead) and the citation sub-grammar applied to the raw
//! `[quote, ...]` payload captured by the lexer.

pub mod ast;
pub mod citation;
pub mod parser;

pub use ast::{Citation, Document, Node};
pub use citation::parse_citation;
pub use parser::Parser;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
