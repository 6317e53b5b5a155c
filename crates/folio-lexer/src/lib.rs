//! Folio Lexer
//!
//! Tokenizes Folio markup source into a flat stream of tokens.
//! Handles emphasis delimiters, heading markers, paragraph breaks (blank
//! lines and pilcrows), block-quote fences with optional citation headers,
//! and footnote brackets.
//!
//! # Example
//!
//! ```
//! use folio_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("").unwrap();
//! assert_eq!(tokens.len(), 1); // just the start-of-input sentinel
//! assert_eq!(tokens[0].kind, TokenKind::StartOfInput);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
