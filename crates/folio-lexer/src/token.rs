/// A position in source text, tracking line and column for error reporting.
///
/// Offsets are character indices into the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Token classification for Folio markup source.
///
/// Data-carrying variants embed their payload directly: text runs carry the
/// consumed characters, heading markers carry the `=` run, and block-quote
/// starts carry the raw citation string (empty when the quote had no
/// `[quote, ...]` header).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Sentinel emitted before anything else; anchors the first paragraph.
    StartOfInput,

    /// A run of plain characters.
    Text(String),

    /// `*` — bold delimiter. The lexer does not distinguish open from
    /// close; the parser pairs them up.
    Bold,

    /// `_` — italic delimiter.
    Italic,

    /// A run of `=` characters; the run length determines the heading level.
    Heading(String),

    /// A single line break inside a paragraph.
    Newline,

    /// A blank line or pilcrow run separating paragraphs.
    ParagraphBreak,

    /// An opening quote fence, with the raw citation from the optional
    /// `[quote, ...]` header line.
    BlockquoteStart(String),

    /// A closing quote fence.
    BlockquoteEnd,

    /// `footnote:[`
    FootnoteStart,

    /// `]`
    FootnoteEnd,
}

/// A token produced by the Folio lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
