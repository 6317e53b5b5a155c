use crate::token::{Span, Token, TokenKind};
use crate::LexerError;

/// Paragraph-separator alias; a `\n¶` sequence separates paragraphs the
/// same way a blank line does.
const PILCROW: char = '¶';

/// Minimum number of underscores in a quote fence.
const FENCE_MIN: usize = 4;

/// Folio source scanner.
///
/// Tokenizes trimmed markup source into a flat stream of tokens. At each
/// position a fixed, priority-ordered list of recognizers is tried; the
/// first to consume anything wins. The order matters: quote fences beat
/// the multi-character patterns, which beat single-character symbols, which
/// beat heading markers, with free text as the greedy fallback.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given (already trimmed) source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    ///
    /// Leading and trailing whitespace is ignored. The output always begins
    /// with the [`TokenKind::StartOfInput`] sentinel.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut scanner = Scanner::new(source.trim());
        scanner.scan_tokens()?;
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), LexerError> {
        self.emit(TokenKind::StartOfInput);
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(())
    }

    /// Scan the next token, trying each recognizer in priority order.
    fn scan_token(&mut self) -> Result<(), LexerError> {
        let matched = self
            .match_quote_start()
            .or_else(|| self.match_pattern(0))
            .or_else(|| self.match_symbol())
            .or_else(|| self.match_heading())
            .or_else(|| self.match_text());

        match matched {
            Some((consumed, kind)) => {
                self.push_token(consumed, kind);
                Ok(())
            }
            None => Err(self.error(format!("Unexpected character: '{}'", self.peek()))),
        }
    }

    // --- Recognizers ---

    /// Recognizer 1: an opening quote fence with an optional
    /// `[quote, <citation>]` header line. The fence itself is a run of
    /// four-or-more `_`, or a `""` pair, and must be followed by a line
    /// break.
    fn match_quote_start(&self) -> Option<(usize, TokenKind)> {
        let (mut idx, citation) = match self.match_citation_header() {
            Some((header_len, citation)) => (header_len, citation),
            None => (0, String::new()),
        };

        let fence = self.fence_len_at(idx)?;
        idx += fence;
        if self.peek_at(idx) != Some('\n') {
            return None;
        }

        Some((idx + 1, TokenKind::BlockquoteStart(citation)))
    }

    /// Match `[quote, <citation>]\n` at the current position. The citation
    /// is one-or-more characters up to the closing `]`.
    fn match_citation_header(&self) -> Option<(usize, String)> {
        if !self.match_str_at(0, "[quote, ") {
            return None;
        }

        let mut idx = "[quote, ".len();
        let mut citation = String::new();
        while let Some(c) = self.peek_at(idx) {
            if c == ']' {
                break;
            }
            citation.push(c);
            idx += 1;
        }

        if citation.is_empty()
            || self.peek_at(idx) != Some(']')
            || self.peek_at(idx + 1) != Some('\n')
        {
            return None;
        }

        Some((idx + 2, citation))
    }

    /// Match a quote fence at `idx`: a run of four-or-more underscores, or
    /// the airquote form `""`. Returns the fence length.
    fn fence_len_at(&self, idx: usize) -> Option<usize> {
        let mut run = 0;
        while self.peek_at(idx + run) == Some('_') {
            run += 1;
        }
        if run >= FENCE_MIN {
            return Some(run);
        }
        if self.peek_at(idx) == Some('"') && self.peek_at(idx + 1) == Some('"') {
            return Some(2);
        }
        None
    }

    /// Recognizer 2: the multi-character structural patterns, tried in
    /// sub-order: footnote opener, paragraph break, closing quote fence.
    /// Also used as the forward probe that terminates free-text runs.
    fn match_pattern(&self, offset: usize) -> Option<(usize, TokenKind)> {
        if self.match_str_at(offset, "footnote:[") {
            return Some(("footnote:[".len(), TokenKind::FootnoteStart));
        }

        if self.peek_at(offset) == Some('\n') {
            // A line break followed by more breaks or pilcrows separates
            // paragraphs and swallows the entire run.
            let mut len = 1;
            while matches!(self.peek_at(offset + len), Some('\n') | Some(PILCROW)) {
                len += 1;
            }
            if len > 1 {
                return Some((len, TokenKind::ParagraphBreak));
            }

            if let Some(fence) = self.fence_len_at(offset + 1) {
                return Some((1 + fence, TokenKind::BlockquoteEnd));
            }
        }

        None
    }

    /// Recognizer 3: single-character symbols.
    fn match_symbol(&self) -> Option<(usize, TokenKind)> {
        match self.peek() {
            '*' => Some((1, TokenKind::Bold)),
            '_' => Some((1, TokenKind::Italic)),
            '\n' => Some((1, TokenKind::Newline)),
            ']' => Some((1, TokenKind::FootnoteEnd)),
            _ => None,
        }
    }

    /// Recognizer 4: a run of `=` characters. Spaces after the run are
    /// swallowed; the payload is the trimmed `=` run.
    fn match_heading(&self) -> Option<(usize, TokenKind)> {
        if self.peek() != '=' {
            return None;
        }

        let mut run = 0;
        while self.peek_at(run) == Some('=') {
            run += 1;
        }
        let mut consumed = run;
        while self.peek_at(consumed) == Some(' ') {
            consumed += 1;
        }

        Some((consumed, TokenKind::Heading("=".repeat(run))))
    }

    /// Recognizer 5: free text. Greedily consumes until a single-character
    /// symbol or a recognizer-2 pattern would match.
    fn match_text(&self) -> Option<(usize, TokenKind)> {
        let mut value = String::new();
        let mut consumed = 0;

        while let Some(c) = self.peek_at(consumed) {
            if matches!(c, '*' | '_' | '\n' | ']') {
                break;
            }
            if self.match_pattern(consumed).is_some() {
                break;
            }
            value.push(c);
            consumed += 1;
        }

        if consumed == 0 {
            return None;
        }
        Some((consumed, TokenKind::Text(value)))
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind) {
        let span = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new(kind, span));
    }

    fn push_token(&mut self, consumed: usize, kind: TokenKind) {
        let span = Span::new(self.pos, self.pos + consumed, self.line, self.column);
        self.advance_by(consumed);
        self.tokens.push(Token::new(kind, span));
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn match_str_at(&self, offset: usize, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(offset + i) == Some(c))
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.chars[self.pos] == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}
