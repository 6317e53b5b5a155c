//! Document parser for Folio markup.
//!
//! Parses the flat token stream from `folio-lexer` into a [`Document`]
//! tree using recursive descent with single-token lookahead. Dispatch is
//! an exhaustive match over [`TokenKind`], so adding a markup construct is
//! a compile-time-checked addition rather than a string comparison.

use crate::ast::{Document, Node};
use crate::citation::parse_citation;
use crate::ParseError;
use folio_lexer::{Token, TokenKind};

/// Folio document parser.
///
/// Converts a token stream into a hierarchical [`Document`]. Tokens are
/// consumed left-to-right exactly once; block openers anchor the
/// paragraph-wrapping rule for their first child.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse source text into a document AST.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        let tokens = folio_lexer::Scanner::tokenize(source).map_err(|e| ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        })?;

        let mut parser = Parser::new(tokens);
        parser.parse_document()
    }

    /// Parse a full document.
    fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut children = Vec::new();

        while !self.is_at_end() {
            if let Some(node) = self.parse_node()? {
                children.push(node);
            }
        }

        Ok(Document { children })
    }

    /// Parse the node starting at the current token. Returns `None` for
    /// tokens that produce no node (stray closers, trailing anchors).
    fn parse_node(&mut self) -> Result<Option<Node>, ParseError> {
        let Some(kind) = self.peek_kind().cloned() else {
            return Ok(None);
        };

        match kind {
            TokenKind::StartOfInput | TokenKind::ParagraphBreak => self.parse_block(),

            TokenKind::BlockquoteStart(raw) => self.parse_blockquote(&raw).map(Some),
            TokenKind::FootnoteStart => self.parse_footnote().map(Some),

            // A closer outside the loop that expects it; should not occur
            // in well-formed input.
            TokenKind::BlockquoteEnd | TokenKind::FootnoteEnd => {
                self.advance();
                Ok(None)
            }

            TokenKind::Heading(marker) => self.parse_heading(marker.len()).map(Some),

            TokenKind::Bold => self.parse_emphasis(TokenKind::Bold).map(Some),
            TokenKind::Italic => self.parse_emphasis(TokenKind::Italic).map(Some),

            TokenKind::Text(value) => {
                self.advance();
                Ok(Some(Node::Text { value }))
            }

            // Two physical lines in one paragraph join with a space.
            TokenKind::Newline => {
                self.advance();
                Ok(Some(Node::Text { value: " ".into() }))
            }
        }
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// The paragraph-wrapping rule. The current token (start-of-input,
    /// paragraph break, or a block opener) anchors the decision: if the
    /// next token begins inline content, open a paragraph; otherwise skip
    /// the anchor and dispatch the next token directly.
    fn parse_block(&mut self) -> Result<Option<Node>, ParseError> {
        match self.peek_next_kind() {
            Some(TokenKind::Text(_)) | Some(TokenKind::Bold) | Some(TokenKind::Italic) => {
                self.advance(); // past the anchor
                let children = self.parse_inline_until(is_paragraph_stop)?;
                Ok(Some(Node::Paragraph { children }))
            }
            Some(_) => {
                self.advance();
                self.parse_node()
            }
            None => {
                self.advance();
                Ok(None)
            }
        }
    }

    /// Parse a heading; inline children run until the next paragraph break
    /// (left unconsumed) or the end of the stream.
    fn parse_heading(&mut self, level: usize) -> Result<Node, ParseError> {
        self.advance(); // past the marker
        let children =
            self.parse_inline_until(|kind| matches!(kind, TokenKind::ParagraphBreak))?;
        Ok(Node::Heading { level, children })
    }

    /// Parse a block quotation: block-level children until the closing
    /// fence, then the citation sub-grammar applied to the raw header
    /// payload.
    fn parse_blockquote(&mut self, raw_citation: &str) -> Result<Node, ParseError> {
        let children = self.parse_block_children(TokenKind::BlockquoteEnd, "block quotation")?;
        Ok(Node::Blockquote {
            children,
            citation: parse_citation(raw_citation),
        })
    }

    /// Parse a footnote: block-level children until the closing bracket.
    fn parse_footnote(&mut self) -> Result<Node, ParseError> {
        let children = self.parse_block_children(TokenKind::FootnoteEnd, "footnote")?;
        Ok(Node::Footnote { children })
    }

    /// Shared body of blockquote/footnote parsing: repeatedly apply the
    /// paragraph-wrapping rule until the matching end token, which is
    /// consumed. The opening token itself anchors the first child. A
    /// missing end token at end-of-stream is a fatal error.
    fn parse_block_children(
        &mut self,
        end: TokenKind,
        label: &str,
    ) -> Result<Vec<Node>, ParseError> {
        let (line, column) = self.position();
        let mut children = Vec::new();

        loop {
            match self.peek_kind() {
                None => {
                    return Err(ParseError {
                        message: format!("Unterminated {label}"),
                        line,
                        column,
                    });
                }
                Some(kind) if *kind == end => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    if let Some(child) = self.parse_block()? {
                        children.push(child);
                    }
                }
            }
        }

        Ok(children)
    }

    // =========================================================================
    // Inline content
    // =========================================================================

    /// Collect inline children until `stop` matches the current token
    /// (left unconsumed for the enclosing loop) or the stream ends.
    fn parse_inline_until(
        &mut self,
        stop: fn(&TokenKind) -> bool,
    ) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();

        while let Some(kind) = self.peek_kind() {
            if stop(kind) {
                break;
            }
            if let Some(child) = self.parse_node()? {
                children.push(child);
            }
        }

        Ok(children)
    }

    /// Parse a bold or italic span: children until the next delimiter of
    /// the same kind. The first matching delimiter closes the span; a
    /// delimiter left open at end-of-stream closes implicitly.
    fn parse_emphasis(&mut self, delimiter: TokenKind) -> Result<Node, ParseError> {
        self.advance(); // past the opening delimiter
        let mut children = Vec::new();

        while let Some(kind) = self.peek_kind() {
            if *kind == delimiter {
                self.advance();
                break;
            }
            if let Some(child) = self.parse_node()? {
                children.push(child);
            }
        }

        Ok(match delimiter {
            TokenKind::Bold => Node::Bold { children },
            _ => Node::Italic { children },
        })
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn peek_next_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos + 1).map(|t| &t.kind)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn position(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.span.line, t.span.column))
            .unwrap_or((0, 0))
    }
}

/// Tokens that terminate a paragraph's inline content.
fn is_paragraph_stop(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::ParagraphBreak | TokenKind::FootnoteEnd | TokenKind::BlockquoteEnd
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Citation;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Document {
        Parser::parse(source).unwrap()
    }

    fn text(value: &str) -> Node {
        Node::Text {
            value: value.into(),
        }
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Node::Paragraph { children }
    }

    // =========================================================================
    // Paragraph wrapping and inline content
    // =========================================================================

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").children, vec![]);
    }

    #[test]
    fn test_wraps_text_in_a_paragraph() {
        assert_eq!(
            parse("Foobar").children,
            vec![paragraph(vec![text("Foobar")])]
        );
    }

    #[test]
    fn test_bold_word() {
        assert_eq!(
            parse("*foo*").children,
            vec![paragraph(vec![Node::Bold {
                children: vec![text("foo")]
            }])]
        );
    }

    #[test]
    fn test_italics() {
        assert_eq!(
            parse("_foo_").children,
            vec![paragraph(vec![Node::Italic {
                children: vec![text("foo")]
            }])]
        );
    }

    #[test]
    fn test_newline_inside_paragraph_becomes_space() {
        assert_eq!(
            parse("Foo\nbar.").children,
            vec![paragraph(vec![text("Foo"), text(" "), text("bar.")])]
        );
    }

    #[test]
    fn test_paragraph_break_splits_paragraphs() {
        assert_eq!(
            parse("Foo\n\nBar").children,
            vec![
                paragraph(vec![text("Foo")]),
                paragraph(vec![text("Bar")]),
            ]
        );
    }

    #[test]
    fn test_unterminated_emphasis_closes_at_end_of_input() {
        assert_eq!(
            parse("*foo").children,
            vec![paragraph(vec![Node::Bold {
                children: vec![text("foo")]
            }])]
        );
    }

    // =========================================================================
    // Headings
    // =========================================================================

    #[test]
    fn test_heading_with_bold() {
        assert_eq!(
            parse("=Foo *bar*").children,
            vec![Node::Heading {
                level: 1,
                children: vec![
                    text("Foo "),
                    Node::Bold {
                        children: vec![text("bar")]
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_heading_level_from_marker_length() {
        let doc = parse("==My heading with *bold.*\n\nA paragraph");
        assert!(matches!(doc.children[0], Node::Heading { level: 2, .. }));
        assert!(matches!(doc.children[1], Node::Paragraph { .. }));
    }

    // =========================================================================
    // Footnotes
    // =========================================================================

    #[test]
    fn test_footnote_wraps_content_in_paragraph() {
        assert_eq!(
            parse("Foo.footnote:[bar]").children,
            vec![paragraph(vec![
                text("Foo."),
                Node::Footnote {
                    children: vec![paragraph(vec![text("bar")])]
                },
            ])]
        );
    }

    #[test]
    fn test_multi_paragraph_footnote() {
        let doc = parse("Foo.footnote:[Hello.\n¶Sir.]");
        let Node::Paragraph { children } = &doc.children[0] else {
            panic!("expected paragraph");
        };
        let Node::Footnote { children } = &children[1] else {
            panic!("expected footnote");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_unterminated_footnote_is_an_error() {
        let err = Parser::parse("Foo.footnote:[bar").unwrap_err();
        assert!(err.message.contains("Unterminated footnote"));
    }

    // =========================================================================
    // Block quotes
    // =========================================================================

    #[test]
    fn test_blockquote() {
        assert_eq!(
            parse("Para.\n\n____\nQuote.\n____").children,
            vec![
                paragraph(vec![text("Para.")]),
                Node::Blockquote {
                    children: vec![paragraph(vec![text("Quote.")])],
                    citation: None,
                },
            ]
        );
    }

    #[test]
    fn test_cited_blockquote() {
        let doc = parse("Para.\n\n[quote, G.F., Journal]\n____\nQuote\n____");
        let Node::Blockquote { citation, .. } = &doc.children[1] else {
            panic!("expected blockquote");
        };
        assert_eq!(
            citation.as_ref(),
            Some(&Citation {
                author: Some("G.F.".into()),
                source: Some("Journal".into()),
            })
        );
    }

    #[test]
    fn test_author_only_citation() {
        let doc = parse("Para.\n\n[quote, JFK]\n____\nQuote\n____");
        let Node::Blockquote { citation, .. } = &doc.children[1] else {
            panic!("expected blockquote");
        };
        assert_eq!(
            citation.as_ref(),
            Some(&Citation {
                author: Some("JFK".into()),
                source: None,
            })
        );
    }

    #[test]
    fn test_unterminated_blockquote_is_an_error() {
        let err = Parser::parse("Para.\n\n____\nQuote.").unwrap_err();
        assert!(err.message.contains("Unterminated block quotation"));
    }

    // =========================================================================
    // Stray closers
    // =========================================================================

    #[test]
    fn test_stray_closer_is_skipped() {
        // `]` ends the paragraph and is then skipped; the trailing text
        // lands at the document level, unwrapped.
        assert_eq!(
            parse("Foo]Bar").children,
            vec![paragraph(vec![text("Foo")]), text("Bar")]
        );
    }
}
