//! Abstract Syntax Tree for Folio markup.
//!
//! The tree is read-only once built: the parser constructs each node's
//! children in source order before exposing the node, and the renderer
//! never mutates it.

/// A complete Folio document. Children are block-level nodes (paragraphs,
/// headings, block quotes) plus whatever stray inline content appeared
/// outside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

/// A node in the document tree. Only `Text` is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A paragraph of inline content.
    Paragraph { children: Vec<Node> },

    /// A heading; `level` is the length of the `=` marker run.
    Heading { level: usize, children: Vec<Node> },

    /// Bold emphasis (`*...*`).
    Bold { children: Vec<Node> },

    /// Italic emphasis (`_..._`).
    Italic { children: Vec<Node> },

    /// A literal text run. A line break inside a paragraph becomes a
    /// single-space `Text` node.
    Text { value: String },

    /// A block quotation. Children are block-level content; `citation`
    /// is present only when the quote carried a non-empty `[quote, ...]`
    /// header that yielded at least one field.
    Blockquote {
        children: Vec<Node>,
        citation: Option<Citation>,
    },

    /// An out-of-line annotation; children are block-level content,
    /// typically one or more paragraphs.
    Footnote { children: Vec<Node> },
}

impl Node {
    /// Child nodes in source order; empty for `Text` leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } => &[],
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Bold { children }
            | Node::Italic { children }
            | Node::Blockquote { children, .. }
            | Node::Footnote { children } => children,
        }
    }
}

/// Author/source metadata attached to a block quotation.
///
/// Invariant: at least one field is set. A citation that would be empty is
/// represented as `None` on the `Blockquote` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub author: Option<String>,
    pub source: Option<String>,
}
