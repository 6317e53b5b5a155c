//! HTML generation from the document AST.
//!
//! Produces a compact HTML fragment: the document body inside
//! `<div class="content">`, followed by a footnote area when any
//! footnotes were rendered. Footnote bodies are collected on the render
//! context while the tree is walked, then emitted after the content in
//! encounter order.

use crate::id::IdGenerator;
use folio_parser::{Citation, Document, Node};

/// State threaded through a single render pass.
struct RenderContext<'a> {
    ids: &'a mut dyn IdGenerator,
    footnotes: Vec<String>,
}

/// Render a document to an HTML fragment using the given id source.
pub fn render(document: &Document, ids: &mut dyn IdGenerator) -> String {
    let mut ctx = RenderContext {
        ids,
        footnotes: Vec::new(),
    };

    let body: String = document
        .children
        .iter()
        .map(|node| render_node(node, &mut ctx))
        .collect();
    let content = format!("<div class=\"content\">{body}</div>");

    if ctx.footnotes.is_empty() {
        return content;
    }
    format!(
        "{content}<hr /><div class=\"footnote-area\">{}</div>",
        ctx.footnotes.concat()
    )
}

fn render_node(node: &Node, ctx: &mut RenderContext) -> String {
    // Footnotes render even when empty: the call anchor and the body
    // placeholder must still pair up.
    if let Node::Footnote { children } = node {
        return render_footnote(children, ctx);
    }

    match node {
        Node::Text { value } => value.clone(),
        _ if node.children().is_empty() => String::new(),

        Node::Paragraph { children } => wrap("p", children, ctx),
        Node::Bold { children } => wrap("strong", children, ctx),
        Node::Italic { children } => wrap("em", children, ctx),
        Node::Heading { level, children } => render_heading(*level, children, ctx),
        Node::Blockquote { children, citation } => render_blockquote(children, citation, ctx),

        // Covered by the leading `if let`.
        Node::Footnote { .. } => String::new(),
    }
}

fn render_children(children: &[Node], ctx: &mut RenderContext) -> String {
    children.iter().map(|node| render_node(node, ctx)).collect()
}

fn wrap(tag: &str, children: &[Node], ctx: &mut RenderContext) -> String {
    format!("<{tag}>{}</{tag}>", render_children(children, ctx))
}

/// Levels 1 and 2 map to `<h1>`/`<h2>`; only chapters (level 2) carry a
/// linkable id. Deeper levels have no element of their own.
fn render_heading(level: usize, children: &[Node], ctx: &mut RenderContext) -> String {
    match level {
        1 => wrap("h1", children, ctx),
        2 => {
            let id = ctx.ids.next_id();
            format!(
                "<h2 id=\"_{id}\" class=\"chapter\">{}</h2>",
                render_children(children, ctx)
            )
        }
        _ => render_children(children, ctx),
    }
}

fn render_blockquote(
    children: &[Node],
    citation: &Option<Citation>,
    ctx: &mut RenderContext,
) -> String {
    let mut html = wrap("blockquote", children, ctx);

    if let Some(Citation { author, source }) = citation {
        html.push_str("<div class=\"blockquote-citation\">");
        if let Some(author) = author {
            html.push_str(&format!(
                "<span class=\"blockquote-citation__author\">{author}</span>"
            ));
        }
        if let Some(source) = source {
            html.push_str(&format!(
                "<cite class=\"blockquote-citation__source\">{source}</cite>"
            ));
        }
        html.push_str("</div>");
    }

    html
}

/// Render the inline call anchor and stash the footnote body for the
/// footnote area. Call and body link to each other through the shared id.
fn render_footnote(children: &[Node], ctx: &mut RenderContext) -> String {
    let id = ctx.ids.next_id();
    let body = render_children(children, ctx);

    ctx.footnotes.push(format!(
        "<div id=\"_{id}\" class=\"footnote-body\">\
         <a href=\"#ref-{id}\" class=\"footnote-body__marker\"></a>\
         <div class=\"footnote-body__element\">{body}</div>\
         </div>"
    ));

    format!("<a href=\"#_{id}\" id=\"ref-{id}\" class=\"footnote-call\"></a>")
}
