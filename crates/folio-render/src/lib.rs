//! Folio Renderer
//!
//! Turns a parsed Folio document into a compact HTML fragment. Element
//! ids come from an injected [`IdGenerator`], so callers can pick random
//! UUIDs for production output or a deterministic counter for tests and
//! snapshot comparisons.
//!
//! ```
//! use folio_render::{render, SequentialIds};
//!
//! let document = folio_parser::Parser::parse("Hello, *world*").unwrap();
//! let html = render(&document, &mut SequentialIds::default());
//! assert_eq!(html, "<div class=\"content\"><p>Hello, <strong>world</strong></p></div>");
//! ```

pub mod html;
pub mod id;

pub use html::render;
pub use id::{IdGenerator, SequentialIds, UuidIds};

use folio_parser::{ParseError, Parser};

/// Compile Folio source straight to HTML with UUID element ids.
pub fn to_html(source: &str) -> Result<String, ParseError> {
    let document = Parser::parse(source)?;
    Ok(render(&document, &mut UuidIds))
}
