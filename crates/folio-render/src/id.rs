//! Element id generation.
//!
//! Chapter headings and footnotes need document-unique ids for their
//! anchor links. The renderer takes the generator as a capability so
//! callers choose the id scheme; tests use [`SequentialIds`] for stable
//! output while production rendering uses [`UuidIds`].

use uuid::Uuid;

/// A source of document-unique element ids.
///
/// One generator instance serves a whole render pass, so every id it
/// yields must be distinct from the previous ones.
pub trait IdGenerator {
    /// Produce the next unique id.
    fn next_id(&mut self) -> String;
}

/// Random UUIDv4 ids. Collision-free across documents, not just within
/// one render pass.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter ids: `"1"`, `"2"`, `"3"`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: usize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        self.counter.to_string()
    }
}
