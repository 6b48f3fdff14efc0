//! HTML document model: a stateless parse/serialize pair over an
//! arena-allocated tree.
//!
//! Parsing goes through html5ever's document driver, so malformed input is
//! repaired the way browsers repair it rather than rejected. Serializing an
//! unmodified tree yields output structurally equivalent to the input: tag
//! nesting, attribute order, and attribute values are preserved exactly.

mod arena;
mod serializer;
mod sink;

use std::io;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::serialize::{serialize as serialize_tree, SerializeOpts};
use html5ever::tendril::TendrilSink;

pub use arena::{Attr, Children, Document, Node, NodeData, NodeId};
use serializer::SerializableDocument;
use sink::DocumentSink;

/// Parse a raw HTML string into a [`Document`].
pub fn parse(raw: &str) -> Document {
    let sink = DocumentSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(raw.as_bytes())
        .into_document()
}

/// Serialize a [`Document`] back to an HTML string.
pub fn serialize(doc: &Document) -> io::Result<String> {
    let mut bytes = Vec::new();
    serialize_tree(
        &mut bytes,
        &SerializableDocument::new(doc),
        SerializeOpts::default(),
    )?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
