//! html5ever Serialize adapter for the arena document.
//!
//! The HTML serializer supplied by html5ever handles escaping, void
//! elements, and raw-text elements; this adapter only walks the arena in
//! document order and feeds it events.

use std::io;

use html5ever::serialize::{Serialize, Serializer, TraversalScope};

use super::arena::{Document, NodeData, NodeId};

/// Borrows a document (or a subtree of one) for serialization.
pub struct SerializableDocument<'a> {
    doc: &'a Document,
    root: NodeId,
}

impl<'a> SerializableDocument<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            root: doc.root(),
        }
    }
}

impl Serialize for SerializableDocument<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match traversal_scope {
            TraversalScope::IncludeNode => emit(self.doc, self.root, serializer),
            TraversalScope::ChildrenOnly(_) => {
                for child in self.doc.children(self.root) {
                    emit(self.doc, child, serializer)?;
                }
                Ok(())
            }
        }
    }
}

fn emit<S>(doc: &Document, id: NodeId, serializer: &mut S) -> io::Result<()>
where
    S: Serializer,
{
    let node = match doc.get(id) {
        Some(n) => n,
        None => return Ok(()),
    };

    match &node.data {
        NodeData::Document => {
            for child in doc.children(id) {
                emit(doc, child, serializer)?;
            }
            Ok(())
        }
        NodeData::Doctype(name) => serializer.write_doctype(name),
        NodeData::Comment(text) => serializer.write_comment(text),
        NodeData::Text(text) => serializer.write_text(text),
        NodeData::Element { name, attrs } => {
            serializer.start_elem(
                name.clone(),
                attrs.iter().map(|a| (&a.name, a.value.as_str())),
            )?;
            for child in doc.children(id) {
                emit(doc, child, serializer)?;
            }
            serializer.end_elem(name.clone())
        }
    }
}
