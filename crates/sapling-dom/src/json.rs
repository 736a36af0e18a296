//! Serialize a tree as nested JSON objects.
//!
//! Serialization nests one level per tree level, so it refuses trees deeper
//! than [`MAX_JSON_DEPTH`] with an error instead of exhausting the stack.

use serde::ser::{Error, Serialize, SerializeStruct, Serializer};

use crate::{Attribute, DomTree, NodeId, NodeType};

/// Deepest nesting below the viewed node that serializes.
pub const MAX_JSON_DEPTH: usize = 128;

/// A borrowed view of one node that serializes with its whole subtree.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a DomTree,
    id: NodeId,
    depth: usize,
}

impl<'a> NodeView<'a> {
    /// View the node `id` of `tree`.
    #[must_use]
    pub const fn new(tree: &'a DomTree, id: NodeId) -> Self {
        Self { tree, id, depth: 0 }
    }

    const fn child(&self, id: NodeId) -> Self {
        Self {
            tree: self.tree,
            id,
            depth: self.depth + 1,
        }
    }
}

struct AttributeView<'a>(&'a Attribute);

impl Serialize for AttributeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attribute", 2)?;
        state.serialize_field("name", &self.0.name)?;
        state.serialize_field("value", &self.0.value)?;
        state.end()
    }
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(node) = self.tree.get(self.id) else {
            return serializer.serialize_none();
        };
        if self.depth > MAX_JSON_DEPTH {
            return Err(S::Error::custom(format!(
                "tree nests deeper than {MAX_JSON_DEPTH} levels"
            )));
        }
        match &node.node_type {
            NodeType::Element(data) => {
                let attrs: Vec<AttributeView<'_>> = data.attrs.iter().map(AttributeView).collect();
                let children: Vec<NodeView<'_>> = node
                    .children
                    .iter()
                    .map(|&child| self.child(child))
                    .collect();
                let mut state = serializer.serialize_struct("Tag", 5)?;
                state.serialize_field("type", "tag")?;
                state.serialize_field("name", &data.tag_name)?;
                state.serialize_field("closed", &data.closed)?;
                state.serialize_field("attributes", &attrs)?;
                state.serialize_field("children", &children)?;
                state.end()
            }
            NodeType::Text(value) => {
                let mut state = serializer.serialize_struct("Text", 2)?;
                state.serialize_field("type", "text")?;
                state.serialize_field("value", value)?;
                state.end()
            }
            NodeType::Comment(value) => {
                let mut state = serializer.serialize_struct("Comment", 2)?;
                state.serialize_field("type", "comment")?;
                state.serialize_field("value", value)?;
                state.end()
            }
        }
    }
}

impl DomTree {
    /// The whole document, root included, as a JSON value.
    ///
    /// # Errors
    ///
    /// Fails when the tree nests deeper than [`MAX_JSON_DEPTH`].
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(NodeView::new(self, self.root()))
    }

    /// The whole document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails when the tree nests deeper than [`MAX_JSON_DEPTH`].
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&NodeView::new(self, self.root()))
    }
}
