//! HTML output via html5ever's serializer.

use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{Dom, NodeData, NodeId};

/// A node plus the tree it lives in, serializable by html5ever.
#[derive(Clone, Copy)]
pub struct SerializableNode<'a> {
    dom: &'a Dom,
    id: NodeId,
}

enum Step {
    Open(NodeId),
    Close(QualName),
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let dom = self.dom;
        let mut stack = match traversal_scope {
            TraversalScope::IncludeNode => vec![Step::Open(self.id)],
            TraversalScope::ChildrenOnly(_) => {
                let mut children: Vec<Step> = dom.children(self.id).map(Step::Open).collect();
                children.reverse();
                children
            }
        };

        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
                Step::Open(id) => id,
            };
            let Some(node) = dom.get(id) else { continue };

            match &node.data {
                NodeData::Element { name, attrs, .. } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|a| (&a.name, a.value.as_str())),
                    )?;
                    stack.push(Step::Close(name.clone()));
                }
                NodeData::Document => {}
                NodeData::Text(text) => {
                    serializer.write_text(text)?;
                    continue;
                }
                NodeData::Comment(text) => {
                    serializer.write_comment(text)?;
                    continue;
                }
                NodeData::Doctype { name, .. } => {
                    serializer.write_doctype(name)?;
                    continue;
                }
            }

            let first = stack.len();
            stack.extend(dom.children(id).map(Step::Open));
            stack[first..].reverse();
        }
        Ok(())
    }
}

impl Dom {
    pub fn serializable(&self, id: NodeId) -> SerializableNode<'_> {
        SerializableNode { dom: self, id }
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        self.node_to_html(self.document(), TraversalScope::ChildrenOnly(None))
    }

    /// Serialize one element including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        self.node_to_html(id, TraversalScope::IncludeNode)
    }

    fn node_to_html(&self, id: NodeId, traversal_scope: TraversalScope) -> String {
        let mut out = Vec::new();
        let opts = SerializeOpts {
            traversal_scope,
            ..SerializeOpts::default()
        };
        if let Err(e) = serialize(&mut out, &self.serializable(id), opts) {
            log::warn!("serializing node {id:?} failed: {e}");
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}
