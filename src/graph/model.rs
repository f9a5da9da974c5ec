use serde::Serialize;

use crate::foundation::ids::NodeIndex;
use crate::steps::node::Node;

/// How the target node consumes the source node's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Primary input.
    Input,
    /// Secondary surface drawn onto (canvas composition).
    Canvas,
}

/// Directed, kind-tagged link between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Producing node.
    pub from: NodeIndex,
    /// Consuming node.
    pub to: NodeIndex,
    /// Edge kind.
    pub kind: EdgeKind,
}

/// Append-only DAG of operation nodes.
///
/// Node identity is the position in the node list. A fresh graph holds a single
/// [`Node::Placeholder`] at index 0; the first decode takes its place. Edges are appended after
/// both endpoints exist and always point from an older node to a newer one, so the graph is
/// acyclic by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)]
impl Graph {
    /// Graph containing only the placeholder node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Placeholder],
            edges: Vec::new(),
        }
    }

    /// Nodes in append order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in append order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node at `idx`, if it exists.
    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.get())
    }

    /// Number of nodes, placeholder included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }


    /// Index the next appended node will receive.
    pub fn next_index(&self) -> NodeIndex {
        NodeIndex(self.nodes.len() as u32)
    }

    /// Edges pointing at `to`, in append order.
    pub fn incoming(&self, to: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.to == to)
    }

    /// Edges leaving `from`, in append order.
    pub fn outgoing(&self, from: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.from == from)
    }

    /// Whether the graph holds nothing but the vacant placeholder. `len()` is still 1 then.
    pub fn is_vacant(&self) -> bool {
        self.nodes.len() == 1 && matches!(self.nodes[0], Node::Placeholder) && self.edges.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeIndex {
        let idx = self.next_index();
        self.nodes.push(node);
        idx
    }

    /// Fill the vacant placeholder if there is one, otherwise append.
    pub(crate) fn push_root(&mut self, node: Node) -> NodeIndex {
        if self.is_vacant() {
            self.nodes[0] = node;
            NodeIndex(0)
        } else {
            self.push(node)
        }
    }

    pub(crate) fn connect(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) {
        debug_assert!(
            from < to && to.get() < self.nodes.len(),
            "edge {from}->{to} must point from an existing node to a newer one"
        );
        self.edges.push(Edge { from, to, kind });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
