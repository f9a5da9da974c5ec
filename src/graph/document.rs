//! The framewise exchange document.
//!
//! ```text
//! { "framewise": { "graph": {
//!     "nodes": { "0": <node>, "1": <node>, ... },
//!     "edges": [ { "from": 0, "to": 1, "kind": "input" }, ... ]
//! } } }
//! ```
//!
//! Node keys are the append-order indices written as strings, emitted in index order.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::foundation::error::FramewiseResult;
use crate::graph::model::Graph;
use crate::steps::node::Node;

#[derive(Serialize)]
struct Document<'a> {
    framewise: Framewise<'a>,
}

#[derive(Serialize)]
struct Framewise<'a> {
    graph: &'a Graph,
}

struct NodeTable<'a>(&'a [Node]);

impl Serialize for NodeTable<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.len()))?;
        for (idx, node) in self.0.iter().enumerate() {
            map.serialize_entry(&idx.to_string(), node)?;
        }
        map.end()
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(2))?;
        map.serialize_entry("nodes", &NodeTable(self.nodes()))?;
        map.serialize_entry("edges", self.edges())?;
        map.end()
    }
}

fn document(graph: &Graph) -> Document<'_> {
    Document {
        framewise: Framewise { graph },
    }
}

/// Serialize `graph` as a compact framewise document.
pub fn to_json(graph: &Graph) -> FramewiseResult<String> {
    Ok(serde_json::to_string(&document(graph))?)
}

/// Serialize `graph` as an indented framewise document.
pub fn to_json_pretty(graph: &Graph) -> FramewiseResult<String> {
    Ok(serde_json::to_string_pretty(&document(graph))?)
}

/// Serialize `graph` as compact framewise document bytes.
pub fn to_vec(graph: &Graph) -> FramewiseResult<Vec<u8>> {
    Ok(serde_json::to_vec(&document(graph))?)
}

/// Framewise document as a JSON value.
pub fn to_value(graph: &Graph) -> FramewiseResult<serde_json::Value> {
    Ok(serde_json::to_value(document(graph))?)
}

#[cfg(test)]
#[path = "../../tests/unit/graph/document.rs"]
mod tests;
