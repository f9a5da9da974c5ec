use crate::foundation::error::{FramewiseError, FramewiseResult};
use crate::foundation::ids::NodeIndex;
use crate::graph::model::{EdgeKind, Graph};
use crate::steps::node::Node;

/// Check the structural rules the engine relies on.
///
/// The builder never produces dangling or backward edges, but it does accept chains that start
/// before any decode. This reports, first problem wins:
/// - edges that reference missing nodes or point backwards;
/// - a placeholder that feeds other nodes (an operation chained before any decode);
/// - decode nodes with incoming edges;
/// - non-decode nodes without exactly one `input` edge;
/// - composition nodes without exactly one `canvas` edge, and `canvas` edges into other nodes.
pub fn validate_graph(graph: &Graph) -> FramewiseResult<()> {
    let n = graph.len();
    for e in graph.edges() {
        if e.from.get() >= n || e.to.get() >= n {
            return Err(FramewiseError::validation(format!(
                "edge {}->{} references a missing node",
                e.from, e.to
            )));
        }
        if e.from >= e.to {
            return Err(FramewiseError::validation(format!(
                "edge {}->{} does not point to a newer node",
                e.from, e.to
            )));
        }
    }

    for (i, node) in graph.nodes().iter().enumerate() {
        let idx = NodeIndex(i as u32);
        let inputs = graph
            .incoming(idx)
            .filter(|e| e.kind == EdgeKind::Input)
            .count();
        let canvases = graph
            .incoming(idx)
            .filter(|e| e.kind == EdgeKind::Canvas)
            .count();

        match node {
            Node::Placeholder => {
                if graph.outgoing(idx).next().is_some() {
                    return Err(FramewiseError::validation(format!(
                        "node {idx} is an empty placeholder feeding other nodes; \
                         chains must start with a decode"
                    )));
                }
            }
            Node::Decode { .. } => {
                if inputs + canvases != 0 {
                    return Err(FramewiseError::validation(format!(
                        "decode node {idx} must not have incoming edges"
                    )));
                }
            }
            _ => {
                if inputs != 1 {
                    return Err(FramewiseError::validation(format!(
                        "node {idx} ({}) has {inputs} input edges, expected 1",
                        node.kind().unwrap_or("placeholder")
                    )));
                }
                let expected = usize::from(node.is_composition());
                if canvases != expected {
                    return Err(FramewiseError::validation(format!(
                        "node {idx} ({}) has {canvases} canvas edges, expected {expected}",
                        node.kind().unwrap_or("placeholder")
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/graph/validate.rs"]
mod tests;
