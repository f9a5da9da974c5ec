use super::*;
use crate::foundation::ids::IoId;
use crate::steps::params::CopyRectToCanvas;

fn copy_rect() -> Node {
    Node::CopyRectToCanvas(CopyRectToCanvas {
        from_x: 0,
        from_y: 0,
        w: 10,
        h: 10,
        x: 0,
        y: 0,
    })
}

#[test]
fn empty_graph_is_valid() {
    validate_graph(&Graph::new()).unwrap();
}

#[test]
fn linear_chain_is_valid() {
    let mut g = Graph::new();
    let d = g.push_root(Node::Decode { io_id: IoId(0) });
    let r = g.push(Node::Rotate90);
    g.connect(d, r, EdgeKind::Input);
    validate_graph(&g).unwrap();
}

#[test]
fn chaining_from_placeholder_is_rejected() {
    let mut g = Graph::new();
    let r = g.push(Node::Rotate90);
    g.connect(NodeIndex(0), r, EdgeKind::Input);
    let err = validate_graph(&g).unwrap_err();
    assert!(err.to_string().contains("placeholder"), "{err}");
}

#[test]
fn composition_needs_a_canvas_edge() {
    let mut g = Graph::new();
    let d = g.push_root(Node::Decode { io_id: IoId(0) });
    let c = g.push(copy_rect());
    g.connect(d, c, EdgeKind::Input);
    let err = validate_graph(&g).unwrap_err();
    assert!(err.to_string().contains("canvas edges"), "{err}");

    let mut g = Graph::new();
    let base = g.push_root(Node::Decode { io_id: IoId(0) });
    let drawn = g.push_root(Node::Decode { io_id: IoId(1) });
    let c = g.push(copy_rect());
    g.connect(base, c, EdgeKind::Input);
    g.connect(drawn, c, EdgeKind::Canvas);
    validate_graph(&g).unwrap();
}

#[test]
fn canvas_edge_into_plain_node_is_rejected() {
    let mut g = Graph::new();
    let a = g.push_root(Node::Decode { io_id: IoId(0) });
    let b = g.push_root(Node::Decode { io_id: IoId(1) });
    let f = g.push(Node::FlipH);
    g.connect(a, f, EdgeKind::Input);
    g.connect(b, f, EdgeKind::Canvas);
    assert!(validate_graph(&g).is_err());
}

#[test]
fn node_without_input_is_rejected() {
    let mut g = Graph::new();
    g.push_root(Node::Decode { io_id: IoId(0) });
    g.push(Node::FlipV);
    let err = validate_graph(&g).unwrap_err();
    assert!(err.to_string().contains("0 input edges"), "{err}");
}
