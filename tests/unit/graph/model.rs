use super::*;

#[test]
fn fresh_graph_holds_only_the_placeholder() {
    let g = Graph::new();
    assert_eq!(g.len(), 1);
    assert!(g.is_vacant());
    assert_eq!(g.nodes(), &[Node::Placeholder]);
    assert!(g.edges().is_empty());
    assert_eq!(g.next_index(), NodeIndex(1));
}

#[test]
fn first_root_fills_placeholder_and_later_roots_append() {
    let mut g = Graph::new();
    let a = g.push_root(Node::Decode {
        io_id: crate::foundation::ids::IoId(0),
    });
    assert_eq!(a, NodeIndex(0));
    assert_eq!(g.len(), 1);
    assert!(!g.is_vacant());

    let b = g.push_root(Node::Decode {
        io_id: crate::foundation::ids::IoId(1),
    });
    assert_eq!(b, NodeIndex(1));
    assert_eq!(g.len(), 2);
}

#[test]
fn root_after_chaining_from_placeholder_does_not_overwrite_it() {
    let mut g = Graph::new();
    let r = g.push(Node::FlipH);
    g.connect(NodeIndex(0), r, EdgeKind::Input);
    assert!(!g.is_vacant());
    let d = g.push_root(Node::Decode {
        io_id: crate::foundation::ids::IoId(0),
    });
    assert_eq!(d, NodeIndex(2));
    assert_eq!(g.nodes()[0], Node::Placeholder);
}

#[test]
fn incoming_and_outgoing_preserve_append_order() {
    let mut g = Graph::new();
    let d = g.push_root(Node::Decode {
        io_id: crate::foundation::ids::IoId(0),
    });
    let r = g.push(Node::Rotate90);
    let f = g.push(Node::FlipV);
    g.connect(d, r, EdgeKind::Input);
    g.connect(d, f, EdgeKind::Input);
    g.connect(r, f, EdgeKind::Canvas);

    let into_f: Vec<_> = g.incoming(f).map(|e| (e.from, e.kind)).collect();
    assert_eq!(
        into_f,
        vec![(d, EdgeKind::Input), (r, EdgeKind::Canvas)]
    );
    let out_d: Vec<_> = g.outgoing(d).map(|e| e.to).collect();
    assert_eq!(out_d, vec![r, f]);
    assert_eq!(g.node(NodeIndex(9)), None);
}
