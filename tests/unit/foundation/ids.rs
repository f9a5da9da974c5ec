use super::*;

#[test]
fn allocator_starts_at_zero_and_is_monotonic() {
    let mut io = IoAllocator::new();
    assert_eq!(io.issued(), 0);
    let ids: Vec<IoId> = (0..4).map(|_| io.allocate()).collect();
    assert_eq!(ids, vec![IoId(0), IoId(1), IoId(2), IoId(3)]);
    assert_eq!(io.issued(), 4);
}

#[test]
fn ids_serialize_as_bare_integers() {
    assert_eq!(serde_json::to_value(IoId(7)).unwrap(), serde_json::json!(7));
    assert_eq!(
        serde_json::to_value(NodeIndex(3)).unwrap(),
        serde_json::json!(3)
    );
}
