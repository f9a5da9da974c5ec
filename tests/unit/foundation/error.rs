use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramewiseError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(
        FramewiseError::registration("x")
            .to_string()
            .contains("registration error:")
    );
    assert!(
        FramewiseError::execution("x")
            .to_string()
            .contains("execution error:")
    );
    assert!(
        FramewiseError::fetch("x")
            .to_string()
            .contains("fetch error:")
    );
    assert!(
        FramewiseError::output("x")
            .to_string()
            .contains("output error:")
    );
    assert!(
        FramewiseError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramewiseError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramewiseError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = FramewiseError::from(e);
    assert!(matches!(err, FramewiseError::Serde(_)));
}
