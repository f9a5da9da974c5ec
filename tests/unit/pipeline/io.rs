use super::*;

#[test]
fn inputs_produce_their_bytes() {
    assert_eq!(Input::bytes(vec![1u8, 2, 3]).into_bytes().unwrap(), vec![1, 2, 3]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.bin");
    std::fs::write(&path, b"file bytes").unwrap();
    assert_eq!(Input::file(&path).into_bytes().unwrap(), b"file bytes".to_vec());

    let loaded = Input::deferred(|| Ok(b"lazy".to_vec()));
    assert_eq!(loaded.into_bytes().unwrap(), b"lazy".to_vec());
}

#[test]
fn input_failures_are_input_errors() {
    let err = Input::file("/nonexistent/framewise/in.png")
        .into_bytes()
        .unwrap_err();
    assert!(matches!(err, FramewiseError::Input(_)), "{err}");
    assert!(err.to_string().contains("in.png"), "{err}");

    let err = Input::deferred(|| anyhow::bail!("loader gave up"))
        .into_bytes()
        .unwrap_err();
    assert!(matches!(&err, FramewiseError::Input(m) if m.contains("loader gave up")));
}

#[test]
fn input_debug_hides_payloads() {
    assert_eq!(format!("{:?}", Input::bytes(vec![0u8; 4])), "Bytes(4)");
    assert_eq!(format!("{:?}", Input::deferred(|| Ok(Vec::new()))), "Deferred");
}

#[test]
fn output_labels() {
    assert_eq!(Output::buffer("thumb").label(), "thumb");
    let path = PathBuf::from("out").join("a.png");
    assert_eq!(Output::file(&path).label(), path.display().to_string());
}

#[test]
fn buffer_delivery_records_bytes_under_label() {
    let mut results = BTreeMap::new();
    Output::buffer("a").deliver(vec![9], &mut results).unwrap();
    assert_eq!(results.get("a"), Some(&vec![9]));
}

#[test]
fn file_delivery_writes_and_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.png");
    let out = Output::file(&path);

    let mut results = BTreeMap::new();
    out.deliver(b"png".to_vec(), &mut results).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"png".to_vec());
    assert_eq!(results.get(&out.label()), Some(&b"png".to_vec()));
}

#[test]
fn file_delivery_failure_is_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let mut results = BTreeMap::new();
    let err = Output::file(blocker.join("out.png"))
        .deliver(vec![1], &mut results)
        .unwrap_err();
    assert!(matches!(err, FramewiseError::Output(_)), "{err}");
    assert!(results.is_empty());
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(Path::new("out.png")).unwrap();
}

#[test]
fn duplicate_labels_are_found_across_buffers_and_files() {
    let outputs = [
        Output::buffer("a"),
        Output::file("out/a.png"),
        Output::buffer("b"),
    ];
    assert_eq!(duplicate_label(&outputs), None);

    let outputs = [
        Output::buffer("a"),
        Output::buffer("b"),
        Output::buffer("a"),
        Output::buffer("b"),
    ];
    assert_eq!(duplicate_label(&outputs).as_deref(), Some("a"));

    let outputs = [Output::file("same.png"), Output::file("same.png")];
    assert!(duplicate_label(&outputs).is_some());
}
