use super::*;

fn graph_doc() -> Vec<u8> {
    br#"{"framewise":{"graph":{"nodes":{"0":{"decode":{"io_id":0}},"1":{"encode":{"io_id":1,"preset":"gif"}}},"edges":[{"from":0,"to":1,"kind":"input"}]}}}"#.to_vec()
}

#[test]
fn response_parsing_tolerates_leading_log_lines() {
    let r = parse_response("warming up\n{\"code\":200,\"success\":true,\"message\":\"OK\"}\n").unwrap();
    assert!(r.success);
    assert_eq!(r.message.as_deref(), Some("OK"));

    let r = parse_response("{\"success\":false,\"message\":\"bad node\"}").unwrap();
    assert!(!r.success);

    assert!(parse_response("no json here").is_none());
}

#[test]
fn opts_default_to_tool_on_path() {
    let opts = ImageflowToolOpts::default();
    assert_eq!(opts.program, PathBuf::from("imageflow_tool"));
    assert!(opts.workdir_root.is_none());
    assert_eq!(
        ImageflowToolOpts::new("/opt/bin/imageflow_tool").program,
        PathBuf::from("/opt/bin/imageflow_tool")
    );
}

#[test]
fn context_registers_slots_once_and_cleans_up() {
    let root = tempfile::tempdir().unwrap();
    let tool = ImageflowTool::new(ImageflowToolOpts {
        program: PathBuf::from("imageflow_tool"),
        workdir_root: Some(root.path().join("work")),
    });

    let mut ctx = tool.open_context().unwrap();
    let dir = ctx.dir().unwrap().to_path_buf();
    assert!(dir.starts_with(root.path().join("work")));

    tool.add_input(&mut ctx, IoId(0), vec![1, 2, 3]).unwrap();
    assert_eq!(std::fs::read(dir.join("input_0")).unwrap(), vec![1, 2, 3]);
    tool.add_output(&mut ctx, IoId(1)).unwrap();
    assert!(tool.add_output(&mut ctx, IoId(1)).is_err());
    assert!(tool.output(&mut ctx, IoId(0)).is_err());

    tool.close_context(&mut ctx);
    assert!(!dir.exists());
    assert!(tool.add_output(&mut ctx, IoId(2)).is_err());
}

#[test]
fn missing_program_is_reported_on_execute() {
    let tool = ImageflowTool::new(ImageflowToolOpts::new(
        "/nonexistent/framewise/imageflow_tool",
    ));
    assert!(!tool.is_available());
    let mut ctx = tool.open_context().unwrap();
    let err = tool.execute(&mut ctx, &graph_doc()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to spawn"), "{err:#}");
    tool.close_context(&mut ctx);
}

#[test]
fn execute_rejects_documents_without_framewise_key() {
    let tool = ImageflowTool::default();
    let mut ctx = tool.open_context().unwrap();
    let err = tool.execute(&mut ctx, br#"{"graph":{}}"#).unwrap_err();
    assert!(err.to_string().contains("framewise"), "{err}");
    tool.close_context(&mut ctx);
}

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt as _;
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn fake_tool_sees_build_job_and_failures_surface() {
    let bin = tempfile::tempdir().unwrap();

    // Copies the job file into output slot 1 so the test can inspect it.
    let ok = ImageflowTool::new(ImageflowToolOpts::new(fake_tool(
        bin.path(),
        "ok_tool",
        "cp job.json output_1\necho '{\"code\":200,\"success\":true,\"message\":\"OK\"}'",
    )));
    let mut ctx = ok.open_context().unwrap();
    ok.add_input(&mut ctx, IoId(0), b"img".to_vec()).unwrap();
    ok.add_output(&mut ctx, IoId(1)).unwrap();
    ok.execute(&mut ctx, &graph_doc()).unwrap();
    let job: serde_json::Value =
        serde_json::from_slice(&ok.output(&mut ctx, IoId(1)).unwrap()).unwrap();
    let dir = ctx.dir().unwrap().to_path_buf();
    assert_eq!(job["io"][0]["io_id"], 0);
    assert_eq!(job["io"][0]["direction"], "in");
    assert_eq!(
        job["io"][0]["io"]["file"],
        dir.join("input_0").display().to_string()
    );
    assert_eq!(job["io"][1]["direction"], "out");
    assert_eq!(
        job["framewise"]["graph"]["edges"][0]["kind"],
        serde_json::json!("input")
    );
    ok.close_context(&mut ctx);

    let failing = ImageflowTool::new(ImageflowToolOpts::new(fake_tool(
        bin.path(),
        "failing_tool",
        "echo '{\"code\":400,\"success\":false,\"message\":\"unsupported preset\"}'\nexit 1",
    )));
    let mut ctx = failing.open_context().unwrap();
    let err = failing.execute(&mut ctx, &graph_doc()).unwrap_err();
    assert!(err.to_string().contains("unsupported preset"), "{err}");
    failing.close_context(&mut ctx);
}
