use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context as _, anyhow, bail};
use serde::Serialize;

use crate::execute::engine::Engine;
use crate::foundation::ids::IoId;

/// Environment variable overriding the `imageflow_tool` program.
pub const TOOL_ENV: &str = "FRAMEWISE_IMAGEFLOW_TOOL";
/// Environment variable overriding the root directory for per-execution work directories.
pub const WORKDIR_ENV: &str = "FRAMEWISE_WORKDIR";

/// Options for [`ImageflowTool`].
#[derive(Clone, Debug)]
pub struct ImageflowToolOpts {
    /// Program to invoke; looked up on `PATH` when not a path.
    pub program: PathBuf,
    /// Directory in which per-execution work directories are created; the system temp directory
    /// when `None`.
    pub workdir_root: Option<PathBuf>,
}

impl Default for ImageflowToolOpts {
    fn default() -> Self {
        Self {
            program: PathBuf::from("imageflow_tool"),
            workdir_root: None,
        }
    }
}

impl ImageflowToolOpts {
    /// Options invoking `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by [`TOOL_ENV`] and [`WORKDIR_ENV`] when set and non-empty.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(program) = std::env::var_os(TOOL_ENV).filter(|v| !v.is_empty()) {
            opts.program = PathBuf::from(program);
        }
        if let Some(root) = std::env::var_os(WORKDIR_ENV).filter(|v| !v.is_empty()) {
            opts.workdir_root = Some(PathBuf::from(root));
        }
        opts
    }
}

/// Engine that runs the `imageflow_tool` executable.
///
/// Each context is a temporary work directory. Inputs are written there as files, the graph is
/// wrapped in a `v1/build` job whose `io` table points at those files, and outputs are read back
/// after the tool exits. The directory is removed when the context closes.
#[derive(Clone, Debug, Default)]
pub struct ImageflowTool {
    opts: ImageflowToolOpts,
}

/// Work directory and IO table of one [`ImageflowTool`] execution.
#[derive(Debug)]
pub struct ToolContext {
    dir: Option<tempfile::TempDir>,
    io: Vec<IoEntry>,
}

#[derive(Clone, Debug, Serialize)]
struct IoEntry {
    io_id: IoId,
    direction: Direction,
    io: IoFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Direction {
    In,
    Out,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum IoFile {
    File(PathBuf),
}

#[derive(Serialize)]
struct BuildJob<'a> {
    io: &'a [IoEntry],
    framewise: &'a serde_json::Value,
}

impl ToolContext {
    fn dir(&self) -> anyhow::Result<&Path> {
        self.dir
            .as_ref()
            .map(|d| d.path())
            .ok_or_else(|| anyhow!("context is closed"))
    }

    fn register(&mut self, io_id: IoId, direction: Direction) -> anyhow::Result<PathBuf> {
        if self.io.iter().any(|e| e.io_id == io_id) {
            bail!("io_id {io_id} is already registered");
        }
        let name = match direction {
            Direction::In => format!("input_{io_id}"),
            Direction::Out => format!("output_{io_id}"),
        };
        let path = self.dir()?.join(name);
        self.io.push(IoEntry {
            io_id,
            direction,
            io: IoFile::File(path.clone()),
        });
        Ok(path)
    }

    fn output_path(&self, io_id: IoId) -> Option<&Path> {
        self.io
            .iter()
            .find(|e| e.io_id == io_id && e.direction == Direction::Out)
            .map(|e| match &e.io {
                IoFile::File(p) => p.as_path(),
            })
    }
}

impl ImageflowTool {
    /// Engine using `opts`.
    pub fn new(opts: ImageflowToolOpts) -> Self {
        Self { opts }
    }

    /// Engine configured from the environment, see [`ImageflowToolOpts::from_env`].
    pub fn from_env() -> Self {
        Self::new(ImageflowToolOpts::from_env())
    }

    /// Configured options.
    pub fn opts(&self) -> &ImageflowToolOpts {
        &self.opts
    }

    /// Return `true` when the configured program can be invoked.
    pub fn is_available(&self) -> bool {
        Command::new(&self.opts.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Engine for ImageflowTool {
    type Context = ToolContext;

    fn open_context(&self) -> anyhow::Result<ToolContext> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("framewise-");
        let dir = match &self.opts.workdir_root {
            Some(root) => {
                std::fs::create_dir_all(root).with_context(|| {
                    format!("failed to create work directory root '{}'", root.display())
                })?;
                builder.tempdir_in(root)
            }
            None => builder.tempdir(),
        }
        .context("failed to create work directory")?;
        tracing::debug!(dir = %dir.path().display(), "opened imageflow_tool context");
        Ok(ToolContext {
            dir: Some(dir),
            io: Vec::new(),
        })
    }

    fn add_input(&self, ctx: &mut ToolContext, io_id: IoId, bytes: Vec<u8>) -> anyhow::Result<()> {
        let path = ctx.register(io_id, Direction::In)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write input file '{}'", path.display()))
    }

    fn add_output(&self, ctx: &mut ToolContext, io_id: IoId) -> anyhow::Result<()> {
        ctx.register(io_id, Direction::Out).map(drop)
    }

    fn execute(&self, ctx: &mut ToolContext, graph_json: &[u8]) -> anyhow::Result<()> {
        let doc: serde_json::Value =
            serde_json::from_slice(graph_json).context("graph document is not valid JSON")?;
        let framewise = doc
            .get("framewise")
            .ok_or_else(|| anyhow!("graph document has no 'framewise' key"))?;
        let job_path = ctx.dir()?.join("job.json");
        let job = serde_json::to_vec(&BuildJob {
            io: &ctx.io,
            framewise,
        })?;
        std::fs::write(&job_path, job)
            .with_context(|| format!("failed to write job file '{}'", job_path.display()))?;

        tracing::debug!(program = %self.opts.program.display(), job = %job_path.display(), "running imageflow_tool");
        let out = Command::new(&self.opts.program)
            .arg("v1/build")
            .arg("--json")
            .arg(&job_path)
            .current_dir(ctx.dir()?)
            .stdin(Stdio::null())
            .output()
            .with_context(|| {
                format!(
                    "failed to spawn '{}' (is it installed and on PATH?)",
                    self.opts.program.display()
                )
            })?;

        let stdout = String::from_utf8_lossy(&out.stdout);
        let response = parse_response(&stdout);
        if !out.status.success() || response.as_ref().is_some_and(|r| !r.success) {
            let message = response
                .and_then(|r| r.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&out.stderr).trim().to_string());
            bail!("imageflow_tool exited with status {}: {message}", out.status);
        }
        Ok(())
    }

    fn output(&self, ctx: &mut ToolContext, io_id: IoId) -> anyhow::Result<Vec<u8>> {
        let path = ctx
            .output_path(io_id)
            .ok_or_else(|| anyhow!("io_id {io_id} is not a registered output"))?;
        std::fs::read(path)
            .with_context(|| format!("failed to read output file '{}'", path.display()))
    }

    fn close_context(&self, ctx: &mut ToolContext) {
        if let Some(dir) = ctx.dir.take() {
            let shown = dir.path().display().to_string();
            if let Err(e) = dir.close() {
                tracing::warn!(dir = %shown, error = %e, "failed to remove work directory");
            }
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ToolResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

// The tool prints a JSON response on stdout, possibly after log lines.
fn parse_response(stdout: &str) -> Option<ToolResponse> {
    let start = stdout.find('{')?;
    serde_json::from_str(stdout[start..].trim()).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/execute/tool.rs"]
mod tests;
