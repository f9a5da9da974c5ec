use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{FramewiseError, FramewiseResult};

type Loader = Box<dyn FnOnce() -> anyhow::Result<Vec<u8>> + Send>;

/// Where an input image's bytes come from.
pub enum Input {
    /// In-memory bytes.
    Bytes(Vec<u8>),
    /// File read when the pipeline executes.
    File(PathBuf),
    /// Caller-supplied loader invoked when the pipeline executes.
    Deferred(Loader),
}

impl Input {
    /// Input backed by in-memory bytes.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Input read from `path` at execution time.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Input produced by `load` at execution time.
    pub fn deferred(load: impl FnOnce() -> anyhow::Result<Vec<u8>> + Send + 'static) -> Self {
        Self::Deferred(Box::new(load))
    }

    /// Produce the input's bytes, consuming the descriptor.
    pub fn into_bytes(self) -> FramewiseResult<Vec<u8>> {
        match self {
            Self::Bytes(b) => Ok(b),
            Self::File(path) => std::fs::read(&path).map_err(|e| {
                FramewiseError::input(format!("failed to read '{}': {e}", path.display()))
            }),
            Self::Deferred(load) => load().map_err(|e| FramewiseError::input(format!("{e:#}"))),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Self::File(p) => f.debug_tuple("File").field(p).finish(),
            Self::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// Where an encoded output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Collect bytes into the result map under this label.
    Buffer(String),
    /// Write bytes to this file and record them under the path's display string.
    File(PathBuf),
}

impl Output {
    /// Output collected under `label`.
    pub fn buffer(label: impl Into<String>) -> Self {
        Self::Buffer(label.into())
    }

    /// Output written to `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Result-map key for this output.
    pub fn label(&self) -> String {
        match self {
            Self::Buffer(label) => label.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Hand fetched bytes to this output.
    pub fn deliver(
        &self,
        bytes: Vec<u8>,
        results: &mut BTreeMap<String, Vec<u8>>,
    ) -> FramewiseResult<()> {
        if let Self::File(path) = self {
            write_file(path, &bytes).map_err(|e| FramewiseError::output(format!("{e:#}")))?;
        }
        results.insert(self.label(), bytes);
        Ok(())
    }
}

/// First label shared by two or more of `outputs`, in declaration order.
pub(crate) fn duplicate_label<'a>(
    outputs: impl IntoIterator<Item = &'a Output>,
) -> Option<String> {
    let mut seen = BTreeSet::new();
    outputs
        .into_iter()
        .map(Output::label)
        .find(|label| !seen.insert(label.clone()))
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/io.rs"]
mod tests;
