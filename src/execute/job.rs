use std::collections::BTreeMap;

use crate::execute::engine::{ContextGuard, Engine};
use crate::foundation::error::{FramewiseError, FramewiseResult};
use crate::graph::document;
use crate::pipeline::builder::Steps;
use crate::pipeline::io::duplicate_label;

/// Run `steps` on `engine` and collect every declared output.
///
/// Sequence: serialize the graph, open a context, read and register each input, register each
/// output, execute once, fetch every output, then hand each to its [`crate::Output`]. The first
/// failure aborts the run; no partial map is returned and no output file is written. The context
/// is closed on every exit path.
///
/// Outputs sharing a label are rejected before the engine is touched.
#[tracing::instrument(skip_all, fields(inputs = steps.inputs().len(), outputs = steps.outputs().len()))]
pub fn execute<E: Engine>(steps: Steps, engine: &E) -> FramewiseResult<BTreeMap<String, Vec<u8>>> {
    let (graph, inputs, outputs) = steps.into_parts();
    if let Some(label) = duplicate_label(outputs.iter().map(|(_, o)| o)) {
        return Err(FramewiseError::output(format!(
            "output label '{label}' is declared more than once"
        )));
    }
    let graph_json = document::to_vec(&graph)?;
    tracing::debug!(nodes = graph.len(), edges = graph.edges().len(), "serialized graph");

    let mut job = ContextGuard::open(engine).map_err(|e| {
        FramewiseError::registration(format!("failed to open engine context: {e:#}"))
    })?;
    let engine = job.engine();

    for (io_id, input) in inputs {
        let bytes = input.into_bytes()?;
        tracing::debug!(%io_id, len = bytes.len(), "add input");
        engine
            .add_input(job.ctx(), io_id, bytes)
            .map_err(|e| FramewiseError::registration(format!("input {io_id}: {e:#}")))?;
    }

    for (io_id, _) in &outputs {
        tracing::debug!(%io_id, "add output");
        engine
            .add_output(job.ctx(), *io_id)
            .map_err(|e| FramewiseError::registration(format!("output {io_id}: {e:#}")))?;
    }

    if let Err(e) = engine.execute(job.ctx(), &graph_json) {
        tracing::warn!(error = %format!("{e:#}"), "engine rejected graph");
        return Err(FramewiseError::execution(format!("{e:#}")));
    }

    let mut fetched = Vec::with_capacity(outputs.len());
    for (io_id, output) in &outputs {
        let bytes = engine
            .output(job.ctx(), *io_id)
            .map_err(|e| FramewiseError::fetch(format!("output {io_id}: {e:#}")))?;
        tracing::debug!(%io_id, len = bytes.len(), label = %output.label(), "fetched output");
        fetched.push((output, bytes));
    }

    let mut results = BTreeMap::new();
    for (output, bytes) in fetched {
        output.deliver(bytes, &mut results)?;
    }
    Ok(results)
}
