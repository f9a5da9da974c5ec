use crate::foundation::ids::IoId;

/// Execution boundary to an external image-processing engine.
///
/// A context holds the buffers of one execution. The protocol driver calls, strictly in order:
/// `open_context`, `add_input` for every input, `add_output` for every output, `execute` once,
/// `output` for every output, and finally `close_context` on every exit path.
///
/// Methods take `&self` so one engine can serve independent executions, each with its own
/// context.
pub trait Engine {
    /// Engine-side state of one execution.
    type Context;

    /// Open a fresh execution context.
    fn open_context(&self) -> anyhow::Result<Self::Context>;

    /// Register input bytes under `io_id`.
    fn add_input(&self, ctx: &mut Self::Context, io_id: IoId, bytes: Vec<u8>)
    -> anyhow::Result<()>;

    /// Register `io_id` as an output sink.
    fn add_output(&self, ctx: &mut Self::Context, io_id: IoId) -> anyhow::Result<()>;

    /// Apply the serialized framewise document against the registered buffers.
    fn execute(&self, ctx: &mut Self::Context, graph_json: &[u8]) -> anyhow::Result<()>;

    /// Retrieve the bytes produced for `io_id`.
    fn output(&self, ctx: &mut Self::Context, io_id: IoId) -> anyhow::Result<Vec<u8>>;

    /// Release the context's engine-side resources. Called exactly once per opened context.
    /// Must not fail; engines log cleanup problems instead.
    fn close_context(&self, ctx: &mut Self::Context);
}

/// Open context that is closed when dropped.
pub(crate) struct ContextGuard<'e, E: Engine> {
    engine: &'e E,
    ctx: E::Context,
}

impl<'e, E: Engine> ContextGuard<'e, E> {
    pub(crate) fn open(engine: &'e E) -> anyhow::Result<Self> {
        let ctx = engine.open_context()?;
        Ok(Self { engine, ctx })
    }

    pub(crate) fn engine(&self) -> &'e E {
        self.engine
    }

    pub(crate) fn ctx(&mut self) -> &mut E::Context {
        &mut self.ctx
    }
}

impl<E: Engine> Drop for ContextGuard<'_, E> {
    fn drop(&mut self) {
        tracing::debug!("closing engine context");
        self.engine.close_context(&mut self.ctx);
    }
}
