//! Fluent pipeline builder and its input/output descriptors.

/// The [`Steps`](builder::Steps) builder.
pub mod builder;
/// Input sources and output sinks.
pub mod io;
