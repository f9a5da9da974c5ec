//! Graph model and its exchange-format serialization.

/// Framewise document serialization.
pub mod document;
/// Nodes, edges, and the append-only graph.
pub mod model;
/// Opt-in structural validation.
pub mod validate;
