//! Operation nodes and their engine parameter shapes.

/// The closed node type and its wire encoding.
pub mod node;
/// Parameter types shared by several operations.
pub mod params;
/// Encoder presets.
pub mod preset;
