//! Execution protocol between a finished pipeline and an external engine.

/// The engine boundary trait.
pub mod engine;
/// The protocol driver.
pub mod job;
/// `imageflow_tool` process engine.
pub mod tool;

pub use job::execute;
