/// Convenience result type used across framewise.
pub type FramewiseResult<T> = Result<T, FramewiseError>;

/// Top-level error taxonomy surfaced by graph building and execution.
///
/// Execution stops at the first failure; the variant names the protocol step that failed.
#[derive(thiserror::Error, Debug)]
pub enum FramewiseError {
    /// An input source could not produce its bytes.
    #[error("input error: {0}")]
    Input(String),

    /// The engine rejected a context, input, or output registration.
    #[error("registration error: {0}")]
    Registration(String),

    /// The engine reported a failure while applying the graph.
    #[error("execution error: {0}")]
    Execution(String),

    /// Output bytes could not be retrieved after execution.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Fetched output bytes could not be delivered to their sink.
    #[error("output error: {0}")]
    Output(String),

    /// Structural problems reported by [`crate::Steps::validate`].
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing the graph document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramewiseError {
    /// Build a [`FramewiseError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`FramewiseError::Registration`] value.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Build a [`FramewiseError::Execution`] value.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Build a [`FramewiseError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`FramewiseError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Build a [`FramewiseError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramewiseError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FramewiseError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
