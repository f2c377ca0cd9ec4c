/// Convenience result type used across accrue.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// Top-level error taxonomy used by filter APIs.
///
/// Numeric edge cases inside the passes are resolved locally by clamping and never surface here.
/// Errors only describe misuse at the API boundary: mismatched buffer shapes, bad configuration,
/// or failing IO around the filter.
#[derive(thiserror::Error, Debug)]
pub enum AccrueError {
    /// Invalid user-provided configuration or buffer shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or writing files.
    #[error("io error: {0}")]
    Io(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while decoding or encoding images.
    #[error("image error: {0}")]
    Image(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AccrueError {
    /// Build a [`AccrueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AccrueError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`AccrueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`AccrueError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
