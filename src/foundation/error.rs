/// Convenience result type used across pixelator.
pub type PixelatorResult<T> = Result<T, PixelatorError>;

/// Top-level error taxonomy used by library APIs.
///
/// Stream exhaustion is not an error: frame sources report it as `Ok(None)`.
#[derive(thiserror::Error, Debug)]
pub enum PixelatorError {
    /// Invalid user-provided configuration. Fatal before the main loop starts.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while probing or decoding the video source.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors raised by a presentation surface (window creation, texture upload, ...).
    #[error("present error: {0}")]
    Present(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelatorError {
    /// Build a [`PixelatorError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PixelatorError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PixelatorError::Present`] value.
    pub fn present(msg: impl Into<String>) -> Self {
        Self::Present(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
