/// Convenience result type used across blendkit.
pub type BlendkitResult<T> = Result<T, BlendkitError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlendkitError {
    /// A pixel buffer whose length does not match `width * height * 4`.
    #[error("invalid image buffer: expected {expected} bytes for {width}x{height} rgba8, got {actual}")]
    InvalidImageBuffer {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Required buffer length in bytes.
        expected: usize,
        /// Actual buffer length in bytes.
        actual: usize,
    },

    /// An image with a zero width or height.
    #[error("invalid image dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
    },

    /// Invalid user-provided data outside of image buffers (meshes, matrices).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or parsing configuration files.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendkitError {
    /// Build a [`BlendkitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendkitError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
