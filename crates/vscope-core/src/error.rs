//! Error types for vscope-core.
//!
//! The [`Error`] enum covers the two ways a caller can hand the pipeline a
//! frame it cannot process:
//! - frame dimensions that are zero or overflow the address space
//! - a pixel buffer whose length disagrees with the declared dimensions
//!
//! # Usage
//!
//! ```rust
//! use vscope_core::{Error, FrameSize};
//!
//! let err = FrameSize::new(0, 480).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating frames and buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame dimensions are unusable.
    ///
    /// Returned when width or height is zero, or `width * height`
    /// does not fit in `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A pixel buffer does not hold exactly one entry per frame pixel.
    #[error("{what} buffer holds {got} pixels, expected {expected}")]
    BufferSize {
        /// Which buffer was wrong (e.g. "input", "output")
        what: &'static str,
        /// Pixel count implied by the frame dimensions
        expected: usize,
        /// Actual buffer length
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(what: &'static str, expected: usize, got: usize) -> Self {
        Self::BufferSize {
            what,
            expected,
            got,
        }
    }

    /// Returns `true` if this is a buffer length mismatch.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(self, Self::BufferSize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 480, "width must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("0x480"));
        assert!(msg.contains("width must be > 0"));
        assert!(!err.is_buffer_error());
    }

    #[test]
    fn test_buffer_size_message() {
        let err = Error::buffer_size("output", 16, 15);
        let msg = err.to_string();
        assert!(msg.starts_with("output"));
        assert!(msg.contains("16"));
        assert!(msg.contains("15"));
        assert!(err.is_buffer_error());
    }
}
