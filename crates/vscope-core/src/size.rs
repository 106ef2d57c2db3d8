//! Frame geometry.
//!
//! [`FrameSize`] is created once per scope instance and never changes. All
//! buffers handed to the pipeline are checked against it.

use crate::{Error, Result};

/// Validated width and height of a frame.
///
/// # Invariants
///
/// - `width > 0` and `height > 0`
/// - `width * height` fits in `usize`
///
/// # Example
///
/// ```rust
/// use vscope_core::FrameSize;
///
/// let size = FrameSize::new(640, 480).unwrap();
/// assert_eq!(size.len(), 307_200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    /// Creates a frame size, rejecting zero and overflowing dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the frame.
    #[inline]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false`; a validated frame has at least one pixel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checks that a buffer holds exactly one entry per pixel.
    ///
    /// `what` names the buffer in the error message.
    pub fn ensure_len(&self, what: &'static str, len: usize) -> Result<()> {
        if len != self.len() {
            return Err(Error::buffer_size(what, self.len(), len));
        }
        Ok(())
    }
}
