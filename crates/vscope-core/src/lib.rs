//! # vscope-core
//!
//! Core types for vectorscope rendering.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`FrameSize`] - Validated frame geometry (width, height, pixel count)
//! - [`pixel`] - The packed 32-bit RGBA pixel layout used by every frame
//! - [`Error`] - Errors raised while validating frames and buffers
//!
//! ## Crate Structure
//!
//! ```text
//! vscope-core (this crate)
//!    ^
//!    |
//!    +-- vscope-ops (color conversion, polar mapping, scope rendering)
//!    +-- vscope-tests, vscope-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod size;

pub use error::{Error, Result};
pub use pixel::{pack_rgb_opaque, pack_rgba, unpack_rgb, unpack_rgba};
pub use size::FrameSize;

/// Prelude module for convenient imports.
///
/// ```
/// use vscope_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{pack_rgb_opaque, pack_rgba, unpack_rgb, unpack_rgba};
    pub use crate::size::FrameSize;
}
