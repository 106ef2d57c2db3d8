//! # vscope-ops
//!
//! Vectorscope rendering for packed RGBA video frames.
//!
//! A vectorscope plots each pixel's chrominance on a polar grid: hue is the
//! angle, saturation the distance from the centre. This crate turns one
//! input frame into one same-sized scope frame.
//!
//! # Pipeline
//!
//! ```text
//! input frame --[hsv]--> (hue, sat) --[polar]--> offset --[accumulate]--> ScopeBuffer
//!                                                                             |
//!                                                               [grid] stamps rings + spokes
//!                                                                             |
//! output frame <--------------------------[composite]-------------------------+
//! ```
//!
//! # Modules
//!
//! - [`hsv`] - RGB to hue/saturation/value
//! - [`polar`] - Polar coordinates to frame offsets
//! - [`buffer`] - Per-frame hit counters and grid marks
//! - [`accumulate`] - Plotting input pixels
//! - [`grid`] - Reference grid overlay
//! - [`composite`] - False-color output
//! - [`style`] - Colors and grid geometry
//! - [`scope`] - The [`Vectorscope`] instance tying it together
//!
//! # Example
//!
//! ```rust
//! use vscope_ops::Vectorscope;
//!
//! let scope = Vectorscope::new(320, 240)?;
//! let input = vec![0xFF336699u32; 320 * 240];
//! let mut output = vec![0u32; 320 * 240];
//! scope.process(&input, &mut output);
//! # Ok::<(), vscope_ops::OpsError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - render the output pass with rayon
//! - `serde` - (de)serialize [`ScopeStyle`] and [`GridSpec`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accumulate;
pub mod buffer;
pub mod composite;
mod error;
pub mod grid;
pub mod hsv;
pub mod polar;
pub mod scope;
pub mod style;

pub use buffer::{ScopeBuffer, ScopeCell};
pub use error::{OpsError, OpsResult};
pub use scope::{FrameStats, Vectorscope};
pub use style::{GridSpec, ScopeStyle};
