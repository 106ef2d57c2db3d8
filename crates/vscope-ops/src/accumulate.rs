//! Plotting input pixels into the scope buffer.
//!
//! Each pixel's hue becomes the plot angle and its saturation the radius:
//! `phi = hue / 180 * PI`, `r = sat / 100`. Pixels whose position falls
//! outside the frame are dropped silently.

use std::f64::consts::PI;

use vscope_core::pixel::unpack_rgb;

use crate::OpsResult;
use crate::buffer::ScopeBuffer;
use crate::hsv::rgb_to_hsv;
use crate::polar::{Polar, pixel_offset};

/// Counts gathered while plotting one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccumulateStats {
    /// Pixels that landed inside the frame.
    pub plotted: usize,
    /// Pixels whose plot position was out of bounds.
    pub dropped: usize,
}

/// Polar plot position of a packed pixel.
///
/// # Example
///
/// ```
/// use vscope_core::pixel::pack_rgb_opaque;
/// use vscope_ops::accumulate::plot_position;
///
/// let pos = plot_position(pack_rgb_opaque(0, 255, 0));
/// assert_eq!(pos.r, 1.0);
/// assert!((pos.phi - 2.0 * std::f64::consts::PI / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn plot_position(px: u32) -> Polar {
    let hsv = rgb_to_hsv(unpack_rgb(px));
    Polar::new(hsv.sat / 100.0, hsv.hue / 180.0 * PI)
}

/// Plots every pixel of `input`, in raster order, into `scope`.
///
/// `input` must hold one pixel per cell of `scope`.
pub fn accumulate(input: &[u32], scope: &mut ScopeBuffer) -> OpsResult<AccumulateStats> {
    let size = scope.size();
    size.ensure_len("input", input.len())?;

    let mut stats = AccumulateStats::default();
    for &px in input {
        if scope.hit(pixel_offset(plot_position(px), size)) {
            stats.plotted += 1;
        } else {
            stats.dropped += 1;
        }
    }
    Ok(stats)
}
