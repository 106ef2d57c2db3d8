//! Polar plot coordinates and their mapping into frame pixels.
//!
//! A scope point is given as `(r, phi)` with `r` nominally in `[0, 1]`. It is
//! converted to rectangular `[-1, 1]` space and then into pixel space,
//! centered on the frame:
//!
//! ```text
//! px = W/2 + x * H/2
//! py = H/2 + y * H/2
//! offset = (H - floor(py)) * W + floor(px)
//! ```
//!
//! Both axes scale by the frame *height*, so the plot stays circular on
//! non-square frames. `W/2` and `H/2` are integer halves.
//!
//! The raw offset is not clamped and may land outside the frame (negative,
//! or `>= W*H`); use [`checked_index`] before touching a buffer.

use vscope_core::FrameSize;

/// A point in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Radius, nominally `[0, 1]`.
    pub r: f64,
    /// Angle in radians.
    pub phi: f64,
}

/// A point in normalized rectangular form, nominally `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Polar {
    /// Creates a polar point.
    #[inline]
    pub const fn new(r: f64, phi: f64) -> Self {
        Self { r, phi }
    }

    /// Converts to rectangular coordinates.
    #[inline]
    pub fn to_rect(self) -> Rect2 {
        let (sin, cos) = self.phi.sin_cos();
        Rect2 {
            x: self.r * cos,
            y: self.r * sin,
        }
    }
}

/// Maps a polar point to a linear pixel offset in a frame of `size`.
///
/// The result may be out of range; see [`checked_index`]. Points so far out
/// that the offset does not fit in `i64` map to `i64::MIN`.
///
/// # Example
///
/// ```
/// use vscope_core::FrameSize;
/// use vscope_ops::polar::{Polar, pixel_offset};
///
/// let size = FrameSize::new(8, 8).unwrap();
/// // The centre of the plot.
/// assert_eq!(pixel_offset(Polar::new(0.0, 0.0), size), 4 * 8 + 4);
/// ```
pub fn pixel_offset(pol: Polar, size: FrameSize) -> i64 {
    let width = size.width() as i64;
    let height = size.height() as i64;
    let scale = size.height() as f64;

    let rect = pol.to_rect();
    let px = (width / 2) as f64 + rect.x * scale / 2.0;
    let py = (height / 2) as f64 + rect.y * scale / 2.0;

    height
        .checked_sub(py.floor() as i64)
        .and_then(|row| row.checked_mul(width))
        .and_then(|start| start.checked_add(px.floor() as i64))
        .unwrap_or(i64::MIN)
}

/// Converts a raw offset to a buffer index if it lies inside the frame.
#[inline]
pub fn checked_index(offset: i64, size: FrameSize) -> Option<usize> {
    usize::try_from(offset).ok().filter(|&i| i < size.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn size(w: u32, h: u32) -> FrameSize {
        FrameSize::new(w, h).unwrap()
    }

    #[test]
    fn test_to_rect() {
        let rect = Polar::new(1.0, PI / 2.0).to_rect();
        assert_abs_diff_eq!(rect.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.y, 1.0, epsilon = 1e-12);

        let rect = Polar::new(0.5, PI).to_rect();
        assert_abs_diff_eq!(rect.x, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centre() {
        assert_eq!(pixel_offset(Polar::new(0.0, 1.234), size(10, 6)), 3 * 10 + 5);
    }

    #[test]
    fn test_top_of_circle_is_first_row() {
        // y = +1 puts py at H, i.e. row 0.
        let off = pixel_offset(Polar::new(1.0, PI / 2.0), size(8, 8));
        assert_eq!(off, 4);
    }

    #[test]
    fn test_bottom_of_circle_out_of_bounds() {
        let s = size(8, 8);
        let off = pixel_offset(Polar::new(1.0, 3.0 * PI / 2.0), s);
        assert!(off >= s.len() as i64);
        assert_eq!(checked_index(off, s), None);
    }

    #[test]
    fn test_height_scales_both_axes() {
        // 16x4 frame: radius 1 at phi = 0 reaches W/2 + H/2 = 10, not the right edge.
        let off = pixel_offset(Polar::new(1.0, 0.0), size(16, 4));
        assert_eq!(off, (4 - 2) * 16 + 10);
    }

    #[test]
    fn test_negative_offset_rejected() {
        // Past the rim above the plot, py exceeds H and the row term goes negative.
        let s = size(8, 8);
        let off = pixel_offset(Polar::new(2.0, PI / 2.0), s);
        assert_eq!(off, -28);
        assert_eq!(checked_index(off, s), None);
        assert_eq!(checked_index(0, s), Some(0));
        assert_eq!(checked_index(s.len() as i64 - 1, s), Some(63));
        assert_eq!(checked_index(s.len() as i64, s), None);
    }

    #[test]
    fn test_huge_radius_rejected() {
        let s = size(8, 8);
        for phi in [0.0, PI / 2.0, PI, 3.0 * PI / 2.0, 1.0] {
            let off = pixel_offset(Polar::new(1e300, phi), s);
            assert_eq!(checked_index(off, s), None, "phi {phi}");
        }
        let off = pixel_offset(Polar::new(f64::INFINITY, 0.0), s);
        assert_eq!(checked_index(off, s), None);
    }

    #[test]
    fn test_idempotent() {
        let s = size(37, 23);
        for i in 0..100 {
            let pol = Polar::new(i as f64 / 100.0, i as f64 * 0.37);
            assert_eq!(pixel_offset(pol, s), pixel_offset(pol, s));
        }
    }
}
