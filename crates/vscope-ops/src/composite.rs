//! False-color rendering of a scope buffer.
//!
//! Grid cells take the grid color. Data cells scale the scope color by
//! `min(hits, steps) / steps` per channel (truncating), always opaque, so
//! empty cells come out opaque black.
//!
//! # Example
//!
//! ```rust
//! use vscope_ops::buffer::ScopeCell;
//! use vscope_ops::composite::shade;
//! use vscope_ops::style::{ScopeStyle, GRID_COLOR, SCOPE_COLOR};
//!
//! let style = ScopeStyle::default();
//! assert_eq!(shade(ScopeCell::Grid, &style), GRID_COLOR);
//! assert_eq!(shade(ScopeCell::Empty, &style), 0xFF000000);
//! assert_eq!(shade(ScopeCell::Hits(200), &style), SCOPE_COLOR);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use vscope_core::pixel::{pack_rgb_opaque, unpack_rgb};

use crate::OpsResult;
use crate::buffer::{ScopeBuffer, ScopeCell};
use crate::style::ScopeStyle;

/// Output color of a single cell.
#[inline]
pub fn shade(cell: ScopeCell, style: &ScopeStyle) -> u32 {
    if cell.is_grid() {
        return style.grid_color;
    }
    let steps = style.steps.max(1) as u32;
    let level = (cell.hits() as u32).min(steps);
    let scale = |c: u8| (level * c as u32 / steps) as u8;
    let [r, g, b] = unpack_rgb(style.scope_color);
    pack_rgb_opaque(scale(r), scale(g), scale(b))
}

/// Renders `scope` into `output`, overwriting every pixel.
///
/// `output` must hold one pixel per cell of `scope`.
pub fn render(scope: &ScopeBuffer, style: &ScopeStyle, output: &mut [u32]) -> OpsResult<()> {
    scope.size().ensure_len("output", output.len())?;

    #[cfg(feature = "parallel")]
    output
        .par_iter_mut()
        .zip(scope.cells().par_iter())
        .for_each(|(dst, &cell)| *dst = shade(cell, style));

    #[cfg(not(feature = "parallel"))]
    for (dst, &cell) in output.iter_mut().zip(scope.cells()) {
        *dst = shade(cell, style);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{GRID_COLOR, SCOPE_COLOR};
    use vscope_core::FrameSize;
    use vscope_core::pixel::unpack_rgba;

    #[test]
    fn test_grid_color() {
        let style = ScopeStyle::default();
        assert_eq!(shade(ScopeCell::Grid, &style), GRID_COLOR);
        assert_eq!(unpack_rgba(GRID_COLOR), [142, 142, 142, 255]);
    }

    #[test]
    fn test_empty_is_opaque_black() {
        let style = ScopeStyle::default();
        assert_eq!(shade(ScopeCell::Empty, &style), 0xFF000000);
        assert_eq!(shade(ScopeCell::Hits(0), &style), 0xFF000000);
    }

    #[test]
    fn test_full_intensity_at_steps() {
        let style = ScopeStyle::default();
        assert_eq!(unpack_rgba(SCOPE_COLOR), [127, 145, 255, 255]);
        assert_eq!(shade(ScopeCell::Hits(10), &style), SCOPE_COLOR);
        assert_eq!(shade(ScopeCell::Hits(11), &style), SCOPE_COLOR);
        assert_eq!(shade(ScopeCell::Hits(254), &style), SCOPE_COLOR);
    }

    #[test]
    fn test_intermediate_levels_truncate() {
        let style = ScopeStyle::default();
        // 5/10 of (127, 145, 255) truncated.
        assert_eq!(unpack_rgba(shade(ScopeCell::Hits(5), &style)), [63, 72, 127, 255]);
        assert_eq!(unpack_rgba(shade(ScopeCell::Hits(1), &style)), [12, 14, 25, 255]);
    }

    #[test]
    fn test_custom_style() {
        let style = ScopeStyle {
            scope_color: 0x00FFFFFF,
            steps: 2,
            ..ScopeStyle::default()
        };
        assert_eq!(shade(ScopeCell::Hits(1), &style), 0xFF7F7F7F);
        assert_eq!(shade(ScopeCell::Hits(2), &style), 0xFFFFFFFF);
    }

    #[test]
    fn test_render_overwrites_output() {
        let size = FrameSize::new(2, 2).unwrap();
        let mut buf = ScopeBuffer::new(size);
        buf.hit(0);
        buf.mark_grid(3);
        let mut out = vec![0xDEADBEEF; 4];
        render(&buf, &ScopeStyle::default(), &mut out).unwrap();
        assert_eq!(out, vec![0xFF190E0C, 0xFF000000, 0xFF000000, GRID_COLOR]);
    }

    #[test]
    fn test_render_length_mismatch() {
        let buf = ScopeBuffer::new(FrameSize::new(2, 2).unwrap());
        let mut out = vec![0; 3];
        assert!(render(&buf, &ScopeStyle::default(), &mut out).is_err());
    }
}
