//! The vectorscope instance.
//!
//! A [`Vectorscope`] is built once per stream with the frame dimensions and
//! then fed frames through [`Vectorscope::process`]. Instances hold no
//! per-frame state: every call allocates a fresh scope buffer, so the same
//! input always yields the same output.
//!
//! # Example
//!
//! ```rust
//! use vscope_ops::Vectorscope;
//!
//! let scope = Vectorscope::new(64, 48).unwrap();
//! let input = vec![0xFF0000FFu32; 64 * 48]; // opaque red
//! let mut output = vec![0u32; 64 * 48];
//! scope.process(&input, &mut output);
//! ```

use tracing::{debug, trace};
use vscope_core::FrameSize;

use crate::OpsResult;
use crate::accumulate::accumulate;
use crate::buffer::ScopeBuffer;
use crate::composite::render;
use crate::grid::draw_grid;
use crate::style::ScopeStyle;

/// Per-frame counts returned by [`Vectorscope::try_process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Input pixels plotted inside the frame.
    pub plotted: usize,
    /// Input pixels whose plot position fell outside the frame.
    pub dropped: usize,
    /// Grid samples that landed inside the frame.
    pub grid_samples: usize,
}

/// A vectorscope for frames of fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Vectorscope {
    size: FrameSize,
    style: ScopeStyle,
}

impl Vectorscope {
    /// Creates a scope with the default style.
    pub fn new(width: u32, height: u32) -> OpsResult<Self> {
        Self::with_style(width, height, ScopeStyle::default())
    }

    /// Creates a scope with a custom style.
    pub fn with_style(width: u32, height: u32, style: ScopeStyle) -> OpsResult<Self> {
        let size = FrameSize::new(width, height)?;
        style.validate()?;
        debug!(width, height, steps = style.steps, "vectorscope created");
        Ok(Self { size, style })
    }

    /// Frame geometry.
    #[inline]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Active style.
    #[inline]
    pub fn style(&self) -> &ScopeStyle {
        &self.style
    }

    /// Builds the scope buffer for `input`: plotted data with the grid on top.
    pub fn scope(&self, input: &[u32]) -> OpsResult<ScopeBuffer> {
        self.build(input).map(|(buf, _)| buf)
    }

    /// Renders the vectorscope of `input` into `output`.
    ///
    /// Both buffers must hold `width * height` packed RGBA pixels; `output`
    /// is fully overwritten.
    pub fn try_process(&self, input: &[u32], output: &mut [u32]) -> OpsResult<FrameStats> {
        self.size.ensure_len("output", output.len())?;
        let (buf, stats) = self.build(input)?;
        render(&buf, &self.style, output)?;
        trace!(
            plotted = stats.plotted,
            dropped = stats.dropped,
            grid_samples = stats.grid_samples,
            "frame rendered"
        );
        Ok(stats)
    }

    /// Renders the vectorscope of `input` into `output`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer does not hold exactly `width * height` pixels.
    /// Use [`try_process`](Self::try_process) to get an error instead.
    pub fn process(&self, input: &[u32], output: &mut [u32]) {
        if let Err(e) = self.try_process(input, output) {
            panic!("vectorscope frame rejected: {e}");
        }
    }

    fn build(&self, input: &[u32]) -> OpsResult<(ScopeBuffer, FrameStats)> {
        let mut buf = ScopeBuffer::new(self.size);
        let acc = accumulate(input, &mut buf)?;
        let grid_samples = draw_grid(&mut buf, &self.style.grid);
        Ok((
            buf,
            FrameStats {
                plotted: acc.plotted,
                dropped: acc.dropped,
                grid_samples,
            },
        ))
    }
}
