//! Per-frame scope buffer.
//!
//! One [`ScopeCell`] per frame pixel. Data hits and grid marks are separate
//! variants, so a busy pixel can never be mistaken for grid.
//!
//! Hosts that still expect the one-byte-per-pixel layout (count, with 255
//! meaning grid) can get it from [`ScopeBuffer::to_marker_bytes`].

use vscope_core::FrameSize;

use crate::polar::checked_index;

/// Highest stored hit count.
pub const MAX_HITS: u8 = 254;

/// Byte value standing for a grid pixel in [`ScopeBuffer::to_marker_bytes`].
pub const GRID_MARKER: u8 = 255;

/// State of one scope pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeCell {
    /// No data and no grid.
    #[default]
    Empty,
    /// Number of input pixels plotted here, `1..=MAX_HITS`.
    Hits(u8),
    /// Part of the reference grid. Overrides any data.
    Grid,
}

impl ScopeCell {
    /// Hit count, 0 for empty and grid cells.
    #[inline]
    pub fn hits(self) -> u8 {
        match self {
            Self::Hits(n) => n,
            Self::Empty | Self::Grid => 0,
        }
    }

    /// Returns `true` for grid cells.
    #[inline]
    pub fn is_grid(self) -> bool {
        matches!(self, Self::Grid)
    }

    #[inline]
    fn bump(self) -> Self {
        match self {
            Self::Empty => Self::Hits(1),
            Self::Hits(n) => Self::Hits(n.saturating_add(1).min(MAX_HITS)),
            Self::Grid => Self::Grid,
        }
    }
}

/// Frame-sized grid of [`ScopeCell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeBuffer {
    size: FrameSize,
    cells: Vec<ScopeCell>,
}

impl ScopeBuffer {
    /// Allocates an empty buffer for a frame of `size`.
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            cells: vec![ScopeCell::Empty; size.len()],
        }
    }

    /// Resets every cell to [`ScopeCell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(ScopeCell::Empty);
    }

    /// Frame geometry this buffer covers.
    #[inline]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Records one hit at a raw offset.
    ///
    /// Returns `false` (and changes nothing) when the offset is outside the
    /// frame. Counts saturate at [`MAX_HITS`].
    pub fn hit(&mut self, offset: i64) -> bool {
        match checked_index(offset, self.size) {
            Some(i) => {
                self.cells[i] = self.cells[i].bump();
                true
            }
            None => false,
        }
    }

    /// Marks a raw offset as grid, replacing any count there.
    ///
    /// Returns `false` when the offset is outside the frame.
    pub fn mark_grid(&mut self, offset: i64) -> bool {
        match checked_index(offset, self.size) {
            Some(i) => {
                self.cells[i] = ScopeCell::Grid;
                true
            }
            None => false,
        }
    }

    /// Cell at a linear index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<ScopeCell> {
        self.cells.get(index).copied()
    }

    /// All cells in raster order.
    #[inline]
    pub fn cells(&self) -> &[ScopeCell] {
        &self.cells
    }

    /// Number of grid cells.
    pub fn grid_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_grid()).count()
    }

    /// Sum of all stored hit counts.
    pub fn total_hits(&self) -> u64 {
        self.cells.iter().map(|c| c.hits() as u64).sum()
    }

    /// Encodes the buffer one byte per pixel: the hit count, or
    /// [`GRID_MARKER`] for grid cells.
    pub fn to_marker_bytes(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|c| match c {
                ScopeCell::Grid => GRID_MARKER,
                other => other.hits(),
            })
            .collect()
    }
}
