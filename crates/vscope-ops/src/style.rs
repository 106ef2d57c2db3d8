//! Scope appearance and grid geometry.
//!
//! [`ScopeStyle::default()`] reproduces the classic vectorscope look: a gray
//! grid of five rings and six spokes, data drawn in a peach tone that reaches
//! full intensity after ten hits.
//!
//! With the `serde` feature both types deserialize with per-field defaults,
//! so a host config only needs to name what it changes:
//!
//! ```rust,ignore
//! let style: ScopeStyle = serde_json::from_str(r#"{ "steps": 4 }"#)?;
//! ```

use std::f64::consts::PI;

use crate::buffer::MAX_HITS;
use crate::{OpsError, OpsResult};

/// Packed color of grid pixels (opaque gray 142,142,142).
pub const GRID_COLOR: u32 = 0xFF8E8E8E;

/// Packed full-intensity color of plotted data (R 127, G 145, B 255).
pub const SCOPE_COLOR: u32 = 0xFFFF917F;

/// Hit count at which data reaches full intensity.
pub const SCOPE_STEPS: u8 = 10;

/// Largest accepted outer radius of a ring or spoke.
pub const MAX_GRID_RADIUS: f64 = 64.0;

/// Geometry of the reference grid.
///
/// Rings are drawn at radii `ring_step, 2 * ring_step, ..`; spokes are evenly
/// spaced around the full turn starting at angle 0 and run from
/// `spoke_start` to `spoke_start + spoke_length`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    /// Number of concentric rings.
    pub rings: u32,
    /// Radius increment between rings.
    pub ring_step: f64,
    /// Angular samples per ring.
    pub ring_samples: u32,
    /// Number of radial spokes.
    pub spokes: u32,
    /// Inner radius of each spoke.
    pub spoke_start: f64,
    /// Radial length of each spoke.
    pub spoke_length: f64,
    /// Radial samples per spoke.
    pub spoke_samples: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rings: 5,
            ring_step: 0.2,
            ring_samples: 2000,
            spokes: 6,
            spoke_start: 0.3,
            spoke_length: 0.7,
            spoke_samples: 1000,
        }
    }
}

impl GridSpec {
    /// Radius of ring `j` (1-based).
    #[inline]
    pub fn ring_radius(&self, j: u32) -> f64 {
        j as f64 * self.ring_step
    }

    /// Angle of spoke `j` (0-based) in radians.
    #[inline]
    pub fn spoke_angle(&self, j: u32) -> f64 {
        j as f64 * PI * 2.0 / self.spokes as f64
    }

    /// Total number of samples traced per frame.
    pub fn sample_count(&self) -> u64 {
        let rings = self.rings as u64 * self.ring_samples as u64;
        let spokes = self.spokes as u64 * self.spoke_samples as u64;
        rings + spokes
    }

    /// Checks that all radii are finite, non-negative and within
    /// [`MAX_GRID_RADIUS`].
    pub fn validate(&self) -> OpsResult<()> {
        for (name, v) in [
            ("ring_step", self.ring_step),
            ("spoke_start", self.spoke_start),
            ("spoke_length", self.spoke_length),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(OpsError::InvalidParameter(format!(
                    "grid {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        for (name, outer) in [
            ("ring", self.ring_radius(self.rings)),
            ("spoke", self.spoke_start + self.spoke_length),
        ] {
            if outer > MAX_GRID_RADIUS {
                return Err(OpsError::InvalidParameter(format!(
                    "outer {name} radius {outer} exceeds {MAX_GRID_RADIUS}"
                )));
            }
        }
        Ok(())
    }
}

/// Colors, intensity scale and grid of a rendered scope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScopeStyle {
    /// Packed RGBA written for grid pixels.
    pub grid_color: u32,
    /// Packed RGBA of data at full intensity. Alpha is ignored; data is opaque.
    pub scope_color: u32,
    /// Hit count that maps to full intensity. Must be in `1..=254`.
    pub steps: u8,
    /// Reference grid geometry.
    pub grid: GridSpec,
}

impl Default for ScopeStyle {
    fn default() -> Self {
        Self {
            grid_color: GRID_COLOR,
            scope_color: SCOPE_COLOR,
            steps: SCOPE_STEPS,
            grid: GridSpec::default(),
        }
    }
}

impl ScopeStyle {
    /// Checks the intensity scale and grid geometry.
    pub fn validate(&self) -> OpsResult<()> {
        if self.steps == 0 || self.steps > MAX_HITS {
            return Err(OpsError::InvalidParameter(format!(
                "steps must be in 1..={MAX_HITS}, got {}",
                self.steps
            )));
        }
        self.grid.validate()
    }
}
