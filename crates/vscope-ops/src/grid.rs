//! Reference grid overlay.
//!
//! Traces rings and spokes through the same polar mapping as the data, so
//! the grid lines up with plotted hues on any frame size. Runs after
//! accumulation; grid cells replace data.

use std::f64::consts::PI;

use crate::buffer::ScopeBuffer;
use crate::polar::{Polar, pixel_offset};
use crate::style::GridSpec;

/// Stamps the grid described by `spec` into `scope`.
///
/// Returns the number of samples that landed inside the frame.
pub fn draw_grid(scope: &mut ScopeBuffer, spec: &GridSpec) -> usize {
    let size = scope.size();
    let mut stamped = 0;

    for j in 1..=spec.rings {
        let r = spec.ring_radius(j);
        for i in 0..spec.ring_samples {
            let phi = i as f64 / spec.ring_samples as f64 * 2.0 * PI;
            if scope.mark_grid(pixel_offset(Polar::new(r, phi), size)) {
                stamped += 1;
            }
        }
    }

    for j in 0..spec.spokes {
        let phi = spec.spoke_angle(j);
        for i in 0..spec.spoke_samples {
            let r = i as f64 / spec.spoke_samples as f64 * spec.spoke_length + spec.spoke_start;
            if scope.mark_grid(pixel_offset(Polar::new(r, phi), size)) {
                stamped += 1;
            }
        }
    }

    stamped
}
