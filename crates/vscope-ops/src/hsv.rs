//! RGB to HSV conversion for 8-bit channels.
//!
//! Hue is in degrees `[0, 360)`, saturation and value are percentages
//! `[0, 100]`.
//!
//! # Extremum selection
//!
//! The maximum and minimum are picked by strict pairwise comparison: a
//! channel only counts as the maximum when it is greater than both others,
//! and likewise for the minimum. When no channel is strictly the largest
//! (or smallest) that extremum is taken as 0. This is not the textbook
//! formula, and scopes built on the classic plugin plot exactly these
//! positions, so it is kept bit for bit:
//!
//! ```
//! use vscope_ops::hsv::rgb_to_hsv;
//!
//! // White has no unique max or min: both fall back to 0.
//! assert_eq!(rgb_to_hsv([255, 255, 255]).sat, 0.0);
//!
//! // Green and blue tie for the minimum, so min = 0 and saturation is full.
//! assert_eq!(rgb_to_hsv([200, 100, 100]).sat, 100.0);
//! ```

/// A color in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent, `[0, 100]`.
    pub sat: f64,
    /// Value in percent, `[0, 100]`.
    pub val: f64,
}

/// Largest channel if it is strictly greater than both others, else 0.
#[inline]
fn strict_max(r: f64, g: f64, b: f64) -> f64 {
    if r > g && r > b {
        r
    } else if g > r && g > b {
        g
    } else if b > r && b > g {
        b
    } else {
        0.0
    }
}

/// Smallest channel if it is strictly less than both others, else 0.
#[inline]
fn strict_min(r: f64, g: f64, b: f64) -> f64 {
    if r < g && r < b {
        r
    } else if g < r && g < b {
        g
    } else if b < r && b < g {
        b
    } else {
        0.0
    }
}

/// Converts an `[r, g, b]` triple to [`Hsv`].
///
/// # Example
///
/// ```
/// use vscope_ops::hsv::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv([0, 0, 255]);
/// assert_eq!(hsv.hue, 240.0);
/// assert_eq!(hsv.sat, 100.0);
/// ```
pub fn rgb_to_hsv(rgb: [u8; 3]) -> Hsv {
    let red = rgb[0] as f64;
    let green = rgb[1] as f64;
    let blue = rgb[2] as f64;

    let max = strict_max(red, green, blue);
    let min = strict_min(red, green, blue);
    let diff = max - min;

    // A fallback max of 0 matches no channel; the hue is then left at 0.
    let mut hue = if diff == 0.0 {
        0.0
    } else if max == red {
        60.0 * ((green - blue) / diff)
    } else if max == green {
        60.0 * (2.0 + (blue - red) / diff)
    } else if max == blue {
        60.0 * (4.0 + (red - green) / diff)
    } else {
        0.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let sat = if max == 0.0 { 0.0 } else { 100.0 * diff / max };

    Hsv {
        hue,
        sat,
        val: 100.0 * max / 255.0,
    }
}
