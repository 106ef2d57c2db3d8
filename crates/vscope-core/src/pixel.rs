//! Packed 32-bit RGBA pixels.
//!
//! Every frame is a slice of `u32`, one per pixel, with the channels packed
//! low byte first:
//!
//! ```text
//! bits  31..24  23..16  15..8   7..0
//!        A       B       G       R
//! ```
//!
//! On a little-endian host this is the same memory order as an
//! `RGBA8888` byte buffer (byte 0 = red).
//!
//! # Example
//!
//! ```
//! use vscope_core::pixel::{pack_rgba, unpack_rgba};
//!
//! let px = pack_rgba(0x7F, 0x91, 0xFF, 0xFF);
//! assert_eq!(px, 0xFFFF917F);
//! assert_eq!(unpack_rgba(px), [0x7F, 0x91, 0xFF, 0xFF]);
//! ```

/// Bit offset of the red channel.
pub const SHIFT_R: u32 = 0;
/// Bit offset of the green channel.
pub const SHIFT_G: u32 = 8;
/// Bit offset of the blue channel.
pub const SHIFT_B: u32 = 16;
/// Bit offset of the alpha channel.
pub const SHIFT_A: u32 = 24;

/// Fully opaque alpha, already shifted into place.
pub const OPAQUE: u32 = 0xFF << SHIFT_A;

/// Extracts the red, green and blue channels of a packed pixel.
#[inline]
pub fn unpack_rgb(px: u32) -> [u8; 3] {
    [
        (px >> SHIFT_R) as u8,
        (px >> SHIFT_G) as u8,
        (px >> SHIFT_B) as u8,
    ]
}

/// Extracts all four channels of a packed pixel as `[r, g, b, a]`.
#[inline]
pub fn unpack_rgba(px: u32) -> [u8; 4] {
    let [r, g, b] = unpack_rgb(px);
    [r, g, b, (px >> SHIFT_A) as u8]
}

/// Packs four channels into a single pixel.
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << SHIFT_R | (g as u32) << SHIFT_G | (b as u32) << SHIFT_B | (a as u32) << SHIFT_A
}

/// Packs three channels into an opaque pixel.
#[inline]
pub const fn pack_rgb_opaque(r: u8, g: u8, b: u8) -> u32 {
    pack_rgba(r, g, b, 0xFF)
}
