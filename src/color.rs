//! Random hex color generation.
//!
//! Browser equivalent:
//! `'#' + Math.floor(Math.random() * 16777215).toString(16)`
//!
//! The original expression did not zero-pad, so roughly one draw in sixteen
//! produced a string shorter than six digits and the color silently failed
//! to apply. Here the value is always formatted to exactly six digits.

use rand::Rng;

use crate::patterns::HEX_COLOR;

/// Number of representable 24-bit colors.
const COLOR_SPACE: u32 = 0x0100_0000;

/// Generate a uniformly random `#rrggbb` color string.
///
/// Always six lowercase hex digits, zero-padded.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value = rng.random_range(0..COLOR_SPACE);
    format!("#{value:06x}")
}

/// Check whether a string is a well-formed 6-digit hex color.
#[inline]
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}
