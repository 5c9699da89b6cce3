//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the grayscale, sepia and enhancement filters. Coefficients
//! (0.299, 0.587, 0.114) are held in 16.16 fixed point so that a given RGB
//! triple always maps to the same luma regardless of float rounding.

// 16.16 fixed-point coefficients; they sum to 65536.
const FIXED_R: u32 = 19595;
const FIXED_G: u32 = 38470;
const FIXED_B: u32 = 7471;
const FIXED_HALF: u32 = 0x8000;

/// Calculate luma from u8 RGB values (0 to 255).
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * FIXED_R + g as u32 * FIXED_G + b as u32 * FIXED_B + FIXED_HALF;
    (sum >> 16) as u8
}
