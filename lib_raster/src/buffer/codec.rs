//! Conversion between palette indices and the byte stored in the index channel.
//!
//! Both directions use `f32` arithmetic followed by a truncating cast. Only the
//! sixteen bytes produced by [`encode_index`] are guaranteed to decode back to
//! the index they came from.

use crate::constants::{MAX_COLORS, MAX_INDEX};
use crate::error::RasterError;

/// Validates a palette index, failing with [`RasterError::InvalidColor`] when
/// it falls outside `[0, MAX_COLORS)`.
pub fn check_index(color: i32) -> Result<u8, RasterError> {
    if !(0..MAX_COLORS).contains(&color) {
        return Err(RasterError::InvalidColor {
            color,
            max: MAX_COLORS,
        });
    }
    Ok(color as u8)
}

/// Scales a palette index to the index-channel byte.
///
/// # Errors
/// - Returns `RasterError::InvalidColor` if `color` is not a valid palette index
pub fn encode_index(color: i32) -> Result<u8, RasterError> {
    let index = check_index(color)?;
    Ok((index as f32 / MAX_INDEX * 255.0) as u8)
}

/// Scales an index-channel byte back to a palette index.
pub fn decode_index(byte: u8) -> u8 {
    (byte as f32 / 255.0 * MAX_INDEX) as u8
}
