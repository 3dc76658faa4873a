/// Number of palette entries a pixel can reference.
pub const MAX_COLORS: i32 = 16;

/// Highest valid palette index, also the divisor of the index scaling.
pub const MAX_INDEX: f32 = 15.0;

/// Bytes per pixel in the packed layout: index, unused, sentinel.
pub const BYTES_PER_PIXEL: usize = 3;

pub const INDEX_CHANNEL: usize = 0;
pub const UNUSED_CHANNEL: usize = 1;
pub const SENTINEL_CHANNEL: usize = 2;

/// Marks a pixel as image-owned for the renderer's shader.
pub const SENTINEL: u8 = 0xFF;

/// Channels per pixel of the exported true-color buffer (RGB, no alpha).
pub const TRUE_COLOR_CHANNELS: usize = 3;
