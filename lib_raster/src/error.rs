use std::fmt;

use thiserror::Error;

use crate::export::encoder::EncodingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    #[error("Packed data length mismatch: expected {expected} bytes, got {actual}")]
    FormatMismatch { expected: usize, actual: usize },
    #[error("Coordinate {axis}={value} is out of bounds [0, {bound})")]
    OutOfBounds { axis: Axis, value: i32, bound: usize },
    #[error("Invalid color {color}: must be in [0, {max})")]
    InvalidColor { color: i32, max: i32 },
    #[error("The paste source is missing")]
    NullSource,
    #[error("Unsupported paste source: packed pixel access is not available")]
    UnsupportedSource,
    #[error("Failed to encode exported image")]
    ExportEncoding(#[from] EncodingError),
    #[error("The buffer has already been disposed")]
    UseAfterDispose,
    #[error("Palette table serialization failed")]
    PaletteSerialization(#[from] bincode::Error),
}
