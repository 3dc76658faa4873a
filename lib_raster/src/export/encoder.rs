use log::{debug, error, info};
use png::{BitDepth, ColorType};
use thiserror::Error;

use crate::constants::TRUE_COLOR_CHANNELS;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Encodes 8-bit RGB pixels as a PNG.
///
/// # Parameters
/// - `rgb`: rows of `width * 3` bytes, top row first.
/// - `flip_y`: write the rows bottom-up.
///
/// # Errors
/// - Returns `EncodingError::InvalidPixelDataLength` if `rgb` doesn't cover `width * height` pixels
/// - Returns `EncodingError::Png` if the PNG writer fails
pub fn encode(width: u32, height: u32, rgb: &[u8], flip_y: bool) -> Result<Vec<u8>, EncodingError> {
    info!("Starting PNG encoding");

    let row_len = width as usize * TRUE_COLOR_CHANNELS;
    let expected = row_len * height as usize;
    if rgb.len() != expected {
        error!(
            "RGB data length {} does not match {}x{}",
            rgb.len(),
            width,
            height
        );
        return Err(EncodingError::InvalidPixelDataLength {
            expected,
            actual: rgb.len(),
        });
    }

    let mut encoded_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut encoded_data, width, height);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        debug!("Header written: {}x{} RGB8", width, height);

        if flip_y && row_len > 0 {
            let flipped: Vec<u8> = rgb.chunks_exact(row_len).rev().flatten().copied().collect();
            writer.write_image_data(&flipped)?;
        } else {
            writer.write_image_data(rgb)?;
        }
        writer.finish()?;
        debug!("Image data written (flip_y={})", flip_y);
    }

    info!("PNG encoding completed: {} bytes", encoded_data.len());
    Ok(encoded_data)
}
