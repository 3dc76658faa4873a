use log::{debug, info};

use super::encoder::encode;
use super::palette::PaletteProvider;
use crate::buffer::{decode_index, IndexedPixelBuffer};
use crate::constants::{BYTES_PER_PIXEL, INDEX_CHANNEL, TRUE_COLOR_CHANNELS};
use crate::error::RasterError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write rows bottom-up. Off by default.
    pub flip_y: bool,
}

/// Resolves the indices of a buffer through a palette and encodes the result.
///
/// Holds a borrowed palette; the palette lives independently of any buffer.
pub struct PaletteExporter<'p, P: PaletteProvider + ?Sized> {
    palette: &'p P,
    options: ExportOptions,
}

impl<'p, P: PaletteProvider + ?Sized> PaletteExporter<'p, P> {
    pub fn new(palette: &'p P, options: ExportOptions) -> Self {
        Self { palette, options }
    }

    pub fn resolve(&self, index: u8) -> [u8; 3] {
        self.palette.color(index).to_rgb8()
    }

    /// Builds the RGB buffer the encoder consumes: one `[r, g, b]` per pixel at
    /// the same offset as the packed pixel it came from.
    pub fn to_true_color(&self, buffer: &IndexedPixelBuffer) -> Result<Vec<u8>, RasterError> {
        let packed = buffer.as_bytes()?;
        let mut rgb = vec![0u8; buffer.width() * buffer.height() * TRUE_COLOR_CHANNELS];

        for (pixel, out) in packed
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(rgb.chunks_exact_mut(TRUE_COLOR_CHANNELS))
        {
            let index = decode_index(pixel[INDEX_CHANNEL]);
            out.copy_from_slice(&self.resolve(index));
        }

        debug!("Resolved {} pixels through palette", rgb.len() / TRUE_COLOR_CHANNELS);
        Ok(rgb)
    }

    /// Exports `buffer` as PNG bytes.
    ///
    /// # Errors
    /// - Returns `RasterError::UseAfterDispose` if the buffer has been disposed
    /// - Returns `RasterError::ExportEncoding` if the encoder fails
    pub fn export(&self, buffer: &IndexedPixelBuffer) -> Result<Vec<u8>, RasterError> {
        info!(
            "Exporting {}x{} buffer (flip_y={})",
            buffer.width(),
            buffer.height(),
            self.options.flip_y
        );

        let rgb = self.to_true_color(buffer)?;
        let encoded = encode(
            buffer.width() as u32,
            buffer.height() as u32,
            &rgb,
            self.options.flip_y,
        )?;

        info!("Export completed: {} bytes", encoded.len());
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::palette::{Color, Palette};

    #[test]
    fn test_to_true_color_black_white() {
        let mut buffer = IndexedPixelBuffer::new(2, 1).unwrap();
        buffer.set_pixel(1, 0, 15).unwrap();

        let mut palette = Palette::default();
        palette.set(15, Color::WHITE);

        let exporter = PaletteExporter::new(&palette, ExportOptions::default());
        let rgb = exporter.to_true_color(&buffer).unwrap();
        assert_eq!(rgb, vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_resolve_uses_provider() {
        let provider = |index: u8| {
            if index == 4 {
                Color::new(1.0, 0.5, 0.0)
            } else {
                Color::BLACK
            }
        };
        let exporter = PaletteExporter::new(&provider, ExportOptions::default());
        assert_eq!(exporter.resolve(4), [255, 127, 0]);
        assert_eq!(exporter.resolve(5), [0, 0, 0]);
    }

    #[test]
    fn test_export_disposed_buffer() {
        let mut buffer = IndexedPixelBuffer::new(1, 1).unwrap();
        buffer.dispose().unwrap();
        let palette = Palette::default();
        let exporter = PaletteExporter::new(&palette, ExportOptions::default());
        assert!(matches!(
            exporter.export(&buffer),
            Err(RasterError::UseAfterDispose)
        ));
    }
}
