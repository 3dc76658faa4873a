use log::{debug, error, info};

use super::codec::{decode_index, encode_index};
use super::paste::{blit, PackedPixelSource, PasteRegion};
use crate::constants::{BYTES_PER_PIXEL, INDEX_CHANNEL, SENTINEL, SENTINEL_CHANNEL};
use crate::error::{Axis, RasterError};
use crate::export::{ExportOptions, PaletteExporter, PaletteProvider};

/// A fixed-size grid of 16-color palette indices stored in the packed
/// 3-bytes-per-pixel layout consumed by the renderer.
///
/// Channel 0 holds the scaled index, channel 1 is unused and channel 2 is
/// always [`SENTINEL`].
#[derive(Debug)]
pub struct IndexedPixelBuffer {
    width: usize,
    height: usize,
    storage: Option<Vec<u8>>,
}

fn checked_len(width: i32, height: i32) -> Result<usize, RasterError> {
    if width <= 0 || height <= 0 {
        error!("Invalid buffer dimensions {}x{}", width, height);
        return Err(RasterError::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| {
            error!("Buffer dimensions {}x{} overflow", width, height);
            RasterError::InvalidDimension { width, height }
        })
}

fn check_coordinate(axis: Axis, value: i32, bound: usize) -> Result<usize, RasterError> {
    if value < 0 || value as usize >= bound {
        return Err(RasterError::OutOfBounds { axis, value, bound });
    }
    Ok(value as usize)
}

impl IndexedPixelBuffer {
    /// Creates a buffer with every pixel at palette index 0.
    ///
    /// # Errors
    /// - Returns `RasterError::InvalidDimension` if either dimension is not positive or the
    ///   storage can't be allocated
    pub fn new(width: i32, height: i32) -> Result<Self, RasterError> {
        let len = checked_len(width, height)?;
        debug!("Creating {}x{} indexed buffer ({} bytes)", width, height, len);

        let mut storage = Vec::new();
        storage.try_reserve_exact(len).map_err(|e| {
            error!("Failed to allocate {} bytes for {}x{}: {}", len, width, height, e);
            RasterError::InvalidDimension { width, height }
        })?;
        storage.resize(len, 0);
        Ok(Self::with_sentinel(width as usize, height as usize, storage))
    }

    /// Adopts caller-supplied bytes that are already in the packed layout.
    ///
    /// The sentinel channel is forced to `0xFF` for every pixel; the other
    /// channels are kept as given.
    ///
    /// # Errors
    /// - Returns `RasterError::InvalidDimension` if either dimension is not positive
    /// - Returns `RasterError::FormatMismatch` if `raw` is not exactly `width * height * 3` bytes
    pub fn wrap(width: i32, height: i32, raw: Vec<u8>) -> Result<Self, RasterError> {
        let expected = checked_len(width, height)?;
        if raw.len() != expected {
            let pixels = width as usize * height as usize;
            if raw.len() % pixels == 0 {
                error!(
                    "Unsupported pixel encoding: {} bytes per pixel, expected {}",
                    raw.len() / pixels,
                    BYTES_PER_PIXEL
                );
            } else {
                error!(
                    "Packed data length {} does not match {}x{}",
                    raw.len(),
                    width,
                    height
                );
            }
            return Err(RasterError::FormatMismatch {
                expected,
                actual: raw.len(),
            });
        }
        debug!("Wrapping {} bytes as {}x{} indexed buffer", raw.len(), width, height);
        Ok(Self::with_sentinel(width as usize, height as usize, raw))
    }

    fn with_sentinel(width: usize, height: usize, mut storage: Vec<u8>) -> Self {
        for pixel in storage.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[SENTINEL_CHANNEL] = SENTINEL;
        }
        Self {
            width,
            height,
            storage: Some(storage),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_disposed(&self) -> bool {
        self.storage.is_none()
    }

    /// The packed bytes, exactly as the renderer reads them.
    pub fn as_bytes(&self) -> Result<&[u8], RasterError> {
        self.storage.as_deref().ok_or(RasterError::UseAfterDispose)
    }

    fn storage_mut(&mut self) -> Result<&mut [u8], RasterError> {
        self.storage
            .as_deref_mut()
            .ok_or(RasterError::UseAfterDispose)
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize, RasterError> {
        let x = check_coordinate(Axis::X, x, self.width)?;
        let y = check_coordinate(Axis::Y, y, self.height)?;
        Ok((x + y * self.width) * BYTES_PER_PIXEL + INDEX_CHANNEL)
    }

    /// Reads the palette index at `(x, y)`.
    ///
    /// # Errors
    /// - Returns `RasterError::UseAfterDispose` if the buffer has been disposed
    /// - Returns `RasterError::OutOfBounds` if the coordinates are outside the buffer
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8, RasterError> {
        let storage = self.as_bytes()?;
        let offset = self.offset(x, y)?;
        Ok(decode_index(storage[offset]))
    }

    /// Writes palette index `color` at `(x, y)`, leaving the other channels alone.
    ///
    /// # Errors
    /// - Returns `RasterError::OutOfBounds` if the coordinates are outside the buffer
    /// - Returns `RasterError::InvalidColor` if `color` is not in `[0, 16)`
    pub fn set_pixel(&mut self, x: i32, y: i32, color: i32) -> Result<(), RasterError> {
        self.as_bytes()?;
        let offset = self.offset(x, y)?;
        let byte = encode_index(color)?;
        self.storage_mut()?[offset] = byte;
        Ok(())
    }

    /// Replaces every pixel with `mapper(x, y, current)`, walking rows top to
    /// bottom and each row left to right.
    ///
    /// The walk is in place: if `mapper` returns an invalid color the walk
    /// stops with `RasterError::InvalidColor` and the pixels already visited
    /// keep their new values.
    pub fn map_pixels<F>(&mut self, mut mapper: F) -> Result<(), RasterError>
    where
        F: FnMut(i32, i32, i32) -> i32,
    {
        let width = self.width;
        let height = self.height;
        let storage = self.storage_mut()?;

        for y in 0..height {
            for x in 0..width {
                let index = (x + y * width) * BYTES_PER_PIXEL + INDEX_CHANNEL;
                let current = decode_index(storage[index]);
                let color = mapper(x as i32, y as i32, current as i32);
                storage[index] = encode_index(color)?;
            }
        }
        Ok(())
    }

    /// Copies a rectangle of `source` into this buffer.
    ///
    /// Whole packed pixels are copied, sentinel channel included. The region
    /// is clipped to both buffers instead of failing.
    ///
    /// # Errors
    /// - Returns `RasterError::NullSource` if `source` is `None`
    /// - Returns `RasterError::UnsupportedSource` if the source has no packed representation
    /// - Returns `RasterError::UseAfterDispose` if either buffer has been disposed
    pub fn paste(
        &mut self,
        source: Option<&dyn PackedPixelSource>,
        region: PasteRegion,
    ) -> Result<(), RasterError> {
        let source = source.ok_or(RasterError::NullSource)?;
        let src = source.packed_bytes()?;
        let src_dims = (source.width(), source.height());
        let dest_dims = (self.width, self.height);
        let resolved = region.resolve(src_dims.0, src_dims.1);

        let dest = self.storage_mut()?;
        let copied = blit(src, src_dims, dest, dest_dims, resolved);
        debug!("Pasted {} pixels with {:?}", copied, resolved);
        Ok(())
    }

    /// Exports the buffer as a PNG, resolving each index through `palette`.
    pub fn export<P>(&self, palette: &P) -> Result<Vec<u8>, RasterError>
    where
        P: PaletteProvider + ?Sized,
    {
        PaletteExporter::new(palette, ExportOptions::default()).export(self)
    }

    /// Frees the backing storage. Every later call, `dispose` included, fails
    /// with `RasterError::UseAfterDispose`.
    pub fn dispose(&mut self) -> Result<(), RasterError> {
        match self.storage.take() {
            Some(storage) => {
                info!(
                    "Disposed {}x{} indexed buffer ({} bytes)",
                    self.width,
                    self.height,
                    storage.len()
                );
                Ok(())
            }
            None => {
                error!("Buffer disposed twice");
                Err(RasterError::UseAfterDispose)
            }
        }
    }
}

impl PackedPixelSource for IndexedPixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn packed_bytes(&self) -> Result<&[u8], RasterError> {
        self.as_bytes()
    }
}
