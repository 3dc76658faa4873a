use log::debug;

use crate::constants::BYTES_PER_PIXEL;
use crate::error::RasterError;

/// Capability of exposing pixels in the packed 3-bytes-per-pixel layout.
///
/// `paste` only needs raw row access, so any representation that can hand out
/// its packed bytes can be blitted from. Sources that can't keep the default
/// `packed_bytes`, which fails with [`RasterError::UnsupportedSource`].
pub trait PackedPixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn packed_bytes(&self) -> Result<&[u8], RasterError> {
        Err(RasterError::UnsupportedSource)
    }
}

/// Placement of a blit.
///
/// Defaults: destination and source origin at `(0, 0)`, size covering the
/// rest of the source from the source origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteRegion {
    pub dest_x: i32,
    pub dest_y: i32,
    pub src_x: i32,
    pub src_y: i32,
    pub src_width: Option<i32>,
    pub src_height: Option<i32>,
}

/// A [`PasteRegion`] with every default filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub dest_x: i32,
    pub dest_y: i32,
    pub src_x: i32,
    pub src_y: i32,
    pub width: i64,
    pub height: i64,
}

impl PasteRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination position.
    pub fn at(mut self, dest_x: i32, dest_y: i32) -> Self {
        self.dest_x = dest_x;
        self.dest_y = dest_y;
        self
    }

    /// Sets the top-left corner of the copied area inside the source.
    pub fn from_source(mut self, src_x: i32, src_y: i32) -> Self {
        self.src_x = src_x;
        self.src_y = src_y;
        self
    }

    pub fn size(mut self, src_width: i32, src_height: i32) -> Self {
        self.src_width = Some(src_width);
        self.src_height = Some(src_height);
        self
    }

    pub fn resolve(&self, source_width: usize, source_height: usize) -> ResolvedRegion {
        ResolvedRegion {
            dest_x: self.dest_x,
            dest_y: self.dest_y,
            src_x: self.src_x,
            src_y: self.src_y,
            width: self
                .src_width
                .map_or(source_width as i64 - self.src_x as i64, i64::from),
            height: self
                .src_height
                .map_or(source_height as i64 - self.src_y as i64, i64::from),
        }
    }
}

// Returns the [start, end) offsets inside the copied span that land inside
// both the source and the destination along one axis.
fn clip_span(src_pos: i64, dest_pos: i64, len: i64, src_len: i64, dest_len: i64) -> (i64, i64) {
    let start = 0.max(-src_pos).max(-dest_pos);
    let end = len.min(src_len - src_pos).min(dest_len - dest_pos);
    (start, end)
}

/// Copies whole packed pixels from `src` into `dest`, clipped to both.
///
/// Returns the number of pixels copied.
pub(crate) fn blit(
    src: &[u8],
    (src_width, src_height): (usize, usize),
    dest: &mut [u8],
    (dest_width, dest_height): (usize, usize),
    region: ResolvedRegion,
) -> usize {
    let (col_start, col_end) = clip_span(
        region.src_x as i64,
        region.dest_x as i64,
        region.width,
        src_width as i64,
        dest_width as i64,
    );
    let (row_start, row_end) = clip_span(
        region.src_y as i64,
        region.dest_y as i64,
        region.height,
        src_height as i64,
        dest_height as i64,
    );

    if col_start >= col_end || row_start >= row_end {
        debug!("Blit region {:?} clipped away entirely", region);
        return 0;
    }

    let row_bytes = (col_end - col_start) as usize * BYTES_PER_PIXEL;
    for row in row_start..row_end {
        let sx = (region.src_x as i64 + col_start) as usize;
        let sy = (region.src_y as i64 + row) as usize;
        let dx = (region.dest_x as i64 + col_start) as usize;
        let dy = (region.dest_y as i64 + row) as usize;

        let src_offset = (sx + sy * src_width) * BYTES_PER_PIXEL;
        let dest_offset = (dx + dy * dest_width) * BYTES_PER_PIXEL;
        dest[dest_offset..dest_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }

    (col_end - col_start) as usize * (row_end - row_start) as usize
}
