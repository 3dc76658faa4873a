#![allow(dead_code)]

use lib_raster::{Color, Palette};

/// Index `i` maps to a gray of `i * 17`.
pub fn grayscale() -> Palette {
    let mut colors = [[0u8; 3]; 16];
    for (i, color) in colors.iter_mut().enumerate() {
        let level = i as u8 * 17;
        *color = [level, level, level];
    }
    Palette::from_rgb8(colors)
}

/// Black everywhere except index 15, which is white.
pub fn black_white() -> Palette {
    let mut palette = Palette::default();
    palette.set(15, Color::WHITE);
    palette
}

/// Decodes PNG bytes into (width, height, rgb).
pub fn decode_png(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}
