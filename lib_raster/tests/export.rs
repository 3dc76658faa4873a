mod common;

use common::{black_white, decode_png, grayscale};
use lib_raster::{Color, ExportOptions, IndexedPixelBuffer, PaletteExporter};

#[test]
fn test_true_color_black_white() {
    let mut buffer = IndexedPixelBuffer::new(2, 1).unwrap();
    buffer.set_pixel(0, 0, 0).unwrap();
    buffer.set_pixel(1, 0, 15).unwrap();

    let palette = black_white();
    let exporter = PaletteExporter::new(&palette, ExportOptions::default());

    assert_eq!(
        exporter.to_true_color(&buffer).unwrap(),
        vec![0, 0, 0, 255, 255, 255]
    );
}

#[test]
fn test_export_decodes_to_palette_colors() {
    let mut buffer = IndexedPixelBuffer::new(4, 4).unwrap();
    buffer.map_pixels(|x, y, _| x + y * 4).unwrap();

    let encoded = buffer.export(&grayscale()).unwrap();
    let (width, height, rgb) = decode_png(&encoded);

    assert_eq!((width, height), (4, 4));
    for (i, pixel) in rgb.chunks_exact(3).enumerate() {
        let level = i as u8 * 17;
        assert_eq!(pixel, &[level, level, level]);
    }
}

#[test]
fn test_export_ignores_sentinel() {
    // The exported pixel is (0, 0, 0), not the sentinel's blue
    let buffer = IndexedPixelBuffer::new(1, 1).unwrap();
    let encoded = buffer.export(&black_white()).unwrap();
    let (_, _, rgb) = decode_png(&encoded);
    assert_eq!(rgb, vec![0, 0, 0]);
}

#[test]
fn test_export_flip_y() {
    let mut buffer = IndexedPixelBuffer::new(1, 2).unwrap();
    buffer.set_pixel(0, 1, 15).unwrap();
    let palette = black_white();

    let straight = PaletteExporter::new(&palette, ExportOptions::default())
        .export(&buffer)
        .unwrap();
    let (_, _, rgb) = decode_png(&straight);
    assert_eq!(rgb, vec![0, 0, 0, 255, 255, 255]);

    let flipped = PaletteExporter::new(&palette, ExportOptions { flip_y: true })
        .export(&buffer)
        .unwrap();
    let (_, _, rgb) = decode_png(&flipped);
    assert_eq!(rgb, vec![255, 255, 255, 0, 0, 0]);
}

#[test]
fn test_export_with_closure_provider() {
    let mut buffer = IndexedPixelBuffer::new(2, 1).unwrap();
    buffer.set_pixel(1, 0, 5).unwrap();

    let provider = |index: u8| Color::new(0.0, index as f32 / 15.0, 0.0);
    let encoded = buffer.export(&provider).unwrap();
    let (_, _, rgb) = decode_png(&encoded);

    assert_eq!(rgb, vec![0, 0, 0, 0, 85, 0]);
}

#[test]
fn test_export_keeps_buffer_usable() {
    let mut buffer = IndexedPixelBuffer::new(2, 2).unwrap();
    buffer.set_pixel(1, 0, 8).unwrap();

    buffer.export(&grayscale()).unwrap();

    assert!(!buffer.is_disposed());
    assert_eq!(buffer.get_pixel(1, 0).unwrap(), 8);
}

#[test]
fn test_logging_init_is_repeatable() {
    lib_raster::init_logging(env_logger::Target::Stderr);
    lib_raster::init_logging(env_logger::Target::Stderr);
}
