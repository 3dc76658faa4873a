pub mod buffer;
pub mod constants;
pub mod error;
pub mod export;

use log::*;
use std::io::Write;

pub use crate::buffer::{IndexedPixelBuffer, PackedPixelSource, PasteRegion};
pub use crate::error::{Axis, RasterError};
pub use crate::export::{Color, ExportOptions, Palette, PaletteExporter, PaletteProvider};

/// Installs the crate's logger, writing `lib_raster` records at debug level
/// to `target`. Later calls leave the first logger in place.
pub fn init_logging(target: env_logger::Target) {
    let result = env_logger::Builder::new()
        .target(target)
        .filter(Some("lib_raster"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        debug!("Logger already initialized");
    }
}
