pub mod encoder;
pub mod exporter;
pub mod palette;

pub use encoder::{encode, EncodingError};
pub use exporter::{ExportOptions, PaletteExporter};
pub use palette::{Color, Palette, PaletteProvider};
