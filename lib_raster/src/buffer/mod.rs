pub mod codec;
pub mod indexed;
pub mod paste;

pub use codec::{decode_index, encode_index};
pub use indexed::IndexedPixelBuffer;
pub use paste::{PackedPixelSource, PasteRegion, ResolvedRegion};
