use serde::{Deserialize, Serialize};

use crate::constants::MAX_COLORS;
use crate::error::RasterError;

/// A true color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Scales each channel by 255 and truncates. Values outside `[0.0, 1.0]`
    /// saturate.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }
}

/// Maps a palette index in `[0, 16)` to a true color.
pub trait PaletteProvider {
    fn color(&self, index: u8) -> Color;
}

impl<F> PaletteProvider for F
where
    F: Fn(u8) -> Color,
{
    fn color(&self, index: u8) -> Color {
        self(index)
    }
}

/// A 16-entry color table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Color; MAX_COLORS as usize],
}

impl Palette {
    pub fn new(colors: [Color; MAX_COLORS as usize]) -> Self {
        Self { colors }
    }

    pub fn from_rgb8(colors: [[u8; 3]; MAX_COLORS as usize]) -> Self {
        Self {
            colors: colors.map(Color::from_rgb8),
        }
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn set(&mut self, index: usize, color: Color) -> Option<usize> {
        let slot = self.colors.get_mut(index)?;
        *slot = color;
        Some(index)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, RasterError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RasterError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl PaletteProvider for Palette {
    fn color(&self, index: u8) -> Color {
        self.colors[index as usize]
    }
}
