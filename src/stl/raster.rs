//! Decoded grayscale raster

use std::fmt;

/// An 8-bit grayscale image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height` intensities, row by row
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Creates a raster from its dimensions and pixel data
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Raster { width, height, pixels }
    }

    /// Returns the intensity at (x, y), or None when out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Returns the dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} grayscale raster", self.width, self.height)
    }
}
