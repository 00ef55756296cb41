//! Per-pixel shape masks.

use crate::types::{PixelSize, Point};

/// A one-bit mask marking which pixels of an image are visible.
///
/// Widgets use it as a shape mask so that hit-testing follows the visible
/// pixels of a frame rather than its bounding box.
#[derive(Clone, PartialEq, Eq)]
pub struct AlphaMask {
    size: PixelSize,
    bits: Vec<bool>,
}

impl AlphaMask {
    /// Build a mask from row-major bits.
    ///
    /// Missing trailing bits are treated as transparent.
    pub fn from_bits(size: PixelSize, mut bits: Vec<bool>) -> Self {
        let len = size.width as usize * size.height as usize;
        bits.resize(len, false);
        Self { size, bits }
    }

    /// Dimensions of the mask.
    #[inline]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Whether the pixel at (`x`, `y`) is visible. Out of range is not.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.size.width || y >= self.size.height {
            return false;
        }
        self.bits[y as usize * self.size.width as usize + x as usize]
    }

    /// Whether a point, relative to the mask origin, lands on a visible pixel.
    pub fn contains_point(&self, point: Point) -> bool {
        if point.x < 0.0 || point.y < 0.0 {
            return false;
        }
        self.contains(point.x as u32, point.y as u32)
    }

    /// Number of visible pixels.
    pub fn opaque_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl std::fmt::Debug for AlphaMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaMask")
            .field("size", &self.size.to_string())
            .field("opaque", &self.opaque_count())
            .finish()
    }
}
