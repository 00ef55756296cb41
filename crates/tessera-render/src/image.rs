//! CPU-side RGBA images.
//!
//! [`Image`] wraps an `image::RgbaImage` behind an `Arc`, so clones are cheap
//! and a frame can be shared between a widget's render cache and a recorded
//! [`DisplayList`](crate::DisplayList).
//!
//! # Example
//!
//! ```
//! use tessera_render::{Image, PixelSize, ResizeFilter, Color};
//!
//! let image = Image::from_color(PixelSize::new(4, 2), Color::from_rgb8(255, 0, 0));
//! let scaled = image.scaled(PixelSize::new(8, 4), ResizeFilter::Triangle);
//! assert_eq!(scaled.size(), PixelSize::new(8, 4));
//! ```

use std::sync::Arc;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::mask::AlphaMask;
use crate::types::{Color, PixelSize};

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Nearest neighbor interpolation. Fast but pixelated.
    Nearest,
    /// Bilinear interpolation. Smooth, and the filter widgets use.
    #[default]
    Triangle,
    /// Catmull-Rom bicubic interpolation.
    CatmullRom,
    /// Lanczos interpolation with window size 3.
    Lanczos3,
}

impl ResizeFilter {
    fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// An immutable RGBA image with 8 bits per channel.
#[derive(Clone, PartialEq)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create an image filled with a solid color.
    pub fn from_color(size: PixelSize, color: Color) -> Self {
        let pixels = RgbaImage::from_pixel(size.width, size.height, Rgba(color.to_array()));
        Self::from_rgba_image(pixels)
    }

    /// Create an image from raw RGBA pixel data.
    ///
    /// The data must be exactly `width * height * 4` bytes, row-major.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self::from_rgba_image(pixels))
    }

    /// Wrap an existing `RgbaImage`.
    #[inline]
    pub fn from_rgba_image(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Convert any decoded image to RGBA.
    #[inline]
    pub fn from_dynamic_image(image: DynamicImage) -> Self {
        Self::from_rgba_image(image.into_rgba8())
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Dimensions in pixels.
    #[inline]
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width(), self.height())
    }

    /// Check if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Borrow the underlying `RgbaImage`.
    #[inline]
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The color of a single pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Color::from(p.0))
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Resample to exactly `size`, ignoring aspect ratio.
    ///
    /// Resizing to the current size returns a cheap clone.
    pub fn scaled(&self, size: PixelSize, filter: ResizeFilter) -> Image {
        if size == self.size() {
            return self.clone();
        }
        let resized = image::imageops::resize(
            self.pixels.as_ref(),
            size.width,
            size.height,
            filter.to_image_filter(),
        );
        Self::from_rgba_image(resized)
    }

    /// Build a mask of pixels whose alpha is strictly above `threshold`.
    pub fn alpha_mask(&self, threshold: u8) -> AlphaMask {
        let bits = self.pixels.pixels().map(|p| p.0[3] > threshold).collect();
        AlphaMask::from_bits(self.size(), bits)
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("dimensions", &self.size().to_string())
            .finish()
    }
}
