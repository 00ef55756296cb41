//! Loading display content from files and byte buffers.
//!
//! [`load_bytes`] sniffs the format: a GIF with more than one frame becomes
//! [`LoadedImage::Animated`], everything else decodes to a single
//! [`LoadedImage::Static`] image.

use std::path::Path;

use image::ImageFormat;
use tessera_core::logging::targets;

use crate::animated_image::AnimatedImage;
use crate::error::{RenderError, RenderResult};
use crate::image::Image;
use crate::types::PixelSize;

/// Decoded display content.
#[derive(Debug, Clone)]
pub enum LoadedImage {
    /// A single still image.
    Static(Image),
    /// A multi-frame animation.
    Animated(AnimatedImage),
}

impl LoadedImage {
    /// Intrinsic size of the content.
    pub fn size(&self) -> PixelSize {
        match self {
            Self::Static(image) => image.size(),
            Self::Animated(animated) => animated.size(),
        }
    }

    /// Check if the content is an animation.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }
}

/// Load content from a file.
///
/// # Errors
///
/// Returns [`RenderError::Io`] if the file cannot be read, or a decode error
/// if its contents are not a supported image.
pub fn load_file(path: impl AsRef<Path>) -> RenderResult<LoadedImage> {
    let path = path.as_ref();
    let data = std::fs::read(path).inspect_err(|err| {
        tracing::warn!(target: targets::LOADER, path = %path.display(), %err, "failed to read image");
    })?;
    load_bytes(&data)
}

/// Load content from an in-memory encoded image.
pub fn load_bytes(data: &[u8]) -> RenderResult<LoadedImage> {
    let format = image::guess_format(data)
        .map_err(|err| RenderError::ImageLoad(format!("unrecognized image data: {err}")))?;

    if format == ImageFormat::Gif {
        let animated = AnimatedImage::from_bytes(data)?;
        if !animated.is_static() {
            return Ok(LoadedImage::Animated(animated));
        }
        let still = animated.frame(0).image().clone();
        return Ok(LoadedImage::Static(still));
    }

    let decoded = image::load_from_memory_with_format(data, format)?;
    let image = Image::from_dynamic_image(decoded);
    tracing::debug!(
        target: targets::LOADER,
        ?format,
        size = %image.size(),
        "decoded still image"
    );
    Ok(LoadedImage::Static(image))
}
