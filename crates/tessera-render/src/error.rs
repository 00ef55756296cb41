//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while loading or building images.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The image source could not be read or recognized.
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    /// The image data was recognized but could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Reading the image source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Pixel data does not match the declared dimensions.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// An animation was built from an empty frame list.
    #[error("animated image contains no frames")]
    NoFrames,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
