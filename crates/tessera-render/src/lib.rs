//! Rendering primitives for Tessera widgets.
//!
//! This crate holds everything a widget needs to decide *what* to draw,
//! independent of any windowing system or GPU backend:
//!
//! - Geometry ([`Point`], [`Size`], [`PixelSize`], [`Rect`]) and [`Color`]
//!   with HSV-based tinting
//! - Per-axis content [`Alignment`]
//! - CPU [`Image`]s with smooth resampling and [`AlphaMask`] extraction
//! - [`AnimatedImage`] frame storage with a tick-driven
//!   [`AnimationController`]
//! - Content [`loader`] for files and in-memory buffers
//! - The [`Painter`] trait and the recording [`DisplayList`]

pub mod align;
pub mod animated_image;
mod error;
pub mod image;
pub mod loader;
pub mod mask;
pub mod painter;
pub mod types;

pub use align::{Alignment, HorizontalAlign, VerticalAlign};
pub use animated_image::{
    AnimatedImage, AnimationController, AnimationFrame, DEFAULT_FRAME_DELAY, LoopCount,
    PlaybackState,
};
pub use error::{RenderError, RenderResult};
pub use self::image::{Image, ResizeFilter};
pub use loader::{LoadedImage, load_bytes, load_file};
pub use mask::AlphaMask;
pub use painter::{DisplayList, DrawCommand, Painter, RenderHints};
pub use types::{Color, PixelSize, Point, Rect, Size};

static_assertions::assert_impl_all!(Image: Send, Sync);
static_assertions::assert_impl_all!(AnimatedImage: Send, Sync);
static_assertions::assert_impl_all!(DisplayList: Send, Sync);
