//! Scalable image label widget implementation.
//!
//! This module provides [`ScalableImageLabel`], a widget that displays a
//! static image or an animated image, rescaled to fit its bounds with the
//! aspect ratio preserved and placed according to its [`Alignment`].
//!
//! # Example
//!
//! ```
//! use tessera::widget::Widget;
//! use tessera::widget::widgets::ScalableImageLabel;
//! use tessera_render::{Color, HorizontalAlign, Image, PixelSize, Size};
//!
//! let image = Image::from_color(PixelSize::new(40, 20), Color::WHITE);
//! let mut label = ScalableImageLabel::new()
//!     .with_horizontal_align(HorizontalAlign::Left)
//!     .with_image(image);
//!
//! label.resize(Size::new(100.0, 100.0));
//! // Never upscaled past the native size unless oversize is allowed.
//! assert_eq!(label.scaled_size(), PixelSize::new(40, 20));
//! ```
//!
//! # Animation
//!
//! Animated content does not run on a timer of its own. The host calls
//! [`ScalableImageLabel::update_animation`] with the elapsed time, and the
//! label advances, rescales the new frame and requests a repaint.

use std::path::Path;
use std::time::Duration;

use tessera_core::Signal;
use tessera_core::logging::targets;
use tessera_render::{
    Alignment, AlphaMask, AnimatedImage, AnimationController, Color, HorizontalAlign, Image,
    LoadedImage, PixelSize, Point, RenderHints, RenderResult, ResizeFilter, Size, VerticalAlign,
    loader,
};

use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// Preferred size reported while the label has no content.
const EMPTY_SIZE_HINT: f32 = 100.0;

/// Filter used to resample content to the target size.
const SCALE_FILTER: ResizeFilter = ResizeFilter::Triangle;

// ============================================================================
// Content
// ============================================================================

/// What the label currently displays.
enum ImageContent {
    None,
    Static(Image),
    Animated {
        animation: AnimatedImage,
        controller: AnimationController,
    },
}

impl ImageContent {
    /// The image to scale: the static image or the current frame.
    fn source(&self) -> Option<&Image> {
        match self {
            ImageContent::None => None,
            ImageContent::Static(image) => Some(image),
            ImageContent::Animated {
                animation,
                controller,
            } => animation
                .get_frame(controller.current_frame())
                .map(|frame| frame.image()),
        }
    }

    fn native_size(&self) -> Option<PixelSize> {
        match self {
            ImageContent::None => None,
            ImageContent::Static(image) => Some(image.size()),
            ImageContent::Animated { animation, .. } => Some(animation.size()),
        }
    }
}

// ============================================================================
// ScaledRender
// ============================================================================

/// Content prepared for the label's current size.
///
/// Recomputed whenever the geometry, content, frame or scaling options
/// change, so painting only has to blit it.
#[derive(Debug, Clone, Default)]
pub struct ScaledRender {
    image: Option<Image>,
    origin: Point,
    mask: Option<AlphaMask>,
}

impl ScaledRender {
    /// The resampled content, if anything is drawn.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Top-left corner of the content in widget coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel size of the drawn content.
    pub fn size(&self) -> PixelSize {
        self.image.as_ref().map_or(PixelSize::ZERO, Image::size)
    }

    /// Shape mask of the drawn content (animated content only).
    pub fn mask(&self) -> Option<&AlphaMask> {
        self.mask.as_ref()
    }
}

// ============================================================================
// ScalableImageLabel
// ============================================================================

/// A widget that displays a static or animated image scaled to fit.
///
/// Content is never stretched: the aspect ratio is always kept, and the
/// content stays at or below its native resolution unless oversize is
/// allowed.
///
/// # Signals
///
/// - `frame_changed(index)`: Emitted when animated content advances
/// - `content_changed()`: Emitted when the content is replaced or cleared
pub struct ScalableImageLabel {
    base: WidgetBase,
    content: ImageContent,

    /// Allow upscaling past the native resolution.
    oversize: bool,

    alignment: Alignment,

    /// Restrict hit testing to visible pixels of animated content.
    shape_mask: bool,

    /// Text painted over the image.
    text: Option<String>,
    text_color: Color,

    render: ScaledRender,

    /// Signal emitted with the new frame index when the animation advances.
    pub frame_changed: Signal<usize>,

    /// Signal emitted when the content is replaced or cleared.
    pub content_changed: Signal<()>,
}

impl ScalableImageLabel {
    /// Create an empty label, centered, with oversize disabled.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            content: ImageContent::None,
            oversize: false,
            alignment: Alignment::CENTER,
            shape_mask: true,
            text: None,
            text_color: Color::BLACK,
            render: ScaledRender::default(),
            frame_changed: Signal::new(),
            content_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Start with a static image.
    pub fn with_image(mut self, image: Image) -> Self {
        self.set_image(Some(image));
        self
    }

    /// Start with an animation, already playing.
    pub fn with_animation(mut self, animation: AnimatedImage) -> Self {
        self.set_animation(animation);
        self
    }

    /// Start with content produced by the loader.
    pub fn with_content(mut self, content: LoadedImage) -> Self {
        self.set_content(content);
        self
    }

    /// Allow or forbid upscaling past the native resolution.
    pub fn with_oversize_allowed(mut self, allowed: bool) -> Self {
        self.set_oversize_allowed(allowed);
        self
    }

    /// Set both alignment axes.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    /// Set the horizontal alignment.
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.set_horizontal_align(align);
        self
    }

    /// Set the vertical alignment.
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.set_vertical_align(align);
        self
    }

    /// Enable or disable the shape mask for animated content.
    pub fn with_shape_mask(mut self, enabled: bool) -> Self {
        self.set_shape_mask_enabled(enabled);
        self
    }

    /// Paint `text` over the image.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(Some(text.into()));
        self
    }

    /// Set the color of the overlay text.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Display a static image, replacing any previous content.
    ///
    /// A running animation is stopped and released first. `None` (or an
    /// image with no pixels) leaves the label empty.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.release_content();
        if let Some(image) = image.filter(|image| !image.is_empty()) {
            tracing::debug!(
                target: targets::IMAGE_LABEL,
                size = %image.size(),
                "displaying static image"
            );
            self.content = ImageContent::Static(image);
        }
        self.content_replaced();
    }

    /// Display an animation, replacing any previous content.
    ///
    /// Playback starts immediately. If the label has no size yet it takes
    /// the animation's frame size.
    pub fn set_animation(&mut self, animation: AnimatedImage) {
        self.release_content();
        tracing::debug!(
            target: targets::IMAGE_LABEL,
            size = %animation.size(),
            frames = animation.frame_count(),
            "displaying animation"
        );

        if self.base.size().is_empty() {
            self.base.set_size(Size::from(animation.size()));
        }

        let controller = AnimationController::new(&animation);
        self.content = ImageContent::Animated {
            animation,
            controller,
        };
        self.content_replaced();
    }

    /// Display whatever the loader produced.
    pub fn set_content(&mut self, content: LoadedImage) {
        match content {
            LoadedImage::Static(image) => self.set_image(Some(image)),
            LoadedImage::Animated(animation) => self.set_animation(animation),
        }
    }

    /// Load and display an image file.
    ///
    /// On failure the label is left empty and the error is returned.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> RenderResult<()> {
        let loaded = loader::load_file(path);
        self.apply_loaded(loaded)
    }

    /// Decode and display an encoded image.
    ///
    /// On failure the label is left empty and the error is returned.
    pub fn load_bytes(&mut self, data: &[u8]) -> RenderResult<()> {
        let loaded = loader::load_bytes(data);
        self.apply_loaded(loaded)
    }

    /// Stop any animation, release the content and repaint.
    pub fn clear(&mut self) {
        tracing::debug!(target: targets::IMAGE_LABEL, "clearing content");
        self.release_content();
        self.content_replaced();
    }

    fn apply_loaded(&mut self, loaded: RenderResult<LoadedImage>) -> RenderResult<()> {
        match loaded {
            Ok(content) => {
                self.set_content(content);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    target: targets::IMAGE_LABEL,
                    error = %err,
                    "failed to load image, label left empty"
                );
                self.set_image(None);
                Err(err)
            }
        }
    }

    /// Stop and drop the current content.
    fn release_content(&mut self) {
        if let ImageContent::Animated { controller, .. } = &mut self.content {
            controller.stop();
        }
        self.content = ImageContent::None;
    }

    fn content_replaced(&mut self) {
        self.recompute_render();
        self.base.update();
        self.content_changed.emit(());
    }

    /// Check if the label has no content.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, ImageContent::None)
    }

    /// Check if the content is an animation.
    pub fn is_animated(&self) -> bool {
        matches!(self.content, ImageContent::Animated { .. })
    }

    /// Native size of the content.
    pub fn image_size(&self) -> Option<PixelSize> {
        self.content.native_size()
    }

    // =========================================================================
    // Scaling and alignment
    // =========================================================================

    /// Check if content may be upscaled past its native resolution.
    pub fn oversize_allowed(&self) -> bool {
        self.oversize
    }

    /// Allow or forbid upscaling past the native resolution.
    pub fn set_oversize_allowed(&mut self, allowed: bool) {
        if self.oversize != allowed {
            self.oversize = allowed;
            self.recompute_render();
            self.base.update();
        }
    }

    /// Get the content alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Set the content alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.recompute_render();
            self.base.update();
        }
    }

    /// Set the horizontal alignment.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.set_alignment(Alignment::new(align, self.alignment.vertical));
    }

    /// Set the vertical alignment.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.set_alignment(Alignment::new(self.alignment.horizontal, align));
    }

    /// Check if animated content restricts hit testing to visible pixels.
    pub fn shape_mask_enabled(&self) -> bool {
        self.shape_mask
    }

    /// Enable or disable the shape mask for animated content.
    pub fn set_shape_mask_enabled(&mut self, enabled: bool) {
        if self.shape_mask != enabled {
            self.shape_mask = enabled;
            self.recompute_render();
        }
    }

    /// The content prepared for the current size.
    pub fn scaled_render(&self) -> &ScaledRender {
        &self.render
    }

    /// Pixel size the content is drawn at.
    pub fn scaled_size(&self) -> PixelSize {
        self.render.size()
    }

    /// Check if `point` (local coordinates) hits the label.
    ///
    /// With a shape mask in effect only visible pixels of the current frame
    /// count; otherwise the whole widget does.
    pub fn hit_test(&self, point: Point) -> bool {
        if !self.base.contains_point(point) {
            return false;
        }
        match &self.render.mask {
            Some(mask) => {
                let origin = self.render.origin;
                mask.contains_point(Point::new(point.x - origin.x, point.y - origin.y))
            }
            None => true,
        }
    }

    fn recompute_render(&mut self) {
        self.render = self.compute_render();
    }

    fn compute_render(&self) -> ScaledRender {
        let Some(source) = self.content.source() else {
            return ScaledRender::default();
        };

        let available = self.base.size();
        let bounds = if self.oversize {
            available.to_pixels()
        } else {
            available.to_pixels().bounded_to(source.size())
        };
        let target = source.size().scaled_keep_aspect(bounds);
        if target.is_empty() {
            return ScaledRender::default();
        }

        let scaled = source.scaled(target, SCALE_FILTER);
        let origin = self.alignment.origin_for(available, Size::from(target));
        let mask = (self.shape_mask && self.is_animated()).then(|| scaled.alpha_mask(0));

        ScaledRender {
            image: Some(scaled),
            origin,
            mask,
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the overlay text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set or remove the overlay text.
    pub fn set_text(&mut self, text: Option<String>) {
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    /// Get the overlay text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the overlay text color.
    pub fn set_text_color(&mut self, color: Color) {
        if self.text_color != color {
            self.text_color = color;
            self.base.update();
        }
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Advance the animation by `delta`.
    ///
    /// Returns `true` if a new frame is now displayed. Static and empty
    /// labels ignore ticks.
    pub fn update_animation(&mut self, delta: Duration) -> bool {
        let frame = match &mut self.content {
            ImageContent::Animated { controller, .. } => {
                if !controller.update(delta) {
                    return false;
                }
                controller.current_frame()
            }
            _ => return false,
        };

        self.recompute_render();
        self.base.update();
        self.frame_changed.emit(frame);
        true
    }

    /// Resume (or restart) playback.
    pub fn play(&mut self) {
        if let ImageContent::Animated { controller, .. } = &mut self.content {
            controller.play();
        }
    }

    /// Pause playback on the current frame.
    pub fn pause(&mut self) {
        if let ImageContent::Animated { controller, .. } = &mut self.content {
            controller.pause();
        }
    }

    /// Check if an animation is playing.
    pub fn is_playing(&self) -> bool {
        match &self.content {
            ImageContent::Animated { controller, .. } => controller.is_playing(),
            _ => false,
        }
    }

    /// Index of the displayed frame (0 for static content).
    pub fn current_frame(&self) -> usize {
        match &self.content {
            ImageContent::Animated { controller, .. } => controller.current_frame(),
            _ => 0,
        }
    }

    /// Number of frames (1 for static content, 0 when empty).
    pub fn frame_count(&self) -> usize {
        match &self.content {
            ImageContent::None => 0,
            ImageContent::Static(_) => 1,
            ImageContent::Animated { animation, .. } => animation.frame_count(),
        }
    }

    /// Set the playback speed multiplier.
    pub fn set_speed(&mut self, speed: f64) {
        if let ImageContent::Animated { controller, .. } = &mut self.content {
            controller.set_speed(speed);
        }
    }

    /// Playback speed multiplier (1.0 when nothing is animated).
    pub fn speed(&self) -> f64 {
        match &self.content {
            ImageContent::Animated { controller, .. } => controller.speed(),
            _ => 1.0,
        }
    }
}

impl Default for ScalableImageLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScalableImageLabel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        match self.image_size() {
            Some(size) => SizeHint::new(Size::from(size)),
            None => SizeHint::from_dimensions(EMPTY_SIZE_HINT, EMPTY_SIZE_HINT),
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let painter = ctx.painter();

        if let Some(image) = &self.render.image {
            painter.set_render_hints(RenderHints::HIGH_QUALITY);
            painter.draw_image(self.render.origin, image);
        }

        if let Some(text) = &self.text {
            painter.draw_text(rect, text, self.text_color, self.alignment);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Resize(e) => {
                self.base.set_size(e.new_size);
                self.recompute_render();
                false
            }
            WidgetEvent::Enter(_) => {
                self.base.set_hovered(true);
                false
            }
            WidgetEvent::Leave(_) => {
                self.base.set_hovered(false);
                false
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for ScalableImageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableImageLabel")
            .field("image_size", &self.image_size())
            .field("animated", &self.is_animated())
            .field("oversize", &self.oversize)
            .field("alignment", &self.alignment)
            .field("scaled_size", &self.scaled_size())
            .finish_non_exhaustive()
    }
}

// Thread safety assertion
static_assertions::assert_impl_all!(ScalableImageLabel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tessera_render::{AnimationFrame, DisplayList};

    use crate::widget::paint_widget;

    fn solid(width: u32, height: u32) -> Image {
        Image::from_color(PixelSize::new(width, height), Color::WHITE)
    }

    fn blink(delay_ms: u64) -> AnimatedImage {
        let delay = Duration::from_millis(delay_ms);
        let frames = vec![
            AnimationFrame::new(solid(20, 10), delay),
            AnimationFrame::new(
                Image::from_color(PixelSize::new(20, 10), Color::TRANSPARENT),
                delay,
            ),
        ];
        match AnimatedImage::from_frames(frames) {
            Ok(animation) => animation,
            Err(err) => panic!("animation: {err}"),
        }
    }

    #[test]
    fn test_defaults() {
        let label = ScalableImageLabel::new();
        assert!(label.is_empty());
        assert!(!label.oversize_allowed());
        assert!(label.shape_mask_enabled());
        assert_eq!(label.alignment(), Alignment::CENTER);
        assert_eq!(label.frame_count(), 0);
        assert_eq!(label.size_hint().preferred, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_downscale_keeps_aspect() {
        let mut label = ScalableImageLabel::new().with_image(solid(200, 100));
        label.resize(Size::new(50.0, 50.0));
        assert_eq!(label.scaled_size(), PixelSize::new(50, 25));
        assert_eq!(label.scaled_render().origin(), Point::new(0.0, 12.5));
    }

    #[test]
    fn test_oversize_toggle() {
        let mut label = ScalableImageLabel::new().with_image(solid(20, 10));
        label.resize(Size::new(80.0, 80.0));
        assert_eq!(label.scaled_size(), PixelSize::new(20, 10));

        label.set_oversize_allowed(true);
        assert_eq!(label.scaled_size(), PixelSize::new(80, 40));
    }

    #[test]
    fn test_alignment_origin() {
        let mut label = ScalableImageLabel::new()
            .with_image(solid(20, 10))
            .with_alignment(Alignment::new(HorizontalAlign::Right, VerticalAlign::Top));
        label.resize(Size::new(100.0, 50.0));
        assert_eq!(label.scaled_render().origin(), Point::new(80.0, 0.0));

        label.set_horizontal_align(HorizontalAlign::Left);
        label.set_vertical_align(VerticalAlign::Bottom);
        assert_eq!(label.scaled_render().origin(), Point::new(0.0, 40.0));
    }

    #[test]
    fn test_zero_size_renders_nothing() {
        let mut label = ScalableImageLabel::new().with_image(solid(20, 10));
        label.resize(Size::new(0.0, 30.0));
        assert_eq!(label.scaled_size(), PixelSize::ZERO);

        let mut list = DisplayList::new();
        paint_widget(&mut label, &mut list);
        assert_eq!(list.images().count(), 0);
    }

    #[test]
    fn test_empty_image_leaves_label_empty() {
        let mut label = ScalableImageLabel::new();
        label.set_image(Some(Image::from_color(PixelSize::ZERO, Color::WHITE)));
        assert!(label.is_empty());
        label.set_image(None);
        assert!(label.is_empty());
    }

    #[test]
    fn test_animation_adopts_frame_size() {
        let label = ScalableImageLabel::new().with_animation(blink(50));
        assert_eq!(label.size(), Size::new(20.0, 10.0));
        assert!(label.is_playing());
        assert_eq!(label.frame_count(), 2);
        assert_eq!(label.scaled_size(), PixelSize::new(20, 10));
    }

    #[test]
    fn test_update_animation_emits_frame() {
        let mut label = ScalableImageLabel::new().with_animation(blink(50));
        let frames = Arc::new(Mutex::new(Vec::new()));
        let frames_clone = frames.clone();
        label
            .frame_changed
            .connect(move |frame| frames_clone.lock().push(*frame));
        label.widget_base_mut().take_repaint();

        assert!(!label.update_animation(Duration::from_millis(20)));
        assert!(label.update_animation(Duration::from_millis(40)));
        assert_eq!(label.current_frame(), 1);
        assert!(label.needs_repaint());
        assert_eq!(*frames.lock(), vec![1]);
    }

    #[test]
    fn test_shape_mask_follows_frame() {
        let mut label = ScalableImageLabel::new().with_animation(blink(50));
        assert!(label.hit_test(Point::new(5.0, 5.0)));

        label.update_animation(Duration::from_millis(50));
        assert!(!label.hit_test(Point::new(5.0, 5.0)));

        label.set_shape_mask_enabled(false);
        assert!(label.hit_test(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_shape_mask_is_offset_by_origin() {
        let mut label = ScalableImageLabel::new().with_animation(blink(50));
        label.resize(Size::new(40.0, 30.0));
        assert_eq!(label.scaled_render().origin(), Point::new(10.0, 10.0));

        // Inside the widget but left of the centered frame.
        assert!(!label.hit_test(Point::new(5.0, 15.0)));
        assert!(label.hit_test(Point::new(12.0, 12.0)));
        assert!(label.hit_test(Point::new(29.0, 19.0)));
        assert!(!label.hit_test(Point::new(31.0, 15.0)));
        assert!(!label.hit_test(Point::new(15.0, 21.0)));

        label.update_animation(Duration::from_millis(50));
        assert!(!label.hit_test(Point::new(12.0, 12.0)));
    }

    #[test]
    fn test_extreme_ticks_do_not_panic() {
        let mut label = ScalableImageLabel::new().with_animation(blink(10));
        label.set_speed(1e20);
        label.update_animation(Duration::from_secs(1));
        label.set_speed(1.0);
        label.update_animation(Duration::from_secs(30 * 24 * 60 * 60));
        assert!(label.is_playing());
        assert!(label.current_frame() < label.frame_count());
    }

    #[test]
    fn test_static_content_has_no_mask() {
        let mut label = ScalableImageLabel::new()
            .with_image(Image::from_color(PixelSize::new(10, 10), Color::TRANSPARENT));
        label.resize(Size::new(10.0, 10.0));
        assert!(label.scaled_render().mask().is_none());
        assert!(label.hit_test(Point::new(5.0, 5.0)));
        assert!(!label.hit_test(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_replacing_animation_stops_ticks() {
        let mut label = ScalableImageLabel::new().with_animation(blink(10));
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        label.frame_changed.connect(move |_| *count_clone.lock() += 1);

        label.set_image(Some(solid(4, 4)));
        assert!(!label.is_animated());
        assert!(!label.is_playing());
        assert!(!label.update_animation(Duration::from_millis(100)));
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut label = ScalableImageLabel::new().with_animation(blink(10));
        label.pause();
        assert!(!label.is_playing());
        assert!(!label.update_animation(Duration::from_millis(100)));
        label.play();
        assert!(label.update_animation(Duration::from_millis(10)));
    }

    #[test]
    fn test_clear_emits_content_changed() {
        let mut label = ScalableImageLabel::new().with_image(solid(4, 4));
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        label.content_changed.connect(move |_| *count_clone.lock() += 1);

        label.clear();
        assert!(label.is_empty());
        assert_eq!(label.image_size(), None);
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_failed_load_leaves_label_empty() {
        let mut label = ScalableImageLabel::new().with_image(solid(4, 4));
        assert!(label.load_bytes(b"definitely not an image").is_err());
        assert!(label.is_empty());
    }

    #[test]
    fn test_paint_draws_image_then_text() {
        let mut label = ScalableImageLabel::new()
            .with_image(solid(10, 10))
            .with_text("caption");
        label.resize(Size::new(30.0, 10.0));

        let mut list = DisplayList::new();
        paint_widget(&mut label, &mut list);

        let images: Vec<_> = list.images().collect();
        assert_eq!(images.len(), 1);
        assert_eq!(*images[0].0, Point::new(10.0, 0.0));
        assert_eq!(list.texts().map(|(text, _)| text).collect::<Vec<_>>(), vec!["caption"]);
    }
}
