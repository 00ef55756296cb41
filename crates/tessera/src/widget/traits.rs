//! Core widget trait definitions.
//!
//! # Key Types
//!
//! - [`Widget`] - Base trait for all UI elements
//! - [`PaintContext`] - Drawing context passed to [`Widget::paint`]
//!
//! # Related Types
//!
//! - [`super::WidgetBase`] - Common implementation for widgets
//! - [`super::SizeHint`] - Layout size hints
//! - [`super::WidgetEvent`] - Events handled by widgets

use tessera_render::{Painter, Point, Rect, Size};

use super::base::WidgetBase;
use super::events::{ResizeEvent, WidgetEvent};
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// Borrows the host's painter for the duration of a single
/// [`Widget::paint`] call.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(painter: &'a mut dyn Painter, widget_rect: Rect) -> Self {
        Self {
            painter,
            widget_rect,
        }
    }

    /// Get the painter.
    #[inline]
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The base trait for all widgets.
///
/// Widgets are driven entirely by the host: it delivers input through
/// [`event`](Self::event), changes geometry through
/// [`resize`](Self::resize), and draws through [`paint`](Self::paint)
/// whenever [`needs_repaint`](Self::needs_repaint) reports true.
pub trait Widget: Send + Sync {
    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's preferred size.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// Painting never changes widget state; anything derived from geometry
    /// or content is prepared by the `&mut self` paths beforehand.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// Return `true` if the event was handled and should not propagate further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Get the widget's local rectangle.
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Resize the widget and deliver the matching [`ResizeEvent`].
    ///
    /// Does nothing if the size is unchanged.
    fn resize(&mut self, size: Size) {
        let old_size = self.size();
        if old_size == size {
            return;
        }
        self.widget_base_mut().set_size(size);
        let mut event = WidgetEvent::Resize(ResizeEvent::new(old_size, size));
        self.event(&mut event);
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget accepts input.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Enable or disable input handling.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Check if the mouse is currently hovering over this widget.
    fn is_hovered(&self) -> bool {
        self.widget_base().is_hovered()
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

/// Paint a widget onto `painter` and clear its repaint flag.
///
/// Hidden widgets draw nothing. Returns whether the widget had requested a
/// repaint.
pub fn paint_widget(widget: &mut dyn Widget, painter: &mut dyn Painter) -> bool {
    if widget.is_visible() {
        let mut ctx = PaintContext::new(painter, widget.rect());
        widget.paint(&mut ctx);
    }
    widget.widget_base_mut().take_repaint()
}
