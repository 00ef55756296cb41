//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common state shared by all
//! widgets: geometry, visibility, enabled state, hover tracking and the
//! repaint flag.

use tessera_core::Signal;
use tessera_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```ignore
/// use tessera::widget::{PaintContext, SizeHint, Widget, WidgetBase};
///
/// struct Swatch {
///     base: WidgetBase,
/// }
///
/// impl Widget for Swatch {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::from_dimensions(16.0, 16.0)
///     }
///
///     fn paint(&self, ctx: &mut PaintContext<'_>) {
///         // ...
///     }
/// }
/// ```
pub struct WidgetBase {
    /// Position relative to the parent and size.
    geometry: Rect,
    visible: bool,
    enabled: bool,
    hovered: bool,
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when the widget asks to be repainted.
    ///
    /// Requests are coalesced: the signal fires once per transition of the
    /// repaint flag from clear to set.
    pub repaint_requested: Signal<()>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            hovered: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            repaint_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// This will emit `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size, keeping its position.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect::from_origin_size(self.geometry.origin, size));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.geometry.size)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Visibility / Enabled
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    /// Check if the widget accepts input.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    // =========================================================================
    // Hover State
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (driven by enter/leave events).
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        if !self.needs_repaint {
            self.needs_repaint = true;
            self.repaint_requested.emit(());
        }
    }

    /// Clear the repaint flag, returning whether it was set.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::replace(&mut self.needs_repaint, false)
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("hovered", &self.hovered)
            .field("needs_repaint", &self.needs_repaint)
            .finish()
    }
}
