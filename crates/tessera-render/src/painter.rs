//! The 2D drawing interface used by widgets.
//!
//! [`Painter`] is the small set of operations the widgets need. Backends
//! implement it to draw for real; [`DisplayList`] implements it by recording
//! [`DrawCommand`]s, which a host can replay onto another painter and tests
//! can inspect directly.
//!
//! # Example
//!
//! ```
//! use tessera_render::{Color, DisplayList, DrawCommand, Painter, Rect};
//!
//! let mut list = DisplayList::new();
//! list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
//! ```

use crate::align::Alignment;
use crate::image::Image;
use crate::types::{Color, Point, Rect};

/// Quality hints for the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderHints {
    /// Anti-alias shape edges.
    pub antialiasing: bool,
    /// Use interpolated resampling when drawing images.
    pub smooth_pixmap_transform: bool,
}

impl RenderHints {
    /// All hints enabled.
    pub const HIGH_QUALITY: Self = Self {
        antialiasing: true,
        smooth_pixmap_transform: true,
    };
}

/// The core 2D drawing trait.
pub trait Painter {
    // =========================================================================
    // State
    // =========================================================================

    /// Set the render hints for subsequent drawing.
    fn set_render_hints(&mut self, hints: RenderHints);

    /// Get the current render hints.
    fn render_hints(&self) -> RenderHints;

    // =========================================================================
    // Shapes
    // =========================================================================

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    // =========================================================================
    // Text and images
    // =========================================================================

    /// Draw a single line of text aligned inside `rect`.
    fn draw_text(&mut self, rect: Rect, text: &str, color: Color, alignment: Alignment);

    /// Draw an image unscaled with its top-left corner at `origin`.
    fn draw_image(&mut self, origin: Point, image: &Image);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetRenderHints(RenderHints),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        alignment: Alignment,
    },
    Image {
        origin: Point,
        image: Image,
    },
}

/// A [`Painter`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    hints: RenderHints,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands and reset the hints.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.hints = RenderHints::default();
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replay the recorded commands onto another painter.
    pub fn replay(&self, painter: &mut dyn Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::SetRenderHints(hints) => painter.set_render_hints(*hints),
                DrawCommand::FillRect { rect, color } => painter.fill_rect(*rect, *color),
                DrawCommand::StrokeRect { rect, color, width } => {
                    painter.stroke_rect(*rect, *color, *width)
                }
                DrawCommand::Text {
                    rect,
                    text,
                    color,
                    alignment,
                } => painter.draw_text(*rect, text, *color, *alignment),
                DrawCommand::Image { origin, image } => painter.draw_image(*origin, image),
            }
        }
    }

    /// Iterate over the recorded fills.
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// Iterate over the recorded text runs.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), color)),
            _ => None,
        })
    }

    /// Iterate over the recorded images.
    pub fn images(&self) -> impl Iterator<Item = (&Point, &Image)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { origin, image } => Some((origin, image)),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn set_render_hints(&mut self, hints: RenderHints) {
        self.hints = hints;
        self.commands.push(DrawCommand::SetRenderHints(hints));
    }

    fn render_hints(&self) -> RenderHints {
        self.hints
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Color, alignment: Alignment) {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_owned(),
            color,
            alignment,
        });
    }

    fn draw_image(&mut self, origin: Point, image: &Image) {
        self.commands.push(DrawCommand::Image {
            origin,
            image: image.clone(),
        });
    }
}
