//! Size hints for widget layout.

use tessera_render::Size;

/// Size preferences reported by a widget.
///
/// Hosts use this to pick an initial size; the widget still has to cope
/// with whatever size it is finally given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the widget can shrink to zero.
    pub minimum: Option<Size>,

    /// The maximum size. If `None`, the widget can grow indefinitely.
    pub maximum: Option<Size>,
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set minimum dimensions.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Get the effective minimum size (returns zero if not set).
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }

    /// Get the effective maximum size (returns a very large size if not set).
    pub fn effective_maximum(&self) -> Size {
        self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX))
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.effective_minimum();
        let max = self.effective_maximum();

        Size::new(
            size.width.clamp(min.width, max.width.max(min.width)),
            size.height.clamp(min.height, max.height.max(min.height)),
        )
    }
}
