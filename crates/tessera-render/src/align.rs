//! Content alignment within a bounding area.
//!
//! Each axis is aligned independently: [`HorizontalAlign`] picks the x
//! offset and [`VerticalAlign`] the y offset of content placed inside a
//! larger (or smaller) available area.

use crate::types::{Point, Size};

/// Horizontal alignment of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlign {
    /// X offset of content of width `content` inside width `available`.
    ///
    /// The result is negative when the content is wider than the area.
    #[inline]
    pub fn offset(self, available: f32, content: f32) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => (available - content) / 2.0,
            Self::Right => available - content,
        }
    }
}

/// Vertical alignment of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlign {
    /// Y offset of content of height `content` inside height `available`.
    #[inline]
    pub fn offset(self, available: f32, content: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => (available - content) / 2.0,
            Self::Bottom => available - content,
        }
    }
}

/// Combined two-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        horizontal: HorizontalAlign::Center,
        vertical: VerticalAlign::Center,
    };

    /// Create a new alignment.
    #[inline]
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Draw origin of `content` placed inside `available`, relative to the
    /// top-left corner of the available area.
    #[inline]
    pub fn origin_for(self, available: Size, content: Size) -> Point {
        Point::new(
            self.horizontal.offset(available.width, content.width),
            self.vertical.offset(available.height, content.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_offsets() {
        assert_eq!(HorizontalAlign::Left.offset(100.0, 40.0), 0.0);
        assert_eq!(HorizontalAlign::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(HorizontalAlign::Right.offset(100.0, 40.0), 60.0);
    }

    #[test]
    fn test_vertical_offsets() {
        assert_eq!(VerticalAlign::Top.offset(50.0, 20.0), 0.0);
        assert_eq!(VerticalAlign::Center.offset(50.0, 20.0), 15.0);
        assert_eq!(VerticalAlign::Bottom.offset(50.0, 20.0), 30.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let align = Alignment::new(HorizontalAlign::Right, VerticalAlign::Top);
        let origin = align.origin_for(Size::new(200.0, 100.0), Size::new(50.0, 25.0));
        assert_eq!(origin, Point::new(150.0, 0.0));
    }

    #[test]
    fn test_default_is_centered() {
        assert_eq!(Alignment::default(), Alignment::CENTER);
    }
}
