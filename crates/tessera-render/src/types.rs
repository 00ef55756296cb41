//! Basic geometry and color types for rendering.
//!
//! Widget geometry is expressed in floating point logical units ([`Point`],
//! [`Size`], [`Rect`]); image dimensions use whole pixels ([`PixelSize`]).

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whole-pixel size covered by this size, truncating fractions.
    ///
    /// Negative and NaN extents become zero.
    #[inline]
    pub fn to_pixels(self) -> PixelSize {
        PixelSize::new(self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

impl From<PixelSize> for Size {
    fn from(size: PixelSize) -> Self {
        Self {
            width: size.width as f32,
            height: size.height as f32,
        }
    }
}

/// An integer size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Create a new pixel size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise minimum of the two sizes.
    #[inline]
    pub fn bounded_to(self, other: PixelSize) -> PixelSize {
        PixelSize::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Scale this size to the largest size that fits inside `target` while
    /// keeping the aspect ratio.
    ///
    /// Returns [`PixelSize::ZERO`] if either size is empty.
    pub fn scaled_keep_aspect(self, target: PixelSize) -> PixelSize {
        if self.is_empty() || target.is_empty() {
            return PixelSize::ZERO;
        }

        let (w, h) = (u64::from(self.width), u64::from(self.height));
        let (tw, th) = (u64::from(target.width), u64::from(target.height));

        // Fit to height first; fall back to width if that overflows.
        let fit_width = th * w / h;
        let (rw, rh) = if fit_width <= tw {
            (fit_width, th)
        } else {
            (tw, tw * h / w)
        };

        PixelSize::new(rw as u32, rh as u32)
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Move each edge by the given deltas.
    ///
    /// Positive `dx1`/`dy1` move the top-left corner right/down; negative
    /// `dx2`/`dy2` move the bottom-right corner left/up.
    #[inline]
    pub fn adjusted(&self, dx1: f32, dy1: f32, dx2: f32, dy2: f32) -> Rect {
        Rect::new(
            self.origin.x + dx1,
            self.origin.y + dy1,
            self.size.width - dx1 + dx2,
            self.size.height - dy1 + dy2,
        )
    }

    /// Shrink the rectangle by the given amount on all sides.
    #[inline]
    pub fn deflate(&self, amount: f32) -> Rect {
        self.adjusted(amount, amount, -amount, -amount)
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            origin: Point {
                x: self.origin.x + dx,
                y: self.origin.y + dy,
            },
            size: self.size,
        }
    }
}

/// An 8-bit RGBA color (straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);

    /// Create a color from a 32-bit RGBA value (0xRRGGBBAA).
    #[inline]
    pub const fn from_u32(rgba: u32) -> Self {
        Self::from_rgba8(
            ((rgba >> 24) & 0xFF) as u8,
            ((rgba >> 16) & 0xFF) as u8,
            ((rgba >> 8) & 0xFF) as u8,
            (rgba & 0xFF) as u8,
        )
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The RGB components as a tuple.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The RGBA components as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The HSV value channel, `max(r, g, b)`.
    #[inline]
    pub fn value(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Convert to hue (degrees, `0.0..360.0`), saturation and value (`0..=255`).
    ///
    /// Achromatic colors report a hue of `0.0`.
    pub fn to_hsv(self) -> (f32, u8, u8) {
        let max = self.value();
        let min = self.r.min(self.g).min(self.b);
        let delta = f32::from(max - min);

        if max == 0 || delta == 0.0 {
            return (0.0, 0, max);
        }

        let s = (255.0 * delta / f32::from(max)).round() as u8;
        let (r, g, b) = (f32::from(self.r), f32::from(self.g), f32::from(self.b));

        let mut h = if max == self.r {
            60.0 * ((g - b) / delta)
        } else if max == self.g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        if h < 0.0 {
            h += 360.0;
        }

        (h, s, max)
    }

    /// Build an opaque color from hue (degrees), saturation and value.
    pub fn from_hsv(h: f32, s: u8, v: u8) -> Self {
        if s == 0 {
            return Self::from_rgb8(v, v, v);
        }

        let h = h.rem_euclid(360.0) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let v_f = f32::from(v);
        let s_f = f32::from(s) / 255.0;

        let p = (v_f * (1.0 - s_f)).round() as u8;
        let q = (v_f * (1.0 - s_f * f)).round() as u8;
        let t = (v_f * (1.0 - s_f * (1.0 - f))).round() as u8;

        match sector as u8 {
            0 => Self::from_rgb8(v, t, p),
            1 => Self::from_rgb8(q, v, p),
            2 => Self::from_rgb8(p, v, t),
            3 => Self::from_rgb8(p, q, v),
            4 => Self::from_rgb8(t, p, v),
            _ => Self::from_rgb8(v, p, q),
        }
    }

    /// A darker color: the HSV value is divided by `factor / 100`.
    ///
    /// `darker(115)` yields a color about 15% darker. Alpha is preserved and
    /// factors of 100 or less return the color unchanged.
    pub fn darker(self, factor: u32) -> Self {
        if factor <= 100 {
            return self;
        }
        let (h, s, v) = self.to_hsv();
        let v = (u32::from(v) * 100 / factor) as u8;
        Self::from_hsv(h, s, v).with_alpha(self.a)
    }

    /// A lighter color: the HSV value is multiplied by `factor / 100`.
    ///
    /// If the value would exceed 255, the overflow is taken from the
    /// saturation instead, so saturated colors wash out towards white.
    /// Alpha is preserved and factors of 100 or less return the color
    /// unchanged.
    pub fn lighter(self, factor: u32) -> Self {
        if factor <= 100 {
            return self;
        }
        let (h, s, v) = self.to_hsv();
        let mut s = u32::from(s);
        let mut v = u32::from(v) * factor / 100;
        if v > 255 {
            s = s.saturating_sub(v - 255);
            v = 255;
        }
        Self::from_hsv(h, s as u8, v as u8).with_alpha(self.a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}
