//! Geometry types for the `Trellis` layout system.
//!
//! All values are **logical pixels** (points). Hosts convert to physical
//! pixels when they draw; the layout policies never see device pixels.

use core::fmt;

// ============================================================================
// Axis, Edge, Dimension
// ============================================================================

/// The direction a stack arranges its children along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The edge a child is positioned by along this axis.
    #[must_use]
    pub const fn leading_edge(self) -> Edge {
        match self {
            Self::Horizontal => Edge::Left,
            Self::Vertical => Edge::Top,
        }
    }

    /// The edge that pins a child's far side along this axis.
    #[must_use]
    pub const fn trailing_edge(self) -> Edge {
        match self {
            Self::Horizontal => Edge::Right,
            Self::Vertical => Edge::Bottom,
        }
    }

    /// The size component measured along this axis.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Horizontal => Dimension::Width,
            Self::Vertical => Dimension::Height,
        }
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A positional field of a [`LayoutHint`](crate::LayoutHint).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Distance from the parent's left side.
    Left,
    /// Distance from the parent's right side.
    Right,
    /// Distance from the parent's top side.
    Top,
    /// Distance from the parent's bottom side.
    Bottom,
}

impl Edge {
    /// Lowercase field name, as printed in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// The axis this edge positions along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A size field of a [`LayoutHint`](crate::LayoutHint).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Dimension {
    /// Lowercase field name, as printed in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    /// The axis this dimension is measured along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Width => Axis::Horizontal,
            Self::Height => Axis::Vertical,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Position of the leading side along `axis`.
    #[must_use]
    pub const fn position(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.origin.x,
            Axis::Vertical => self.origin.y,
        }
    }

    /// Width or height, depending on `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        self.size.extent(axis)
    }

    /// Inset the rectangle by the same amount on every edge.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            Point::new(self.origin.x + amount, self.origin.y + amount),
            Size::new(
                (self.size.width - amount * 2.0).max(0.0),
                (self.size.height - amount * 2.0).max(0.0),
            ),
        )
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Width or height, depending on `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.position(Axis::Horizontal), 10.0);
        assert_eq!(rect.position(Axis::Vertical), 20.0);
        assert_eq!(rect.extent(Axis::Horizontal), 100.0);
        assert_eq!(rect.extent(Axis::Vertical), 50.0);
    }

    #[test]
    fn test_rect_inset_clamps() {
        let rect = Rect::from_size(Size::new(10.0, 4.0));
        let inset = rect.inset(3.0);

        assert_eq!(inset.x(), 3.0);
        assert_eq!(inset.width(), 4.0);
        assert_eq!(inset.height(), 0.0);
    }

    #[test]
    fn test_axis_fields() {
        assert_eq!(Axis::Horizontal.leading_edge(), Edge::Left);
        assert_eq!(Axis::Horizontal.trailing_edge(), Edge::Right);
        assert_eq!(Axis::Vertical.leading_edge(), Edge::Top);
        assert_eq!(Axis::Vertical.dimension(), Dimension::Height);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Edge::Bottom.axis(), Axis::Vertical);
        assert_eq!(Dimension::Width.name(), "width");
    }
}
