//! Partial layout hints.
//!
//! A [`LayoutHint`] is what a child declares about its own rectangle. Any
//! field may be left out; the host fills the gaps when it resolves the hint
//! against the parent's size (see [`LayoutHint::resolve`]). Stack policies
//! read hints and write back only the positional fields.

use core::fmt;

use crate::layout::{Axis, Dimension, Edge, Point, Rect, Size};

/// A partial rectangle declared by a child.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutHint {
    /// Distance from the parent's left side.
    pub left: Option<f32>,
    /// Distance from the parent's right side.
    pub right: Option<f32>,
    /// Fixed width.
    pub width: Option<f32>,
    /// Lower bound for the width.
    pub min_width: Option<f32>,
    /// Distance from the parent's top side.
    pub top: Option<f32>,
    /// Distance from the parent's bottom side.
    pub bottom: Option<f32>,
    /// Fixed height.
    pub height: Option<f32>,
    /// Lower bound for the height.
    pub min_height: Option<f32>,
    /// Border thickness, drawn inside the resolved rectangle.
    pub border: f32,
}

impl LayoutHint {
    /// An empty hint; resolves to the whole parent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: None,
            right: None,
            width: None,
            min_width: None,
            top: None,
            bottom: None,
            height: None,
            min_height: None,
            border: 0.0,
        }
    }

    /// Sets `left`.
    #[must_use]
    pub const fn left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }

    /// Sets `right`.
    #[must_use]
    pub const fn right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    /// Sets `width`.
    #[must_use]
    pub const fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    /// Sets `min_width`.
    #[must_use]
    pub const fn min_width(mut self, value: f32) -> Self {
        self.min_width = Some(value);
        self
    }

    /// Sets `top`.
    #[must_use]
    pub const fn top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    /// Sets `bottom`.
    #[must_use]
    pub const fn bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    /// Sets `height`.
    #[must_use]
    pub const fn height(mut self, value: f32) -> Self {
        self.height = Some(value);
        self
    }

    /// Sets `min_height`.
    #[must_use]
    pub const fn min_height(mut self, value: f32) -> Self {
        self.min_height = Some(value);
        self
    }

    /// Sets the border thickness.
    #[must_use]
    pub const fn border(mut self, value: f32) -> Self {
        self.border = value;
        self
    }

    /// The positional field for `edge`.
    #[must_use]
    pub const fn edge(&self, edge: Edge) -> Option<f32> {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Overwrites the positional field for `edge`.
    pub const fn set_edge(&mut self, edge: Edge, value: Option<f32>) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Right => self.right = value,
            Edge::Top => self.top = value,
            Edge::Bottom => self.bottom = value,
        }
    }

    /// The size field for `dimension`.
    #[must_use]
    pub const fn dimension(&self, dimension: Dimension) -> Option<f32> {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Overwrites the size field for `dimension`.
    pub const fn set_dimension(&mut self, dimension: Dimension, value: Option<f32>) {
        match dimension {
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }

    /// Leading position along `axis` (`left` or `top`).
    #[must_use]
    pub const fn leading(&self, axis: Axis) -> Option<f32> {
        self.edge(axis.leading_edge())
    }

    /// Trailing position along `axis` (`right` or `bottom`).
    #[must_use]
    pub const fn trailing(&self, axis: Axis) -> Option<f32> {
        self.edge(axis.trailing_edge())
    }

    /// Fixed size along `axis` (`width` or `height`).
    #[must_use]
    pub const fn size(&self, axis: Axis) -> Option<f32> {
        self.dimension(axis.dimension())
    }

    /// Minimum size along `axis` (`min_width` or `min_height`).
    #[must_use]
    pub const fn min_size(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// Resolves the hint into a border frame inside a parent of `parent` size.
    ///
    /// Along each axis:
    ///
    /// 1. a fixed size wins; the position comes from the leading field, else
    ///    from the trailing field, else 0;
    /// 2. without a size, a trailing field stretches the child between its
    ///    leading position and the trailing inset;
    /// 3. with neither, the minimum size is used if present, otherwise the
    ///    child fills the rest of the parent.
    ///
    /// Resolved sizes never go below zero or below the minimum size.
    #[must_use]
    pub fn resolve(&self, parent: Size) -> Rect {
        let (x, width) = self.resolve_axis(Axis::Horizontal, parent.width);
        let (y, height) = self.resolve_axis(Axis::Vertical, parent.height);
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    /// The content rectangle: the border frame inset by the border.
    #[must_use]
    pub fn content_frame(&self, parent: Size) -> Rect {
        self.resolve(parent).inset(self.border)
    }

    fn resolve_axis(&self, axis: Axis, parent: f32) -> (f32, f32) {
        let minimum = self.min_size(axis).unwrap_or(0.0);
        let leading = self.leading(axis);
        let trailing = self.trailing(axis);

        match (self.size(axis), trailing) {
            (Some(size), _) => {
                let size = size.max(minimum).max(0.0);
                let position = match (leading, trailing) {
                    (Some(leading), _) => leading,
                    (None, Some(trailing)) => parent - trailing - size,
                    (None, None) => 0.0,
                };
                (position, size)
            }
            (None, Some(trailing)) => {
                let position = leading.unwrap_or(0.0);
                let size = (parent - position - trailing).max(minimum).max(0.0);
                (position, size)
            }
            (None, None) => {
                let position = leading.unwrap_or(0.0);
                let size = self
                    .min_size(axis)
                    .unwrap_or(parent - position)
                    .max(0.0);
                (position, size)
            }
        }
    }
}

impl fmt::Display for LayoutHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("left", self.left),
            ("right", self.right),
            ("width", self.width),
            ("minWidth", self.min_width),
            ("top", self.top),
            ("bottom", self.bottom),
            ("height", self.height),
            ("minHeight", self.min_height),
            ("border", (self.border != 0.0).then_some(self.border)),
        ];

        f.write_str("{")?;
        let mut first = true;
        for (name, value) in fields {
            if let Some(value) = value {
                let separator = if first { " " } else { ", " };
                write!(f, "{separator}{name}: {value}")?;
                first = false;
            }
        }
        f.write_str(if first { "}" } else { " }" })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn fixed_width_uses_leading_edge() {
        let hint = LayoutHint::new().left(10.0).width(100.0);
        let frame = hint.resolve(Size::new(500.0, 40.0));

        assert_eq!(frame.x(), 10.0);
        assert_eq!(frame.width(), 100.0);
        assert_eq!(frame.height(), 40.0);
    }

    #[test]
    fn fixed_width_pinned_to_trailing_edge() {
        let hint = LayoutHint::new().right(20.0).width(100.0);
        let frame = hint.resolve(Size::new(500.0, 40.0));

        assert_eq!(frame.x(), 380.0);
        assert_eq!(frame.width(), 100.0);
    }

    #[test]
    fn leading_and_trailing_derive_width() {
        let hint = LayoutHint::new().left(115.0).right(265.0).border(1.0);
        let frame = hint.resolve(Size::new(500.0, 40.0));

        assert_eq!(frame.width(), 120.0);
        assert_eq!(hint.content_frame(Size::new(500.0, 40.0)).width(), 118.0);
    }

    #[test]
    fn min_width_without_anchor() {
        let hint = LayoutHint::new().left(5.0).min_width(30.0);
        assert_eq!(hint.resolve(Size::new(500.0, 40.0)).width(), 30.0);

        let hint = LayoutHint::new().left(5.0).right(490.0).min_width(30.0);
        assert_eq!(hint.resolve(Size::new(500.0, 40.0)).width(), 30.0);
    }

    #[test]
    fn empty_hint_fills_parent() {
        let frame = LayoutHint::new().left(10.0).resolve(Size::new(500.0, 40.0));
        assert_eq!(frame.width(), 490.0);
        assert_eq!(frame.y(), 0.0);
    }

    #[test]
    fn display_lists_set_fields_only() {
        let hint = LayoutHint::new().left(10.0).width(100.0).border(1.0);
        assert_eq!(hint.to_string(), "{ left: 10, width: 100, border: 1 }");
        assert_eq!(LayoutHint::new().to_string(), "{}");
    }
}
