//! Gap resolution between stacked children.

use crate::{ChildViewLayoutOptions, LayoutChild};

/// The gap inserted before a child: the larger of what the previous side
/// asks for and what the child asks for.
#[must_use]
pub fn resolve_gap(previous_after: f32, margin_before: Option<f32>) -> f32 {
    previous_after.max(margin_before.unwrap_or(0.0))
}

/// Walks the gaps of one pass over the eligible children.
///
/// Call [`before`](Self::before) then [`after`](Self::after) for each child
/// in order, and [`closing`](Self::closing) once at the end.
#[derive(Clone, Copy, Debug)]
pub struct Margins {
    spacing: f32,
    padding_after: f32,
    previous_after: f32,
    stacked: bool,
}

impl Margins {
    /// Starts a pass; the first gap is at least `padding_before`.
    #[must_use]
    pub const fn new(options: &ChildViewLayoutOptions) -> Self {
        Self {
            spacing: options.spacing,
            padding_after: options.padding_after,
            previous_after: options.padding_before,
            stacked: false,
        }
    }

    /// Gap to insert before `child`.
    #[must_use]
    pub fn before(&self, child: &dyn LayoutChild) -> f32 {
        resolve_gap(self.previous_after, child.margin_before())
    }

    /// Records `child` as stacked. Its `margin_after` overrides the spacing
    /// for the next gap.
    pub fn after(&mut self, child: &dyn LayoutChild) {
        self.previous_after = child.margin_after().unwrap_or(self.spacing);
        self.stacked = true;
    }

    /// Gap after the last child, or zero when nothing was stacked.
    #[must_use]
    pub fn closing(&self) -> f32 {
        if self.stacked {
            self.previous_after.max(self.padding_after)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_takes_the_larger_side() {
        assert_eq!(resolve_gap(5.0, None), 5.0);
        assert_eq!(resolve_gap(5.0, Some(12.0)), 12.0);
        assert_eq!(resolve_gap(10.0, Some(3.0)), 10.0);
    }

    #[test]
    fn closing_is_zero_for_an_empty_pass() {
        let options = ChildViewLayoutOptions::spaced(5.0).padding(10.0, 20.0);
        assert_eq!(Margins::new(&options).closing(), 0.0);
    }
}
