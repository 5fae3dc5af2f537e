//! The contract between a container and its child view layout.
//!
//! # Host side
//!
//! The host owns the children. It exposes them through [`LayoutContainer`]
//! and [`LayoutChild`], decides *when* to run layout, and applies the edge
//! writes the policy hands back. Everything about observation and scheduling
//! stays on the host side; the policy only recomputes.
//!
//! # Policy side
//!
//! A [`ChildViewLayout`] is a strategy object picked per container. It reads
//! hints, computes positions, and writes them through
//! [`LayoutContainer::adjust_child`] and [`LayoutContainer::adjust`].

use core::fmt::Debug;
use core::slice;

use crate::{Axis, ChildViewLayoutOptions, Dimension, Edge, LayoutError, LayoutHint, Rect};

// ============================================================================
// Host abstractions
// ============================================================================

/// Read-only view of one child, as seen by a layout policy.
pub trait LayoutChild {
    /// Hidden children never take part in layout.
    fn is_visible(&self) -> bool;

    /// The child is positioned by its own hint and ignored by the stack.
    fn use_absolute_layout(&self) -> bool;

    /// The child flows statically and is ignored by the stack.
    fn use_static_layout(&self) -> bool;

    /// The child's current partial rectangle.
    fn layout(&self) -> &LayoutHint;

    /// Minimum gap required before this child.
    fn margin_before(&self) -> Option<f32>;

    /// Minimum gap required after this child. Replaces the container's
    /// spacing when set.
    fn margin_after(&self) -> Option<f32>;

    /// Share of the unclaimed space this child wants when it has no fixed size.
    fn fill_ratio(&self) -> Option<f32>;

    /// The child's current rendered rectangle, border included.
    fn border_frame(&self) -> Rect;
}

/// An ordered batch of edge writes for a single child.
///
/// Hosts apply a batch atomically: every field is written before any
/// notification the writes raise is delivered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Adjustments {
    writes: Vec<(Edge, f32)>,
}

impl Adjustments {
    /// An empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// Queues a write of `value` to `edge`.
    pub fn push(&mut self, edge: Edge, value: f32) {
        self.writes.push((edge, value));
    }

    /// Whether the batch holds no writes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Number of queued writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Iterates the writes in the order they were queued.
    pub fn iter(&self) -> slice::Iter<'_, (Edge, f32)> {
        self.writes.iter()
    }
}

impl<'a> IntoIterator for &'a Adjustments {
    type Item = &'a (Edge, f32);
    type IntoIter = slice::Iter<'a, (Edge, f32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A container as seen by its child view layout.
pub trait LayoutContainer {
    /// The options bag. Read on every invocation, never cached.
    fn child_view_layout_options(&self) -> ChildViewLayoutOptions;

    /// Number of children, eligible or not.
    fn child_count(&self) -> usize;

    /// The child at `index` in stacking order.
    fn child(&self, index: usize) -> Option<&dyn LayoutChild>;

    /// Applies a batch of edge writes to the child at `index`.
    fn adjust_child(&mut self, index: usize, adjustments: &Adjustments);

    /// The container's current extent along `axis`.
    fn extent(&self, axis: Axis) -> f32;

    /// Sets the container's own width or height.
    fn adjust(&mut self, dimension: Dimension, value: f32);
}

// ============================================================================
// Policy
// ============================================================================

/// A child property whose change invalidates the container's layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildProperty {
    /// [`LayoutChild::margin_before`].
    MarginBefore,
    /// [`LayoutChild::margin_after`].
    MarginAfter,
    /// [`LayoutChild::is_visible`].
    IsVisible,
}

/// Summary of a completed layout invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutReport {
    /// Total stacked extent, paddings included.
    pub extent: f32,
    /// Number of field writes issued (children and container).
    pub adjustments: usize,
    /// Number of children that took part in the stack.
    pub eligible: usize,
}

/// How a layout invocation ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutOutcome {
    /// The container's extent is not known yet; nothing was touched.
    Deferred,
    /// Every eligible child was positioned.
    Complete(LayoutReport),
}

impl LayoutOutcome {
    /// The report, if the invocation completed.
    #[must_use]
    pub const fn report(&self) -> Option<&LayoutReport> {
        match self {
            Self::Deferred => None,
            Self::Complete(report) => Some(report),
        }
    }
}

/// A strategy that positions a container's children.
pub trait ChildViewLayout: Debug {
    /// Whether the container must re-run layout when its own size changes,
    /// not only when its children change.
    fn layout_depends_on_size(&self, container: &dyn LayoutContainer) -> bool;

    /// Recomputes every child position once, synchronously.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] when a child's hints cannot be resolved. No
    /// field is written in that case.
    fn layout_children(
        &self,
        container: &mut dyn LayoutContainer,
    ) -> Result<LayoutOutcome, LayoutError>;

    /// Child properties the host should observe and re-run layout on.
    fn tracked_child_properties(&self) -> &'static [ChildProperty];
}
