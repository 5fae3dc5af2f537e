//! Linear stack layouts.
//!
//! [`StackLayout`] places the eligible children of a container one after
//! another along an [`Axis`]. Between two children it inserts the larger of
//! the previous child's trailing margin (or the container's spacing) and the
//! next child's leading margin.
//!
//! Two modes, chosen by [`ChildViewLayoutOptions::resize_to_fit`]:
//!
//! - **Resize to fit** (default): every child keeps its size and the
//!   container adopts the total stacked extent.
//! - **Fixed size**: the container keeps its extent. Children without a size
//!   split the unclaimed space by [`fill_ratio`](crate::LayoutChild::fill_ratio);
//!   if nobody declares a ratio the last child takes it all.
//!
//! Every invocation recomputes the whole stack from scratch.

mod accounting;
mod assignment;
mod eligibility;
mod margin;
mod sizing;

pub use eligibility::{eligible_children, is_eligible};
pub use margin::resolve_gap;

use crate::{
    Axis, ChildProperty, ChildViewLayout, LayoutContainer, LayoutError, LayoutOutcome,
    LayoutReport,
};

/// Stacks children left to right.
pub const HORIZONTAL_STACK: StackLayout = StackLayout::horizontal();

/// Stacks children top to bottom.
pub const VERTICAL_STACK: StackLayout = StackLayout::vertical();

const TRACKED_CHILD_PROPERTIES: &[ChildProperty] = &[
    ChildProperty::MarginBefore,
    ChildProperty::MarginAfter,
    ChildProperty::IsVisible,
];

/// A child view layout that stacks children along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackLayout {
    axis: Axis,
}

impl StackLayout {
    /// A stack along `axis`.
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// A left-to-right stack.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// A top-to-bottom stack.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// The stack axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }
}

impl ChildViewLayout for StackLayout {
    fn layout_depends_on_size(&self, container: &dyn LayoutContainer) -> bool {
        !container.child_view_layout_options().resize_to_fit
    }

    fn layout_children(
        &self,
        container: &mut dyn LayoutContainer,
    ) -> Result<LayoutOutcome, LayoutError> {
        let axis = self.axis;
        let options = container.child_view_layout_options();
        let container_extent = container.extent(axis);

        // A fixed-size container that has no size yet cannot share anything.
        if !options.resize_to_fit && (container_extent.is_nan() || container_extent <= 0.0) {
            tracing::trace!(target: "trellis::layout", ?axis, "container extent unknown, deferring");
            return Ok(LayoutOutcome::Deferred);
        }

        let slots = sizing::classify(&*container, axis, &options).inspect_err(|error| {
            tracing::warn!(
                target: "trellis::layout",
                child = error.index(),
                "invalid child layout: {error}"
            );
        })?;

        let fill = if options.resize_to_fit {
            None
        } else {
            Some(accounting::measure(
                &*container,
                axis,
                &options,
                &slots,
                container_extent,
            ))
        };
        if let Some(fill) = fill {
            tracing::trace!(
                target: "trellis::layout",
                available = fill.available,
                ratio_sum = fill.ratio_sum,
                "measured unclaimed space"
            );
        }

        let placement = assignment::place(container, axis, &options, &slots, fill, container_extent);
        let mut adjustments = placement.adjustments;

        if options.resize_to_fit && container.extent(axis) != placement.extent {
            container.adjust(axis.dimension(), placement.extent);
            adjustments += 1;
        }

        let report = LayoutReport {
            extent: placement.extent,
            adjustments,
            eligible: slots.len(),
        };
        tracing::debug!(target: "trellis::layout", ?axis, ?report, "stacked children");

        Ok(LayoutOutcome::Complete(report))
    }

    fn tracked_child_properties(&self) -> &'static [ChildProperty] {
        TRACKED_CHILD_PROPERTIES
    }
}
