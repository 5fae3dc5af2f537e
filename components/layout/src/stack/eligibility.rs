//! Which children take part in a stack.

use crate::{LayoutChild, LayoutContainer};

/// Whether `child` is stacked: visible, and neither absolutely nor statically
/// positioned.
#[must_use]
pub fn is_eligible(child: &dyn LayoutChild) -> bool {
    child.is_visible() && !child.use_absolute_layout() && !child.use_static_layout()
}

/// Lazily yields `(index, child)` for every stacked child, in stacking order.
pub fn eligible_children(
    container: &dyn LayoutContainer,
) -> impl Iterator<Item = (usize, &dyn LayoutChild)> + '_ {
    (0..container.child_count())
        .filter_map(move |index| container.child(index).map(|child| (index, child)))
        .filter(|(_, child)| is_eligible(*child))
}
