//! The tree as seen by one container's child view layout.

use trellis_core::{Axis, Dimension};
use trellis_layout::{Adjustments, ChildViewLayoutOptions, LayoutChild, LayoutContainer};

use crate::{NodeId, ViewTree};

/// Exposes the node `id` of a [`ViewTree`] as a [`LayoutContainer`].
///
/// Holding the scope borrows the tree mutably, so two layouts can never run
/// on the same tree at once.
#[derive(Debug)]
pub struct ContainerScope<'a> {
    tree: &'a mut ViewTree,
    id: NodeId,
}

impl<'a> ContainerScope<'a> {
    /// Scopes `tree` to the container `id`.
    pub const fn new(tree: &'a mut ViewTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The container being laid out.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    fn child_id(&self, index: usize) -> Option<NodeId> {
        self.tree.children(self.id).get(index).copied()
    }
}

impl LayoutContainer for ContainerScope<'_> {
    fn child_view_layout_options(&self) -> ChildViewLayoutOptions {
        self.tree
            .node(self.id)
            .map(|node| node.child_view_layout_options())
            .unwrap_or_default()
    }

    fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }

    fn child(&self, index: usize) -> Option<&dyn LayoutChild> {
        let id = self.child_id(index)?;
        self.tree.node(id).map(|node| node as &dyn LayoutChild)
    }

    fn adjust_child(&mut self, index: usize, adjustments: &Adjustments) {
        let Some(id) = self.child_id(index) else {
            return;
        };
        if let Err(error) = self.tree.apply(id, adjustments) {
            tracing::warn!(target: "trellis::tree", ?id, "failed to adjust child: {error}");
        }
    }

    fn extent(&self, axis: Axis) -> f32 {
        self.tree
            .frame(self.id)
            .map_or(0.0, |frame| frame.extent(axis))
    }

    fn adjust(&mut self, dimension: Dimension, value: f32) {
        if let Err(error) = self.tree.adjust_dimension(self.id, dimension, value) {
            tracing::warn!(target: "trellis::tree", id = ?self.id, "failed to resize container: {error}");
        }
    }
}
