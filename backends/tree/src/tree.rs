//! The view tree arena.

use core::mem;

use nami::watcher::BoxWatcherGuard;
use trellis_core::{Dimension, Edge, LayoutHint, Rect, Size};
use trellis_layout::{Adjustments, ChildViewLayout, ChildViewLayoutOptions, LayoutChild};

use crate::{ContainerScope, LayoutSignal, TreeError, ViewNode};

/// Identifier for a node stored inside the [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a new [`NodeId`] from the raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index backing this identifier.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Reason why a node requires processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyReason {
    /// The node's children must be laid out again.
    Layout,
    /// The node's resolved frame changed.
    Frame,
    /// A tracked property of one of the node's children changed.
    Reactive,
}

/// Entry describing a node that needs work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyNode {
    /// The affected node identifier.
    pub id: NodeId,
    /// Why the node became dirty.
    pub reason: DirtyReason,
}

struct NodeEntry {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node: ViewNode,
    signal: LayoutSignal,
    // Watchers installed on this node for its parent's policy.
    watches: Vec<BoxWatcherGuard>,
}

impl NodeEntry {
    fn new(node: ViewNode, parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            node,
            signal: LayoutSignal::new(),
            watches: Vec::new(),
        }
    }
}

impl core::fmt::Debug for NodeEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeEntry")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("node", &self.node)
            .field("watches", &self.watches.len())
            .finish_non_exhaustive()
    }
}

/// Arena storing the views and their resolved frames.
#[derive(Debug)]
pub struct ViewTree {
    nodes: Vec<NodeEntry>,
    root: Option<NodeId>,
    viewport: Size,
    dirty: Vec<DirtyNode>,
    pending: Vec<DirtyNode>,
    batch_depth: usize,
    adjustments: usize,
}

impl ViewTree {
    /// Creates an empty tree whose root resolves against `viewport`.
    #[must_use]
    pub const fn new(viewport: Size) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            viewport,
            dirty: Vec::new(),
            pending: Vec::new(),
            batch_depth: 0,
            adjustments: 0,
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Replaces the root node of the tree, clearing any existing nodes.
    ///
    /// # Errors
    ///
    /// Fails with [`TreeError::BatchOpen`] inside [`batch`](Self::batch).
    pub fn set_root(&mut self, node: ViewNode) -> Result<NodeId, TreeError> {
        self.ensure_no_batch()?;
        self.nodes.clear();
        self.dirty.clear();

        let root = self.push_entry(NodeEntry::new(node, None));
        self.root = Some(root);
        self.refresh_frame(root);
        self.invalidate_layout(root);
        Ok(root)
    }

    /// Appends a child under `parent`, at the end of its stacking order.
    ///
    /// # Errors
    ///
    /// Fails if `parent` does not exist or a batch is open.
    pub fn insert_child(&mut self, parent: NodeId, node: ViewNode) -> Result<NodeId, TreeError> {
        self.ensure_no_batch()?;
        self.entry(parent)?;

        let id = self.push_entry(NodeEntry::new(node, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        self.watch_child(parent, id);
        self.refresh_frame(id);
        self.invalidate_layout(parent);
        Ok(id)
    }

    /// Returns the root node identifier, if one exists.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the child identifiers for the provided node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |entry| entry.children.as_slice())
    }

    /// Returns the parent of the provided node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|entry| entry.parent)
    }

    /// Returns the node stored under `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ViewNode> {
        self.nodes.get(id.index()).map(|entry| &entry.node)
    }

    /// Returns the resolved border frame of `id`.
    #[must_use]
    pub fn frame(&self, id: NodeId) -> Option<Rect> {
        self.node(id).map(ViewNode::frame)
    }

    /// Returns the total number of nodes stored in this tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no node.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------
    // Node state
    // ------------------------------------------------------------------

    /// Resizes the viewport the root resolves against.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        if let Some(root) = self.root {
            self.refresh_frame(root);
        }
    }

    /// Replaces the hint of `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_layout(&mut self, id: NodeId, layout: LayoutHint) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.layout = layout;
        self.refresh_frame(id);
        self.invalidate_parent(id);
        Ok(())
    }

    /// Changes the fill ratio of `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_fill_ratio(&mut self, id: NodeId, ratio: Option<f32>) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.fill_ratio = ratio;
        self.invalidate_parent(id);
        Ok(())
    }

    /// Takes `id` in or out of its parent's stack by absolute positioning.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_absolute(&mut self, id: NodeId, absolute: bool) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.use_absolute_layout = absolute;
        self.invalidate_parent(id);
        Ok(())
    }

    /// Takes `id` in or out of its parent's stack by static positioning.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_static(&mut self, id: NodeId, static_layout: bool) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.use_static_layout = static_layout;
        self.invalidate_parent(id);
        Ok(())
    }

    /// Replaces the options of the child view layout of `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_child_view_layout_options(
        &mut self,
        id: NodeId,
        options: ChildViewLayoutOptions,
    ) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.child_view_layout_options = options;
        self.invalidate_layout(id);
        Ok(())
    }

    /// Installs a new child view layout on `id` and re-watches its children.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn set_child_view_layout(
        &mut self,
        id: NodeId,
        layout: Option<Box<dyn ChildViewLayout>>,
    ) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.child_view_layout = layout;
        for child in self.children(id).to_vec() {
            self.watch_child(id, child);
        }
        self.invalidate_layout(id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Adjustments
    // ------------------------------------------------------------------

    /// Writes a single edge of `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn adjust(&mut self, id: NodeId, edge: Edge, value: f32) -> Result<(), TreeError> {
        self.entry_mut(id)?.node.layout.set_edge(edge, Some(value));
        self.adjustments += 1;
        self.refresh_frame(id);
        Ok(())
    }

    /// Writes the width or height of `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn adjust_dimension(
        &mut self,
        id: NodeId,
        dimension: Dimension,
        value: f32,
    ) -> Result<(), TreeError> {
        self.entry_mut(id)?
            .node
            .layout
            .set_dimension(dimension, Some(value));
        self.adjustments += 1;
        self.refresh_frame(id);
        Ok(())
    }

    /// Applies every write of `adjustments` to `id` as one batch: the fields
    /// are written together, the frame is resolved once, and notifications
    /// are delivered when the batch closes.
    ///
    /// # Errors
    ///
    /// Fails if `id` does not exist.
    pub fn apply(&mut self, id: NodeId, adjustments: &Adjustments) -> Result<(), TreeError> {
        self.entry(id)?;
        self.batch(|tree| {
            let layout = &mut tree.nodes[id.index()].node.layout;
            for &(edge, value) in adjustments {
                layout.set_edge(edge, Some(value));
            }
            tree.adjustments += adjustments.len();
            tree.refresh_frame(id);
        });
        Ok(())
    }

    /// Runs `f` with notifications deferred until it returns.
    ///
    /// Batches nest; notifications are flushed when the outermost batch
    /// closes.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.batch_depth += 1;
        let result = f(self);
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            for notification in mem::take(&mut self.pending) {
                self.mark_dirty(notification.id, notification.reason);
            }
        }
        result
    }

    /// Number of field writes applied through [`adjust`](Self::adjust),
    /// [`adjust_dimension`](Self::adjust_dimension) and [`apply`](Self::apply).
    #[must_use]
    pub const fn adjustment_count(&self) -> usize {
        self.adjustments
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Marks a node as dirty for the provided reason.
    pub fn mark_dirty(&mut self, id: NodeId, reason: DirtyReason) {
        if self
            .dirty
            .iter()
            .any(|entry| entry.id == id && entry.reason == reason)
        {
            return;
        }
        self.dirty.push(DirtyNode { id, reason });
    }

    /// Whether `id` has a delivered notification for `reason`.
    #[must_use]
    pub fn is_dirty(&self, id: NodeId, reason: DirtyReason) -> bool {
        self.dirty
            .iter()
            .any(|entry| entry.id == id && entry.reason == reason)
    }

    /// Drains all delivered notifications.
    pub fn drain_dirty(&mut self) -> impl Iterator<Item = DirtyNode> + '_ {
        self.dirty.drain(..)
    }

    /// Whether any container is waiting for layout.
    #[must_use]
    pub fn has_pending_layout(&self) -> bool {
        self.dirty
            .iter()
            .any(|entry| entry.reason == DirtyReason::Layout)
    }

    /// Removes and returns the containers waiting for layout, in the order
    /// they were invalidated. Other notifications stay queued.
    pub fn take_layout_dirty(&mut self) -> Vec<NodeId> {
        let mut containers = Vec::new();
        self.dirty.retain(|entry| {
            if entry.reason == DirtyReason::Layout {
                containers.push(entry.id);
                false
            } else {
                true
            }
        });
        containers
    }

    /// Converts raised property signals into notifications.
    ///
    /// Each container whose tracked child properties changed since the last
    /// poll is marked [`Reactive`](DirtyReason::Reactive) and
    /// [`Layout`](DirtyReason::Layout) dirty.
    pub fn poll_signals(&mut self) {
        let raised: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.signal.take())
            .map(|(index, _)| NodeId::new(index))
            .collect();

        for id in raised {
            tracing::trace!(target: "trellis::tree", ?id, "tracked child property changed");
            self.notify(id, DirtyReason::Reactive);
            self.invalidate_layout(id);
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Runs the child view layout of `id` once.
    ///
    /// The policy is taken out of the node for the duration of the call, so
    /// the writes it issues cannot re-invalidate the container being laid
    /// out. Returns `None` when the node has no policy.
    pub(crate) fn run_child_view_layout(
        &mut self,
        id: NodeId,
    ) -> Option<Result<trellis_layout::LayoutOutcome, trellis_layout::LayoutError>> {
        let policy = self.nodes.get_mut(id.index())?.node.child_view_layout.take()?;
        let result = policy.layout_children(&mut ContainerScope::new(self, id));
        self.nodes[id.index()].node.child_view_layout = Some(policy);
        Some(result)
    }

    fn layout_depends_on_size(&mut self, id: NodeId) -> bool {
        let Some(policy) = self.nodes[id.index()].node.child_view_layout.take() else {
            return false;
        };
        let depends = policy.layout_depends_on_size(&ContainerScope::new(self, id));
        self.nodes[id.index()].node.child_view_layout = Some(policy);
        depends
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn entry(&self, id: NodeId) -> Result<&NodeEntry, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    fn entry_mut(&mut self, id: NodeId) -> Result<&mut NodeEntry, TreeError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownNode(id))
    }

    const fn ensure_no_batch(&self) -> Result<(), TreeError> {
        if self.batch_depth > 0 {
            Err(TreeError::BatchOpen)
        } else {
            Ok(())
        }
    }

    fn push_entry(&mut self, entry: NodeEntry) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(entry);
        id
    }

    fn notify(&mut self, id: NodeId, reason: DirtyReason) {
        if self.batch_depth > 0 {
            let notification = DirtyNode { id, reason };
            if !self.pending.contains(&notification) {
                self.pending.push(notification);
            }
        } else {
            self.mark_dirty(id, reason);
        }
    }

    /// Queues a layout of `id`, if it has a policy to run.
    fn invalidate_layout(&mut self, id: NodeId) {
        if self
            .nodes
            .get(id.index())
            .is_some_and(|entry| entry.node.has_child_view_layout())
        {
            self.notify(id, DirtyReason::Layout);
        }
    }

    fn invalidate_parent(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            self.invalidate_layout(parent);
        }
    }

    /// Installs watchers on `child` for the tracked properties of the
    /// policy of `parent`, replacing any previous ones.
    fn watch_child(&mut self, parent: NodeId, child: NodeId) {
        let parent_entry = &self.nodes[parent.index()];
        let properties = parent_entry
            .node
            .child_view_layout
            .as_ref()
            .map_or(&[][..], |policy| policy.tracked_child_properties());
        let signal = parent_entry.signal.clone();

        let watches = signal.watch(&self.nodes[child.index()].node, properties);
        self.nodes[child.index()].watches = watches;
    }

    /// Resolves the frame of `id` against its parent and propagates size
    /// changes to its children, its own layout and its parent's layout.
    fn refresh_frame(&mut self, id: NodeId) {
        let parent = self.nodes[id.index()].parent;
        let parent_size = parent.map_or(self.viewport, |parent| {
            self.nodes[parent.index()].node.frame.size()
        });

        let node = &mut self.nodes[id.index()].node;
        let frame = node.layout.resolve(parent_size);
        let previous = mem::replace(&mut node.frame, frame);
        if previous == frame {
            return;
        }

        self.notify(id, DirtyReason::Frame);
        if previous.size() == frame.size() {
            return;
        }

        let stacked = parent.is_some()
            && LayoutChild::is_visible(&self.nodes[id.index()].node)
            && !self.nodes[id.index()].node.use_absolute_layout
            && !self.nodes[id.index()].node.use_static_layout;
        if stacked {
            self.invalidate_parent(id);
        }
        if self.layout_depends_on_size(id) {
            self.notify(id, DirtyReason::Layout);
        }
        for child in self.children(id).to_vec() {
            self.refresh_frame(child);
        }
    }
}
