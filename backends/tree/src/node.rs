//! Nodes stored in the view tree.

use core::fmt;

use nami::{Binding, Signal};
use trellis_core::{LayoutHint, Rect};
use trellis_layout::{ChildViewLayout, ChildViewLayoutOptions, LayoutChild};

/// One view: its hint, its resolved frame, and the state a parent's layout
/// reads from it.
///
/// `margin_before`, `margin_after` and `is_visible` are reactive bindings.
/// Application code may clone them and `set` new values at any time; the
/// tree notices through the watchers it installs for the parent's policy.
pub struct ViewNode {
    pub(crate) layout: LayoutHint,
    pub(crate) frame: Rect,
    pub(crate) fill_ratio: Option<f32>,
    margin_before: Binding<Option<f32>>,
    margin_after: Binding<Option<f32>>,
    is_visible: Binding<bool>,
    pub(crate) use_absolute_layout: bool,
    pub(crate) use_static_layout: bool,
    pub(crate) child_view_layout: Option<Box<dyn ChildViewLayout>>,
    pub(crate) child_view_layout_options: ChildViewLayoutOptions,
}

impl ViewNode {
    /// A visible node with the given hint and no margins.
    #[must_use]
    pub fn new(layout: LayoutHint) -> Self {
        Self {
            layout,
            frame: Rect::default(),
            fill_ratio: None,
            margin_before: Binding::container(None),
            margin_after: Binding::container(None),
            is_visible: Binding::container(true),
            use_absolute_layout: false,
            use_static_layout: false,
            child_view_layout: None,
            child_view_layout_options: ChildViewLayoutOptions::default(),
        }
    }

    /// Sets the share of unclaimed space this node fills.
    #[must_use]
    pub const fn with_fill_ratio(mut self, ratio: f32) -> Self {
        self.fill_ratio = Some(ratio);
        self
    }

    /// Sets the leading and trailing margins.
    #[must_use]
    pub fn with_margins(self, before: Option<f32>, after: Option<f32>) -> Self {
        self.margin_before.set(before);
        self.margin_after.set(after);
        self
    }

    /// Starts hidden.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.is_visible.set(false);
        self
    }

    /// Positions this node by its own hint, outside any stack.
    #[must_use]
    pub const fn absolute(mut self) -> Self {
        self.use_absolute_layout = true;
        self
    }

    /// Lets this node flow statically, outside any stack.
    #[must_use]
    pub const fn static_layout(mut self) -> Self {
        self.use_static_layout = true;
        self
    }

    /// Installs the policy that lays out this node's children.
    #[must_use]
    pub fn with_child_view_layout(
        mut self,
        layout: impl ChildViewLayout + 'static,
        options: ChildViewLayoutOptions,
    ) -> Self {
        self.child_view_layout = Some(Box::new(layout));
        self.child_view_layout_options = options;
        self
    }

    /// The current hint.
    #[must_use]
    pub const fn hint(&self) -> &LayoutHint {
        &self.layout
    }

    /// The resolved border frame.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// The options handed to this node's child view layout.
    #[must_use]
    pub const fn child_view_layout_options(&self) -> ChildViewLayoutOptions {
        self.child_view_layout_options
    }

    /// Whether a child view layout is installed.
    #[must_use]
    pub const fn has_child_view_layout(&self) -> bool {
        self.child_view_layout.is_some()
    }

    /// Reactive handle on the leading margin.
    #[must_use]
    pub const fn margin_before_binding(&self) -> &Binding<Option<f32>> {
        &self.margin_before
    }

    /// Reactive handle on the trailing margin.
    #[must_use]
    pub const fn margin_after_binding(&self) -> &Binding<Option<f32>> {
        &self.margin_after
    }

    /// Reactive handle on the visibility flag.
    #[must_use]
    pub const fn is_visible_binding(&self) -> &Binding<bool> {
        &self.is_visible
    }
}

impl LayoutChild for ViewNode {
    fn is_visible(&self) -> bool {
        self.is_visible.get()
    }

    fn use_absolute_layout(&self) -> bool {
        self.use_absolute_layout
    }

    fn use_static_layout(&self) -> bool {
        self.use_static_layout
    }

    fn layout(&self) -> &LayoutHint {
        &self.layout
    }

    fn margin_before(&self) -> Option<f32> {
        self.margin_before.get()
    }

    fn margin_after(&self) -> Option<f32> {
        self.margin_after.get()
    }

    fn fill_ratio(&self) -> Option<f32> {
        self.fill_ratio
    }

    fn border_frame(&self) -> Rect {
        self.frame
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("layout", &self.layout)
            .field("frame", &self.frame)
            .field("fill_ratio", &self.fill_ratio)
            .field("margin_before", &self.margin_before.get())
            .field("margin_after", &self.margin_after.get())
            .field("is_visible", &self.is_visible.get())
            .field("use_absolute_layout", &self.use_absolute_layout)
            .field("use_static_layout", &self.use_static_layout)
            .field("child_view_layout", &self.child_view_layout)
            .field("child_view_layout_options", &self.child_view_layout_options)
            .finish()
    }
}
