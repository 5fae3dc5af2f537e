//! Per-container configuration for child view layouts.

/// Options a container hands to its [`ChildViewLayout`](crate::ChildViewLayout).
///
/// The policy reads these fresh on every invocation; changing them on the
/// host is enough for the next pass to pick them up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ChildViewLayoutOptions {
    /// Space before the first child.
    pub padding_before: f32,
    /// Space after the last child.
    pub padding_after: f32,
    /// Default gap between two children, overridable per child with margins.
    pub spacing: f32,
    /// Whether the container adopts the stacked extent.
    ///
    /// When `false` the container keeps its own extent and children without
    /// a fixed size share the unclaimed space by fill ratio.
    pub resize_to_fit: bool,
}

impl ChildViewLayoutOptions {
    /// Options with the given spacing and every other field at its default.
    #[must_use]
    pub const fn spaced(spacing: f32) -> Self {
        Self {
            padding_before: 0.0,
            padding_after: 0.0,
            spacing,
            resize_to_fit: true,
        }
    }

    /// Sets both paddings.
    #[must_use]
    pub const fn padding(mut self, before: f32, after: f32) -> Self {
        self.padding_before = before;
        self.padding_after = after;
        self
    }

    /// Sets `resize_to_fit`.
    #[must_use]
    pub const fn resize_to_fit(mut self, resize_to_fit: bool) -> Self {
        self.resize_to_fit = resize_to_fit;
        self
    }
}

impl Default for ChildViewLayoutOptions {
    fn default() -> Self {
        Self::spaced(0.0)
    }
}
