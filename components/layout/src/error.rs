//! Configuration errors reported by child view layouts.

use thiserror::Error;

use crate::{Axis, LayoutHint};

/// A child whose hints cannot be turned into a size.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// The container resizes to fit, so every child needs a size or a
    /// minimum size along the stack axis.
    #[error(
        "child {index} needs a {dimension} or min-{dimension} when its container resizes to fit; layout: {layout}",
        dimension = .axis.dimension()
    )]
    MissingSize {
        /// Index of the child in the container.
        index: usize,
        /// Stack axis.
        axis: Axis,
        /// The child's hint at the time of the failure.
        layout: LayoutHint,
    },
    /// The container has a fixed size and the child declares neither a
    /// size, a fill ratio, nor a minimum size.
    #[error(
        "child {index} needs a {dimension}, a fill ratio or a min-{dimension}; layout: {layout}",
        dimension = .axis.dimension()
    )]
    Unresolvable {
        /// Index of the child in the container.
        index: usize,
        /// Stack axis.
        axis: Axis,
        /// The child's hint at the time of the failure.
        layout: LayoutHint,
    },
}

impl LayoutError {
    /// Index of the offending child.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::MissingSize { index, .. } | Self::Unresolvable { index, .. } => *index,
        }
    }
}
