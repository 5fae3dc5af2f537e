//! Errors raised by the view tree.

use thiserror::Error;

use crate::NodeId;

/// A structural operation on the [`ViewTree`](crate::ViewTree) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No node with this identifier exists.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// The tree cannot change shape while an adjustment batch is open.
    #[error("cannot modify the tree structure while an adjustment batch is open")]
    BatchOpen,
}
