//! A retained view tree that hosts `Trellis` child view layouts.
//!
//! The tree owns [`ViewNode`]s in an arena, resolves their hints into frames,
//! and plays the host side of the layout contract: it observes the child
//! properties a policy declares as tracked, applies per-child adjustment
//! batches atomically, and queues [`DirtyNode`] notifications. A
//! [`LayoutEngine`] drains the queue and runs each dirty container's policy.
//!
//! ```rust,ignore
//! use trellis_core::{LayoutHint, Size};
//! use trellis_layout::{ChildViewLayoutOptions, HORIZONTAL_STACK};
//! use trellis_tree::{LayoutEngine, ViewNode, ViewTree};
//!
//! let mut tree = ViewTree::new(Size::new(800.0, 600.0));
//! let root = tree.set_root(
//!     ViewNode::new(LayoutHint::new().left(10.0).top(20.0).bottom(20.0))
//!         .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::default()),
//! )?;
//! tree.insert_child(root, ViewNode::new(LayoutHint::new().width(100.0)))?;
//! let run = LayoutEngine::new(&mut tree).run();
//! assert!(run.settled);
//! ```

#![deny(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod node;
pub mod reactive;
pub mod scope;
pub mod tree;

pub use engine::{LayoutEngine, LayoutRun, MAX_LAYOUT_PASSES};
pub use error::TreeError;
pub use node::ViewNode;
pub use reactive::LayoutSignal;
pub use scope::ContainerScope;
pub use tree::{DirtyNode, DirtyReason, NodeId, ViewTree};

#[cfg(test)]
mod tests;
