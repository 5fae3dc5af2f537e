#![doc = include_str!("../README.md")]

pub mod config;
pub mod logging;

pub mod prelude {
    //! Commonly used types for building and laying out a view tree.
    //!
    //! ```rust,ignore
    //! use trellis::prelude::*;
    //!
    //! let mut tree = ViewTree::new(Size::new(320.0, 48.0));
    //! let toolbar = tree.set_root(
    //!     ViewNode::new(LayoutHint::new())
    //!         .with_child_view_layout(HORIZONTAL_STACK, ChildViewLayoutOptions::spaced(8.0)),
    //! )?;
    //! ```
    pub use crate::config::LayoutConfig;
    pub use trellis_layout::{
        Axis, ChildViewLayout, ChildViewLayoutOptions, Dimension, Edge, HORIZONTAL_STACK,
        LayoutChild, LayoutContainer, LayoutError, LayoutHint, LayoutOutcome, Rect, Size,
        VERTICAL_STACK,
    };
    pub use trellis_tree::{LayoutEngine, LayoutRun, NodeId, ViewNode, ViewTree};
}

#[doc(inline)]
pub use config::{ConfigError, LayoutConfig};
pub use trellis_layout as layout;
pub use trellis_tree as tree;
#[doc(inline)]
pub use trellis_core::{Axis, Dimension, Edge, LayoutHint, Point, Rect, Size};
