//! Child view layouts for `Trellis`.
//!
//! A container owns one [`ChildViewLayout`] and a
//! [`ChildViewLayoutOptions`] bag. Whenever the host decides the children may
//! have moved (a tracked property changed, a child resized, or the container
//! itself resized while [`ChildViewLayout::layout_depends_on_size`] holds) it
//! calls [`ChildViewLayout::layout_children`] with a [`LayoutContainer`]
//! proxy. The policy reads hints through that proxy and writes back edges.
//!
//! The crate ships one policy family, the linear stack:
//!
//! - [`HORIZONTAL_STACK`] positions children left to right,
//! - [`VERTICAL_STACK`] positions children top to bottom.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_layout::{ChildViewLayout, ChildViewLayoutOptions, HORIZONTAL_STACK};
//!
//! // `toolbar` implements `LayoutContainer`.
//! toolbar.set_options(ChildViewLayoutOptions {
//!     spacing: 8.0,
//!     ..ChildViewLayoutOptions::default()
//! });
//! HORIZONTAL_STACK.layout_children(&mut toolbar)?;
//! ```

pub use trellis_core::{Axis, Dimension, Edge, LayoutHint, Point, Rect, Size};

pub mod error;
pub mod options;
pub mod policy;
pub mod stack;

pub use error::LayoutError;
pub use options::ChildViewLayoutOptions;
pub use policy::{
    Adjustments, ChildProperty, ChildViewLayout, LayoutChild, LayoutContainer, LayoutOutcome,
    LayoutReport,
};
pub use stack::{HORIZONTAL_STACK, StackLayout, VERTICAL_STACK};
