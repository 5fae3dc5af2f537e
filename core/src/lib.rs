#![no_std]
//! Core geometry for `Trellis`.
//!
//! This crate holds the vocabulary shared by the layout policies and the view
//! tree that hosts them:
//!
//! - [`Point`], [`Size`] and [`Rect`] in logical points,
//! - [`Axis`], [`Edge`] and [`Dimension`] to talk about one stack direction
//!   without duplicating code for the horizontal and vertical variants,
//! - [`LayoutHint`], the partial rectangle a child declares and that the host
//!   resolves into its border frame.

extern crate alloc;

pub mod hint;
pub mod layout;

pub use hint::LayoutHint;
pub use layout::{Axis, Dimension, Edge, Point, Rect, Size};
