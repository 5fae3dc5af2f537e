//! Classifies every stacked child before anything is written.
//!
//! Running the checks up front means a configuration error leaves the
//! container exactly as it was.

use crate::{Axis, ChildViewLayoutOptions, LayoutContainer, LayoutError};

use super::eligibility::eligible_children;

/// How a stacked child gets its size along the stack axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// The hint carries a size; the child keeps it.
    Fixed,
    /// The child shares the unclaimed space with this weight.
    Fill(f32),
    /// Only a minimum size is known; the child is positioned, not sized.
    Min,
}

/// A stacked child and its sizing rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Index of the child in the container.
    pub index: usize,
    /// How the child is sized.
    pub sizing: Sizing,
}

/// Classifies the eligible children of `container`.
///
/// With `resize_to_fit` every child needs a size or minimum size. Without it
/// a child may also declare a fill ratio, and the last child defaults to a
/// ratio of one when no earlier child claimed any share.
pub fn classify(
    container: &dyn LayoutContainer,
    axis: Axis,
    options: &ChildViewLayoutOptions,
) -> Result<Vec<Slot>, LayoutError> {
    let eligible: Vec<_> = eligible_children(container).collect();
    let last = eligible.len().checked_sub(1);
    let mut ratio_sum = 0.0_f32;
    let mut slots = Vec::with_capacity(eligible.len());

    for (position, (index, child)) in eligible.into_iter().enumerate() {
        let layout = child.layout();
        let has_size = layout.size(axis).is_some();
        let has_min = layout.min_size(axis).is_some();

        let sizing = if options.resize_to_fit {
            if has_size {
                Sizing::Fixed
            } else if has_min {
                Sizing::Min
            } else {
                return Err(LayoutError::MissingSize {
                    index,
                    axis,
                    layout: *layout,
                });
            }
        } else if has_size {
            Sizing::Fixed
        } else if let Some(ratio) = child.fill_ratio() {
            let ratio = ratio.max(0.0);
            ratio_sum += ratio;
            Sizing::Fill(ratio)
        } else if Some(position) == last && ratio_sum == 0.0 {
            ratio_sum = 1.0;
            Sizing::Fill(1.0)
        } else if has_min {
            Sizing::Min
        } else {
            return Err(LayoutError::Unresolvable {
                index,
                axis,
                layout: *layout,
            });
        };

        slots.push(Slot { index, sizing });
    }

    Ok(slots)
}
