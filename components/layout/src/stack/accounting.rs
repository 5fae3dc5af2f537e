//! Space accounting for fixed-size containers.

use crate::{Axis, ChildViewLayoutOptions, LayoutContainer};

use super::margin::Margins;
use super::sizing::{Sizing, Slot};

/// Unclaimed space and the weights that share it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillSpace {
    /// Space left once gaps, paddings and fixed children are accounted for.
    pub available: f32,
    /// Sum of the fill ratios of all filling children.
    pub ratio_sum: f32,
}

impl FillSpace {
    /// Size of a child filling with `ratio`, rounded up to a whole point.
    #[must_use]
    pub fn share(&self, ratio: f32) -> f32 {
        if self.ratio_sum > 0.0 {
            // Multiply before dividing so even splits stay exact in f32.
            (self.available * ratio / self.ratio_sum).ceil()
        } else {
            0.0
        }
    }
}

/// Measures how much of `extent` the stacked children leave unclaimed.
///
/// Filling children and children sized by a minimum claim nothing here.
pub fn measure(
    container: &dyn LayoutContainer,
    axis: Axis,
    options: &ChildViewLayoutOptions,
    slots: &[Slot],
    extent: f32,
) -> FillSpace {
    let mut margins = Margins::new(options);
    let mut provisioned = 0.0_f32;
    let mut ratio_sum = 0.0_f32;

    for slot in slots {
        let Some(child) = container.child(slot.index) else {
            continue;
        };

        provisioned += margins.before(child);
        match slot.sizing {
            Sizing::Fixed => provisioned += child.border_frame().extent(axis),
            Sizing::Fill(ratio) => ratio_sum += ratio,
            Sizing::Min => {}
        }
        margins.after(child);
    }

    provisioned += margins.closing();

    FillSpace {
        available: (extent - provisioned).max(0.0),
        ratio_sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_splits_proportionally() {
        let space = FillSpace {
            available: 360.0,
            ratio_sum: 3.0,
        };

        assert_eq!(space.share(1.0), 120.0);
        assert_eq!(space.share(2.0), 240.0);
    }

    #[test]
    fn share_rounds_up() {
        let space = FillSpace {
            available: 100.0,
            ratio_sum: 3.0,
        };

        assert_eq!(space.share(1.0), 34.0);
    }

    #[test]
    fn share_without_weights_is_zero() {
        let space = FillSpace {
            available: 100.0,
            ratio_sum: 0.0,
        };

        assert_eq!(space.share(0.0), 0.0);
    }
}
