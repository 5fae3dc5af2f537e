//! Position assignment: the pass that writes edges.

use crate::{Adjustments, Axis, ChildViewLayoutOptions, LayoutContainer};

use super::accounting::FillSpace;
use super::margin::Margins;
use super::sizing::{Sizing, Slot};

/// What the assignment pass produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Total stacked extent, closing gap included.
    pub extent: f32,
    /// Number of edge writes issued.
    pub adjustments: usize,
}

/// Positions every slot along `axis`.
///
/// Filling children get their trailing edge pinned so their size stays
/// derived from the container. Edges that already hold the computed value
/// are left alone, and each child's writes go out as a single batch.
pub fn place(
    container: &mut dyn LayoutContainer,
    axis: Axis,
    options: &ChildViewLayoutOptions,
    slots: &[Slot],
    fill: Option<FillSpace>,
    container_extent: f32,
) -> Placement {
    let mut margins = Margins::new(options);
    let mut cursor = 0.0_f32;
    let mut writes = 0;

    for slot in slots {
        let mut adjustments = Adjustments::new();

        {
            let Some(child) = container.child(slot.index) else {
                continue;
            };
            cursor += margins.before(child);
            let layout = child.layout();

            if let (Some(fill), Sizing::Fill(ratio)) = (fill, slot.sizing) {
                let size = fill.share(ratio);
                // Rounding up may overflow by a point; never go negative.
                let trailing = (container_extent - cursor - size).max(0.0);
                if layout.trailing(axis) != Some(trailing) {
                    adjustments.push(axis.trailing_edge(), trailing);
                }
            }

            if layout.leading(axis) != Some(cursor) {
                adjustments.push(axis.leading_edge(), cursor);
            }
        }

        if !adjustments.is_empty() {
            writes += adjustments.len();
            tracing::trace!(
                target: "trellis::layout",
                index = slot.index,
                ?adjustments,
                "adjusting child"
            );
            container.adjust_child(slot.index, &adjustments);
        }

        if let Some(child) = container.child(slot.index) {
            cursor += child.border_frame().extent(axis);
            margins.after(child);
        }
    }

    Placement {
        extent: cursor + margins.closing(),
        adjustments: writes,
    }
}
