/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Absolutely positioned boxes. They are hoisted out of the flow they appear in and
//! laid out once the size of their containing block is known.
//!
//! <https://drafts.csswg.org/css2/visudet.html#abs-non-replaced-width>

use app_units::Au;
use euclid::num::Zero;
use log::debug;

use crate::LayoutMode;
use crate::box_tree::{BoxContents, LayoutBox};
use crate::cell::ArcRefCell;
use crate::context::LayoutContext;
use crate::flow::layout_inside;
use crate::geom::{PhysicalPoint, PhysicalSize};
use crate::sizing::calculate_shrink_to_fit_widths;
use crate::style::LengthPercentageOrAuto;

#[derive(Debug, Default)]
pub struct PositioningContext {
    boxes: Vec<ArcRefCell<LayoutBox>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AbsoluteBoxOffsets {
    /// Neither offset is set: the box stays where it would have been in the flow.
    StaticStart { start: Au },
    Start { start: Au },
    End { end: Au },
    Both { start: Au, end: Au },
}

impl AbsoluteBoxOffsets {
    fn new(
        static_start: Au,
        start: LengthPercentageOrAuto,
        end: LengthPercentageOrAuto,
        basis: Au,
    ) -> Self {
        match (start.resolve(basis), end.resolve(basis)) {
            (None, None) => AbsoluteBoxOffsets::StaticStart {
                start: static_start,
            },
            (Some(start), Some(end)) => AbsoluteBoxOffsets::Both { start, end },
            (None, Some(end)) => AbsoluteBoxOffsets::End { end },
            (Some(start), None) => AbsoluteBoxOffsets::Start { start },
        }
    }

    /// The space the offsets leave for the margin box.
    fn available_size(&self, containing_size: Au) -> Au {
        match *self {
            AbsoluteBoxOffsets::StaticStart { start } | AbsoluteBoxOffsets::Start { start } => {
                containing_size - start
            },
            AbsoluteBoxOffsets::End { end } => containing_size - end,
            AbsoluteBoxOffsets::Both { start, end } => containing_size - start - end,
        }
    }

    /// The position of the margin box start, given the size of the margin box.
    fn margin_box_start(&self, containing_size: Au, margin_box_size: Au) -> Au {
        match *self {
            AbsoluteBoxOffsets::StaticStart { start } |
            AbsoluteBoxOffsets::Start { start } |
            AbsoluteBoxOffsets::Both { start, .. } => start,
            AbsoluteBoxOffsets::End { end } => containing_size - end - margin_box_size,
        }
    }
}

impl PositioningContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layout_box: ArcRefCell<LayoutBox>) {
        self.boxes.push(layout_box);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Lay out every hoisted box against a containing block of the given padding box
    /// size, emptying this context. Absolutely positioned descendants of those boxes
    /// are laid out against them in turn.
    pub fn layout_collected_children(
        &mut self,
        containing_block: PhysicalSize<Au>,
        layout_context: &LayoutContext,
    ) {
        for layout_box in std::mem::take(&mut self.boxes) {
            let mut layout_box = layout_box.borrow_mut();
            let mut nested = PositioningContext::new();
            layout_absolutely_positioned_box(
                &mut layout_box,
                containing_block,
                layout_context,
                &mut nested,
            );
            if !nested.is_empty() {
                let size = PhysicalSize::new(layout_box.width, layout_box.height);
                nested.layout_collected_children(size, layout_context);
            }
        }
    }
}

fn layout_absolutely_positioned_box(
    layout_box: &mut LayoutBox,
    containing_block: PhysicalSize<Au>,
    layout_context: &LayoutContext,
    positioning_context: &mut PositioningContext,
) {
    let style = layout_box.style.clone();
    let pbm = style.padding_border_margin(containing_block.width);
    let horizontal = AbsoluteBoxOffsets::new(
        layout_box.position.x,
        style.inset.left,
        style.inset.right,
        containing_block.width,
    );
    let vertical = AbsoluteBoxOffsets::new(
        layout_box.position.y,
        style.inset.top,
        style.inset.bottom,
        containing_block.height,
    );
    let specified_width = style.width.resolve(containing_block.width);
    let specified_height = style.height.maybe_resolve(Some(containing_block.height));

    if let BoxContents::Replaced(replaced) = &layout_box.contents {
        let width = replaced.used_width(&style, containing_block.width, Some(containing_block.height));
        let height = replaced.used_height(&style, width, Some(containing_block.height));
        layout_box.width = width;
        layout_box.height = height;
    } else {
        let available_width = horizontal.available_size(containing_block.width) - pbm.inline_sum();
        let width = match (specified_width, horizontal) {
            (Some(width), _) => width,
            (None, AbsoluteBoxOffsets::Both { .. }) => available_width.max(Au::zero()),
            (None, _) => {
                calculate_shrink_to_fit_widths(layout_box, layout_context)
                    .shrink_to_fit(available_width)
            },
        };
        layout_box.width = width;
        layout_inside(layout_box, LayoutMode::Final, layout_context, positioning_context);

        match (specified_height, vertical) {
            (Some(height), _) => layout_box.height = height,
            (None, AbsoluteBoxOffsets::Both { .. }) => {
                layout_box.height = (vertical.available_size(containing_block.height) -
                    pbm.block_sum())
                .max(Au::zero());
            },
            (None, _) => {},
        }
    }

    let margin_box_width = layout_box.width + pbm.inline_sum();
    let margin_box_height = layout_box.height + pbm.block_sum();
    layout_box.position = PhysicalPoint::new(
        horizontal.margin_box_start(containing_block.width, margin_box_width),
        vertical.margin_box_start(containing_block.height, margin_box_height),
    );
    debug!(
        "Positioned absolute box at {:?} with size {:?}x{:?}",
        layout_box.position, layout_box.width, layout_box.height
    );
}
