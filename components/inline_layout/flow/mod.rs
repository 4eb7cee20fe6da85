/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Flow layout, also known as block-and-inline layout.

use app_units::Au;
use euclid::num::Zero;
use log::warn;

use crate::LayoutMode;
use crate::box_tree::{BoxContents, LayoutBox, LayoutNode};
use crate::context::LayoutContext;
use crate::fragment_tree::LineBox;
use crate::geom::PhysicalPoint;
use crate::positioned::PositioningContext;

pub mod float;
pub mod inline;

use float::{ContainingBlockPositionInfo, FloatContext, FloatExclusion};
use inline::InlineFormattingContext;

/// An independent formatting context for block-level and inline-level boxes,
/// together with the floats placed in it so far.
#[derive(Debug, Default)]
pub struct BlockFormattingContext {
    floats: FloatContext,
}

impl BlockFormattingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_float(&mut self, exclusion: FloatExclusion) {
        self.floats.add_float(exclusion);
    }

    /// Lay out the contents of `root`, the box establishing this formatting context.
    /// In the final layout the width of `root` must already be resolved.
    pub fn layout(
        &self,
        root: &mut LayoutBox,
        layout_mode: LayoutMode,
        layout_context: &LayoutContext,
        positioning_context: &mut PositioningContext,
    ) {
        self.layout_block_container(
            root,
            ContainingBlockPositionInfo::default(),
            layout_mode,
            layout_context,
            positioning_context,
        );
    }

    fn layout_block_container(
        &self,
        container: &mut LayoutBox,
        position_info: ContainingBlockPositionInfo,
        layout_mode: LayoutMode,
        layout_context: &LayoutContext,
        positioning_context: &mut PositioningContext,
    ) {
        if matches!(container.contents, BoxContents::Replaced(_)) {
            return;
        }

        if container.children_are_inline() {
            InlineFormattingContext::new(container, &self.floats, position_info, layout_context)
                .run(layout_mode, positioning_context);
        } else {
            self.layout_block_level_children(
                container,
                position_info,
                layout_mode,
                layout_context,
                positioning_context,
            );
        }
    }

    /// Stack the children of `container` vertically. Margins do not collapse and
    /// floats are not cleared.
    fn layout_block_level_children(
        &self,
        container: &mut LayoutBox,
        position_info: ContainingBlockPositionInfo,
        layout_mode: LayoutMode,
        layout_context: &LayoutContext,
        positioning_context: &mut PositioningContext,
    ) {
        let percentage_basis = if layout_mode.is_intrinsic_probe() {
            Au::zero()
        } else {
            container.width
        };
        let children = container.children().to_vec();
        let mut block_position = Au::zero();

        for node in &children {
            let LayoutNode::Box(child_box) = node else {
                warn!("Skipping inline-level content between block-level boxes");
                continue;
            };
            let mut child = child_box.borrow_mut();
            if child.style.position.is_absolutely_positioned() {
                child.position = PhysicalPoint::new(Au::zero(), block_position);
                positioning_context.push(child_box.clone());
                continue;
            }

            let style = child.style.clone();
            let pbm = style.padding_border_margin(percentage_basis);
            let replaced = match &child.contents {
                BoxContents::Replaced(replaced) => Some(replaced.clone()),
                BoxContents::Flow(_) => None,
            };

            if let Some(replaced) = replaced {
                let width = replaced.used_width(&style, percentage_basis, None);
                child.height = replaced.used_height(&style, width, None);
                child.width = width;
            } else {
                let specified_width = style.width.resolve(percentage_basis);
                child.width = specified_width
                    .unwrap_or_else(|| (container.width - pbm.inline_sum()).max(Au::zero()));

                let (inline_offset, block_offset) = pbm.content_offset();
                self.layout_block_container(
                    &mut child,
                    position_info.offset_by(inline_offset, block_position + block_offset),
                    layout_mode,
                    layout_context,
                    positioning_context,
                );

                if let Some(width) = specified_width {
                    child.width = width;
                }
                if let Some(height) = style.height.maybe_resolve(None) {
                    child.height = height;
                }
            }

            child.position = PhysicalPoint::new(Au::zero(), block_position);
            block_position += child.margin_box_height(percentage_basis);
        }

        container.height = block_position;
        if layout_mode.is_intrinsic_probe() {
            container.width = greatest_child_width(container);
        }
    }
}

/// Lay out the content of `layout_box`, which establishes a new independent
/// formatting context. In the final layout its width must already be resolved.
pub fn layout_inside(
    layout_box: &mut LayoutBox,
    layout_mode: LayoutMode,
    layout_context: &LayoutContext,
    positioning_context: &mut PositioningContext,
) {
    BlockFormattingContext::new().layout(
        layout_box,
        layout_mode,
        layout_context,
        positioning_context,
    );
}

/// The widest line of inline content, or the widest margin box of block-level content.
/// Only meaningful after `layout_box` has been laid out.
pub(crate) fn greatest_child_width(layout_box: &LayoutBox) -> Au {
    if layout_box.children_are_inline() {
        return layout_box
            .line_boxes()
            .iter()
            .map(LineBox::width)
            .max()
            .unwrap_or_else(Au::zero);
    }

    layout_box
        .children()
        .iter()
        .filter_map(|node| match node {
            LayoutNode::Box(child) => {
                let child = child.borrow();
                if child.style.position.is_absolutely_positioned() {
                    None
                } else {
                    Some(child.margin_box_width(Au::zero()))
                }
            },
            _ => None,
        })
        .max()
        .unwrap_or_else(Au::zero)
}
