/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Inline formatting context layout: the arrangement of the inline-level children
//! of a block container into line boxes.
//!
//! <https://drafts.csswg.org/css2/visuren.html#inline-formatting>

mod iterator;
mod line_builder;

use app_units::Au;
use euclid::num::Zero;
pub(crate) use iterator::is_collapsible_space;
pub use iterator::{InlineItemSource, InlineLevelItem, InlineLevelIterator};
use line_builder::LineBuilder;
use log::{debug, warn};

use super::float::{ContainingBlockPositionInfo, FloatContext, FloatSide};
use super::layout_inside;
use crate::LayoutMode;
use crate::box_tree::{BoxContents, BoxKind, LayoutBox, LayoutNode};
use crate::context::LayoutContext;
use crate::geom::{AvailableSpaceForLine, ONE_PX};
use crate::positioned::PositioningContext;
use crate::print_tree::PrintTree;
use crate::sizing::calculate_shrink_to_fit_widths;

/// The state of one inline layout pass over a block container whose children are
/// all inline-level.
pub struct InlineFormattingContext<'a> {
    containing_block: &'a mut LayoutBox,
    /// The floats of the enclosing block formatting context. They stay put for the
    /// whole pass.
    floats: &'a FloatContext,
    position_info: ContainingBlockPositionInfo,
    layout_context: &'a LayoutContext<'a>,
}

impl<'a> InlineFormattingContext<'a> {
    pub fn new(
        containing_block: &'a mut LayoutBox,
        floats: &'a FloatContext,
        position_info: ContainingBlockPositionInfo,
        layout_context: &'a LayoutContext<'a>,
    ) -> Self {
        Self {
            containing_block,
            floats,
            position_info,
            layout_context,
        }
    }

    pub fn containing_block(&self) -> &LayoutBox {
        self.containing_block
    }

    pub(crate) fn line_height(&self) -> Au {
        self.containing_block.line_height(self.layout_context)
    }

    /// Percentages resolve against the width of the containing block, unless that
    /// width is a stand-in for an intrinsic size, in which case they resolve to zero.
    pub(crate) fn percentage_basis(&self, layout_mode: LayoutMode) -> Au {
        if layout_mode.is_intrinsic_probe() {
            Au::zero()
        } else {
            self.containing_block.width
        }
    }

    /// The height of the containing block if it is known before its content is laid out.
    fn definite_containing_block_height(&self) -> Option<Au> {
        self.containing_block.style.height.maybe_resolve(None)
    }

    /// The horizontal interval at block position `y` of the containing block that is
    /// not occluded by floats. `y` and the result are relative to the content box of
    /// the containing block.
    pub fn available_space_for_line(&self, y: Au) -> AvailableSpaceForLine {
        let y_in_root = self.position_info.to_root_block(y);
        let mut space = AvailableSpaceForLine {
            left: Au::zero(),
            right: self.containing_block.width,
        };

        if let Some(float) = self.floats.nearest_float_at(FloatSide::Left, y_in_root) {
            space.left = self.position_info.to_local_inline(float.max_x()) + ONE_PX;
        }
        if let Some(float) = self.floats.nearest_float_at(FloatSide::Right, y_in_root) {
            space.right = self.position_info.to_local_inline(float.min_x()) - ONE_PX;
        }

        space
    }

    /// Lay out the children of the containing block into line boxes, then size the
    /// containing block from them. In an intrinsic size probe the width becomes
    /// the widest line; the height is always the sum of the line heights.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "InlineFormattingContext::run",
            skip_all,
            fields(layout_mode = ?layout_mode),
            level = "trace",
        )
    )]
    pub fn run(&mut self, layout_mode: LayoutMode, positioning_context: &mut PositioningContext) {
        assert!(
            self.containing_block.children_are_inline(),
            "Inline formatting context established by a box with block-level children"
        );

        self.generate_line_boxes(layout_mode, positioning_context);

        let children = self.containing_block.children().to_vec();
        hoist_absolutely_positioned_children(&children, positioning_context);

        let line_height = self.line_height();
        let mut content_height = Au::zero();
        let mut max_line_width = Au::zero();
        for line_box in self.containing_block.line_boxes() {
            content_height += line_box.height().max(line_height);
            max_line_width = max_line_width.max(line_box.width());
        }

        if layout_mode.is_intrinsic_probe() {
            self.containing_block.width = max_line_width;
        }
        self.containing_block.height = content_height;

        debug!(
            "Laid out {} line boxes ({:?}): {:?}x{:?}",
            self.containing_block.line_boxes().len(),
            layout_mode,
            self.containing_block.width,
            self.containing_block.height,
        );
        if self.layout_context.options.dump_line_boxes {
            self.dump_line_boxes();
        }
    }

    /// Resolve the size of an atomic inline before it is measured for line breaking.
    pub fn dimension_box_on_line(
        &self,
        layout_box: &mut LayoutBox,
        layout_mode: LayoutMode,
        positioning_context: &mut PositioningContext,
    ) {
        let percentage_basis = self.percentage_basis(layout_mode);
        let containing_block_height = self.definite_containing_block_height();
        let style = layout_box.style.clone();

        match layout_box.kind() {
            BoxKind::Replaced => {
                if let BoxContents::Replaced(replaced) = &layout_box.contents {
                    let width =
                        replaced.used_width(&style, percentage_basis, containing_block_height);
                    let height = replaced.used_height(&style, width, containing_block_height);
                    layout_box.width = width;
                    layout_box.height = height;
                }
            },
            BoxKind::InlineBlock => {
                let specified_width = style.width.resolve(percentage_basis);
                let width = match specified_width {
                    Some(width) => width,
                    None => {
                        let widths = calculate_shrink_to_fit_widths(layout_box, self.layout_context);
                        let available_width = self.containing_block.width -
                            style.padding_border_margin(percentage_basis).inline_sum();
                        widths.shrink_to_fit(available_width)
                    },
                };
                layout_box.width = width;

                layout_inside(
                    layout_box,
                    layout_mode,
                    self.layout_context,
                    positioning_context,
                );

                // Intrinsic size probes size the box from its content.
                if let Some(width) = specified_width {
                    layout_box.width = width;
                }
                // An auto height is whatever the content of the inline-block made it.
                // FIXME: Resolve it from the inline-block's margin-box descendants
                // instead. https://drafts.csswg.org/css2/visudet.html#block-root-margin
                if let Some(height) = style.height.maybe_resolve(containing_block_height) {
                    layout_box.height = height;
                }
            },
            BoxKind::Other => {
                let mut tree = PrintTree::new("Unexpected box on line".to_owned());
                layout_box.print(&mut tree);
                let dump = tree.finish();
                if self.layout_context.options.strict_box_tree {
                    panic!("Box is neither replaced nor an inline-block:\n{dump}");
                }
                warn!("Box is neither replaced nor an inline-block, leaving it undimensioned:\n{dump}");
            },
        }
    }

    /// Rebuild the line boxes of the containing block from its children.
    pub fn generate_line_boxes(
        &mut self,
        layout_mode: LayoutMode,
        positioning_context: &mut PositioningContext,
    ) {
        let children = self.containing_block.children().to_vec();
        let layout_context = self.layout_context;
        let mut iterator = InlineLevelIterator::new(children, layout_mode, layout_context);
        self.generate_line_boxes_from(&mut iterator, layout_mode, positioning_context);
    }

    /// Rebuild the line boxes of the containing block from the items of `source`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "InlineFormattingContext::generate_line_boxes",
            skip_all,
            level = "trace",
        )
    )]
    pub fn generate_line_boxes_from(
        &mut self,
        source: &mut impl InlineItemSource,
        layout_mode: LayoutMode,
        positioning_context: &mut PositioningContext,
    ) {
        self.containing_block.set_line_boxes(Vec::new());

        let line_boxes = {
            let this = &*self;
            let mut line_builder = LineBuilder::new(this, layout_mode);
            while let Some(item) = source.next(line_builder.remaining_width_for_current_line()) {
                if item.is_collapsible_whitespace() &&
                    line_builder.current_line_is_empty_or_ends_in_whitespace()
                {
                    continue;
                }

                match item {
                    InlineLevelItem::ForcedBreak => line_builder.break_line(),
                    InlineLevelItem::AbsolutelyPositioned { node } => {
                        line_builder.record_static_position(&node)
                    },
                    InlineLevelItem::Element {
                        node,
                        should_force_break,
                    } => {
                        this.dimension_box_on_line(
                            &mut node.borrow_mut(),
                            layout_mode,
                            positioning_context,
                        );
                        let width = node
                            .borrow()
                            .margin_box_width(this.percentage_basis(layout_mode));
                        line_builder.break_if_needed(width, should_force_break);
                        line_builder.append_box(node);
                    },
                    InlineLevelItem::Text {
                        node,
                        offset,
                        length,
                        width,
                        should_force_break,
                        is_collapsible_whitespace,
                    } => {
                        // Collapsible whitespace hangs past the end of the line rather
                        // than starting the next one.
                        if !is_collapsible_whitespace {
                            line_builder.break_if_needed(width, should_force_break);
                        }
                        let height = this
                            .layout_context
                            .metrics_for(&node.style.font)
                            .glyph_height();
                        line_builder.append_text_chunk(
                            node,
                            offset,
                            length,
                            width,
                            height,
                            is_collapsible_whitespace,
                        );
                    },
                }
            }
            line_builder.finish()
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(line_count = line_boxes.len(), "generated line boxes");
        self.containing_block.set_line_boxes(line_boxes);
    }

    fn dump_line_boxes(&self) {
        let mut tree = PrintTree::new("Line boxes".to_owned());
        for line_box in self.containing_block.line_boxes() {
            line_box.print(&mut tree);
        }
        debug!("{}", tree.finish());
    }
}

/// Absolutely positioned boxes are taken out of the flow, including the ones inside
/// inline boxes, and handed to the positioning context.
fn hoist_absolutely_positioned_children(
    children: &[LayoutNode],
    positioning_context: &mut PositioningContext,
) {
    for child in children {
        let LayoutNode::Box(layout_box) = child else {
            continue;
        };
        let borrowed = layout_box.borrow();
        if borrowed.style.position.is_absolutely_positioned() {
            positioning_context.push(layout_box.clone());
        } else if borrowed.is_inline_box() {
            hoist_absolutely_positioned_children(borrowed.children(), positioning_context);
        }
    }
}
