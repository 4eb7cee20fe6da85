/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::mem;
use std::sync::Arc;

use app_units::Au;
use euclid::num::Zero;

use super::InlineFormattingContext;
use crate::LayoutMode;
use crate::box_tree::{LayoutBox, TextNode};
use crate::cell::ArcRefCell;
use crate::fragment_tree::{BoxFragment, Fragment, LineBox, TextFragment};
use crate::geom::PhysicalPoint;

/// Accumulates fragments into line boxes during one pass of an inline formatting
/// context. There is always a current line; it starts out empty.
pub(crate) struct LineBuilder<'ifc, 'a> {
    context: &'ifc InlineFormattingContext<'a>,
    layout_mode: LayoutMode,
    finished_lines: Vec<LineBox>,
    current_line: LineBox,
    /// The full width between the floats at the block position of the current line.
    available_width_for_current_line: Au,
    /// The floor of every line's height: the `line-height` of the containing block.
    minimum_line_height: Au,
}

impl<'ifc, 'a> LineBuilder<'ifc, 'a> {
    pub(crate) fn new(context: &'ifc InlineFormattingContext<'a>, layout_mode: LayoutMode) -> Self {
        let space = context.available_space_for_line(Au::zero());
        Self {
            context,
            layout_mode,
            finished_lines: Vec::new(),
            current_line: LineBox::new(Au::zero(), space.left),
            available_width_for_current_line: space.width(),
            minimum_line_height: context.line_height(),
        }
    }

    /// Close the current line and start a new one below it.
    pub(crate) fn break_line(&mut self) {
        let block_start = self.current_line.block_start +
            self.current_line.height().max(self.minimum_line_height);
        let space = self.context.available_space_for_line(block_start);
        self.available_width_for_current_line = space.width();

        let finished_line = mem::replace(
            &mut self.current_line,
            LineBox::new(block_start, space.left),
        );
        self.finished_lines.push(finished_line);
    }

    /// The width still unused on the current line.
    pub(crate) fn remaining_width_for_current_line(&self) -> Au {
        (self.available_width_for_current_line - self.current_line.width()).max(Au::zero())
    }

    pub(crate) fn break_if_needed(&mut self, next_item_width: Au, should_force_break: bool) {
        if self.current_line.is_empty() {
            return;
        }
        if should_force_break || self.should_break(next_item_width) {
            self.break_line();
        }
    }

    fn should_break(&self, next_item_width: Au) -> bool {
        match self.layout_mode {
            // Probes only break where they are told to.
            LayoutMode::MinContent | LayoutMode::MaxContent => false,
            LayoutMode::Final => {
                self.current_line.width() + next_item_width > self.available_width_for_current_line
            },
        }
    }

    pub(crate) fn append_box(&mut self, node: ArcRefCell<LayoutBox>) {
        let percentage_basis = self.context.percentage_basis(self.layout_mode);
        let inline_offset = self.current_line.width();
        let (width, height) = {
            let mut layout_box = node.borrow_mut();
            layout_box.position = PhysicalPoint::new(
                self.current_line.inline_start + inline_offset,
                self.current_line.block_start,
            );
            (
                layout_box.margin_box_width(percentage_basis),
                layout_box.margin_box_height(percentage_basis),
            )
        };
        self.current_line.add_fragment(Fragment::Box(BoxFragment {
            node,
            inline_offset,
            width,
            height,
        }));
    }

    pub(crate) fn append_text_chunk(
        &mut self,
        node: Arc<TextNode>,
        offset: usize,
        length: usize,
        width: Au,
        height: Au,
        is_collapsible_whitespace: bool,
    ) {
        let inline_offset = self.current_line.width();
        self.current_line.add_fragment(Fragment::Text(TextFragment {
            node,
            offset,
            length,
            inline_offset,
            width,
            height,
            is_collapsible_whitespace,
        }));
    }

    /// Absolutely positioned boxes take their static position from the point in the
    /// line where they appear in the content.
    pub(crate) fn record_static_position(&self, node: &ArcRefCell<LayoutBox>) {
        node.borrow_mut().position = PhysicalPoint::new(
            self.current_line.inline_start + self.current_line.width(),
            self.current_line.block_start,
        );
    }

    pub(crate) fn current_line_is_empty_or_ends_in_whitespace(&self) -> bool {
        self.current_line.is_empty_or_ends_in_whitespace()
    }

    /// Trim every line and drop the last one if nothing is left on it.
    pub(crate) fn finish(mut self) -> Vec<LineBox> {
        self.finished_lines.push(self.current_line);
        let mut line_boxes = self.finished_lines;
        for line_box in line_boxes.iter_mut() {
            line_box.trim_trailing_whitespace();
        }
        if line_boxes.last().is_some_and(LineBox::is_empty) {
            line_boxes.pop();
        }
        line_boxes
    }
}
