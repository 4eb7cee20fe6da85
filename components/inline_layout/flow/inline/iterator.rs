/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Production of the items that are placed on lines: chunks of text split at
//! break opportunities, atomic inlines and forced breaks.

use std::collections::VecDeque;
use std::sync::Arc;
use std::vec;

use app_units::Au;
use xi_unicode::LineBreakIterator;

use crate::LayoutMode;
use crate::box_tree::{LayoutBox, LayoutNode, TextNode};
use crate::cell::ArcRefCell;
use crate::context::LayoutContext;

#[derive(Debug)]
pub enum InlineLevelItem {
    Text {
        node: Arc<TextNode>,
        /// Byte offset of the chunk into the text of `node`.
        offset: usize,
        /// Byte length of the chunk.
        length: usize,
        width: Au,
        should_force_break: bool,
        is_collapsible_whitespace: bool,
    },
    Element {
        node: ArcRefCell<LayoutBox>,
        should_force_break: bool,
    },
    ForcedBreak,
    /// An out-of-flow box. It takes no space on the line, but its static position
    /// is where it appears in the content.
    AbsolutelyPositioned { node: ArcRefCell<LayoutBox> },
}

impl InlineLevelItem {
    pub fn is_collapsible_whitespace(&self) -> bool {
        match self {
            InlineLevelItem::Text {
                is_collapsible_whitespace,
                ..
            } => *is_collapsible_whitespace,
            _ => false,
        }
    }
}

/// A lazy source of inline-level items.
pub trait InlineItemSource {
    /// Produce the next item, or `None` once the content is exhausted.
    /// `available_width` is the width left on the line currently being built.
    fn next(&mut self, available_width: Au) -> Option<InlineLevelItem>;
}

/// Whitespace that `white-space: normal` collapses. Unlike `char::is_whitespace`,
/// this excludes no-break spaces.
pub(crate) fn is_collapsible_space(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous_was_space = false;
    for character in text.chars() {
        if is_collapsible_space(character) {
            if !previous_was_space {
                collapsed.push(' ');
            }
            previous_was_space = true;
        } else {
            collapsed.push(character);
            previous_was_space = false;
        }
    }
    collapsed
}

/// Walks the children of a block container in tree order, descending into inline
/// boxes, and turns them into [`InlineLevelItem`]s.
///
/// Text is measured when it is chunked, so every chunk of a text node is produced
/// at once and the available width passed to [`InlineItemSource::next`] is not
/// needed to decide where a chunk ends.
pub struct InlineLevelIterator<'a> {
    layout_context: &'a LayoutContext<'a>,
    layout_mode: LayoutMode,
    /// One iterator per inline box currently being traversed, innermost last.
    stack: Vec<vec::IntoIter<LayoutNode>>,
    pending_items: VecDeque<InlineLevelItem>,
}

impl<'a> InlineLevelIterator<'a> {
    pub fn new(
        children: Vec<LayoutNode>,
        layout_mode: LayoutMode,
        layout_context: &'a LayoutContext<'a>,
    ) -> Self {
        Self {
            layout_context,
            layout_mode,
            stack: vec![children.into_iter()],
            pending_items: VecDeque::new(),
        }
    }

    fn next_node(&mut self) -> Option<LayoutNode> {
        loop {
            match self.stack.last_mut()?.next() {
                Some(node) => return Some(node),
                None => {
                    self.stack.pop();
                },
            }
        }
    }

    fn chunk_text_node(&mut self, node: &Arc<TextNode>) {
        if node.style.white_space.preserve_newlines() {
            let mut segment_start = 0;
            for (newline_index, _) in node.text.match_indices('\n') {
                self.chunk_segment(node, segment_start, newline_index);
                self.pending_items.push_back(InlineLevelItem::ForcedBreak);
                segment_start = newline_index + 1;
            }
            self.chunk_segment(node, segment_start, node.text.len());
        } else {
            self.chunk_segment(node, 0, node.text.len());
        }
    }

    /// Chunk `node.text[start..end]`, which contains no preserved newline.
    fn chunk_segment(&mut self, node: &Arc<TextNode>, start: usize, end: usize) {
        if start == end {
            return;
        }
        if !node.style.white_space.allow_wrap() {
            self.push_run(node, start, end);
            return;
        }

        let mut run_start = start;
        for (break_position, _) in LineBreakIterator::new(&node.text[start..end]) {
            let run_end = start + break_position;
            if run_end > run_start {
                self.push_run(node, run_start, run_end);
                run_start = run_end;
            }
        }
    }

    /// Split a run between two break opportunities into leading whitespace, the
    /// unbreakable body, and trailing whitespace.
    fn push_run(&mut self, node: &Arc<TextNode>, start: usize, end: usize) {
        let run = &node.text[start..end];
        let body_start = run.len() - run.trim_start_matches(is_collapsible_space).len();
        let body_end = run.trim_end_matches(is_collapsible_space).len();

        if body_start >= body_end {
            self.push_whitespace(node, start, end);
            return;
        }
        if body_start > 0 {
            self.push_whitespace(node, start, start + body_start);
        }

        let body = &run[body_start..body_end];
        let white_space = node.style.white_space;
        let width = if white_space.preserve_spaces() {
            self.measure(node, body)
        } else {
            self.measure(node, &collapse_whitespace(body))
        };
        self.pending_items.push_back(InlineLevelItem::Text {
            node: node.clone(),
            offset: start + body_start,
            length: body_end - body_start,
            width,
            should_force_break: self.layout_mode == LayoutMode::MinContent &&
                white_space.allow_wrap(),
            is_collapsible_whitespace: false,
        });

        if body_end < run.len() {
            self.push_whitespace(node, start + body_end, end);
        }
    }

    fn push_whitespace(&mut self, node: &Arc<TextNode>, start: usize, end: usize) {
        let preserve_spaces = node.style.white_space.preserve_spaces();
        let width = if preserve_spaces {
            self.measure(node, &node.text[start..end])
        } else {
            self.measure(node, " ")
        };
        self.pending_items.push_back(InlineLevelItem::Text {
            node: node.clone(),
            offset: start,
            length: end - start,
            width,
            should_force_break: false,
            is_collapsible_whitespace: !preserve_spaces,
        });
    }

    fn measure(&self, node: &TextNode, text: &str) -> Au {
        self.layout_context
            .font_metrics
            .advance(text, &node.style.font)
    }
}

impl InlineItemSource for InlineLevelIterator<'_> {
    fn next(&mut self, _available_width: Au) -> Option<InlineLevelItem> {
        loop {
            if let Some(item) = self.pending_items.pop_front() {
                return Some(item);
            }

            match self.next_node()? {
                LayoutNode::LineBreak => return Some(InlineLevelItem::ForcedBreak),
                LayoutNode::Text(text) => self.chunk_text_node(&text),
                LayoutNode::Box(layout_box) => {
                    let (is_absolutely_positioned, inline_box_children) = {
                        let borrowed = layout_box.borrow();
                        let children = if borrowed.is_inline_box() {
                            Some(borrowed.children().to_vec())
                        } else {
                            None
                        };
                        (
                            borrowed.style.position.is_absolutely_positioned(),
                            children,
                        )
                    };

                    // Hoisted by the formatting context, never placed on a line.
                    if is_absolutely_positioned {
                        return Some(InlineLevelItem::AbsolutelyPositioned { node: layout_box });
                    }
                    if let Some(children) = inline_box_children {
                        self.stack.push(children.into_iter());
                        continue;
                    }
                    return Some(InlineLevelItem::Element {
                        node: layout_box,
                        should_force_break: self.layout_mode == LayoutMode::MinContent,
                    });
                },
            }
        }
    }
}
