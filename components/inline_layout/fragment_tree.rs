/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::sync::Arc;

use app_units::Au;
use euclid::num::Zero;
use serde::Serialize;

use crate::box_tree::{LayoutBox, TextNode};
use crate::cell::ArcRefCell;
use crate::flow::inline::is_collapsible_space;
use crate::print_tree::PrintTree;

/// A span of one text node placed on a line.
#[derive(Debug, Serialize)]
pub struct TextFragment {
    #[serde(skip)]
    pub node: Arc<TextNode>,
    /// Byte offset of the span into the text of `node`.
    pub offset: usize,
    /// Byte length of the span.
    pub length: usize,
    /// Distance from the start of the line box.
    pub inline_offset: Au,
    pub width: Au,
    pub height: Au,
    pub is_collapsible_whitespace: bool,
}

impl TextFragment {
    pub fn text(&self) -> &str {
        &self.node.text[self.offset..self.offset + self.length]
    }
}

/// An atomic inline placed on a line. The sizes are those of its margin box.
#[derive(Debug, Serialize)]
pub struct BoxFragment {
    #[serde(skip)]
    pub node: ArcRefCell<LayoutBox>,
    pub inline_offset: Au,
    pub width: Au,
    pub height: Au,
}

#[derive(Debug, Serialize)]
pub enum Fragment {
    Text(TextFragment),
    Box(BoxFragment),
}

impl Fragment {
    pub fn width(&self) -> Au {
        match self {
            Fragment::Text(fragment) => fragment.width,
            Fragment::Box(fragment) => fragment.width,
        }
    }

    pub fn height(&self) -> Au {
        match self {
            Fragment::Text(fragment) => fragment.height,
            Fragment::Box(fragment) => fragment.height,
        }
    }

    pub fn inline_offset(&self) -> Au {
        match self {
            Fragment::Text(fragment) => fragment.inline_offset,
            Fragment::Box(fragment) => fragment.inline_offset,
        }
    }

    pub fn is_collapsible_whitespace(&self) -> bool {
        match self {
            Fragment::Text(fragment) => fragment.is_collapsible_whitespace,
            Fragment::Box(_) => false,
        }
    }

    fn ends_in_whitespace(&self) -> bool {
        match self {
            Fragment::Text(fragment) => {
                !fragment.node.style.white_space.preserve_spaces() &&
                    fragment.text().ends_with(is_collapsible_space)
            },
            Fragment::Box(_) => false,
        }
    }

    pub fn print(&self, tree: &mut PrintTree) {
        match self {
            Fragment::Text(fragment) => tree.add_item(format!(
                "Text {:?} offset={:?} width={:?} height={:?}",
                fragment.text(),
                fragment.inline_offset,
                fragment.width,
                fragment.height
            )),
            Fragment::Box(fragment) => tree.add_item(format!(
                "Box offset={:?} width={:?} height={:?}",
                fragment.inline_offset, fragment.width, fragment.height
            )),
        }
    }
}

/// One row of inline content. Fragments are kept in the order they were produced,
/// which is also their left to right order.
#[derive(Debug, Serialize)]
pub struct LineBox {
    fragments: Vec<Fragment>,
    /// Distance from the top of the containing block's content box.
    pub block_start: Au,
    /// Distance from the left of the containing block's content box to the start of
    /// the line. Non-zero when a left float occludes part of the line.
    pub inline_start: Au,
}

impl LineBox {
    pub fn new(block_start: Au, inline_start: Au) -> Self {
        Self {
            fragments: Vec::new(),
            block_start,
            inline_start,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn width(&self) -> Au {
        self.fragments
            .iter()
            .fold(Au::zero(), |sum, fragment| sum + fragment.width())
    }

    /// The tallest fragment on this line. Callers apply the line-height floor.
    pub fn height(&self) -> Au {
        self.fragments
            .iter()
            .map(Fragment::height)
            .max()
            .unwrap_or_else(Au::zero)
    }

    pub fn is_empty_or_ends_in_whitespace(&self) -> bool {
        self.fragments
            .last()
            .is_none_or(Fragment::ends_in_whitespace)
    }

    pub(crate) fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Drop collapsible whitespace at the end of the line. It does not take up
    /// space, so it is not kept as a fragment either.
    pub fn trim_trailing_whitespace(&mut self) {
        while self
            .fragments
            .last()
            .is_some_and(Fragment::is_collapsible_whitespace)
        {
            self.fragments.pop();
        }
    }

    pub fn print(&self, tree: &mut PrintTree) {
        tree.new_level(format!(
            "LineBox\
                \nblock_start={:?}\
                \ninline_start={:?}\
                \nsize={:?}x{:?}",
            self.block_start,
            self.inline_start,
            self.width(),
            self.height()
        ));
        for fragment in &self.fragments {
            fragment.print(tree);
        }
        tree.end_level();
    }
}
