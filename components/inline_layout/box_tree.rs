/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The box tree consumed by inline layout. Construction of this tree from the
//! document happens upstream; layout only writes used sizes, positions and line
//! boxes into it.

use std::sync::Arc;

use app_units::Au;
use euclid::num::Zero;
use serde::Serialize;

use crate::cell::ArcRefCell;
use crate::context::LayoutContext;
use crate::fragment_tree::LineBox;
use crate::geom::PhysicalPoint;
use crate::print_tree::PrintTree;
use crate::replaced::ReplacedContent;
use crate::style::{ComputedValues, Display};

#[derive(Debug, Serialize)]
pub struct TextNode {
    pub text: String,
    #[serde(skip)]
    pub style: Arc<ComputedValues>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, style: Arc<ComputedValues>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A child of a block container.
#[derive(Clone, Debug)]
pub enum LayoutNode {
    Text(Arc<TextNode>),
    Box(ArcRefCell<LayoutBox>),
    /// A forced line break, such as the one produced by `<br>`.
    LineBreak,
}

impl LayoutNode {
    pub fn text(text: impl Into<String>, style: Arc<ComputedValues>) -> Self {
        LayoutNode::Text(Arc::new(TextNode::new(text, style)))
    }

    pub fn from_box(layout_box: LayoutBox) -> Self {
        LayoutNode::Box(ArcRefCell::new(layout_box))
    }

    /// Whether this node can take part in an inline formatting context. Absolutely
    /// positioned boxes are accepted regardless of their display, since they are
    /// hoisted out of the flow before line generation.
    pub fn is_inline_level(&self) -> bool {
        match self {
            LayoutNode::Text(_) | LayoutNode::LineBreak => true,
            LayoutNode::Box(layout_box) => {
                let layout_box = layout_box.borrow();
                layout_box.style.position.is_absolutely_positioned() ||
                    layout_box.style.display.is_inline_level()
            },
        }
    }

    fn print(&self, tree: &mut PrintTree) {
        match self {
            LayoutNode::Text(text) => tree.add_item(format!("Text {:?}", text.text)),
            LayoutNode::Box(layout_box) => layout_box.borrow().print(tree),
            LayoutNode::LineBreak => tree.add_item("LineBreak".to_owned()),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BlockContainer {
    #[serde(skip)]
    pub children: Vec<LayoutNode>,
    /// Rebuilt from scratch by every inline layout pass over this container.
    pub line_boxes: Vec<LineBox>,
}

#[derive(Debug, Serialize)]
pub enum BoxContents {
    Replaced(ReplacedContent),
    Flow(BlockContainer),
}

/// The shape of a box as far as placing it on a line is concerned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoxKind {
    Replaced,
    InlineBlock,
    /// Neither of the above. Inline boxes never reach line placement as a unit,
    /// so a box of this kind there means the box tree was built incorrectly.
    Other,
}

#[derive(Debug, Serialize)]
pub struct LayoutBox {
    #[serde(skip)]
    pub style: Arc<ComputedValues>,
    pub contents: BoxContents,
    /// The used width of the content box.
    pub width: Au,
    /// The used height of the content box.
    pub height: Au,
    /// The position of the margin box, relative to the containing block.
    pub position: PhysicalPoint<Au>,
}

impl LayoutBox {
    pub fn new(style: Arc<ComputedValues>, contents: BoxContents) -> Self {
        Self {
            style,
            contents,
            width: Au::zero(),
            height: Au::zero(),
            position: PhysicalPoint::zero(),
        }
    }

    pub fn new_replaced(style: Arc<ComputedValues>, replaced: ReplacedContent) -> Self {
        Self::new(style, BoxContents::Replaced(replaced))
    }

    pub fn new_container(style: Arc<ComputedValues>, children: Vec<LayoutNode>) -> Self {
        Self::new(
            style,
            BoxContents::Flow(BlockContainer {
                children,
                line_boxes: Vec::new(),
            }),
        )
    }

    pub fn kind(&self) -> BoxKind {
        match &self.contents {
            BoxContents::Replaced(_) => BoxKind::Replaced,
            BoxContents::Flow(_) if self.style.display == Display::INLINE_BLOCK => {
                BoxKind::InlineBlock
            },
            BoxContents::Flow(_) => BoxKind::Other,
        }
    }

    /// Whether this is a non-atomic inline box, whose children take part in the
    /// inline formatting context of its parent.
    pub fn is_inline_box(&self) -> bool {
        matches!(self.contents, BoxContents::Flow(_)) &&
            self.style.display == Display::INLINE &&
            !self.style.position.is_absolutely_positioned()
    }

    pub fn children(&self) -> &[LayoutNode] {
        match &self.contents {
            BoxContents::Flow(container) => &container.children,
            BoxContents::Replaced(_) => &[],
        }
    }

    pub fn line_boxes(&self) -> &[LineBox] {
        match &self.contents {
            BoxContents::Flow(container) => &container.line_boxes,
            BoxContents::Replaced(_) => &[],
        }
    }

    pub(crate) fn set_line_boxes(&mut self, line_boxes: Vec<LineBox>) {
        if let BoxContents::Flow(container) = &mut self.contents {
            container.line_boxes = line_boxes;
        }
    }

    /// Whether every child can take part in an inline formatting context. This is
    /// trivially true for a box without children.
    pub fn children_are_inline(&self) -> bool {
        self.children().iter().all(LayoutNode::is_inline_level)
    }

    /// The used `line-height` of this box, the floor of every line box it contains.
    pub fn line_height(&self, layout_context: &LayoutContext) -> Au {
        let metrics = layout_context.metrics_for(&self.style.font);
        self.style.line_height(&metrics)
    }

    pub fn margin_box_width(&self, containing_block_width: Au) -> Au {
        self.width +
            self.style
                .padding_border_margin(containing_block_width)
                .inline_sum()
    }

    pub fn margin_box_height(&self, containing_block_width: Au) -> Au {
        self.height +
            self.style
                .padding_border_margin(containing_block_width)
                .block_sum()
    }

    pub fn print(&self, tree: &mut PrintTree) {
        tree.new_level(format!(
            "LayoutBox\
                \ndisplay={:?}\
                \nposition={:?}\
                \nsize={:?}x{:?}",
            self.style.display, self.style.position, self.width, self.height,
        ));
        match &self.contents {
            BoxContents::Replaced(replaced) => tree.add_item(format!("Replaced {:?}", replaced)),
            BoxContents::Flow(container) => {
                for child in &container.children {
                    child.print(tree);
                }
            },
        }
        tree.end_level();
    }
}
