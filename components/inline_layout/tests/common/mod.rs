/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use app_units::Au;
use inline_layout::LayoutMode;
use inline_layout::box_tree::{LayoutBox, LayoutNode, TextNode};
use inline_layout::context::LayoutContext;
use inline_layout::flow::float::{
    ContainingBlockPositionInfo, FloatContext, FloatExclusion, FloatSide,
};
use inline_layout::flow::inline::{InlineFormattingContext, InlineItemSource, InlineLevelItem};
use inline_layout::fonts::FixedPitchFontMetrics;
use inline_layout::fragment_tree::Fragment;
use inline_layout::geom::{PhysicalPoint, PhysicalRect, PhysicalSize};
use inline_layout::options::LayoutOptions;
use inline_layout::positioned::PositioningContext;
use inline_layout::replaced::ReplacedContent;
use inline_layout::style::{ComputedValues, Display, LineHeight};

pub fn px(px: i32) -> Au {
    Au::from_px(px)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fonts and options for one test. With the default 16px font every character is
/// 8px wide and glyphs are 16px tall.
pub struct TestContext {
    pub fonts: FixedPitchFontMetrics,
    pub options: LayoutOptions,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            fonts: FixedPitchFontMetrics::default(),
            options,
        }
    }

    pub fn layout_context(&self) -> LayoutContext<'_> {
        LayoutContext::new(&self.fonts, &self.options)
    }
}

pub fn style_with_display(display: Display) -> ComputedValues {
    ComputedValues {
        display,
        line_height: LineHeight::Length(px(16)),
        ..Default::default()
    }
}

pub fn text(text: &str) -> LayoutNode {
    LayoutNode::text(text, Arc::new(ComputedValues::default()))
}

/// A block container with a 16px line height.
pub fn container(width: i32, children: Vec<LayoutNode>) -> LayoutBox {
    let mut container =
        LayoutBox::new_container(Arc::new(style_with_display(Display::BLOCK)), children);
    container.width = px(width);
    container
}

pub fn replaced(width: i32, height: i32) -> LayoutNode {
    LayoutNode::from_box(LayoutBox::new_replaced(
        Arc::new(ComputedValues::default()),
        ReplacedContent::with_size(px(width), px(height)),
    ))
}

pub fn inline_block(style: ComputedValues, children: Vec<LayoutNode>) -> LayoutNode {
    LayoutNode::from_box(LayoutBox::new_container(
        Arc::new(ComputedValues {
            display: Display::INLINE_BLOCK,
            ..style
        }),
        children,
    ))
}

pub fn float(side: FloatSide, x: i32, y: i32, width: i32, height: i32) -> FloatExclusion {
    FloatExclusion {
        side,
        margin_box: PhysicalRect::new(
            PhysicalPoint::new(px(x), px(y)),
            PhysicalSize::new(px(width), px(height)),
        ),
    }
}

/// Run an inline formatting context over `container` and return the boxes it hoisted.
pub fn run_inline(
    test_context: &TestContext,
    container: &mut LayoutBox,
    floats: &FloatContext,
    position_info: ContainingBlockPositionInfo,
    layout_mode: LayoutMode,
) -> PositioningContext {
    let layout_context = test_context.layout_context();
    let mut positioning_context = PositioningContext::new();
    InlineFormattingContext::new(container, floats, position_info, &layout_context)
        .run(layout_mode, &mut positioning_context);
    positioning_context
}

pub fn run_final(container: &mut LayoutBox) -> PositioningContext {
    run_inline(
        &TestContext::new(),
        container,
        &FloatContext::new(),
        ContainingBlockPositionInfo::default(),
        LayoutMode::Final,
    )
}

/// The content of every line, one string per fragment. Boxes show up as `[box]`.
pub fn line_contents(container: &LayoutBox) -> Vec<Vec<String>> {
    container
        .line_boxes()
        .iter()
        .map(|line_box| {
            line_box
                .fragments()
                .iter()
                .map(|fragment| match fragment {
                    Fragment::Text(text) => text.text().to_owned(),
                    Fragment::Box(_) => "[box]".to_owned(),
                })
                .collect()
        })
        .collect()
}

/// An item source that replays a fixed list of items and records the width it is
/// offered on every pull.
pub struct ScriptedItems {
    items: VecDeque<InlineLevelItem>,
    pub offered_widths: Vec<Au>,
}

impl ScriptedItems {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            offered_widths: Vec::new(),
        }
    }

    /// Append a chunk of `node`. Chunks consisting of spaces are collapsible whitespace.
    pub fn chunk(mut self, node: &Arc<TextNode>, offset: usize, length: usize) -> Self {
        let chunk = &node.text[offset..offset + length];
        self.items.push_back(InlineLevelItem::Text {
            node: node.clone(),
            offset,
            length,
            width: px(8) * length as i32,
            should_force_break: false,
            is_collapsible_whitespace: chunk.chars().all(|character| character == ' '),
        });
        self
    }

    pub fn forced_break(mut self) -> Self {
        self.items.push_back(InlineLevelItem::ForcedBreak);
        self
    }
}

impl InlineItemSource for ScriptedItems {
    fn next(&mut self, available_width: Au) -> Option<InlineLevelItem> {
        self.offered_widths.push(available_width);
        self.items.pop_front()
    }
}

pub fn text_node(text: &str) -> Arc<TextNode> {
    Arc::new(TextNode::new(text, Arc::new(ComputedValues::default())))
}

/// Feed `items` to an inline formatting context over an empty container.
pub fn generate_from(width: i32, mut items: ScriptedItems) -> LayoutBox {
    generate_beside_floats(width, &FloatContext::new(), &mut items)
}

pub fn generate_beside_floats(
    width: i32,
    floats: &FloatContext,
    items: &mut ScriptedItems,
) -> LayoutBox {
    let test_context = TestContext::new();
    let layout_context = test_context.layout_context();
    let mut container = container(width, Vec::new());
    let mut positioning_context = PositioningContext::new();
    InlineFormattingContext::new(
        &mut container,
        floats,
        ContainingBlockPositionInfo::default(),
        &layout_context,
    )
    .generate_line_boxes_from(items, LayoutMode::Final, &mut positioning_context);
    container
}
