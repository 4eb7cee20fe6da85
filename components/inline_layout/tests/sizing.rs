/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shrink-to-fit sizing of inline-blocks and the dimensioning of atomic inlines.

mod common;

use std::sync::Arc;

use app_units::Au;
use common::*;
use inline_layout::LayoutMode;
use inline_layout::box_tree::{LayoutBox, LayoutNode};
use inline_layout::flow::float::{ContainingBlockPositionInfo, FloatContext};
use inline_layout::flow::inline::InlineFormattingContext;
use inline_layout::positioned::PositioningContext;
use inline_layout::replaced::ReplacedContent;
use inline_layout::sizing::{ShrinkToFitResult, calculate_shrink_to_fit_widths};
use inline_layout::style::{
    ComputedValues, Display, LengthPercentage, LengthPercentageOrAuto, PhysicalSides,
};
use quickcheck::{TestResult, quickcheck};

/// The used width and height of the box in `node`.
fn used_size(node: &LayoutNode) -> (Au, Au) {
    let LayoutNode::Box(layout_box) = node else {
        unreachable!();
    };
    let layout_box = layout_box.borrow();
    (layout_box.width, layout_box.height)
}

fn widths(preferred_minimum_width: i32, preferred_width: i32) -> ShrinkToFitResult {
    ShrinkToFitResult {
        preferred_width: px(preferred_width),
        preferred_minimum_width: px(preferred_minimum_width),
    }
}

#[test]
fn test_shrink_to_fit_clamps_to_available_width() {
    let result = widths(50, 300);
    assert_eq!(result.shrink_to_fit(px(120)), px(120));
    assert_eq!(result.shrink_to_fit(px(20)), px(50));
    assert_eq!(result.shrink_to_fit(px(400)), px(300));
}

#[test]
fn test_shrink_to_fit_stays_between_minimum_and_preferred() {
    fn prop(minimum: u16, extra: u16, available: i32) -> TestResult {
        let minimum = Au(minimum as i32);
        let preferred = minimum + Au(extra as i32);
        let result = ShrinkToFitResult {
            preferred_width: preferred,
            preferred_minimum_width: minimum,
        };
        let width = result.shrink_to_fit(Au(available));
        TestResult::from_bool(
            width >= minimum &&
                width <= preferred &&
                (Au(available) < minimum || Au(available) > preferred || width == Au(available)),
        )
    }
    quickcheck(prop as fn(u16, u16, i32) -> TestResult);
}

fn words() -> Vec<LayoutNode> {
    // 48px, a space, then 96px.
    vec![text("aaaaaa bbbbbbbbbbbb")]
}

#[test]
fn test_calculate_shrink_to_fit_widths() {
    let test_context = TestContext::new();
    let mut layout_box = LayoutBox::new_container(
        Arc::new(style_with_display(Display::INLINE_BLOCK)),
        words(),
    );
    let result = calculate_shrink_to_fit_widths(&mut layout_box, &test_context.layout_context());
    assert_eq!(result, widths(96, 152));
}

#[test]
fn test_auto_width_inline_block_shrinks_to_fit() {
    let child = inline_block(style_with_display(Display::INLINE_BLOCK), words());
    let mut container = container(120, vec![child.clone()]);
    run_final(&mut container);

    let LayoutNode::Box(child) = child else {
        unreachable!();
    };
    let child = child.borrow();
    assert_eq!(child.width, px(120));
    assert_eq!(line_contents(&child), [["aaaaaa"], ["bbbbbbbbbbbb"]]);
    assert_eq!(child.height, px(32));
    assert_eq!(container.height, px(32));
}

#[test]
fn test_auto_width_inline_block_gives_way_to_its_padding() {
    let style = ComputedValues {
        padding: PhysicalSides::all(LengthPercentage::px(12.)),
        ..style_with_display(Display::INLINE_BLOCK)
    };
    let child = inline_block(style, words());
    let mut container = container(120, vec![child.clone()]);
    run_final(&mut container);

    assert_eq!(used_size(&child), (px(96), px(32)));
    // The fragment covers the whole margin box.
    assert_eq!(container.line_boxes()[0].width(), px(120));
    assert_eq!(container.height, px(56));
}

#[test]
fn test_auto_width_inline_block_never_shrinks_below_its_minimum() {
    let child = inline_block(style_with_display(Display::INLINE_BLOCK), words());
    let mut container = container(50, vec![child.clone()]);
    run_final(&mut container);
    assert_eq!(used_size(&child).0, px(96));
}

#[test]
fn test_auto_width_inline_block_never_grows_beyond_preferred() {
    let child = inline_block(style_with_display(Display::INLINE_BLOCK), words());
    let mut container = container(400, vec![child.clone()]);
    run_final(&mut container);
    assert_eq!(used_size(&child), (px(152), px(16)));
}

#[test]
fn test_specified_width_inline_block() {
    let style = ComputedValues {
        width: LengthPercentageOrAuto::px(70.),
        height: LengthPercentageOrAuto::px(10.),
        ..style_with_display(Display::INLINE_BLOCK)
    };
    let child = inline_block(style, words());
    let mut container = container(400, vec![child.clone()]);
    run_final(&mut container);

    let LayoutNode::Box(child) = child else {
        unreachable!();
    };
    let child = child.borrow();
    assert_eq!(child.width, px(70));
    assert_eq!(child.line_boxes().len(), 2);
    assert_eq!(child.height, px(10));
}

#[test]
fn test_percentage_width_inline_block() {
    let style = ComputedValues {
        width: LengthPercentageOrAuto::percentage(0.25),
        ..style_with_display(Display::INLINE_BLOCK)
    };
    let child = inline_block(style, vec![text("a")]);
    let mut container = container(400, vec![child.clone()]);
    run_final(&mut container);
    assert_eq!(used_size(&child).0, px(100));
}

#[test]
fn test_intrinsic_widths_of_nested_inline_blocks() {
    let test_context = TestContext::new();
    let child = inline_block(style_with_display(Display::INLINE_BLOCK), words());
    let mut outer = container(0, vec![child]);
    let result = calculate_shrink_to_fit_widths(&mut outer, &test_context.layout_context());
    assert_eq!(result, widths(96, 152));
}

#[test]
fn test_inline_blocks_wrap_like_words() {
    let first = inline_block(style_with_display(Display::INLINE_BLOCK), vec![text("aaaaaa")]);
    let second = inline_block(style_with_display(Display::INLINE_BLOCK), vec![text("bbbbbb")]);
    let mut container = container(80, vec![first, second]);
    run_final(&mut container);
    assert_eq!(line_contents(&container), [["[box]"], ["[box]"]]);
    assert_eq!(container.height, px(32));
}

#[test]
fn test_replaced_elements_keep_their_intrinsic_ratio() {
    let image = LayoutNode::from_box(LayoutBox::new_replaced(
        Arc::new(ComputedValues {
            width: LengthPercentageOrAuto::px(60.),
            ..Default::default()
        }),
        ReplacedContent::with_size(px(40), px(20)),
    ));
    let mut container = container(200, vec![image.clone(), replaced(10, 10)]);
    run_final(&mut container);

    assert_eq!(used_size(&image), (px(60), px(30)));
    assert_eq!(container.line_boxes()[0].width(), px(70));
    assert_eq!(container.height, px(30));
}

#[test]
fn test_dimension_box_on_line_directly() {
    let test_context = TestContext::new();
    let layout_context = test_context.layout_context();
    let floats = FloatContext::new();
    let mut container = container(120, Vec::new());
    let ifc = InlineFormattingContext::new(
        &mut container,
        &floats,
        ContainingBlockPositionInfo::default(),
        &layout_context,
    );

    let mut layout_box = LayoutBox::new_container(
        Arc::new(style_with_display(Display::INLINE_BLOCK)),
        words(),
    );
    let mut positioning_context = PositioningContext::new();
    ifc.dimension_box_on_line(&mut layout_box, LayoutMode::Final, &mut positioning_context);
    assert_eq!(layout_box.width, px(120));
    assert_eq!(layout_box.height, px(32));
}
