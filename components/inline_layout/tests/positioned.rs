/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

mod common;

use std::sync::Arc;

use common::*;
use inline_layout::box_tree::{LayoutBox, LayoutNode};
use inline_layout::cell::ArcRefCell;
use inline_layout::geom::{PhysicalPoint, PhysicalSize};
use inline_layout::positioned::PositioningContext;
use inline_layout::replaced::ReplacedContent;
use inline_layout::style::{ComputedValues, Display, LengthPercentageOrAuto, PhysicalSides, Position};

fn insets(
    top: LengthPercentageOrAuto,
    right: LengthPercentageOrAuto,
    bottom: LengthPercentageOrAuto,
    left: LengthPercentageOrAuto,
) -> PhysicalSides<LengthPercentageOrAuto> {
    PhysicalSides {
        top,
        right,
        bottom,
        left,
    }
}

fn absolute_style(inset: PhysicalSides<LengthPercentageOrAuto>) -> ComputedValues {
    ComputedValues {
        position: Position::Absolute,
        inset,
        ..style_with_display(Display::BLOCK)
    }
}

fn lay_out(layout_box: LayoutBox) -> ArcRefCell<LayoutBox> {
    let layout_box = ArcRefCell::new(layout_box);
    let mut positioning_context = PositioningContext::new();
    positioning_context.push(layout_box.clone());
    let test_context = TestContext::new();
    positioning_context.layout_collected_children(
        PhysicalSize::new(px(200), px(100)),
        &test_context.layout_context(),
    );
    layout_box
}

#[test]
fn test_replaced_box_anchored_to_the_bottom_right() {
    let auto = LengthPercentageOrAuto::Auto;
    let ten = LengthPercentageOrAuto::px(10.);
    let image = lay_out(LayoutBox::new_replaced(
        Arc::new(absolute_style(insets(auto, ten, ten, auto))),
        ReplacedContent::with_size(px(40), px(20)),
    ));
    let image = image.borrow();
    assert_eq!((image.width, image.height), (px(40), px(20)));
    assert_eq!(image.position, PhysicalPoint::new(px(150), px(70)));
}

#[test]
fn test_both_insets_stretch_the_box() {
    let ten = LengthPercentageOrAuto::px(10.);
    let positioned = lay_out(LayoutBox::new_container(
        Arc::new(absolute_style(insets(ten, ten, ten, ten))),
        vec![text("aa")],
    ));
    let positioned = positioned.borrow();
    assert_eq!(positioned.width, px(180));
    assert_eq!(positioned.height, px(80));
    assert_eq!(positioned.position, PhysicalPoint::new(px(10), px(10)));
}

#[test]
fn test_auto_width_shrinks_to_fit() {
    let auto = LengthPercentageOrAuto::Auto;
    let positioned = lay_out(LayoutBox::new_container(
        Arc::new(absolute_style(insets(
            auto,
            auto,
            auto,
            LengthPercentageOrAuto::percentage(0.5),
        ))),
        vec![text("aaaaaaaa bbbbbbbb")],
    ));
    let positioned = positioned.borrow();
    // 100px are left for a 136px line, which breaks to fit the 64px words.
    assert_eq!(positioned.width, px(100));
    assert_eq!(positioned.line_boxes().len(), 2);
    assert_eq!(positioned.position, PhysicalPoint::new(px(100), px(0)));
}

#[test]
fn test_nested_absolutely_positioned_boxes() {
    let auto = LengthPercentageOrAuto::Auto;
    let five = LengthPercentageOrAuto::px(5.);
    let inner = LayoutNode::from_box(LayoutBox::new_replaced(
        Arc::new(absolute_style(insets(auto, auto, five, five))),
        ReplacedContent::with_size(px(10), px(10)),
    ));
    let outer = lay_out(LayoutBox::new_container(
        Arc::new(ComputedValues {
            width: LengthPercentageOrAuto::px(50.),
            height: LengthPercentageOrAuto::px(40.),
            ..absolute_style(insets(auto, auto, auto, auto))
        }),
        vec![text("x"), inner.clone()],
    ));
    assert_eq!(outer.borrow().position, PhysicalPoint::new(px(0), px(0)));

    let LayoutNode::Box(inner) = inner else {
        unreachable!();
    };
    // Positioned against the 50x40 outer box.
    assert_eq!(inner.borrow().position, PhysicalPoint::new(px(5), px(25)));
}
