/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shrink-to-fit sizing.
//!
//! <https://drafts.csswg.org/css2/visudet.html#shrink-to-fit-float>

use app_units::{Au, MAX_AU};
use euclid::num::Zero;
use serde::Serialize;

use crate::LayoutMode;
use crate::box_tree::LayoutBox;
use crate::context::LayoutContext;
use crate::flow::{greatest_child_width, layout_inside};
use crate::positioned::PositioningContext;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ShrinkToFitResult {
    /// The width of the content laid out without any optional line break.
    pub preferred_width: Au,
    /// The width of the content laid out with every possible line break.
    pub preferred_minimum_width: Au,
}

impl ShrinkToFitResult {
    /// `min(max(preferred minimum width, available width), preferred width)`
    pub fn shrink_to_fit(&self, available_width: Au) -> Au {
        self.preferred_minimum_width
            .max(available_width)
            .min(self.preferred_width)
    }
}

/// Measure the preferred and preferred minimum widths of the content of
/// `layout_box` by laying it out in both intrinsic size probes. The used width of
/// the box is left to the caller to decide.
pub fn calculate_shrink_to_fit_widths(
    layout_box: &mut LayoutBox,
    layout_context: &LayoutContext,
) -> ShrinkToFitResult {
    // Boxes found by the probes are positioned by the final layout, not here.
    let mut positioning_context = PositioningContext::new();

    layout_box.width = MAX_AU;
    layout_inside(
        layout_box,
        LayoutMode::MaxContent,
        layout_context,
        &mut positioning_context,
    );
    let preferred_width = greatest_child_width(layout_box);

    layout_box.width = Au::zero();
    layout_inside(
        layout_box,
        LayoutMode::MinContent,
        layout_context,
        &mut positioning_context,
    );
    let preferred_minimum_width = greatest_child_width(layout_box);

    ShrinkToFitResult {
        preferred_width,
        preferred_minimum_width,
    }
}
