/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use app_units::{AU_PER_PX, Au};
use euclid::num::Zero;
use serde::Serialize;

pub type PhysicalPoint<U> = euclid::default::Point2D<U>;
pub type PhysicalSize<U> = euclid::default::Size2D<U>;
pub type PhysicalRect<U> = euclid::default::Rect<U>;

/// One CSS pixel. This is the gap kept between a float's margin edge and the
/// line content that flows around it.
pub(crate) const ONE_PX: Au = Au(AU_PER_PX);

pub trait RectExt {
    /// Whether the block position `y` lies within this rectangle's vertical span.
    /// The span includes its top edge and excludes its bottom edge.
    fn contains_vertically(&self, y: Au) -> bool;
}

impl RectExt for PhysicalRect<Au> {
    fn contains_vertically(&self, y: Au) -> bool {
        y >= self.min_y() && y < self.max_y()
    }
}

/// The horizontal interval of a line that is not occluded by floats, in the
/// coordinate space of the containing block of the inline formatting context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct AvailableSpaceForLine {
    pub left: Au,
    pub right: Au,
}

impl AvailableSpaceForLine {
    /// The width between the two bounds. Floats wider than the containing block
    /// can push the bounds past each other, in which case there is no space at all.
    pub fn width(&self) -> Au {
        (self.right - self.left).max(Au::zero())
    }
}
