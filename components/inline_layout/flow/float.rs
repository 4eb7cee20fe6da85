/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Float exclusions, as seen by the content that flows around them.
//!
//! Placing floats is the job of the block formatting context that contains them;
//! here they are only registered and queried. See CSS 2.1 § 9.5.1:
//! <https://www.w3.org/TR/CSS2/visuren.html#float-position>

use app_units::Au;
use serde::Serialize;

use crate::geom::{PhysicalRect, RectExt};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FloatSide {
    Left,
    Right,
}

/// The margin box of one float that has already been placed, in the coordinate
/// space of the root of its block formatting context.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloatExclusion {
    pub side: FloatSide,
    pub margin_box: PhysicalRect<Au>,
}

/// Maps between the coordinate space of a containing block and the coordinate space
/// of the independent block formatting context that holds the floats. Fragments are
/// positioned relative to their containing block, floats relative to the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ContainingBlockPositionInfo {
    /// The distance from the block start of the block formatting context root to
    /// the block start of the content box of this containing block.
    pub block_start: Au,
    /// The distance from the inline start of the block formatting context root to
    /// the inline start of the content box of this containing block.
    pub inline_start: Au,
}

impl ContainingBlockPositionInfo {
    pub fn new(inline_start: Au, block_start: Au) -> Self {
        Self {
            block_start,
            inline_start,
        }
    }

    /// The position info of a box whose content box starts at `offset` within
    /// this containing block.
    pub fn offset_by(&self, inline_offset: Au, block_offset: Au) -> Self {
        Self {
            block_start: self.block_start + block_offset,
            inline_start: self.inline_start + inline_offset,
        }
    }

    /// Convert a block position local to this containing block into the root's space.
    pub fn to_root_block(&self, block_position: Au) -> Au {
        block_position + self.block_start
    }

    /// Convert an inline position in the root's space into this containing block's space.
    pub fn to_local_inline(&self, inline_position: Au) -> Au {
        inline_position - self.inline_start
    }
}

/// The floats of one block formatting context, one list per side, each kept in
/// the order the floats were placed.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FloatContext {
    left_side_floats: Vec<PhysicalRect<Au>>,
    right_side_floats: Vec<PhysicalRect<Au>>,
}

impl FloatContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_float(&mut self, exclusion: FloatExclusion) {
        match exclusion.side {
            FloatSide::Left => self.left_side_floats.push(exclusion.margin_box),
            FloatSide::Right => self.right_side_floats.push(exclusion.margin_box),
        }
    }

    /// The float on `side` nearest to content at `block_position` (in root space):
    /// the most recently placed one whose margin box spans that position.
    pub fn nearest_float_at(&self, side: FloatSide, block_position: Au) -> Option<&PhysicalRect<Au>> {
        let floats = match side {
            FloatSide::Left => &self.left_side_floats,
            FloatSide::Right => &self.right_side_floats,
        };
        floats
            .iter()
            .rev()
            .find(|margin_box| margin_box.contains_vertically(block_position))
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;

    use super::{FloatContext, FloatExclusion, FloatSide};
    use crate::geom::{PhysicalPoint, PhysicalRect, PhysicalSize};

    fn exclusion(side: FloatSide, x: i32, y: i32, width: i32, height: i32) -> FloatExclusion {
        FloatExclusion {
            side,
            margin_box: PhysicalRect::new(
                PhysicalPoint::new(Au::from_px(x), Au::from_px(y)),
                PhysicalSize::new(Au::from_px(width), Au::from_px(height)),
            ),
        }
    }

    #[test]
    fn test_nearest_float_is_last_placed() {
        let mut floats = FloatContext::new();
        floats.add_float(exclusion(FloatSide::Left, 0, 0, 100, 50));
        floats.add_float(exclusion(FloatSide::Left, 100, 0, 30, 20));

        let nearest = floats.nearest_float_at(FloatSide::Left, Au::from_px(10)).unwrap();
        assert_eq!(nearest.max_x(), Au::from_px(130));

        // Below the second float only the first one applies.
        let nearest = floats.nearest_float_at(FloatSide::Left, Au::from_px(20)).unwrap();
        assert_eq!(nearest.max_x(), Au::from_px(100));

        assert!(floats.nearest_float_at(FloatSide::Left, Au::from_px(50)).is_none());
        assert!(floats.nearest_float_at(FloatSide::Right, Au::from_px(10)).is_none());
    }
}
