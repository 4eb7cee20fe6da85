/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use app_units::Au;
use serde::Serialize;

use crate::style::ComputedValues;

/// Content with intrinsic dimensions, such as an image or a video.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReplacedContent {
    pub intrinsic_width: Option<Au>,
    pub intrinsic_height: Option<Au>,
    /// Width divided by height.
    pub intrinsic_ratio: Option<f32>,
}

impl ReplacedContent {
    pub fn with_size(width: Au, height: Au) -> Self {
        let intrinsic_ratio = if height > Au(0) {
            Some(width.to_f32_px() / height.to_f32_px())
        } else {
            None
        };
        Self {
            intrinsic_width: Some(width),
            intrinsic_height: Some(height),
            intrinsic_ratio,
        }
    }

    pub fn with_ratio(intrinsic_ratio: f32) -> Self {
        Self {
            intrinsic_width: None,
            intrinsic_height: None,
            intrinsic_ratio: Some(intrinsic_ratio),
        }
    }

    /// <https://drafts.csswg.org/css2/visudet.html#inline-replaced-width>
    ///
    /// Percentages resolve against `containing_block_width`. A percentage height
    /// behaves as `auto` when the height of the containing block is not definite.
    pub fn used_width(
        &self,
        style: &ComputedValues,
        containing_block_width: Au,
        containing_block_height: Option<Au>,
    ) -> Au {
        if let Some(width) = style.width.resolve(containing_block_width) {
            return width;
        }

        let specified_height = style.height.maybe_resolve(containing_block_height);
        if specified_height.is_none() {
            if let Some(width) = self.intrinsic_width {
                return width;
            }
        }

        if let Some(ratio) = self.intrinsic_ratio {
            if let Some(height) = specified_height.or(self.intrinsic_height) {
                return height.scale_by(ratio);
            }
            // CSS 2.1 leaves this case undefined. Fill the containing block, like
            // other engines do.
            return containing_block_width;
        }

        self.intrinsic_width.unwrap_or_else(|| Au::from_px(300))
    }

    /// <https://drafts.csswg.org/css2/visudet.html#inline-replaced-height>
    pub fn used_height(
        &self,
        style: &ComputedValues,
        used_width: Au,
        containing_block_height: Option<Au>,
    ) -> Au {
        if let Some(height) = style.height.maybe_resolve(containing_block_height) {
            return height;
        }

        if style.width.is_auto() {
            if let Some(height) = self.intrinsic_height {
                return height;
            }
        }

        match (self.intrinsic_ratio, self.intrinsic_height) {
            (Some(ratio), _) if ratio > 0. => used_width.scale_by(1. / ratio),
            (_, Some(height)) => height,
            _ => Au::from_px(150),
        }
    }
}
