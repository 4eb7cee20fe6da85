/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The text measurement service consumed by inline layout. Shaping and glyph
//! rasterization live elsewhere; layout only asks for advances and metrics.

use app_units::Au;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontDescriptor {
    pub family: String,
    pub size: Au,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: String::from("serif"),
            size: Au::from_px(16),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: Au,
    pub descent: Au,
    pub line_gap: Au,
}

impl FontMetrics {
    /// The height of the glyph box, from the ascender line to the descender line.
    pub fn glyph_height(&self) -> Au {
        self.ascent + self.descent
    }
}

pub trait FontMetricsProvider {
    /// The total advance of `text` when shaped with `font`.
    fn advance(&self, text: &str, font: &FontDescriptor) -> Au;

    fn metrics(&self, font: &FontDescriptor) -> FontMetrics;
}

/// A font whose glyphs all share one advance, with metrics expressed as fractions of
/// the font size. Used when no real font backend is available, and in tests, where
/// it makes expected geometry easy to compute by hand.
#[derive(Clone, Debug)]
pub struct FixedPitchFontMetrics {
    pub advance_ratio: f32,
    pub ascent_ratio: f32,
    pub descent_ratio: f32,
    pub line_gap_ratio: f32,
}

impl Default for FixedPitchFontMetrics {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
            line_gap_ratio: 1.2,
        }
    }
}

impl FontMetricsProvider for FixedPitchFontMetrics {
    fn advance(&self, text: &str, font: &FontDescriptor) -> Au {
        font.size.scale_by(self.advance_ratio) * text.chars().count() as i32
    }

    fn metrics(&self, font: &FontDescriptor) -> FontMetrics {
        FontMetrics {
            ascent: font.size.scale_by(self.ascent_ratio),
            descent: font.size.scale_by(self.descent_ratio),
            line_gap: font.size.scale_by(self.line_gap_ratio),
        }
    }
}
