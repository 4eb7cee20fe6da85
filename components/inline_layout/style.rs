/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The subset of computed style that inline layout consumes.

use app_units::Au;
use euclid::num::Zero;
use serde::Serialize;

use crate::fonts::{FontDescriptor, FontMetrics};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DisplayOutside {
    Block,
    Inline,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DisplayInside {
    Flow,
    FlowRoot,
    Flex,
    Table,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Display {
    pub outside: DisplayOutside,
    pub inside: DisplayInside,
}

impl Display {
    pub const INLINE: Display = Display {
        outside: DisplayOutside::Inline,
        inside: DisplayInside::Flow,
    };
    pub const INLINE_BLOCK: Display = Display {
        outside: DisplayOutside::Inline,
        inside: DisplayInside::FlowRoot,
    };
    pub const INLINE_FLEX: Display = Display {
        outside: DisplayOutside::Inline,
        inside: DisplayInside::Flex,
    };
    pub const INLINE_TABLE: Display = Display {
        outside: DisplayOutside::Inline,
        inside: DisplayInside::Table,
    };
    pub const BLOCK: Display = Display {
        outside: DisplayOutside::Block,
        inside: DisplayInside::Flow,
    };

    pub fn is_inline_level(&self) -> bool {
        self.outside == DisplayOutside::Inline
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Position {
    pub fn is_absolutely_positioned(&self) -> bool {
        matches!(self, Position::Absolute | Position::Fixed)
    }
}

/// <https://drafts.csswg.org/css-text-3/#white-space-property>
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum WhiteSpace {
    Normal,
    NoWrap,
    Pre,
    PreWrap,
    PreLine,
}

impl WhiteSpace {
    pub fn preserve_spaces(&self) -> bool {
        matches!(self, WhiteSpace::Pre | WhiteSpace::PreWrap)
    }

    pub fn preserve_newlines(&self) -> bool {
        matches!(
            self,
            WhiteSpace::Pre | WhiteSpace::PreWrap | WhiteSpace::PreLine
        )
    }

    pub fn allow_wrap(&self) -> bool {
        !matches!(self, WhiteSpace::NoWrap | WhiteSpace::Pre)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum LineHeight {
    Normal,
    Number(f32),
    Length(Au),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum LengthPercentage {
    Length(Au),
    /// A percentage expressed as a fraction, so that `0.5` is `50%`.
    Percentage(f32),
}

impl LengthPercentage {
    pub fn zero() -> Self {
        LengthPercentage::Length(Au::zero())
    }

    pub fn px(px: f32) -> Self {
        LengthPercentage::Length(Au::from_f32_px(px))
    }

    pub fn resolve(&self, basis: Au) -> Au {
        match *self {
            LengthPercentage::Length(length) => length,
            LengthPercentage::Percentage(fraction) => basis.scale_by(fraction),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum LengthPercentageOrAuto {
    Auto,
    LengthPercentage(LengthPercentage),
}

impl LengthPercentageOrAuto {
    pub fn px(px: f32) -> Self {
        LengthPercentageOrAuto::LengthPercentage(LengthPercentage::px(px))
    }

    pub fn percentage(fraction: f32) -> Self {
        LengthPercentageOrAuto::LengthPercentage(LengthPercentage::Percentage(fraction))
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, LengthPercentageOrAuto::Auto)
    }

    /// Resolve against `basis`, or `None` for `auto`.
    pub fn resolve(&self, basis: Au) -> Option<Au> {
        match self {
            LengthPercentageOrAuto::Auto => None,
            LengthPercentageOrAuto::LengthPercentage(length) => Some(length.resolve(basis)),
        }
    }

    /// Like `resolve`, but percentages also resolve to `None` when there is no
    /// definite basis to resolve them against.
    pub fn maybe_resolve(&self, basis: Option<Au>) -> Option<Au> {
        match self {
            LengthPercentageOrAuto::Auto => None,
            LengthPercentageOrAuto::LengthPercentage(LengthPercentage::Length(length)) => {
                Some(*length)
            },
            LengthPercentageOrAuto::LengthPercentage(percentage) => {
                basis.map(|basis| percentage.resolve(basis))
            },
        }
    }

    /// Resolve against `basis`, treating `auto` as zero.
    pub fn resolved_or_zero(&self, basis: Au) -> Au {
        self.resolve(basis).unwrap_or_else(Au::zero)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhysicalSides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> PhysicalSides<T> {
    pub fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn map<U>(&self, f: impl Fn(T) -> U) -> PhysicalSides<U> {
        PhysicalSides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

/// Padding, border and margin with percentages resolved and `auto` margins
/// treated as zero.
#[derive(Clone, Debug)]
pub struct PaddingBorderMargin {
    pub padding: PhysicalSides<Au>,
    pub border: PhysicalSides<Au>,
    pub margin: PhysicalSides<Au>,
}

impl PaddingBorderMargin {
    pub fn zero() -> Self {
        Self {
            padding: PhysicalSides::all(Au::zero()),
            border: PhysicalSides::all(Au::zero()),
            margin: PhysicalSides::all(Au::zero()),
        }
    }

    /// The sum of horizontal margins, borders and padding.
    pub fn inline_sum(&self) -> Au {
        self.margin.left +
            self.border.left +
            self.padding.left +
            self.padding.right +
            self.border.right +
            self.margin.right
    }

    /// The sum of vertical margins, borders and padding.
    pub fn block_sum(&self) -> Au {
        self.margin.top +
            self.border.top +
            self.padding.top +
            self.padding.bottom +
            self.border.bottom +
            self.margin.bottom
    }

    /// The offset from the margin box origin to the content box origin.
    pub fn content_offset(&self) -> (Au, Au) {
        (
            self.margin.left + self.border.left + self.padding.left,
            self.margin.top + self.border.top + self.padding.top,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComputedValues {
    pub display: Display,
    pub position: Position,
    pub white_space: WhiteSpace,
    pub font: FontDescriptor,
    pub line_height: LineHeight,
    pub width: LengthPercentageOrAuto,
    pub height: LengthPercentageOrAuto,
    pub margin: PhysicalSides<LengthPercentageOrAuto>,
    pub padding: PhysicalSides<LengthPercentage>,
    pub border_width: PhysicalSides<Au>,
    /// The `top`, `right`, `bottom` and `left` properties.
    pub inset: PhysicalSides<LengthPercentageOrAuto>,
}

impl Default for ComputedValues {
    fn default() -> Self {
        Self {
            display: Display::INLINE,
            position: Position::Static,
            white_space: WhiteSpace::Normal,
            font: FontDescriptor::default(),
            line_height: LineHeight::Normal,
            width: LengthPercentageOrAuto::Auto,
            height: LengthPercentageOrAuto::Auto,
            margin: PhysicalSides::all(LengthPercentageOrAuto::px(0.)),
            padding: PhysicalSides::all(LengthPercentage::zero()),
            border_width: PhysicalSides::all(Au::zero()),
            inset: PhysicalSides::all(LengthPercentageOrAuto::Auto),
        }
    }
}

impl ComputedValues {
    /// Padding, border and margin, with percentages resolved against the width of
    /// the containing block (in both axes, as CSS 2.1 specifies).
    pub fn padding_border_margin(&self, containing_block_width: Au) -> PaddingBorderMargin {
        PaddingBorderMargin {
            padding: self.padding.map(|side| side.resolve(containing_block_width)),
            border: self.border_width,
            margin: self
                .margin
                .map(|side| side.resolved_or_zero(containing_block_width)),
        }
    }

    /// The used `line-height` for the given metrics of this style's first available font.
    pub fn line_height(&self, font_metrics: &FontMetrics) -> Au {
        match self.line_height {
            LineHeight::Normal => font_metrics.line_gap,
            LineHeight::Number(number) => self.font.size.scale_by(number),
            LineHeight::Length(length) => length,
        }
    }
}
