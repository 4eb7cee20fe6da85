/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! Inline layout: arranging the inline-level children of a block container into
//! line boxes, around the floats of the enclosing block formatting context, and
//! sizing auto-width inline-blocks to fit their content.

pub mod box_tree;
pub mod cell;
pub mod context;
pub mod flow;
pub mod fonts;
pub mod fragment_tree;
pub mod geom;
pub mod options;
pub mod positioned;
pub mod print_tree;
pub mod replaced;
pub mod sizing;
pub mod style;

pub use box_tree::{BoxContents, BoxKind, LayoutBox, LayoutNode, TextNode};
pub use context::LayoutContext;
pub use flow::BlockFormattingContext;
pub use flow::inline::InlineFormattingContext;
pub use fragment_tree::{Fragment, LineBox};
pub use options::LayoutOptions;
pub use positioned::PositioningContext;
use serde::Serialize;

/// The kind of layout pass being performed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum LayoutMode {
    /// The layout whose results are used.
    Final,
    /// Lay out taking every line break opportunity, to find the min-content width.
    MinContent,
    /// Lay out taking only forced line breaks, to find the max-content width.
    MaxContent,
}

impl LayoutMode {
    /// Whether this pass measures the intrinsic width of a box, rather than
    /// laying it out at its used width.
    pub fn is_intrinsic_probe(&self) -> bool {
        !matches!(self, LayoutMode::Final)
    }
}
