/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Debug options for inline layout. These can be set from a comma separated
//! debug string (as passed with `-Z` on the command line) or deserialized from
//! a preferences file.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    /// Print the line boxes of every inline formatting context after it is laid out.
    pub dump_line_boxes: bool,

    /// Panic instead of logging when a box that is neither replaced nor an
    /// inline-block is asked to be dimensioned on a line. The box tree builder
    /// should never produce such a box.
    pub strict_box_tree: bool,
}

impl LayoutOptions {
    pub fn extend(&mut self, debug_string: &str) -> Result<(), String> {
        for option in debug_string.split(',') {
            match option.trim() {
                "dump-line-boxes" => self.dump_line_boxes = true,
                "strict-box-tree" => self.strict_box_tree = true,
                "" => {},
                unknown => return Err(String::from(unknown)),
            };
        }
        Ok(())
    }
}
