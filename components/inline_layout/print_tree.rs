/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt::Write;

/// A struct that makes it easier to build a pretty tree of data, which
/// can be visually scanned more easily. The tree is accumulated into a
/// string so that it can be routed through the logger.
pub struct PrintTree {
    /// The current level of recursion.
    level: u32,

    /// An item which is queued up, so that we can determine if we need
    /// a mid-tree prefix or a branch ending prefix.
    queued_item: Option<String>,

    output: String,
}

impl PrintTree {
    pub fn new(title: String) -> PrintTree {
        let mut output = String::new();
        let _ = writeln!(output, "\u{250c} {}", title);
        PrintTree {
            level: 1,
            queued_item: None,
            output,
        }
    }

    /// Descend one level in the tree with the given title.
    pub fn new_level(&mut self, title: String) {
        self.flush_queued_item("\u{251C}\u{2500}");

        self.print_level_prefix();
        let _ = writeln!(self.output, "\u{251C}\u{2500} {}", title);

        self.level += 1;
    }

    /// Ascend one level in the tree.
    pub fn end_level(&mut self) {
        self.flush_queued_item("\u{2514}\u{2500}");
        self.level = self.level.saturating_sub(1);
    }

    /// Add an item to the current level in the tree.
    pub fn add_item(&mut self, text: String) {
        self.flush_queued_item("\u{251C}\u{2500}");
        self.queued_item = Some(text);
    }

    /// Close the tree and return everything printed into it.
    pub fn finish(mut self) -> String {
        self.flush_queued_item("\u{2514}\u{2500}");
        self.output
    }

    fn print_level_prefix(&mut self) {
        for _ in 0..self.level {
            self.output.push_str("\u{2502}  ");
        }
    }

    fn flush_queued_item(&mut self, prefix: &str) {
        if let Some(queued_item) = self.queued_item.take() {
            self.print_level_prefix();
            let _ = writeln!(self.output, "{} {}", prefix, queued_item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrintTree;

    #[test]
    fn test_nested_levels() {
        let mut tree = PrintTree::new("Root".to_owned());
        tree.new_level("Line".to_owned());
        tree.add_item("first".to_owned());
        tree.add_item("second".to_owned());
        tree.end_level();
        let output = tree.finish();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "\u{250c} Root");
        assert!(lines[1].ends_with("\u{251C}\u{2500} Line"));
        assert!(lines[2].ends_with("\u{251C}\u{2500} first"));
        assert!(lines[3].ends_with("\u{2514}\u{2500} second"));
    }
}
