//! ASCII rendering of binary trees.
//!
//! Values are laid out level by level with `/`, `\` and `¯` connector lines
//! between a parent and its children, narrowing the spacing as the levels
//! deepen. The exact character layout is presentation detail, not contract;
//! what the renderer promises is that every node's value appears once and
//! that any tree renders without panicking.

use std::fmt;

use crate::tree::{Node, Tree};

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };
        let mut rows = Vec::new();
        collect(root, 0, 0, &mut rows);

        let nlevels = rows.len();
        for (row, nodes) in rows.iter().enumerate() {
            // Horizontal slot width for this level; each level down halves
            // the spacing. Positions within a level are the node's index in
            // a complete tree, so gaps stay aligned under absent subtrees.
            let space_width = 1usize << (nlevels - row);
            let mut connectors = String::new();
            let mut values = " ".repeat(space_width + 1);
            let mut prev_position = 0;

            for (i, (value, position)) in nodes.iter().enumerate() {
                let width = value.chars().count();
                if *position == 0 {
                    values.truncate(values.len().saturating_sub(width));
                }
                let gap = (space_width * (position - prev_position) * 2).saturating_sub(width);
                values.push_str(&" ".repeat(gap));
                values.push_str(value);

                let first_is_offset = i == 0 && *position != 0;
                let skipped = position - prev_position;
                if skipped > 1 || first_is_offset {
                    let missing = (skipped - 1 + usize::from(first_is_offset)) * 2;
                    connectors.push_str(&" ".repeat(space_width * missing));
                }
                if position % 2 == 1 {
                    connectors.push_str(&"¯".repeat(space_width - 1));
                    connectors.push('\\');
                    connectors.push_str(&" ".repeat(space_width));
                } else {
                    connectors.push_str(&" ".repeat(space_width));
                    connectors.push('/');
                    connectors.push_str(&"¯".repeat(space_width - 1));
                }
                prev_position = *position;
            }

            if row != 0 {
                writeln!(f, "{}", connectors.trim_end())?;
            }
            writeln!(f, "{}", values.trim_end())?;
        }
        Ok(())
    }
}

/// Walks the tree pre-order, recording each value's rendered form and its
/// position within its level (the index the node would have in a complete
/// tree).
fn collect<T: fmt::Display>(
    node: &Node<T>,
    level: usize,
    position: usize,
    rows: &mut Vec<Vec<(String, usize)>>,
) {
    if rows.len() == level {
        rows.push(Vec::new());
    }
    rows[level].push((node.value().to_string(), position));
    if let Some(left) = node.left() {
        collect(left, level + 1, position * 2, rows);
    }
    if let Some(right) = node.right() {
        collect(right, level + 1, position * 2 + 1, rows);
    }
}
