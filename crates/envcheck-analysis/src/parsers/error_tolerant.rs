//! Locate ERROR and MISSING nodes in a tree-sitter tree.

use tree_sitter::{Node, Tree};

/// 1-based position of a node's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxPosition {
    pub line: u32,
    pub column: u32,
}

impl SyntaxPosition {
    pub fn of(node: &Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row as u32 + 1,
            column: start.column as u32 + 1,
        }
    }
}

/// Position of the first ERROR or MISSING node in document order, or
/// `None` when the tree is clean.
pub fn first_error(tree: &Tree) -> Option<SyntaxPosition> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(SyntaxPosition::of(&node));
        }
        // Only descend into subtrees that contain an error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(SyntaxPosition::of(&root));
            }
        }
    }
}

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(tree: &Tree) -> u32 {
    fn collect(node: Node, count: &mut u32) {
        if node.is_error() || node.is_missing() {
            *count += 1;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() || child.is_missing() {
                collect(child, count);
            }
        }
    }

    let mut count = 0;
    let root = tree.root_node();
    if root.has_error() {
        collect(root, &mut count);
    }
    count
}
