//
// render.rs
// Dicom-Tree-rs
//
// Renders a tree as indented text with box-drawing connectors for terminal output.
//
// Thales Matheus Mendonça Santos - October 2026

use std::fmt::Write;

use crate::tree::TreeNode;

/// Print the tree rooted at `root` (the root itself has no line).
pub fn print_tree(root: &TreeNode, max_depth: Option<usize>) {
    print!("{}", to_text(root, max_depth));
}

/// One line per node. With `max_depth`, nodes deeper than that level are omitted.
pub fn to_text(root: &TreeNode, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    render_children(root, "", 1, max_depth, &mut out);
    out
}

fn render_children(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }

    let last = node.children.len().saturating_sub(1);
    for (idx, child) in node.children.iter().enumerate() {
        let (connector, continuation) = if idx == last {
            ("└─ ", "   ")
        } else {
            ("├─ ", "│  ")
        };
        let _ = writeln!(out, "{prefix}{connector}{}", child.label);
        render_children(
            child,
            &format!("{prefix}{continuation}"),
            depth + 1,
            max_depth,
            out,
        );
    }
}
