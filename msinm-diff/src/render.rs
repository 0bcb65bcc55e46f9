//! Plain-text rendering of a classified diff tree.

use std::fmt::Write;

use serde_json::Value;

use crate::node::DiffNode;

/// Render a diff tree as indented plain text, one line per visited key.
///
/// Leaf lines carry the status tag and both values (`-` for an absent
/// side); composite lines carry their label and indent their children.
///
/// # Examples
/// ```
/// use msinm_diff::{compare, render};
/// use serde_json::json;
///
/// let root = compare(&json!({"a": 1}), &json!({"a": 2}), &mut |_| {});
/// let report = render(&root);
/// assert!(report.contains("a [changed]: 1 -> 2"));
/// ```
pub fn render(node: &DiffNode) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &DiffNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let label = if node.key.is_empty() {
        "(root)"
    } else {
        node.key.as_str()
    };

    if node.children.is_empty() {
        let left = side(node.left.as_ref());
        let right = side(node.right.as_ref());
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "{indent}{label} [{}]: {left} -> {right}", node.status);
    } else {
        let _ = writeln!(out, "{indent}{label} [{}]", node.status);
        for child in &node.children {
            render_into(child, depth + 1, out);
        }
    }
}

fn side(value: Option<&Value>) -> String {
    value.map_or_else(|| String::from("-"), Value::to_string)
}
