//! Styled tree dump
//!
//! One line per node: `<tag name="value"> [Computed Styles] prop: value, ...`,
//! children indented four spaces deeper, then the closing tag. Attributes and
//! properties are sorted by name so the output is stable.

use std::fmt::Write;

use trellis_dom::{DomTree, Node, NodeId};

const INDENT: &str = "    ";

enum Step {
    Open(NodeId, usize),
    Close(NodeId, usize),
}

/// Render the subtree under `root` (empty for an unknown root)
pub fn dump_styled_tree(tree: &DomTree, root: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Open(root, 0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open(id, depth) => {
                let Some(node) = tree.get(id) else { continue };
                write_open_line(&mut out, node, depth);
                stack.push(Step::Close(id, depth));
                stack.extend(node.children().iter().rev().map(|&c| Step::Open(c, depth + 1)));
            }
            Step::Close(id, depth) => {
                if let Some(node) = tree.get(id) {
                    let _ = writeln!(out, "{}</{}>", INDENT.repeat(depth), node.tag());
                }
            }
        }
    }

    out
}

fn write_open_line(out: &mut String, node: &Node, depth: usize) {
    let _ = write!(out, "{}<{}", INDENT.repeat(depth), node.tag());

    let mut attributes: Vec<_> = node.attributes().iter().collect();
    attributes.sort();
    for (name, value) in attributes {
        let _ = write!(out, " {}=\"{}\"", name, value);
    }

    let mut properties: Vec<_> = node.properties().iter().collect();
    properties.sort();
    let properties: Vec<String> = properties
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    if properties.is_empty() {
        out.push_str("> [Computed Styles]\n");
    } else {
        let _ = writeln!(out, "> [Computed Styles] {}", properties.join(", "));
    }
}
