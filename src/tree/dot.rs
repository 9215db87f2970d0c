use std::fmt::Display;

use crate::tree::{Node, Tree};

/// Renders the tree as a Graphviz directed graph: one vertex per key, edges
/// to children, and point-shaped `nilN` placeholder vertices marking absent
/// children.
pub fn to_dot<T, U>(tree: &Tree<T, U>) -> String
where
    T: Display,
{
    let mut out = String::from("digraph {\n");
    let mut nil_count = 0;
    if let Some(ref node) = tree {
        write_edges(node, &mut out, &mut nil_count);
    }
    out.push_str("}\n");
    out
}

fn write_edges<T, U>(node: &Node<T, U>, out: &mut String, nil_count: &mut usize)
where
    T: Display,
{
    match node.left {
        Some(ref left) => {
            write_edges(left, out, nil_count);
            out.push_str(&format!("\t{} -> {};\n", node.entry.key, left.entry.key));
        },
        None => write_nil_edge(&node.entry.key, out, nil_count),
    }
    match node.right {
        Some(ref right) => {
            out.push_str(&format!("\t{} -> {};\n", node.entry.key, right.entry.key));
            write_edges(right, out, nil_count);
        },
        None => write_nil_edge(&node.entry.key, out, nil_count),
    }
}

fn write_nil_edge<T>(key: &T, out: &mut String, nil_count: &mut usize)
where
    T: Display,
{
    out.push_str(&format!("\tnil{} [shape=point];\n", nil_count));
    out.push_str(&format!("\t{} -> nil{};\n", key, nil_count));
    *nil_count += 1;
}
