use std::fmt::Write;

use kestrel_dom::{DomTree, NodeId, NodeType};

/// Render the subtree at `id` as an indented listing, two spaces per level.
#[must_use]
pub fn dump_tree(tree: &DomTree, id: NodeId, indent: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, id, indent);
    out
}

fn write_node(out: &mut String, tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            let _ = writeln!(out, "{prefix}Document");
        }
        NodeType::DocumentType => {
            let _ = writeln!(out, "{prefix}<!DOCTYPE html>");
        }
        NodeType::Element(data) => {
            let _ = write!(out, "{prefix}<{}", data.tag_name);
            for (name, value) in data.attrs.iter() {
                if value.is_empty() {
                    let _ = write!(out, " {name}");
                } else {
                    let _ = write!(out, " {name}=\"{value}\"");
                }
            }
            let _ = writeln!(out, "{}>", if data.self_closing { " /" } else { "" });
        }
        NodeType::Text(data) => {
            let _ = writeln!(out, "{prefix}\"{data}\"");
        }
        NodeType::Comment(data) => {
            let display = data.replace('\n', "\\n");
            let _ = writeln!(out, "{prefix}<!-- {display} -->");
        }
    }
    for &child_id in tree.children(id) {
        write_node(out, tree, child_id, indent + 1);
    }
}

/// Print a DOM tree for debugging.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    print!("{}", dump_tree(tree, id, indent));
}
