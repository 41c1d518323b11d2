//! Graphviz DOT 形式への書き出し。
//!
//! neato の固定座標レイアウト (`pos="x,y!"`) を前提とした最小限のサブセットのみ出力する。

use crate::tree::{CollatzTree, Edge, Entry, Node};

/// 文書ヘッダ
pub const HEADER: [&str; 3] = [
    "digraph CollatzTree {",
    "    graph [splines=line layout=neato len=1.0]",
    "    node [shape=circle]",
];

/// 文書フッタ
pub const FOOTER: &str = "}";

const INDENT: &str = "    ";

/// `"v" [pos="x,y!" label="v"]`
pub fn node_line(node: &Node) -> String {
    format!(
        "{INDENT}\"{v}\" [pos=\"{x},{y}!\" label=\"{v}\"]",
        v = node.value,
        x = node.pos.x,
        y = node.pos.y
    )
}

/// `"from" -> "to"`、長さヒントがあれば ` [len=n]` を付ける
pub fn edge_line(edge: &Edge) -> String {
    match &edge.len {
        Some(len) => format!("{INDENT}\"{}\" -> \"{}\" [len={}]", edge.from, edge.to, len),
        None => format!("{INDENT}\"{}\" -> \"{}\"", edge.from, edge.to),
    }
}

/// 木全体を DOT テキストにする。行は改行で連結し、末尾に改行は付けない。
pub fn render(tree: &CollatzTree) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(tree.entries().len() + HEADER.len() + 1);
    lines.extend(HEADER.iter().map(|s| s.to_string()));
    for entry in tree.entries() {
        lines.push(match entry {
            Entry::Node(node) => node_line(node),
            Entry::Edge(edge) => edge_line(edge),
        });
    }
    lines.push(FOOTER.to_string());
    lines.join("\n")
}
