//! コラッツ木の DOT 生成器
//!
//! 2 の冪 2^0..2^max_depth を縦の「幹」として 1 に向けて繋ぎ、
//! 偶数指数 x ≥ 4 の幹ノードに (2^x - 1)/3 の「枝」を直角に付けた
//! Graphviz (neato, 固定座標) 用のテキストを生成する。
//! レイアウト・描画は Graphviz に任せる。

pub mod cli;
pub mod dot;
pub mod error;
pub mod exitcode;
pub mod logging;
pub mod tree;

use tracing::debug;

pub use error::{TreeError, TreeResult};
pub use tree::{branch_value, edge_length, trunk_value, CollatzTree, Edge, Entry, Node, NodeKind, Position};

/// 検証済みの深さから DOT テキストを生成する。
pub fn generate_collatz_tree(max_depth: u32) -> String {
    let tree = CollatzTree::build(max_depth);
    debug_assert!(tree.validate().is_ok());
    dot::render(&tree)
}

/// 深さを検証してから生成する。負の深さは `InvalidArgument`。
pub fn generate(max_depth: i64) -> TreeResult<String> {
    let depth = validate_depth(max_depth)?;
    debug!(depth, "generating collatz tree");
    Ok(generate_collatz_tree(depth))
}

/// 深さを非負の u32 に変換する
pub fn validate_depth(max_depth: i64) -> TreeResult<u32> {
    if max_depth < 0 {
        return Err(TreeError::InvalidArgument(format!(
            "depth must be non-negative, got {}",
            max_depth
        )));
    }
    u32::try_from(max_depth).map_err(|_| {
        TreeError::InvalidArgument(format!("depth {} is too large (max {})", max_depth, u32::MAX))
    })
}
