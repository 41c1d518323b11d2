use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::error::{TreeError, TreeResult};

/// 枝を付ける最小の指数
pub const FIRST_BRANCH_EXPONENT: u32 = 4;

/// 枝を付ける指数の間隔（偶数指数のみ）
pub const BRANCH_STEP: usize = 2;

/// 描画用の固定座標 (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// 幹: 2^x
    Trunk,
    /// 枝: (2^x - 1) / 3
    Branch,
}

/// ノード。値がそのままラベル兼識別子になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: BigUint,
    pub pos: Position,
    pub kind: NodeKind,
    /// 幹ノードなら自身の指数、枝ノードなら接続先の幹の指数
    pub exponent: u32,
}

/// 子 → 親 の有向辺（根 1 に向かう）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: BigUint,
    pub to: BigUint,
    /// 辺の長さヒント (`len`)。枝の辺のみ。
    pub len: Option<BigUint>,
}

/// 出力順に並んだ宣言
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Node(Node),
    Edge(Edge),
}

/// コラッツ木。幹の全宣言 → 枝の全宣言 の順で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatzTree {
    max_depth: u32,
    entries: Vec<Entry>,
}

/// 幹の値 2^x
pub fn trunk_value(x: u32) -> BigUint {
    BigUint::one() << x
}

/// 枝の値 (2^x - 1) / 3。
/// x が偶数なら 2^x - 1 は必ず 3 で割り切れる。
pub fn branch_value(x: u32) -> BigUint {
    let (q, r) = (trunk_value(x) - 1u32).div_rem(&BigUint::from(3u32));
    debug_assert!(r.is_zero(), "2^{} - 1 is not divisible by 3", x);
    q
}

/// 枝の辺の長さ 2^(branch_count - 1)。branch_count は 1 始まり。
pub fn edge_length(branch_count: u32) -> BigUint {
    debug_assert!(branch_count >= 1);
    BigUint::one() << branch_count.saturating_sub(1)
}

/// 枝を付ける指数列: 4, 6, 8, ... ≤ max_depth
pub fn branch_exponents(max_depth: u32) -> impl Iterator<Item = u32> {
    (FIRST_BRANCH_EXPONENT..=max_depth).step_by(BRANCH_STEP)
}

impl CollatzTree {
    /// 深さ max_depth の木を1パスで構築する。
    pub fn build(max_depth: u32) -> Self {
        let mut entries = Vec::new();

        // 幹: (0, x) に縦一列
        for x in 0..=max_depth {
            let node_val = trunk_value(x);
            entries.push(Entry::Node(Node {
                value: node_val.clone(),
                pos: Position { x: 0, y: x },
                kind: NodeKind::Trunk,
                exponent: x,
            }));
            if x > 0 {
                entries.push(Entry::Edge(Edge {
                    from: node_val,
                    to: trunk_value(x - 1),
                    len: None,
                }));
            }
        }

        // 枝: 幹の右側 (x/2, x)
        let mut branch_count = 0u32;
        for x in branch_exponents(max_depth) {
            branch_count += 1;
            let trunk_val = trunk_value(x);
            let branch_val = branch_value(x);
            let len = edge_length(branch_count);
            trace!(exponent = x, branch = %branch_val, len = %len, "branch");
            entries.push(Entry::Node(Node {
                value: branch_val.clone(),
                pos: Position { x: x / 2, y: x },
                kind: NodeKind::Branch,
                exponent: x,
            }));
            entries.push(Entry::Edge(Edge {
                from: branch_val,
                to: trunk_val,
                len: Some(len),
            }));
        }

        debug!(max_depth, branches = branch_count, entries = entries.len(), "built collatz tree");
        CollatzTree { max_depth, entries }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// 出力順の全宣言
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Node(n) => Some(n),
            Entry::Edge(_) => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Edge(edge) => Some(edge),
            Entry::Node(_) => None,
        })
    }

    pub fn trunk_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.kind == NodeKind::Trunk)
    }

    pub fn branch_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.kind == NodeKind::Branch)
    }

    /// 不変条件の検査:
    /// - ノード値の重複なし
    /// - 辺の両端は宣言済み
    /// - 根 1 から出る辺なし
    pub fn validate(&self) -> TreeResult<()> {
        let root = BigUint::one();
        let mut declared: HashSet<&BigUint> = HashSet::new();

        for entry in &self.entries {
            match entry {
                Entry::Node(node) => {
                    if !declared.insert(&node.value) {
                        return Err(TreeError::InvalidStructure(format!(
                            "duplicate node {}",
                            node.value
                        )));
                    }
                }
                Entry::Edge(edge) => {
                    if edge.from == root {
                        return Err(TreeError::InvalidStructure(format!(
                            "root has outgoing edge to {}",
                            edge.to
                        )));
                    }
                    for end in [&edge.from, &edge.to] {
                        if !declared.contains(end) {
                            return Err(TreeError::InvalidStructure(format!(
                                "edge {} -> {} references undeclared node {}",
                                edge.from, edge.to, end
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
