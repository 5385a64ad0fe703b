mod functions;

use super::{EdgeRecord, Graph, GraphBuilder, NodeKind, NodeRecord};

pub(crate) fn node(name: &str, kind: NodeKind) -> NodeRecord {
    NodeRecord::new(name, kind)
}

pub(crate) fn edge(name: &str, source: &str, target: &str) -> EdgeRecord {
    EdgeRecord::new(name, source, target)
}

/// 构建一个所有边权重都预先指定的图（测试用）
pub(crate) fn build_with_weights(
    nodes: &[NodeRecord],
    edges: &[EdgeRecord],
    weights: &[(&str, f32)],
) -> Graph {
    let mut builder = GraphBuilder::new_with_seed(42);
    for &(name, w) in weights {
        builder.set_known_weight(name, w);
    }
    builder.build(nodes, edges).unwrap()
}
