/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : GraphBuilder：由原始节点/边记录重建图（带权重记忆）
 */

use super::core::Graph;
use super::error::GraphError;
use super::types::{Edge, EdgeId, EdgeRecord, Node, NodeId, NodeKind, NodeRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

/// 图构建器
///
/// 调用方每次编辑拓扑（增删节点/边）后整体重建图，而不是增量修补；
/// 构建器按边名称记忆权重：见过的边保留原权重（拓扑编辑不丢失已
/// 训练的参数），新边从 [−1, 1] 均匀采样。
pub struct GraphBuilder {
    known_weights: HashMap<String, f32>,
    /// None 表示使用默认的 `thread_rng`（非确定性）
    rng: Option<StdRng>,
}

impl GraphBuilder {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self {
            known_weights: HashMap::new(),
            rng: None,
        }
    }

    /// 创建一个带固定种子的构建器（确保权重初始化可重复）
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            known_weights: HashMap::new(),
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    // ========== 权重记忆 ==========

    /// 预登记一条边的权重（手动设定权重的入口，也是测试钩子）
    pub fn set_known_weight(&mut self, edge_name: &str, weight: f32) {
        self.known_weights.insert(edge_name.to_string(), weight);
    }

    /// 将（训练后）图快照中各边的权重记回构建器，
    /// 使后续拓扑编辑重建时保留已学到的权重
    pub fn record_weights(&mut self, graph: &Graph) {
        for edge in graph.edges() {
            self.known_weights
                .insert(edge.name().to_string(), edge.weight());
        }
    }

    // ========== 构建 ==========

    /// 由原始记录重建图：解析端点、重建邻接表、分配权重、结构校验
    ///
    /// 结构性错误（节点名重复、Input/Output 缺失或多于一个、悬空边、
    /// Output 祖先中的环）在此快速失败，保证引擎遍历前图是良构的。
    pub fn build(
        &mut self,
        node_records: &[NodeRecord],
        edge_records: &[EdgeRecord],
    ) -> Result<Graph, GraphError> {
        // 1. 节点：去重 + 建名称索引
        let mut index: HashMap<&str, NodeId> = HashMap::with_capacity(node_records.len());
        let mut nodes = Vec::with_capacity(node_records.len());
        for record in node_records {
            if index.contains_key(record.name.as_str()) {
                return Err(GraphError::DuplicateNodeName(record.name.clone()));
            }
            index.insert(record.name.as_str(), NodeId(nodes.len()));
            nodes.push(Node {
                name: record.name.clone(),
                kind: record.kind,
                value: record.value.unwrap_or(default_value(record.kind)),
                in_edges: Vec::new(),
                out_edges: Vec::new(),
            });
        }

        // 2. Input/Output 各恰好一个
        let input = find_unique(
            &nodes,
            NodeKind::Input,
            GraphError::MissingInput,
            GraphError::MultipleInputs,
        )?;
        let output = find_unique(
            &nodes,
            NodeKind::Output,
            GraphError::MissingOutput,
            GraphError::MultipleOutputs,
        )?;

        // 3. 边：去重 + 端点解析 + 权重分配 + 重建邻接表（保持记录顺序）
        // 名称是权重记忆的键，重名的边会互相串权重
        let mut edge_names: HashSet<&str> = HashSet::with_capacity(edge_records.len());
        let mut edges = Vec::with_capacity(edge_records.len());
        for record in edge_records {
            if !edge_names.insert(record.name.as_str()) {
                return Err(GraphError::DuplicateEdgeName(record.name.clone()));
            }
            let source = *index.get(record.source.as_str()).ok_or_else(|| {
                GraphError::DanglingEdge {
                    edge: record.name.clone(),
                    node: record.source.clone(),
                }
            })?;
            let target = *index.get(record.target.as_str()).ok_or_else(|| {
                GraphError::DanglingEdge {
                    edge: record.name.clone(),
                    node: record.target.clone(),
                }
            })?;

            let weight = match self.known_weights.get(record.name.as_str()) {
                Some(&w) => w,
                None => {
                    let w = self.sample_weight();
                    self.known_weights.insert(record.name.clone(), w);
                    w
                }
            };

            let edge_id = EdgeId(edges.len());
            nodes[source.0].out_edges.push(edge_id);
            nodes[target.0].in_edges.push(edge_id);
            edges.push(Edge {
                name: record.name.clone(),
                source,
                target,
                weight,
            });
        }

        let graph = Graph {
            nodes,
            edges,
            input,
            output,
        };

        // 4. 无环校验（在构建期发现，而不是前向传播时才栈溢出）
        graph.eval_order()?;

        Ok(graph)
    }

    /// 新边的初始权重：均匀采样自 [−1, 1]
    fn sample_weight(&mut self) -> f32 {
        match &mut self.rng {
            Some(rng) => rng.gen_range(-1.0..=1.0),
            None => rand::thread_rng().gen_range(-1.0..=1.0),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

const fn default_value(kind: NodeKind) -> f32 {
    match kind {
        NodeKind::Input => 0.0,
        NodeKind::Bias => 1.0,
        // 首次前向传播前 Output 为 NaN 属正常状态，会被覆盖
        NodeKind::Hidden | NodeKind::Output => f32::NAN,
    }
}

fn find_unique(
    nodes: &[Node],
    kind: NodeKind,
    missing: GraphError,
    multiple: GraphError,
) -> Result<NodeId, GraphError> {
    let mut found = None;
    for (i, node) in nodes.iter().enumerate() {
        if node.kind == kind {
            if found.is_some() {
                return Err(multiple);
            }
            found = Some(NodeId(i));
        }
    }
    found.ok_or(missing)
}
