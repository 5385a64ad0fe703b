/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Graph 快照：基础访问器 + 拓扑求值的前向传播
 */

use super::error::GraphError;
use super::types::{Edge, EdgeId, ForwardOutcome, Node, NodeId, NodeKind};
use crate::nn::Activation;
use serde::{Deserialize, Serialize};

/// 标量计算图快照
///
/// # 设计原则
/// - 节点/边存放在 arena（`Vec`）中，通过 [`NodeId`]/[`EdgeId`] 句柄寻址，
///   邻接关系以句柄列表存储，避免对象间双向引用
/// - 函数式更新契约：`forward`/`backward` 不修改 `self`，而是克隆出
///   新快照、在其上计算并返回；旧快照的持有者不会观察到中间状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub(in crate::nn) nodes: Vec<Node>,
    pub(in crate::nn) edges: Vec<Edge>,
    pub(in crate::nn) input: NodeId,
    pub(in crate::nn) output: NodeId,
}

/// 迭代 DFS 的节点标记
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl Graph {
    // ========== 基础访问器 ==========

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// 输入节点句柄
    pub const fn input_id(&self) -> NodeId {
        self.input
    }

    /// 输出节点句柄
    pub const fn output_id(&self) -> NodeId {
        self.output
    }

    /// 输出节点的当前标量值
    pub fn output_value(&self) -> f32 {
        self.nodes[self.output.0].value
    }

    /// 按名称查找节点
    pub fn get_node_by_name(&self, name: &str) -> Option<(NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, n)| n.name == name)
            .map(|(i, n)| (NodeId(i), n))
    }

    /// 按名称查找边
    pub fn get_edge_by_name(&self, name: &str) -> Option<(EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.name == name)
            .map(|(i, e)| (EdgeId(i), e))
    }

    // ========== 前向传播 ==========

    /// 前向传播：返回节点值已填充的新快照与输出标量
    ///
    /// - Input 节点取传入的 `input`（不过激活函数）
    /// - Bias 节点恒为 1
    /// - Hidden 节点 = activation(Σ 入边权重 × 源节点值)
    /// - Output 节点保留原始加权和（线性回归头，不激活）
    ///
    /// 只沿入边回溯，从 Output 不可达的子图不参与求值（其节点值
    /// 保持原样，不算错误）。确定性且幂等：不会修改任何权重。
    pub fn forward(
        &self,
        input: f32,
        activation: Activation,
    ) -> Result<ForwardOutcome, GraphError> {
        let mut graph = self.clone();
        graph.forward_in_place(input, activation)?;
        let output = graph.output_value();
        Ok(ForwardOutcome { graph, output })
    }

    pub(in crate::nn) fn forward_in_place(
        &mut self,
        input: f32,
        activation: Activation,
    ) -> Result<(), GraphError> {
        // Input/Bias 无条件赋值，即使从 Output 不可达（与编辑器约定一致）
        for node in &mut self.nodes {
            match node.kind {
                NodeKind::Input => node.value = input,
                NodeKind::Bias => node.value = 1.0,
                NodeKind::Hidden | NodeKind::Output => {}
            }
        }

        for id in self.eval_order()? {
            let node = &self.nodes[id.0];
            match node.kind {
                NodeKind::Input | NodeKind::Bias => {}
                NodeKind::Hidden => {
                    let net = self.weighted_sum(id);
                    self.nodes[id.0].value = activation.apply(net);
                }
                NodeKind::Output => {
                    self.nodes[id.0].value = self.weighted_sum(id);
                }
            }
        }
        Ok(())
    }

    /// 入边加权和：Σ 边权重 × 源节点当前值
    fn weighted_sum(&self, id: NodeId) -> f32 {
        self.nodes[id.0]
            .in_edges
            .iter()
            .map(|&eid| {
                let edge = &self.edges[eid.0];
                edge.weight * self.nodes[edge.source.0].value
            })
            .sum()
    }

    /// Output 祖先的后序（拓扑）求值顺序
    ///
    /// 显式栈 + 三色标记的迭代 DFS：沿入边回溯，命中"访问中"的节点
    /// 即判定成环并报错，而不是无限递归。
    pub(in crate::nn) fn eval_order(&self) -> Result<Vec<NodeId>, GraphError> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        // (节点, 是否为子树展开完毕后的回访)
        let mut stack = vec![(self.output, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                marks[id.0] = Mark::Done;
                order.push(id);
                continue;
            }
            match marks[id.0] {
                Mark::Done => continue,
                Mark::InProgress => {
                    return Err(GraphError::CycleDetected(self.nodes[id.0].name.clone()));
                }
                Mark::Unvisited => {}
            }
            marks[id.0] = Mark::InProgress;
            stack.push((id, true));
            for &eid in &self.nodes[id.0].in_edges {
                let source = self.edges[eid.0].source;
                match marks[source.0] {
                    Mark::Done => {}
                    Mark::InProgress => {
                        return Err(GraphError::CycleDetected(
                            self.nodes[source.0].name.clone(),
                        ));
                    }
                    Mark::Unvisited => stack.push((source, false)),
                }
            }
        }
        Ok(order)
    }
}
