/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Graph 模块的类型定义（arena 句柄、节点/边、外部记录、操作结果）
 */

use super::Graph;
use serde::{Deserialize, Serialize};

/// 节点句柄（图 arena 中的索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(in crate::nn) usize);

/// 边句柄（图 arena 中的索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub(in crate::nn) usize);

/// 节点类型
///
/// 每个图恰好有一个 Input 和一个 Output；Bias 可选（习惯上存在一个，
/// 值固定为 1）；其余为 Hidden。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Input,
    Bias,
    Hidden,
    Output,
}

/// 图中的节点
///
/// 邻接表以边句柄列表存储，顺序即边记录的插入顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(in crate::nn) name: String,
    pub(in crate::nn) kind: NodeKind,
    pub(in crate::nn) value: f32,
    pub(in crate::nn) in_edges: Vec<EdgeId>,
    pub(in crate::nn) out_edges: Vec<EdgeId>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// 当前激活值（前向传播前可能是 NaN，属正常状态）
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// 入边（有序）
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// 出边（有序）
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }
}

/// 图中的带权有向边（权重是唯一可训练参数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub(in crate::nn) name: String,
    pub(in crate::nn) source: NodeId,
    pub(in crate::nn) target: NodeId,
    pub(in crate::nn) weight: f32,
}

impl Edge {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn source(&self) -> NodeId {
        self.source
    }

    pub const fn target(&self) -> NodeId {
        self.target
    }

    pub const fn weight(&self) -> f32 {
        self.weight
    }
}

/// 构图用的原始节点记录（来自外部编辑器）
///
/// `value` 为 None 时按类型取默认值：Input → 0.0，Bias → 1.0，
/// Hidden/Output → NaN（首次前向传播前的正常状态）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub kind: NodeKind,
    pub value: Option<f32>,
}

impl NodeRecord {
    pub fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: None,
        }
    }
}

/// 构图用的原始边记录（端点以节点名称引用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub name: String,
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    pub fn new(name: &str, source: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// 前向传播结果
#[derive(Debug, Clone)]
pub struct ForwardOutcome {
    /// 节点值已全部填充的新图快照
    pub graph: Graph,
    /// 输出节点的标量值
    pub output: f32,
}

/// 反向传播结果
#[derive(Debug, Clone)]
pub struct BackwardOutcome {
    /// 权重已更新的新图快照（节点值来自内部前向传播）
    pub graph: Graph,
    /// 本次更新的边及其新权重（按解析顺序）
    pub updated_edges: Vec<(EdgeId, f32)>,
    /// 本样本的标量损失
    pub loss: f32,
}

/// 批量训练结果
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// 最后一次更新后的图快照
    pub graph: Graph,
    /// 每个 epoch 的平均损失（长度 = 实际运行的 epoch 数）
    pub epoch_losses: Vec<f32>,
}
