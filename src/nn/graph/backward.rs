/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 反向传播：按边记忆化的链式法则 + 就地权重更新
 */

use super::core::Graph;
use super::error::GraphError;
use super::types::{BackwardOutcome, EdgeId, ForwardOutcome, NodeKind};
use crate::nn::{Activation, Cost};

/// 反向传播配置
#[derive(Debug, Clone, Copy)]
pub struct BackwardConfig {
    pub activation: Activation,
    pub cost: Cost,
    pub learning_rate: f32,
    /// 兼容旧版引擎：激活导数作用在"已激活值"上再算一遍
    /// （sigmoid 时得到 s(s(net))·(1−s(s(net))) 而非 o·(1−o)）
    pub legacy_activation_derivative: bool,
    /// 对称梯度裁剪阈值，作用于 dErrorDOut、dOutDNet 与最终单边梯度
    /// （None 表示不裁剪，即当前版引擎的行为）
    pub grad_clip: Option<f32>,
}

impl BackwardConfig {
    pub const fn new(activation: Activation, cost: Cost, learning_rate: f32) -> Self {
        Self {
            activation,
            cost,
            learning_rate,
            legacy_activation_derivative: false,
            grad_clip: None,
        }
    }
}

/// 单条边解析完成后记住的三个量
///
/// `old_weight` 是本次更新前的权重：上游边汇总 dErrorDOut 时必须
/// 使用同一组"更新前"的下游值，否则共享子路径会出现新旧混算。
#[derive(Debug, Clone, Copy)]
struct EdgeGrads {
    d_error_d_out: f32,
    d_out_d_net: f32,
    old_weight: f32,
}

/// 按边句柄记忆化的解析状态
struct EdgeMemo {
    grads: Vec<Option<EdgeGrads>>,
    in_progress: Vec<bool>,
    updated: Vec<(EdgeId, f32)>,
}

impl EdgeMemo {
    fn new(edges_count: usize) -> Self {
        Self {
            grads: vec![None; edges_count],
            in_progress: vec![false; edges_count],
            updated: Vec::with_capacity(edges_count),
        }
    }
}

impl Graph {
    /// 反向传播：内部前向 + 逐边梯度 + 就地更新（在克隆快照上）
    ///
    /// 解析从 Input/Bias 节点的出边触发，但 `dErrorDOut` 会先递归
    /// 解析整条下游链才返回，因此每条（可达的）边恰好解析一次，
    /// 实际解析顺序是从输出侧回到输入侧的逆依赖序。
    pub fn backward(
        &self,
        input: f32,
        target: f32,
        config: &BackwardConfig,
    ) -> Result<BackwardOutcome, GraphError> {
        // 1. 前向传播填充节点值，得到预测值与损失
        let ForwardOutcome {
            mut graph,
            output: predicted,
        } = self.forward(input, config.activation)?;
        let loss = config.cost.apply(target, predicted);

        // 2. 逐边解析并更新权重
        let mut memo = EdgeMemo::new(graph.edges.len());
        let seeds: Vec<EdgeId> = graph
            .nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Input | NodeKind::Bias))
            .flat_map(|n| n.out_edges.iter().copied())
            .collect();
        for eid in seeds {
            resolve_edge(&mut graph, eid, target, predicted, config, &mut memo)?;
        }

        Ok(BackwardOutcome {
            graph,
            updated_edges: memo.updated,
            loss,
        })
    }
}

/// 解析一条边：计算三个偏导、更新权重，结果按边句柄记忆化
///
/// 链式法则：dError/dWeight = dError/dOut(目标) × dOut/dNet(目标)
/// × dNet/dWeight(= 源节点值)。
fn resolve_edge(
    graph: &mut Graph,
    eid: EdgeId,
    ground_truth: f32,
    predicted: f32,
    config: &BackwardConfig,
    memo: &mut EdgeMemo,
) -> Result<EdgeGrads, GraphError> {
    if let Some(grads) = memo.grads[eid.0] {
        return Ok(grads);
    }
    if memo.in_progress[eid.0] {
        // 正在解析中又被递归到，说明下游链成环
        let target = graph.edges[eid.0].target;
        return Err(GraphError::CycleDetected(
            graph.nodes[target.0].name.clone(),
        ));
    }
    memo.in_progress[eid.0] = true;

    let target_id = graph.edges[eid.0].target;
    let target_is_output = graph.nodes[target_id.0].kind == NodeKind::Output;

    // dError/dOut：目标节点输出处的误差导数
    let mut d_error_d_out = if target_is_output {
        config.cost.derivative(ground_truth, predicted)
    } else {
        // 汇总从目标节点全部出边回流的梯度；先递归解析整条下游链，
        // 求和使用下游边"更新前"的权重
        let out_edges = graph.nodes[target_id.0].out_edges.clone();
        let mut acc = 0.0;
        for out_eid in out_edges {
            let g = resolve_edge(graph, out_eid, ground_truth, predicted, config, memo)?;
            acc += g.d_error_d_out * g.d_out_d_net * g.old_weight;
        }
        acc
    };

    // dOut/dNet：目标节点激活函数的导数（Output 为线性头，恒为 1）
    let mut d_out_d_net = if target_is_output {
        1.0
    } else {
        let o = graph.nodes[target_id.0].value;
        if config.legacy_activation_derivative {
            config.activation.derivative(o)
        } else {
            config.activation.derivative_at_output(o)
        }
    };

    if let Some(clip) = config.grad_clip {
        d_error_d_out = d_error_d_out.clamp(-clip, clip);
        d_out_d_net = d_out_d_net.clamp(-clip, clip);
    }

    // dNet/dWeight：线性加权和对权重的导数即源节点当前值
    let d_net_d_weight = graph.nodes[graph.edges[eid.0].source.0].value;

    let mut grad = d_error_d_out * d_out_d_net * d_net_d_weight;
    if let Some(clip) = config.grad_clip {
        grad = grad.clamp(-clip, clip);
    }

    let old_weight = graph.edges[eid.0].weight;
    let new_weight = old_weight - config.learning_rate * grad;
    graph.edges[eid.0].weight = new_weight;

    let grads = EdgeGrads {
        d_error_d_out,
        d_out_d_net,
        old_weight,
    };
    memo.grads[eid.0] = Some(grads);
    memo.in_progress[eid.0] = false;
    memo.updated.push((eid, new_weight));
    Ok(grads)
}
