/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 负责标量计算图（scalar graph）神经网络引擎的构建与训练
 */

mod display;
mod functions;
mod graph;
mod trainer;

pub use functions::{Activation, Cost};
pub use graph::{
    BackwardConfig, BackwardOutcome, Edge, EdgeId, EdgeRecord, ForwardOutcome, Graph,
    GraphBuilder, GraphError, Node, NodeId, NodeKind, NodeRecord, TrainOutcome,
};
pub use trainer::{train_batch, train_batch_observed, train_batch_with_rng};

#[cfg(test)]
mod tests;
