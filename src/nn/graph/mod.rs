/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Graph 模块：标量计算图的核心实现
 *
 * 公开 API：
 * - `Graph`: 图快照（函数式更新契约：操作返回新快照）
 * - `GraphBuilder`: 由原始节点/边记录重建图（权重记忆）
 * - `BackwardConfig`: 反向传播配置
 * - `GraphError`: 错误类型
 */

mod backward;
mod builder;
mod core;
mod error;
mod types;

pub use backward::BackwardConfig;
pub use builder::GraphBuilder;
pub use core::Graph;
pub use error::GraphError;
pub use types::{
    BackwardOutcome, Edge, EdgeId, EdgeRecord, ForwardOutcome, Node, NodeId, NodeKind,
    NodeRecord, TrainOutcome,
};
