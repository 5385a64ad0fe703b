//! # Only Graph
//!
//! `only_graph`是一个面向交互式图编辑器的标量神经网络引擎：
//! 用户可以任意拖拽拼装有向计算图（节点+带权边），本 crate 负责其中
//! 真正的计算部分——拓扑求值的前向推理、带记忆化的反向传播、以及
//! 在线随机梯度下降的批量训练。
//!
//! 引擎对外是纯函数式契约：每个操作接收一份图快照，返回一份新的
//! 快照，调用方持有的旧快照永远不会被就地修改。
//!

pub mod data;
pub mod nn;
