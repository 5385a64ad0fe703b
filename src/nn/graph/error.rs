/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Graph 模块的错误类型
 */

use thiserror::Error;

/// Graph 操作错误类型
///
/// 结构性错误在遍历开始前快速失败；数值性的 NaN/∞ 不属于错误，
/// 会原样沿图传播。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// 图中缺少输入节点
    #[error("图中缺少输入（Input）节点")]
    MissingInput,

    /// 图中存在多个输入节点
    #[error("图中存在多个输入（Input）节点，只允许一个")]
    MultipleInputs,

    /// 图中缺少输出节点
    #[error("图中缺少输出（Output）节点")]
    MissingOutput,

    /// 图中存在多个输出节点
    #[error("图中存在多个输出（Output）节点，只允许一个")]
    MultipleOutputs,

    /// 节点名称重复
    #[error("节点名称{0}在图中重复")]
    DuplicateNodeName(String),

    /// 边名称重复
    #[error("边名称{0}在图中重复")]
    DuplicateEdgeName(String),

    /// 边引用了不存在的节点
    #[error("边{edge}引用了未知节点{node}")]
    DanglingEdge { edge: String, node: String },

    /// 图中存在环
    #[error("图中存在环（经过节点{0}）")]
    CycleDetected(String),

    /// 未知的激活函数名称
    #[error("未知的激活函数: {0}")]
    UnknownActivation(String),

    /// 未知的代价函数名称
    #[error("未知的代价函数: {0}")]
    UnknownCost(String),

    /// 无效操作
    #[error("无效操作: {0}")]
    InvalidOperation(String),
}
