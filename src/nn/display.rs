/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 图元素的显示格式化（派生标签，非权威数据）
 */

use super::graph::{Edge, EdgeId, Node, NodeId, NodeKind};
use std::fmt;

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "Input",
            Self::Bias => "Bias",
            Self::Hidden => "Hidden",
            Self::Output => "Output",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl Node {
    /// 编辑器展示用的标签（当前激活值，保留两位小数）
    pub fn label(&self) -> String {
        format!("{:.2}", self.value())
    }
}

impl Edge {
    /// 编辑器展示用的标签（当前权重，保留两位小数）
    pub fn label(&self) -> String {
        format!("{:.2}", self.weight())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "节点[name={}, kind={}, value={}]",
            self.name(),
            self.kind(),
            self.value()
        )
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "边[name={}, {}→{}, weight={}]",
            self.name(),
            self.source(),
            self.target(),
            self.weight()
        )
    }
}
