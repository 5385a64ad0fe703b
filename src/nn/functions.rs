/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 激活函数与代价函数注册表（闭合枚举，按名称解析）
 */

use super::graph::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 激活函数（闭合枚举）
///
/// 引擎内部只接收解析后的枚举值，从不接收名称字符串；
/// 新增激活函数时只需扩展本枚举，前向/反向逻辑无需改动。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    Relu,
}

impl Activation {
    /// 注册表中的全部激活函数
    pub const ALL: [Self; 2] = [Self::Sigmoid, Self::Relu];

    /// 注册表名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sigmoid => "sigmoid",
            Self::Relu => "relu",
        }
    }

    /// 计算激活值
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Relu => x.max(0.0),
        }
    }

    /// 在"净输入"x 处的数学导数
    pub fn derivative(self, x: f32) -> f32 {
        match self {
            Self::Sigmoid => {
                let s = self.apply(x);
                s * (1.0 - s)
            }
            Self::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// 以"已激活的输出值"o 表达的导数
    ///
    /// 反向传播时节点只保存激活后的值，sigmoid 的导数可以直接写成
    /// o·(1−o)，relu 的导数在单调复合下与净输入处同形。
    pub fn derivative_at_output(self, o: f32) -> f32 {
        match self {
            Self::Sigmoid => o * (1.0 - o),
            Self::Relu => {
                if o > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for Activation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| GraphError::UnknownActivation(s.to_string()))
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 代价函数（闭合枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cost {
    Mse,
}

impl Cost {
    /// 注册表中的全部代价函数
    pub const ALL: [Self; 1] = [Self::Mse];

    /// 注册表名称
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mse => "mse",
        }
    }

    /// 计算损失：第一个参数为真实值 y，第二个为预测值 ŷ
    pub fn apply(self, ground_truth: f32, prediction: f32) -> f32 {
        match self {
            Self::Mse => (ground_truth - prediction).powi(2),
        }
    }

    /// 损失对预测值 ŷ 的导数
    pub fn derivative(self, ground_truth: f32, prediction: f32) -> f32 {
        match self {
            Self::Mse => 2.0 * (prediction - ground_truth),
        }
    }
}

impl FromStr for Cost {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| GraphError::UnknownCost(s.to_string()))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
