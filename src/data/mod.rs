//! 数据集生成模块
//!
//! 由调用方给定的目标函数 f(x) 生成带噪声的 `(x, y)` 训练样本。
//! 表达式字符串的解析属于 UI 层协作者，这里只接收解析好的闭包，
//! 引擎侧永远只看到数值对。
//!
//! # 使用示例
//!
//! ```ignore
//! use only_graph::data::{DatasetConfig, generate_samples};
//!
//! let config = DatasetConfig { domain: (-1.0, 1.0), count: 128, variance: 0.3 };
//! let samples = generate_samples(|x| 2.0 * x, &config);
//! ```

use rand::Rng;

#[cfg(test)]
mod tests;

/// 数据集生成配置
#[derive(Debug, Clone, Copy)]
pub struct DatasetConfig {
    /// 采样区间 [min, max)
    pub domain: (f32, f32),
    /// 样本数量
    pub count: usize,
    /// 均匀噪声的幅度：噪声取自 [−variance/2, variance/2)
    pub variance: f32,
}

/// 生成训练样本（`thread_rng`，非确定性）
pub fn generate_samples<F>(f: F, config: &DatasetConfig) -> Vec<(f32, f32)>
where
    F: Fn(f32) -> f32,
{
    let mut rng = rand::thread_rng();
    generate_samples_with_rng(f, config, &mut rng)
}

/// 生成训练样本（确定性变体：RNG 由调用方提供）
///
/// x 均匀采样自 domain，y = f(x) + 均匀噪声。退化区间（min ≥ max）
/// 时 x 恒为左端点；variance ≤ 0 时不加噪声。
pub fn generate_samples_with_rng<F, R>(f: F, config: &DatasetConfig, rng: &mut R) -> Vec<(f32, f32)>
where
    F: Fn(f32) -> f32,
    R: Rng,
{
    let (min, max) = config.domain;
    (0..config.count)
        .map(|_| {
            let x = if max > min {
                rng.gen_range(min..max)
            } else {
                min
            };
            let noise = if config.variance > 0.0 {
                rng.gen_range(0.0..config.variance) - config.variance / 2.0
            } else {
                0.0
            };
            (x, f(x) + noise)
        })
        .collect()
}
