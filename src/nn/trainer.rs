/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 批量训练循环（在线随机梯度下降，有放回采样）
 */

use super::graph::{BackwardConfig, Graph, GraphError, TrainOutcome};
use rand::Rng;

/// 批量训练：每个 epoch 有放回地随机抽取 `samples.len()` 个样本，
/// 逐个调用 `backward` 并把返回的快照串入下一次调用（在线 SGD，
/// epoch 内不聚合梯度），记录每个 epoch 的平均损失。
///
/// 采样使用 `thread_rng`（非确定性）；需要可复现时用
/// [`train_batch_with_rng`]。
pub fn train_batch(
    graph: &Graph,
    samples: &[(f32, f32)],
    config: &BackwardConfig,
    epochs: usize,
) -> Result<TrainOutcome, GraphError> {
    let mut rng = rand::thread_rng();
    train_batch_with_rng(graph, samples, config, epochs, &mut rng)
}

/// [`train_batch`] 的确定性变体：采样由调用方提供的 RNG 驱动
pub fn train_batch_with_rng<R: Rng>(
    graph: &Graph,
    samples: &[(f32, f32)],
    config: &BackwardConfig,
    epochs: usize,
    rng: &mut R,
) -> Result<TrainOutcome, GraphError> {
    train_batch_observed(graph, samples, config, epochs, rng, |_, _| true)
}

/// 带观察回调的训练循环
///
/// 每个 epoch 结束后以 `(epoch 序号, 平均损失)` 调用 `on_epoch`，
/// 返回 `false` 则在 epoch 之间协作式停止（绝不在 epoch 中途打断），
/// 已完成的 epoch 损失仍会保留在结果中。
pub fn train_batch_observed<R, F>(
    graph: &Graph,
    samples: &[(f32, f32)],
    config: &BackwardConfig,
    epochs: usize,
    rng: &mut R,
    mut on_epoch: F,
) -> Result<TrainOutcome, GraphError>
where
    R: Rng,
    F: FnMut(usize, f32) -> bool,
{
    if samples.is_empty() {
        return Err(GraphError::InvalidOperation(
            "训练样本为空，无法开始训练".to_string(),
        ));
    }

    let mut graph = graph.clone();
    let mut epoch_losses = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        let mut total_loss = 0.0;

        for _ in 0..samples.len() {
            let (x, y) = samples[rng.gen_range(0..samples.len())];
            let outcome = graph.backward(x, y, config)?;
            graph = outcome.graph;
            total_loss += outcome.loss;
        }

        let avg_loss = total_loss / samples.len() as f32;
        epoch_losses.push(avg_loss);

        if !on_epoch(epoch, avg_loss) {
            break;
        }
    }

    Ok(TrainOutcome {
        graph,
        epoch_losses,
    })
}
