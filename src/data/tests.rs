use super::{DatasetConfig, generate_samples, generate_samples_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_generate_samples_count_and_domain() {
    let config = DatasetConfig {
        domain: (-2.0, 3.0),
        count: 200,
        variance: 0.0,
    };
    let samples = generate_samples(|x| x, &config);

    assert_eq!(samples.len(), 200);
    for &(x, _) in &samples {
        assert!((-2.0..3.0).contains(&x), "采样点越界: {x}");
    }
}

#[test]
fn test_generate_samples_zero_variance_is_exact() {
    let config = DatasetConfig {
        domain: (0.0, 1.0),
        count: 50,
        variance: 0.0,
    };
    for (x, y) in generate_samples(|x| 2.0 * x + 1.0, &config) {
        assert_eq!(y, 2.0 * x + 1.0);
    }
}

#[test]
fn test_generate_samples_noise_bounded_by_variance() {
    let config = DatasetConfig {
        domain: (-1.0, 1.0),
        count: 500,
        variance: 0.4,
    };
    // 噪声取自 [−variance/2, variance/2)
    for (x, y) in generate_samples(|x| 3.0 * x, &config) {
        let noise = y - 3.0 * x;
        assert!((-0.2..0.2).contains(&noise), "噪声越界: {noise}");
    }
}

#[test]
fn test_generate_samples_degenerate_domain() {
    // min ≥ max 时 x 恒为左端点
    let config = DatasetConfig {
        domain: (1.5, 1.5),
        count: 10,
        variance: 0.0,
    };
    for (x, y) in generate_samples(|x| x * x, &config) {
        assert_eq!(x, 1.5);
        assert_eq!(y, 2.25);
    }
}

#[test]
fn test_generate_samples_deterministic_with_seed() {
    let config = DatasetConfig {
        domain: (-1.0, 1.0),
        count: 32,
        variance: 0.3,
    };
    let mut rng1 = StdRng::seed_from_u64(99);
    let mut rng2 = StdRng::seed_from_u64(99);
    let first = generate_samples_with_rng(|x| x.sin(), &config, &mut rng1);
    let second = generate_samples_with_rng(|x| x.sin(), &config, &mut rng2);
    assert_eq!(first, second);
}
