use crate::nn::{Activation, Cost, GraphError};
use approx::assert_abs_diff_eq;

#[test]
fn test_activation_values() {
    assert_abs_diff_eq!(Activation::Sigmoid.apply(0.0), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(Activation::Sigmoid.apply(1.0), 0.731_058_6, epsilon = 1e-6);
    assert_eq!(Activation::Relu.apply(-1.5), 0.0);
    assert_eq!(Activation::Relu.apply(2.0), 2.0);
    assert_eq!(Activation::Relu.apply(0.0), 0.0);
}

#[test]
fn test_activation_derivatives_at_net_input() {
    // sigmoid'(0) = 0.25
    assert_abs_diff_eq!(Activation::Sigmoid.derivative(0.0), 0.25, epsilon = 1e-6);
    assert_eq!(Activation::Relu.derivative(3.0), 1.0);
    assert_eq!(Activation::Relu.derivative(-3.0), 0.0);
    assert_eq!(Activation::Relu.derivative(0.0), 0.0);
}

#[test]
fn test_activation_derivatives_at_output() {
    // 已激活值 o = 0.5 时 sigmoid 导数 = o·(1−o) = 0.25
    assert_abs_diff_eq!(
        Activation::Sigmoid.derivative_at_output(0.5),
        0.25,
        epsilon = 1e-6
    );
    assert_eq!(Activation::Relu.derivative_at_output(2.0), 1.0);
    assert_eq!(Activation::Relu.derivative_at_output(0.0), 0.0);
}

#[test]
fn test_sigmoid_legacy_hazard_differs_from_correct_form() {
    // 旧实现把已激活值 o 再喂回 derivative（相当于 s(s(net)) 形式），
    // 与 o·(1−o) 并不相等
    let o = Activation::Sigmoid.apply(1.0);
    let correct = Activation::Sigmoid.derivative_at_output(o);
    let legacy = Activation::Sigmoid.derivative(o);
    assert!((correct - legacy).abs() > 1e-3);
}

#[test]
fn test_activation_resolved_by_name() {
    assert_eq!("sigmoid".parse::<Activation>(), Ok(Activation::Sigmoid));
    assert_eq!("relu".parse::<Activation>(), Ok(Activation::Relu));
    assert_eq!(
        "tanh".parse::<Activation>(),
        Err(GraphError::UnknownActivation("tanh".to_string()))
    );
    assert_eq!(Activation::Sigmoid.name(), "sigmoid");
}

#[test]
fn test_cost_mse() {
    // mse(y, ŷ) = (y − ŷ)²
    assert_abs_diff_eq!(Cost::Mse.apply(1.0, 3.0), 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(Cost::Mse.apply(3.0, 1.0), 4.0, epsilon = 1e-6);
    // mse'(y, ŷ) = 2(ŷ − y)
    assert_abs_diff_eq!(Cost::Mse.derivative(1.0, 3.0), 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(Cost::Mse.derivative(3.0, 1.0), -4.0, epsilon = 1e-6);
}

#[test]
fn test_cost_resolved_by_name() {
    assert_eq!("mse".parse::<Cost>(), Ok(Cost::Mse));
    assert_eq!(
        "mae".parse::<Cost>(),
        Err(GraphError::UnknownCost("mae".to_string()))
    );
}
