use super::*;

#[test]
fn gradient_descent_steps_against_gradient_test() {
    let optimizer = GradientDescent::new(0.5).unwrap();
    assert_eq!(optimizer.apply(2.0), -1.0);
    assert_eq!(optimizer.apply(-0.4), 0.2);
    assert_eq!(optimizer.get_learning_rate(), 0.5);
    assert_eq!(optimizer.name(), "GradientDescent");
}

#[test]
fn gradient_descent_rejects_invalid_learning_rate_test() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            GradientDescent::new(lr),
            Err(ModelError::ConfigurationError(_))
        ));
    }
}

#[test]
fn default_learning_rate_test() {
    assert_eq!(GradientDescent::default().get_learning_rate(), 0.5);
}

/// A custom rule plugged in through the trait
struct HalvingOptimizer;

impl Optimizer for HalvingOptimizer {
    fn apply(&self, gradient: f64) -> f64 {
        -0.5 * gradient
    }
}

#[test]
fn custom_optimizer_drives_network_test() {
    let mut reference = reference_network();
    reference.set_optimizer(GradientDescent::new(0.5).unwrap());
    let mut custom = reference_network();
    custom.set_optimizer(HalvingOptimizer);
    assert_eq!(custom.optimizer().name(), "Unknown");

    let input = array![0.05, 0.10];
    let expected = array![0.01, 0.99];
    for network in [&mut reference, &mut custom] {
        network.feed_forward(input.view()).unwrap();
        network.backpropagation(expected.view()).unwrap();
    }

    for (a, b) in reference.layers().iter().zip(custom.layers()) {
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.biases(), b.biases());
    }
}
