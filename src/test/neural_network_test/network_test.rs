use super::*;

fn snapshot(network: &Network) -> Vec<(Array2<f64>, Array1<f64>)> {
    network
        .layers()
        .iter()
        .map(|layer| (layer.weights().clone(), layer.biases().clone()))
        .collect()
}

#[test]
fn cost_before_forward_pass_is_a_processing_error_test() {
    let mut network = reference_network();
    let expected = array![0.01, 0.99];

    assert!(matches!(
        network.get_cost(expected.view()),
        Err(ModelError::ProcessingError(_))
    ));
    assert!(matches!(
        network.backpropagation(expected.view()),
        Err(ModelError::ProcessingError(_))
    ));
}

#[test]
fn wrong_lengths_are_rejected_test() {
    let mut network = reference_network();

    assert!(matches!(
        network.feed_forward(array![1.0, 2.0, 3.0].view()),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        network.predict(array![1.0].view()),
        Err(ModelError::InputValidationError(_))
    ));

    network.feed_forward(array![0.05, 0.10].view()).unwrap();
    assert!(matches!(
        network.get_cost(array![1.0].view()),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        network.backpropagation(array![1.0, 0.0, 0.0].view()),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn invalid_batches_leave_network_untouched_test() {
    let mut network = reference_network();
    let before = snapshot(&network);

    let empty: Vec<Array1<f64>> = Vec::new();
    assert!(matches!(
        network.train_batch(&empty, &empty),
        Err(ModelError::InputValidationError(_))
    ));

    let inputs = vec![array![0.05, 0.10], array![0.5, 0.5]];
    let expected = vec![array![0.01, 0.99]];
    assert!(matches!(
        network.train_batch(&inputs, &expected),
        Err(ModelError::InputValidationError(_))
    ));

    // the second example is malformed, the first must not be trained either
    let inputs = vec![array![0.05, 0.10], array![0.5]];
    let expected = vec![array![0.01, 0.99], array![0.01, 0.99]];
    assert!(matches!(
        network.train_batch(&inputs, &expected),
        Err(ModelError::InputValidationError(_))
    ));

    assert_eq!(snapshot(&network), before);
    assert!(matches!(
        network.get_cost(array![0.01, 0.99].view()),
        Err(ModelError::ProcessingError(_))
    ));
}

#[test]
fn momentum_validation_test() {
    let mut network = reference_network();
    for momentum in [-0.1, 1.0, 1.5, f64::NAN] {
        assert!(matches!(
            network.set_momentum(momentum),
            Err(ModelError::ConfigurationError(_))
        ));
    }
    assert_eq!(network.momentum(), DEFAULT_MOMENTUM);

    network.set_momentum(0.0).unwrap();
    assert_eq!(network.momentum(), 0.0);
}

#[test]
fn fit_rejects_zero_batch_size_test() {
    let mut network = reference_network();
    let inputs = vec![array![0.05, 0.10]];
    let expected = vec![array![0.01, 0.99]];
    assert!(matches!(
        network.fit_with_batches(&inputs, &expected, 1, 0),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn feed_forward_matches_predict_test() {
    let mut network = reference_network();
    let input = array![0.05, 0.10];

    network.feed_forward(input.view()).unwrap();
    let predicted = network.predict(input.view()).unwrap();
    assert_eq!(network.get_output(), predicted);
    assert_relative_eq!(predicted[0], 0.7513650695523157, epsilon = 1e-12);
    assert_relative_eq!(predicted[1], 0.7729284653214625, epsilon = 1e-12);
    assert_eq!(network.predict_class(input.view()).unwrap(), 1);
}

#[test]
fn hidden_deltas_follow_output_deltas_test() {
    let mut network = reference_network();
    network.set_momentum(0.0).unwrap();
    network.feed_forward(array![0.05, 0.10].view()).unwrap();

    let hidden_weights = network.hidden_layers()[0].weights().clone();
    network.backpropagation(array![0.01, 0.99].view()).unwrap();

    let output = network.output_layer();
    let hidden = &network.hidden_layers()[0];
    let out = output.neuron_values();
    let expected_output_deltas = array![
        (out[0] - 0.01) * out[0] * (1.0 - out[0]),
        (out[1] - 0.99) * out[1] * (1.0 - out[1]),
    ];
    for j in 0..2 {
        assert_relative_eq!(output.deltas()[j], expected_output_deltas[j], epsilon = 1e-12);
    }

    let h = hidden.neuron_values();
    let pre_delta = hidden_weights.dot(&expected_output_deltas);
    for i in 0..2 {
        assert_relative_eq!(
            hidden.deltas()[i],
            pre_delta[i] * h[i] * (1.0 - h[i]),
            epsilon = 1e-12
        );
    }
}
