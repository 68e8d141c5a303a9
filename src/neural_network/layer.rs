use super::optimizer::input_validation_function::validate_unit_interval;
use super::*;
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// A stage of neurons plus the weighted connections to the next stage.
///
/// `weights[[i, j]]` connects neuron `i` of this layer to neuron `j` of the following layer
/// and `biases[j]` is added to that downstream neuron's weighted sum. The output layer is a
/// layer with `next_size == 0`: its weight and bias structures are empty and it never
/// receives an update.
///
/// The layer's `activation` is applied to the net output of the *previous* layer when this
/// layer's neurons are loaded; the input layer holds raw features and never applies it.
///
/// # Fields
/// ## Core fields
/// - `size` - Number of neurons in this layer
/// - `next_size` - Number of neurons in the following layer (0 for the output layer)
/// - `neurons` - Activation values written by the latest forward pass
/// - `net_input` - Pre-activation values the neurons were computed from
/// - `weights` - Weight matrix with shape (size, next_size)
/// - `biases` - Bias vector with shape (next_size)
/// - `activation` - Activation function of this layer
/// - `initializer` - Strategy the weights were populated with
/// - `l2` - Weight decay coefficient applied at update time (0 disables it)
///
/// ## Training state
/// - `deltas` - Per-neuron error signal dCost/dNetInput from the latest backward pass
/// - `weight_delta_accumulator`, `bias_delta_accumulator` - Sum of per-example steps in the current training step
/// - `weight_updates`, `bias_updates` - Number of steps accumulated since the last update
/// - `prev_weight_deltas`, `prev_bias_deltas` - The last applied (averaged) step, used for momentum
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use rustynn::prelude::*;
///
/// let layer = NeuronLayer::new_with_initializer(2, 2, Activation::Sigmoid, WeightInitializer::Manual)
///     .with_weights(array![[0.15, 0.25], [0.20, 0.30]])
///     .unwrap()
///     .with_bias(0.35);
/// assert_eq!(layer.param_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct NeuronLayer {
    size: usize,
    next_size: usize,
    neurons: Vec<Neuron>,
    net_input: Array1<f64>,
    deltas: Array1<f64>,
    weights: Array2<f64>,
    biases: Array1<f64>,
    weight_delta_accumulator: Array2<f64>,
    bias_delta_accumulator: Array1<f64>,
    prev_weight_deltas: Array2<f64>,
    prev_bias_deltas: Array1<f64>,
    weight_updates: usize,
    bias_updates: usize,
    activation: Activation,
    initializer: WeightInitializer,
    l2: f64,
}

impl NeuronLayer {
    /// Creates a layer with the default Sigmoid activation and Gaussian initializer
    pub fn new(size: usize, next_size: usize) -> Self {
        Self::new_with_initializer(size, next_size, Activation::default(), WeightInitializer::default())
    }

    /// Creates a layer with the given activation and the default Gaussian initializer
    pub fn new_with_activation(size: usize, next_size: usize, activation: Activation) -> Self {
        Self::new_with_initializer(size, next_size, activation, WeightInitializer::default())
    }

    /// Creates a layer with the given activation and initializer, using the thread RNG
    pub fn new_with_initializer(
        size: usize,
        next_size: usize,
        activation: Activation,
        initializer: WeightInitializer,
    ) -> Self {
        Self::new_with_rng(size, next_size, activation, initializer, &mut rand::rng())
    }

    /// Creates a layer whose weights are drawn from the provided RNG.
    ///
    /// # Parameters
    ///
    /// - `size` - Number of neurons in this layer
    /// - `next_size` - Number of neurons in the following layer, 0 for the output layer
    /// - `activation` - Activation function of this layer
    /// - `initializer` - Strategy used to populate the weight matrix
    /// - `rng` - Random source, pass a seeded RNG for reproducible weights
    ///
    /// # Returns
    ///
    /// * `Self` - A new layer with zeroed neurons, biases and training state
    pub fn new_with_rng<R: Rng + ?Sized>(
        size: usize,
        next_size: usize,
        activation: Activation,
        initializer: WeightInitializer,
        rng: &mut R,
    ) -> Self {
        let mut weights = Array2::<f64>::zeros((size, next_size));
        initializer.init(&mut weights, rng);

        Self {
            size,
            next_size,
            neurons: vec![Neuron::new(); size],
            net_input: Array1::zeros(size),
            deltas: Array1::zeros(size),
            weights,
            biases: Array1::zeros(next_size),
            weight_delta_accumulator: Array2::zeros((size, next_size)),
            bias_delta_accumulator: Array1::zeros(next_size),
            prev_weight_deltas: Array2::zeros((size, next_size)),
            prev_bias_deltas: Array1::zeros(next_size),
            weight_updates: 0,
            bias_updates: 0,
            activation,
            initializer,
            l2: 0.0,
        }
    }

    /// Seeds every bias with the same constant
    pub fn with_bias(mut self, initial: f64) -> Self {
        self.biases.fill(initial);
        self
    }

    /// Enables L2 weight decay: updates become `w * (1 - l2) + step`
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The layer with decay configured
    /// - `Err(ModelError::ConfigurationError)` - If `l2` is not in [0, 1)
    pub fn with_l2_regularization(mut self, l2: f64) -> Result<Self, ModelError> {
        validate_unit_interval(l2, "l2")?;
        self.l2 = l2;
        Ok(self)
    }

    /// Replaces the weight matrix, typically together with `WeightInitializer::Manual`
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - The layer holding `weights`
    /// - `Err(ModelError::ConfigurationError)` - If `weights` is not `(size, next_size)`
    pub fn with_weights(mut self, weights: Array2<f64>) -> Result<Self, ModelError> {
        if weights.dim() != (self.size, self.next_size) {
            return Err(ModelError::ConfigurationError(format!(
                "weight matrix shape {:?} does not match layer shape ({}, {})",
                weights.dim(),
                self.size,
                self.next_size
            )));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn next_size(&self) -> usize {
        self.next_size
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Current neuron values in index order
    pub fn neuron_values(&self) -> Array1<f64> {
        self.neurons.iter().map(Neuron::value).collect()
    }

    pub fn net_input(&self) -> &Array1<f64> {
        &self.net_input
    }

    pub fn deltas(&self) -> &Array1<f64> {
        &self.deltas
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Array1<f64> {
        &self.biases
    }

    pub fn prev_weight_deltas(&self) -> &Array2<f64> {
        &self.prev_weight_deltas
    }

    pub fn prev_bias_deltas(&self) -> &Array1<f64> {
        &self.prev_bias_deltas
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn initializer(&self) -> WeightInitializer {
        self.initializer
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Number of trainable parameters (weights plus biases)
    pub fn param_count(&self) -> usize {
        self.size * self.next_size + self.next_size
    }

    /// Loads raw feature values into the neurons (input layer)
    pub(crate) fn load_input(&mut self, input: ArrayView1<f64>) {
        debug_assert_eq!(input.len(), self.size);
        self.net_input.assign(&input);
        for (neuron, &value) in self.neurons.iter_mut().zip(input.iter()) {
            neuron.set_value(value);
        }
    }

    /// Applies this layer's activation to `net_input` and loads the result into the neurons
    pub(crate) fn activate(&mut self, net_input: Array1<f64>) {
        debug_assert_eq!(net_input.len(), self.size);
        let output = self.activation.apply(net_input.view());
        for (neuron, &value) in self.neurons.iter_mut().zip(output.iter()) {
            neuron.set_value(value);
        }
        self.net_input = net_input;
    }

    /// Forward pass: `net_j = Σ_i neuron_i * weights[i][j] + biases[j]`.
    ///
    /// # Returns
    ///
    /// * `Array1<f64>` - Net output of length `next_size`, before the next layer's activation
    pub fn compute_net_output(&self) -> Array1<f64> {
        self.net_output_for(self.neuron_values().view())
    }

    /// Forward pass on caller-provided values instead of the stored neurons
    pub(crate) fn net_output_for(&self, values: ArrayView1<f64>) -> Array1<f64> {
        values.dot(&self.weights) + &self.biases
    }

    /// Output layer error: `delta = activation'(output) · cost'(expected, output)`
    pub(crate) fn compute_output_error(
        &mut self,
        cost_function: CostFunction,
        expected: ArrayView1<f64>,
    ) {
        let outputs = self.neuron_values();
        let cost_gradient = cost_function.apply_derivative(expected, outputs.view());
        self.deltas =
            self.activation
                .apply_derivative(self.net_input.view(), outputs.view(), cost_gradient.view());
    }

    /// Hidden layer error propagated back from the following layer's deltas:
    /// `pre_delta_i = Σ_j weights[i][j] * downstream_j`, then the activation derivative.
    pub(crate) fn compute_hidden_error(&mut self, downstream_deltas: ArrayView1<f64>) {
        debug_assert_eq!(downstream_deltas.len(), self.next_size);
        let pre_delta = self.weights.dot(&downstream_deltas);
        let outputs = self.neuron_values();
        self.deltas =
            self.activation
                .apply_derivative(self.net_input.view(), outputs.view(), pre_delta.view());
    }

    /// Adds one example's steps to the accumulators.
    ///
    /// For every weight the step is `optimizer(neuron_i * downstream_j) + momentum * prev[i][j]`,
    /// for every bias `optimizer(downstream_j) + momentum * prev[j]`.
    pub(crate) fn accumulate_gradients(
        &mut self,
        downstream_deltas: ArrayView1<f64>,
        optimizer: &dyn Optimizer,
        momentum: f64,
    ) {
        debug_assert_eq!(downstream_deltas.len(), self.next_size);
        let values = self.neuron_values();

        for ((i, j), acc) in self.weight_delta_accumulator.indexed_iter_mut() {
            let gradient = values[i] * downstream_deltas[j];
            *acc += optimizer.apply(gradient) + momentum * self.prev_weight_deltas[[i, j]];
        }
        self.weight_updates += 1;

        for (j, acc) in self.bias_delta_accumulator.iter_mut().enumerate() {
            *acc += optimizer.apply(downstream_deltas[j]) + momentum * self.prev_bias_deltas[j];
        }
        self.bias_updates += 1;
    }

    /// Applies the mean of the accumulated steps, remembers it for momentum, then clears
    /// the accumulators.
    pub(crate) fn apply_accumulated_update(&mut self) {
        if self.next_size == 0 {
            return;
        }
        if self.weight_updates == 0 || self.bias_updates == 0 {
            tracing::warn!(
                size = self.size,
                next_size = self.next_size,
                "update requested with no accumulated gradients"
            );
            return;
        }

        let averaged_weights = &self.weight_delta_accumulator / self.weight_updates as f64;
        let averaged_biases = &self.bias_delta_accumulator / self.bias_updates as f64;

        if self.l2 > 0.0 {
            let decay = 1.0 - self.l2;
            self.weights.mapv_inplace(|w| w * decay);
        }
        self.weights += &averaged_weights;
        self.biases += &averaged_biases;

        self.prev_weight_deltas = averaged_weights;
        self.prev_bias_deltas = averaged_biases;

        self.weight_delta_accumulator.fill(0.0);
        self.bias_delta_accumulator.fill(0.0);
        self.weight_updates = 0;
        self.bias_updates = 0;
    }
}
