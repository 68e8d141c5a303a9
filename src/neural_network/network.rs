use super::optimizer::input_validation_function::validate_unit_interval;
use super::*;
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array1, ArrayView1};
use rand::seq::SliceRandom;
use rayon::prelude::*;
use tracing::{debug, info};

/// Default momentum coefficient of a freshly built network
pub const DEFAULT_MOMENTUM: f64 = 0.5;

/// A feed-forward network: one input layer, one or more hidden layers and one output layer.
///
/// The network is built once by [`NetworkBuilder`] and then driven through forward and
/// backward passes. `feed_forward` must run before `get_cost` or `backpropagation`;
/// `train_batch` performs the forward pass for each example itself.
///
/// # Fields
///
/// - `layers` - All layers in order: input, hidden layers, output
/// - `cost_function` - Cost used for reporting and for the output layer error
/// - `optimizer` - Rule turning a gradient into a weight step
/// - `momentum` - Fraction of the previous applied step carried into the next one
/// - `fed_forward` - Whether the neurons currently hold the result of a forward pass
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use rustynn::prelude::*;
///
/// let mut network = NetworkBuilder::new()
///     .with_input_layer(NeuronLayer::new_with_initializer(2, 3, Activation::Identity, WeightInitializer::XavierNormal))
///     .add_hidden_layer(NeuronLayer::new_with_initializer(3, 1, Activation::Sigmoid, WeightInitializer::XavierNormal))
///     .with_output_layer(NeuronLayer::new_with_activation(1, 0, Activation::Sigmoid))
///     .build()
///     .unwrap();
/// network.set_cost_function(CostFunction::HalfQuadratic);
///
/// let input = array![0.0, 1.0];
/// let expected = array![1.0];
/// network.feed_forward(input.view()).unwrap();
/// let cost = network.get_cost(expected.view()).unwrap();
/// network.backpropagation(expected.view()).unwrap();
///
/// assert!(cost >= 0.0);
/// assert_eq!(network.get_output().len(), 1);
/// ```
pub struct Network {
    layers: Vec<NeuronLayer>,
    cost_function: CostFunction,
    optimizer: Box<dyn Optimizer>,
    momentum: f64,
    fed_forward: bool,
}

impl Network {
    /// Wraps an already validated chain of layers
    pub(crate) fn from_layers(layers: Vec<NeuronLayer>) -> Self {
        Self {
            layers,
            cost_function: CostFunction::default(),
            optimizer: Box::new(GradientDescent::default()),
            momentum: DEFAULT_MOMENTUM,
            fed_forward: false,
        }
    }

    pub fn set_cost_function(&mut self, cost_function: CostFunction) {
        self.cost_function = cost_function;
    }

    pub fn set_optimizer<O: 'static + Optimizer>(&mut self, optimizer: O) {
        self.optimizer = Box::new(optimizer);
    }

    /// Sets the momentum coefficient
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Momentum updated
    /// - `Err(ModelError::ConfigurationError)` - If `momentum` is not in [0, 1)
    pub fn set_momentum(&mut self, momentum: f64) -> Result<(), ModelError> {
        validate_unit_interval(momentum, "momentum")?;
        self.momentum = momentum;
        Ok(())
    }

    pub fn cost_function(&self) -> CostFunction {
        self.cost_function
    }

    pub fn optimizer(&self) -> &dyn Optimizer {
        self.optimizer.as_ref()
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// All layers in order: input, hidden, output
    pub fn layers(&self) -> &[NeuronLayer] {
        &self.layers
    }

    pub fn input_layer(&self) -> &NeuronLayer {
        &self.layers[0]
    }

    pub fn hidden_layers(&self) -> &[NeuronLayer] {
        &self.layers[1..self.layers.len() - 1]
    }

    pub fn output_layer(&self) -> &NeuronLayer {
        &self.layers[self.layers.len() - 1]
    }

    /// Total number of trainable parameters over all layers
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(NeuronLayer::param_count).sum()
    }

    /// Runs a forward pass, leaving every layer's neurons populated.
    ///
    /// # Parameters
    ///
    /// * `input` - Feature vector, its length must equal the input layer size
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The output layer now holds the network's prediction
    /// - `Err(ModelError::InputValidationError)` - If the input length is wrong
    pub fn feed_forward(&mut self, input: ArrayView1<f64>) -> Result<(), ModelError> {
        validate_length(input.len(), self.input_layer().size(), "input")?;
        self.forward_unchecked(input);
        Ok(())
    }

    /// Output layer values from the latest forward pass
    pub fn get_output(&self) -> Array1<f64> {
        self.output_layer().neuron_values()
    }

    /// Evaluates the configured cost against the current output; mutates nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The cost of the latest forward pass
    /// - `Err(ModelError::InputValidationError)` - If `expected` has the wrong length
    /// - `Err(ModelError::ProcessingError)` - If no forward pass has been run yet
    pub fn get_cost(&self, expected: ArrayView1<f64>) -> Result<f64, ModelError> {
        validate_length(expected.len(), self.output_layer().size(), "expected output")?;
        self.ensure_fed_forward()?;
        Ok(self
            .cost_function
            .apply(expected, self.get_output().view()))
    }

    /// Online training step: computes every layer's error for the latest forward pass and
    /// immediately applies the resulting update.
    ///
    /// # Parameters
    ///
    /// * `expected` - Target vector for the input last passed to `feed_forward`
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Weights and biases updated
    /// - `Err(ModelError::InputValidationError)` - If `expected` has the wrong length
    /// - `Err(ModelError::ProcessingError)` - If no forward pass has been run yet
    pub fn backpropagation(&mut self, expected: ArrayView1<f64>) -> Result<(), ModelError> {
        validate_length(expected.len(), self.output_layer().size(), "expected output")?;
        self.ensure_fed_forward()?;

        self.compute_errors(expected);
        self.accumulate_gradients();
        self.update_all_weights_and_biases();
        Ok(())
    }

    /// Batch training step: forward pass, cost and error accumulation for every example,
    /// followed by a single averaged update.
    ///
    /// The cost of each example is measured before the update of this batch.
    ///
    /// # Parameters
    ///
    /// - `examples` - Feature vectors of the batch
    /// - `expected_outputs` - Target vectors, one per example
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The summed cost over the batch (divide by the batch size for a mean)
    /// - `Err(ModelError::InputValidationError)` - If the batch is empty or any shape is wrong;
    ///   nothing is mutated in that case
    pub fn train_batch(
        &mut self,
        examples: &[Array1<f64>],
        expected_outputs: &[Array1<f64>],
    ) -> Result<f64, ModelError> {
        self.validate_training_inputs(examples, expected_outputs)?;
        let indices: Vec<usize> = (0..examples.len()).collect();
        Ok(self.train_on_indices(examples, expected_outputs, &indices))
    }

    /// Read-only forward pass using per-call buffers.
    ///
    /// Unlike `feed_forward` this does not touch the layers' neurons, so a trained network
    /// can be shared between threads for inference.
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - The output vector
    /// - `Err(ModelError::InputValidationError)` - If the input length is wrong
    pub fn predict(&self, input: ArrayView1<f64>) -> Result<Array1<f64>, ModelError> {
        validate_length(input.len(), self.input_layer().size(), "input")?;

        let mut values = input.to_owned();
        for pair in self.layers.windows(2) {
            let net_output = pair[0].net_output_for(values.view());
            values = pair[1].activation().apply(net_output.view());
        }
        Ok(values)
    }

    /// Index of the largest output of `predict`; the first maximum wins on ties
    pub fn predict_class(&self, input: ArrayView1<f64>) -> Result<usize, ModelError> {
        let output = self.predict(input)?;
        Ok(argmax(output.view()))
    }

    /// Fraction of examples whose predicted class equals their label.
    ///
    /// Predictions run in parallel; training state is not touched.
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - Accuracy in [0, 1]
    /// - `Err(ModelError::InputValidationError)` - If `examples` is empty or a feature vector has the wrong length
    pub fn evaluate_accuracy(&self, examples: &[LabeledExample]) -> Result<f64, ModelError> {
        if examples.is_empty() {
            return Err(ModelError::InputValidationError(
                "cannot evaluate on an empty example set".to_string(),
            ));
        }

        let hits = examples
            .par_iter()
            .map(|example| {
                self.predict_class(example.features().view())
                    .map(|class| usize::from(class == example.label()))
            })
            .collect::<Result<Vec<usize>, ModelError>>()?;

        Ok(hits.iter().sum::<usize>() as f64 / examples.len() as f64)
    }

    /// Online training loop: `feed_forward` + `backpropagation` for every example, every epoch.
    ///
    /// # Parameters
    ///
    /// - `inputs` - Feature vectors
    /// - `expected_outputs` - Target vectors, one per input
    /// - `epochs` - Number of passes over the data
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Average cost of each epoch, each example's cost read right after
    ///   its update from the output of its forward pass
    /// - `Err(ModelError)` - If the inputs are invalid
    pub fn fit(
        &mut self,
        inputs: &[Array1<f64>],
        expected_outputs: &[Array1<f64>],
        epochs: usize,
    ) -> Result<Vec<f64>, ModelError> {
        self.validate_training_inputs(inputs, expected_outputs)?;

        let progress_bar = epoch_progress_bar(epochs)?;
        let mut history = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            let mut total_cost = 0.0;
            for (input, expected) in inputs.iter().zip(expected_outputs) {
                self.forward_unchecked(input.view());
                self.compute_errors(expected.view());
                self.accumulate_gradients();
                self.update_all_weights_and_biases();
                total_cost += self
                    .cost_function
                    .apply(expected.view(), self.get_output().view());
            }

            let average_cost = total_cost / inputs.len() as f64;
            history.push(average_cost);
            info!(epoch = epoch + 1, average_cost, "online epoch finished");
            progress_bar.set_message(format!("{:.6}", average_cost));
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Training completed");
        Ok(history)
    }

    /// Mini-batch training loop: shuffles the examples each epoch and calls `train_batch`
    /// on consecutive chunks of `batch_size` (the last chunk may be shorter).
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Average pre-update cost of each epoch
    /// - `Err(ModelError)` - If the inputs or the batch size are invalid
    pub fn fit_with_batches(
        &mut self,
        inputs: &[Array1<f64>],
        expected_outputs: &[Array1<f64>],
        epochs: usize,
        batch_size: usize,
    ) -> Result<Vec<f64>, ModelError> {
        self.validate_training_inputs(inputs, expected_outputs)?;
        if batch_size == 0 {
            return Err(ModelError::InputValidationError(
                "Batch size must be greater than 0".to_string(),
            ));
        }

        let progress_bar = epoch_progress_bar(epochs)?;
        let mut history = Vec::with_capacity(epochs);
        let mut indices: Vec<usize> = (0..inputs.len()).collect();

        for epoch in 0..epochs {
            indices.shuffle(&mut rand::rng());

            let mut total_cost = 0.0;
            for batch in indices.chunks(batch_size) {
                total_cost += self.train_on_indices(inputs, expected_outputs, batch);
            }

            let average_cost = total_cost / inputs.len() as f64;
            history.push(average_cost);
            info!(epoch = epoch + 1, batch_size, average_cost, "batch epoch finished");
            progress_bar.set_message(format!("{:.6}", average_cost));
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Training completed");
        Ok(history)
    }

    /// Prints a summary of the network's structure
    ///
    /// Displays each layer's size, activation and parameter count in a tabular format
    pub fn summary(&self) {
        let col1_width = 24;
        let col2_width = 14;
        let col3_width = 16;
        let col4_width = 12;
        println!("Model: \"network\"");
        println!(
            "┏{}┳{}┳{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width),
            "━".repeat(col4_width)
        );
        println!(
            "┃ {:<22} ┃ {:<12} ┃ {:<14} ┃ {:>10} ┃",
            "Layer", "Shape", "Activation", "Param #"
        );
        println!(
            "┡{}╇{}╇{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width),
            "━".repeat(col4_width)
        );
        for (i, layer) in self.layers.iter().enumerate() {
            println!(
                "│ {:<22} │ {:<12} │ {:<14} │ {:>10} │",
                layer_label(i, self.layers.len()),
                format!("({}, {})", layer.size(), layer.next_size()),
                layer.activation().name(),
                layer.param_count()
            );
        }
        println!(
            "└{}┴{}┴{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width),
            "─".repeat(col4_width)
        );
        let total_params = self.param_count();
        println!(" Total params: {} ({} B)", total_params, total_params * 8); // f64, 8 bytes each
        println!(
            " Cost: {} | Optimizer: {} | Momentum: {}",
            self.cost_function.name(),
            self.optimizer.name(),
            self.momentum
        );
    }

    fn forward_unchecked(&mut self, input: ArrayView1<f64>) {
        self.layers[0].load_input(input);
        for k in 0..self.layers.len() - 1 {
            let net_output = self.layers[k].compute_net_output();
            self.layers[k + 1].activate(net_output);
        }
        self.fed_forward = true;
    }

    /// Output layer error first, then every hidden layer from the output side back
    fn compute_errors(&mut self, expected: ArrayView1<f64>) {
        let last = self.layers.len() - 1;
        self.layers[last].compute_output_error(self.cost_function, expected);
        for k in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            head[k].compute_hidden_error(tail[0].deltas().view());
        }
    }

    /// Accumulates the steps of every layer with outgoing weights, input side first
    fn accumulate_gradients(&mut self) {
        for k in 0..self.layers.len() - 1 {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            head[k].accumulate_gradients(
                tail[0].deltas().view(),
                self.optimizer.as_ref(),
                self.momentum,
            );
        }
    }

    fn update_all_weights_and_biases(&mut self) {
        for layer in &mut self.layers {
            layer.apply_accumulated_update();
        }
    }

    fn train_on_indices(
        &mut self,
        examples: &[Array1<f64>],
        expected_outputs: &[Array1<f64>],
        indices: &[usize],
    ) -> f64 {
        let mut total_cost = 0.0;
        for &n in indices {
            let expected = expected_outputs[n].view();
            self.forward_unchecked(examples[n].view());
            total_cost += self
                .cost_function
                .apply(expected, self.get_output().view());
            self.compute_errors(expected);
            self.accumulate_gradients();
        }
        self.update_all_weights_and_biases();

        debug!(batch_size = indices.len(), total_cost, "batch trained");
        total_cost
    }

    fn ensure_fed_forward(&self) -> Result<(), ModelError> {
        if !self.fed_forward {
            return Err(ModelError::ProcessingError(String::from(
                "Forward pass has not been run",
            )));
        }
        Ok(())
    }

    /// Validates a training set before any state is touched
    fn validate_training_inputs(
        &self,
        inputs: &[Array1<f64>],
        expected_outputs: &[Array1<f64>],
    ) -> Result<(), ModelError> {
        if inputs.is_empty() {
            return Err(ModelError::InputValidationError(
                "Training batch cannot be empty".to_string(),
            ));
        }
        if inputs.len() != expected_outputs.len() {
            return Err(ModelError::InputValidationError(format!(
                "Batch size mismatch: {} examples, {} expected outputs",
                inputs.len(),
                expected_outputs.len()
            )));
        }

        let input_size = self.input_layer().size();
        let output_size = self.output_layer().size();
        for (n, (input, expected)) in inputs.iter().zip(expected_outputs).enumerate() {
            validate_length(input.len(), input_size, &format!("example {} input", n))?;
            validate_length(
                expected.len(),
                output_size,
                &format!("example {} expected output", n),
            )?;
        }
        Ok(())
    }
}

/// Position-based name of a layer, used in error messages and summaries
pub(crate) fn layer_label(index: usize, layer_count: usize) -> String {
    if index == 0 {
        "input layer".to_string()
    } else if index + 1 == layer_count {
        "output layer".to_string()
    } else {
        format!("hidden layer {}", index)
    }
}

fn validate_length(actual: usize, expected: usize, what: &str) -> Result<(), ModelError> {
    if actual != expected {
        return Err(ModelError::InputValidationError(format!(
            "{} has length {}, expected {}",
            what, actual, expected
        )));
    }
    Ok(())
}

fn argmax(values: ArrayView1<f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

fn epoch_progress_bar(epochs: usize) -> Result<ProgressBar, ModelError> {
    let progress_bar = ProgressBar::new(epochs as u64);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} | Loss: {msg}")
        .map_err(|e| {
            ModelError::ProcessingError(format!("Failed to set progress bar template: {}", e))
        })?
        .progress_chars("█▓░");
    progress_bar.set_style(style);
    Ok(progress_bar)
}
