use super::network::layer_label;
use super::*;
use tracing::info;

/// Fluent builder assembling a validated [`Network`].
///
/// A network needs an input layer, at least one hidden layer and an output layer, declared
/// in order. `build` checks that every layer is non-empty, that consecutive layers chain
/// (`layer[k].next_size == layer[k + 1].size`) and that the output layer has no outgoing
/// weights.
///
/// # Example
/// ```rust
/// use rustynn::prelude::*;
///
/// let network = NetworkBuilder::new()
///     .with_input_layer(NeuronLayer::new(4, 6))
///     .add_hidden_layer(NeuronLayer::new(6, 10))
///     .with_output_layer(NeuronLayer::new_with_activation(10, 0, Activation::Softmax))
///     .build()
///     .unwrap();
/// assert_eq!(network.hidden_layers().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    input_layer: Option<NeuronLayer>,
    hidden_layers: Vec<NeuronLayer>,
    output_layer: Option<NeuronLayer>,
}

impl NetworkBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_layer(mut self, layer: NeuronLayer) -> Self {
        self.input_layer = Some(layer);
        self
    }

    /// Appends a hidden layer; order of calls is the order of the layers
    pub fn add_hidden_layer(mut self, layer: NeuronLayer) -> Self {
        self.hidden_layers.push(layer);
        self
    }

    pub fn with_output_layer(mut self, layer: NeuronLayer) -> Self {
        self.output_layer = Some(layer);
        self
    }

    /// Validates the declared topology and builds the network
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - A network with default cost function, optimizer and momentum
    /// - `Err(ModelError::ConfigurationError)` - If a layer is missing, empty or does not chain
    pub fn build(self) -> Result<Network, ModelError> {
        let input_layer = self.input_layer.ok_or_else(|| {
            ModelError::ConfigurationError("input layer is not set".to_string())
        })?;
        let output_layer = self.output_layer.ok_or_else(|| {
            ModelError::ConfigurationError("output layer is not set".to_string())
        })?;
        if self.hidden_layers.is_empty() {
            return Err(ModelError::ConfigurationError(
                "network needs at least one hidden layer".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(self.hidden_layers.len() + 2);
        layers.push(input_layer);
        layers.extend(self.hidden_layers);
        layers.push(output_layer);
        let layer_count = layers.len();

        for (k, layer) in layers.iter().enumerate() {
            if layer.size() == 0 {
                return Err(ModelError::ConfigurationError(format!(
                    "{} must have at least one neuron",
                    layer_label(k, layer_count)
                )));
            }
        }

        for (k, pair) in layers.windows(2).enumerate() {
            if pair[0].next_size() != pair[1].size() {
                return Err(ModelError::ConfigurationError(format!(
                    "{} declares next_size {} but {} has size {}",
                    layer_label(k, layer_count),
                    pair[0].next_size(),
                    layer_label(k + 1, layer_count),
                    pair[1].size()
                )));
            }
        }

        let output = &layers[layer_count - 1];
        if output.next_size() != 0 {
            return Err(ModelError::ConfigurationError(format!(
                "output layer must have next_size 0, got {}",
                output.next_size()
            )));
        }

        let network = Network::from_layers(layers);
        info!(
            layers = layer_count,
            params = network.param_count(),
            "network built"
        );
        Ok(network)
    }
}
