/// Module that contains activation function implementations
pub mod activation;
/// Module that contains cost function implementations
pub mod cost_function;
/// Module that contains the labeled example type consumed from dataset loaders
pub mod labeled_example;
/// Module that contains the neuron layer implementation
pub mod layer;
/// Module that contains the feed-forward network and its training routines
pub mod network;
/// Module that contains the fluent network builder
pub mod network_builder;
/// Module that contains the neuron value holder
pub mod neuron;
/// Module that contains optimization rules for weight updates
pub mod optimizer;
/// Module that contains weight initialization strategies
pub mod weight_initializer;

pub use activation::*;
pub use cost_function::*;
pub use labeled_example::*;
pub use layer::*;
pub use network::*;
pub use network_builder::*;
pub use neuron::*;
pub use optimizer::*;
pub use weight_initializer::*;

use crate::ModelError;
