pub use crate::neural_network::activation::Activation;
pub use crate::neural_network::cost_function::CostFunction;
pub use crate::neural_network::labeled_example::LabeledExample;
pub use crate::neural_network::layer::NeuronLayer;
pub use crate::neural_network::network::Network;
pub use crate::neural_network::network_builder::NetworkBuilder;
pub use crate::neural_network::optimizer::{GradientDescent, Optimizer};
pub use crate::neural_network::weight_initializer::WeightInitializer;
