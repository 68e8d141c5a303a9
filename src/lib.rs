//! # rustynn
//!
//! A from-scratch feed-forward neural network trainer: a layered perceptron with
//! configurable activation functions, cost functions, weight initializers and a
//! gradient-descent optimizer with momentum, trained by per-example (online) or batched
//! backpropagation.
//!
//! # Examples
//! ```rust
//! use ndarray::array;
//! use rustynn::prelude::*;
//!
//! // The step-by-step backpropagation reference network
//! let input = NeuronLayer::new_with_initializer(2, 2, Activation::Sigmoid, WeightInitializer::Manual)
//!     .with_weights(array![[0.15, 0.25], [0.20, 0.30]])
//!     .unwrap()
//!     .with_bias(0.35);
//! let hidden = NeuronLayer::new_with_initializer(2, 2, Activation::Sigmoid, WeightInitializer::Manual)
//!     .with_weights(array![[0.40, 0.50], [0.45, 0.55]])
//!     .unwrap()
//!     .with_bias(0.60);
//!
//! let mut network = NetworkBuilder::new()
//!     .with_input_layer(input)
//!     .add_hidden_layer(hidden)
//!     .with_output_layer(NeuronLayer::new(2, 0))
//!     .build()
//!     .unwrap();
//! network.set_cost_function(CostFunction::HalfQuadratic);
//!
//! let example = array![0.05, 0.10];
//! let expected = array![0.01, 0.99];
//! network.feed_forward(example.view()).unwrap();
//! let cost = network.get_cost(expected.view()).unwrap();
//! assert!((cost - 0.298371109).abs() < 1e-9);
//! ```

/// Error types shared by the whole crate
pub mod error;

pub use error::ModelError;

/// Components for building and training feed-forward neural networks.
///
/// # Core Components
///
/// ## Strategies
/// - **Activation**: Identity, ReLU, LeakyReLU, Sigmoid, Softplus, BentIdentity, Softmax
/// - **CostFunction**: MeanSquaredError, Quadratic, HalfQuadratic, CrossEntropy
/// - **WeightInitializer**: Gaussian, XavierUniform, XavierNormal, HeNormal, Manual
/// - **Optimizer**: trait turning a gradient into a weight step, with **GradientDescent**
///
/// ## Model Architecture
/// - **NeuronLayer**: weights, biases, neurons and the gradient accumulators of one stage
/// - **Network**: input, hidden and output layers driven by forward and backward passes
/// - **NetworkBuilder**: fluent, validated network assembly
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustynn::neural_network::*;
///
/// let mut network = NetworkBuilder::new()
///     .with_input_layer(NeuronLayer::new_with_initializer(4, 6, Activation::Identity, WeightInitializer::XavierNormal).with_bias(0.5))
///     .add_hidden_layer(NeuronLayer::new_with_initializer(6, 3, Activation::Sigmoid, WeightInitializer::XavierNormal).with_bias(0.5))
///     .with_output_layer(NeuronLayer::new_with_activation(3, 0, Activation::Softmax))
///     .build()
///     .unwrap();
/// network.set_cost_function(CostFunction::CrossEntropy);
/// network.set_optimizer(GradientDescent::new(0.01).unwrap());
/// network.set_momentum(0.7).unwrap();
///
/// let inputs = vec![array![0.0, 0.0, 0.0, 1.0], array![0.0, 0.0, 1.0, 0.0]];
/// let expected = vec![array![1.0, 0.0, 0.0], array![0.0, 1.0, 0.0]];
/// let total_cost = network.train_batch(&inputs, &expected).unwrap();
/// assert!(total_cost.is_finite());
/// ```
#[cfg(feature = "neural_network")]
pub mod neural_network;

/// A convenience module that re-exports the most commonly used types of this crate.
///
/// # Examples
/// ```rust
/// use rustynn::prelude::*;
/// ```
pub mod prelude;
