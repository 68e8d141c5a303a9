/// Gradient descent with a fixed learning rate
pub mod gradient_descent;
/// Validation helpers shared by optimizers and the network's hyperparameter setters
pub(crate) mod input_validation_function;

pub use gradient_descent::*;

/// Defines the interface for optimization rules.
///
/// An optimizer scales one raw gradient component into a weight-space step. The step is
/// added to the weight, so a descent rule returns a value with the opposite sign of the
/// gradient. Momentum is added by the layer on top of the optimizer's output.
pub trait Optimizer: Send + Sync {
    /// Converts a gradient dCost/dWeight into the step added to that weight.
    ///
    /// # Parameters
    ///
    /// * `gradient` - The raw gradient of a single weight or bias
    ///
    /// # Returns
    ///
    /// * `f64` - The step to add to the parameter
    fn apply(&self, gradient: f64) -> f64;

    /// Returns the name of the optimizer (e.g. "GradientDescent").
    fn name(&self) -> &str {
        "Unknown"
    }
}
