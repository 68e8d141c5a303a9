use super::Optimizer;
use super::input_validation_function::validate_learning_rate;
use crate::ModelError;

/// Plain gradient descent.
///
/// Moves each parameter against its gradient, scaled by the learning rate:
/// `step = -learning_rate * gradient`.
///
/// # Fields
///
/// * `learning_rate` - Learning rate controlling the size of parameter updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Creates a new gradient descent optimizer with the specified learning rate.
    ///
    /// # Parameters
    ///
    /// * `learning_rate` - Step size for parameter updates, must be positive and finite
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new GradientDescent optimizer instance
    /// - `Err(ModelError::ConfigurationError)` - If the learning rate is invalid
    pub fn new(learning_rate: f64) -> Result<Self, ModelError> {
        validate_learning_rate(learning_rate)?;
        Ok(Self { learning_rate })
    }

    /// Gets the learning rate
    pub fn get_learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    fn apply(&self, gradient: f64) -> f64 {
        -self.learning_rate * gradient
    }

    fn name(&self) -> &str {
        "GradientDescent"
    }
}

impl Default for GradientDescent {
    /// Gradient descent with a learning rate of 0.5
    fn default() -> Self {
        Self { learning_rate: 0.5 }
    }
}
