use crate::ModelError;
use ndarray::Array1;

/// A feature vector paired with its class index, as produced by a dataset loader
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    features: Array1<f64>,
    label: usize,
}

impl LabeledExample {
    pub fn new(features: Array1<f64>, label: usize) -> Self {
        Self { features, label }
    }

    pub fn features(&self) -> &Array1<f64> {
        &self.features
    }

    pub fn label(&self) -> usize {
        self.label
    }

    /// One-hot target vector for the label
    ///
    /// # Parameters
    ///
    /// * `num_classes` - Length of the target vector (the output layer size)
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - Zeros everywhere except 1.0 at `label`
    /// - `Err(ModelError::InputValidationError)` - If `label >= num_classes`
    pub fn expected_output(&self, num_classes: usize) -> Result<Array1<f64>, ModelError> {
        if self.label >= num_classes {
            return Err(ModelError::InputValidationError(format!(
                "label {} is out of range for {} classes",
                self.label, num_classes
            )));
        }
        let mut expected = Array1::zeros(num_classes);
        expected[self.label] = 1.0;
        Ok(expected)
    }
}
