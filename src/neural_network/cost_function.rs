use ndarray::{Array1, ArrayView1, Zip};

/// Cost functions comparing an expected output vector with the network's actual output
///
/// `apply_derivative` always returns the true gradient dCost/dActual; the optimizer turns
/// it into a descent step.
///
/// # Variants
///
/// - `MeanSquaredError` - `(1/n) Σ (actual - expected)²`
/// - `Quadratic` - `Σ (actual - expected)²`
/// - `HalfQuadratic` - `0.5 Σ (actual - expected)²`
/// - `CrossEntropy` - `-Σ expected · ln(actual)`, a zero `actual` contributes nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostFunction {
    #[default]
    MeanSquaredError,
    Quadratic,
    HalfQuadratic,
    CrossEntropy,
}

impl CostFunction {
    /// Human readable name of the cost function
    pub fn name(&self) -> &'static str {
        match self {
            CostFunction::MeanSquaredError => "MeanSquaredError",
            CostFunction::Quadratic => "Quadratic",
            CostFunction::HalfQuadratic => "HalfQuadratic",
            CostFunction::CrossEntropy => "CrossEntropy",
        }
    }

    /// Computes the scalar cost
    ///
    /// # Parameters
    ///
    /// - `expected` - Target values
    /// - `actual` - Values produced by the network, same length as `expected`
    ///
    /// # Returns
    ///
    /// * `f64` - The cost value
    pub fn apply(&self, expected: ArrayView1<f64>, actual: ArrayView1<f64>) -> f64 {
        debug_assert_eq!(expected.len(), actual.len());

        match self {
            CostFunction::MeanSquaredError => {
                let n = expected.len() as f64;
                squared_error_sum(expected, actual) / n
            }
            CostFunction::Quadratic => squared_error_sum(expected, actual),
            CostFunction::HalfQuadratic => 0.5 * squared_error_sum(expected, actual),
            CostFunction::CrossEntropy => expected
                .iter()
                .zip(actual.iter())
                .map(|(&e, &a)| if a != 0.0 { -e * a.ln() } else { 0.0 })
                .sum(),
        }
    }

    /// Computes the gradient of the cost with respect to `actual`
    ///
    /// # Parameters
    ///
    /// - `expected` - Target values
    /// - `actual` - Values produced by the network, same length as `expected`
    ///
    /// # Returns
    ///
    /// * `Array1<f64>` - dCost/dActual, same length as the inputs
    pub fn apply_derivative(
        &self,
        expected: ArrayView1<f64>,
        actual: ArrayView1<f64>,
    ) -> Array1<f64> {
        debug_assert_eq!(expected.len(), actual.len());

        let n = expected.len() as f64;
        let factor = match self {
            CostFunction::MeanSquaredError => 2.0 / n,
            CostFunction::Quadratic => 2.0,
            CostFunction::HalfQuadratic => 1.0,
            CostFunction::CrossEntropy => {
                return Zip::from(&expected)
                    .and(&actual)
                    .map_collect(|&e, &a| if a != 0.0 { -e / a } else { 0.0 });
            }
        };

        Zip::from(&expected)
            .and(&actual)
            .map_collect(|&e, &a| factor * (a - e))
    }
}

fn squared_error_sum(expected: ArrayView1<f64>, actual: ArrayView1<f64>) -> f64 {
    expected
        .iter()
        .zip(actual.iter())
        .map(|(&e, &a)| (a - e) * (a - e))
        .sum()
}
