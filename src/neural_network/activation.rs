use ndarray::{Array1, Array2, ArrayView1};

/// Slope used by `LeakyReLU` for negative inputs
pub const LEAKY_RELU_SLOPE: f64 = 0.01;

/// Activation function enum, supporting Identity, ReLU, LeakyReLU, Sigmoid, Softplus,
/// BentIdentity and Softmax
///
/// Every variant except `Softmax` is applied element-wise. `Softmax` normalizes across
/// the whole vector and its derivative is a full Jacobian, which `apply_derivative`
/// builds and multiplies internally so that every variant shares the same
/// "vector in, vector out" call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    Identity,
    ReLU,
    LeakyReLU,
    #[default]
    Sigmoid,
    Softplus,
    BentIdentity,
    Softmax,
}

impl Activation {
    /// Human readable name of the activation, used in summaries and logs
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "Identity",
            Activation::ReLU => "ReLU",
            Activation::LeakyReLU => "LeakyReLU",
            Activation::Sigmoid => "Sigmoid",
            Activation::Softplus => "Softplus",
            Activation::BentIdentity => "BentIdentity",
            Activation::Softmax => "Softmax",
        }
    }

    /// Forward application of the activation function
    ///
    /// # Parameters
    ///
    /// * `x` - Pre-activation values (the net output of the previous layer)
    ///
    /// # Returns
    ///
    /// * `Array1<f64>` - A new vector with the activation applied
    pub fn apply(&self, x: ArrayView1<f64>) -> Array1<f64> {
        match self {
            Activation::Identity => x.to_owned(),
            Activation::ReLU => x.mapv(|v| if v <= 0.0 { 0.0 } else { v }),
            Activation::LeakyReLU => x.mapv(|v| if v > 0.0 { v } else { LEAKY_RELU_SLOPE * v }),
            Activation::Sigmoid => x.mapv(sigmoid),
            Activation::Softplus => x.mapv(softplus),
            Activation::BentIdentity => x.mapv(|v| ((v * v + 1.0).sqrt() - 1.0) / 2.0 + v),
            Activation::Softmax => softmax(x),
        }
    }

    /// Backward application of the activation function (chain rule included)
    ///
    /// Returns dCost/dInput given dCost/dOutput. Sigmoid and Softmax evaluate their
    /// derivative on the cached `output`, the other variants on the cached `input`.
    ///
    /// # Parameters
    ///
    /// - `input` - Pre-activation values the activation was applied to
    /// - `output` - The values produced by `apply(input)`
    /// - `upstream` - Gradient of the cost with respect to `output`
    ///
    /// # Returns
    ///
    /// * `Array1<f64>` - Gradient of the cost with respect to `input`
    pub fn apply_derivative(
        &self,
        input: ArrayView1<f64>,
        output: ArrayView1<f64>,
        upstream: ArrayView1<f64>,
    ) -> Array1<f64> {
        debug_assert_eq!(input.len(), upstream.len());
        debug_assert_eq!(output.len(), upstream.len());

        if *self == Activation::Softmax {
            return softmax_jacobian(output).dot(&upstream);
        }

        let mut result = Array1::<f64>::zeros(upstream.len());
        for (i, r) in result.iter_mut().enumerate() {
            *r = self.derivative_at(input[i], output[i]) * upstream[i];
        }
        result
    }

    /// Element-wise derivative at a single point; `x` is the input, `y` the output
    fn derivative_at(&self, x: f64, y: f64) -> f64 {
        match self {
            Activation::Identity => 1.0,
            Activation::ReLU => {
                if x <= 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Activation::LeakyReLU => {
                if x < 0.0 {
                    LEAKY_RELU_SLOPE
                } else {
                    1.0
                }
            }
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Softplus => sigmoid(x),
            Activation::BentIdentity => x / (2.0 * (x * x + 1.0).sqrt()) + 1.0,
            // handled as a full Jacobian in `apply_derivative`
            Activation::Softmax => 1.0,
        }
    }
}

/// Builds the softmax Jacobian `J[i][j] = s_i * (δ_ij - s_j)` from a softmax output `s`
///
/// # Parameters
///
/// * `output` - An already computed softmax output
///
/// # Returns
///
/// * `Array2<f64>` - Square matrix of partial derivatives dOutput_i/dInput_j
pub fn softmax_jacobian(output: ArrayView1<f64>) -> Array2<f64> {
    let n = output.len();
    Array2::from_shape_fn((n, n), |(i, j)| {
        let kronecker_delta = if i == j { 1.0 } else { 0.0 };
        output[i] * (kronecker_delta - output[j])
    })
}

fn softmax(x: ArrayView1<f64>) -> Array1<f64> {
    // shifting by the max keeps exp() finite
    let max_val = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut out = x.mapv(|v| (v - max_val).exp());
    let sum = out.sum();
    out.mapv_inplace(|v| v / sum);
    out
}

#[inline]
pub(crate) fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

#[inline]
fn softplus(x: f64) -> f64 {
    // ln(1 + e^x) without overflowing for large x
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}
