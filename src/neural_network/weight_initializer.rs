use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

/// Strategies for filling a layer's weight matrix at construction time
///
/// The matrix has shape `(rows, cols)` = `(size, next_size)`; initializers never change it.
///
/// # Variants
///
/// - `Gaussian` - every entry drawn from N(0, 1)
/// - `XavierUniform` - uniform in `[-f, f]` with `f = sqrt(6 / (rows + cols))`
/// - `XavierNormal` - N(0, 1) scaled by `sqrt(2 / (rows + cols))`
/// - `HeNormal` - N(0, 1) scaled by `sqrt(2 / rows)`, intended for the ReLU family
/// - `Manual` - leaves the matrix untouched; weights are supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightInitializer {
    #[default]
    Gaussian,
    XavierUniform,
    XavierNormal,
    HeNormal,
    Manual,
}

impl WeightInitializer {
    /// Human readable name of the initializer
    pub fn name(&self) -> &'static str {
        match self {
            WeightInitializer::Gaussian => "Gaussian",
            WeightInitializer::XavierUniform => "XavierUniform",
            WeightInitializer::XavierNormal => "XavierNormal",
            WeightInitializer::HeNormal => "HeNormal",
            WeightInitializer::Manual => "Manual",
        }
    }

    /// Fills `weights` in place according to the strategy
    ///
    /// # Parameters
    ///
    /// - `weights` - Matrix to populate, its shape is preserved
    /// - `rng` - Random source used for every sampled entry
    pub fn init<R: Rng + ?Sized>(&self, weights: &mut Array2<f64>, rng: &mut R) {
        if weights.is_empty() {
            return;
        }
        let (rows, cols) = weights.dim();

        match self {
            WeightInitializer::Gaussian => {
                weights.mapv_inplace(|_| rng.sample::<f64, _>(StandardNormal));
            }
            WeightInitializer::XavierUniform => {
                let factor = (6.0 / (rows + cols) as f64).sqrt();
                weights.mapv_inplace(|_| rng.random_range(-factor..=factor));
            }
            WeightInitializer::XavierNormal => {
                let factor = (2.0 / (rows + cols) as f64).sqrt();
                weights.mapv_inplace(|_| rng.sample::<f64, _>(StandardNormal) * factor);
            }
            WeightInitializer::HeNormal => {
                let factor = (2.0 / rows as f64).sqrt();
                weights.mapv_inplace(|_| rng.sample::<f64, _>(StandardNormal) * factor);
            }
            WeightInitializer::Manual => {}
        }
    }
}
