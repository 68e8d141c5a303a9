use super::*;

fn mean_and_std(weights: &Array2<f64>) -> (f64, f64) {
    let n = weights.len() as f64;
    let mean = weights.sum() / n;
    let variance = weights.iter().map(|w| (w - mean) * (w - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[test]
fn initializers_preserve_shape_test() {
    let mut rng = StdRng::seed_from_u64(1);
    for initializer in [
        WeightInitializer::Gaussian,
        WeightInitializer::XavierUniform,
        WeightInitializer::XavierNormal,
        WeightInitializer::HeNormal,
        WeightInitializer::Manual,
    ] {
        let mut weights = Array2::<f64>::zeros((7, 3));
        initializer.init(&mut weights, &mut rng);
        assert_eq!(weights.dim(), (7, 3), "{}", initializer.name());

        let mut empty = Array2::<f64>::zeros((4, 0));
        initializer.init(&mut empty, &mut rng);
        assert_eq!(empty.dim(), (4, 0));
    }
}

#[test]
fn manual_leaves_weights_untouched_test() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut weights = array![[0.15, 0.25], [0.20, 0.30]];
    WeightInitializer::Manual.init(&mut weights, &mut rng);
    assert_eq!(weights, array![[0.15, 0.25], [0.20, 0.30]]);
}

#[test]
fn xavier_uniform_stays_within_bounds_test() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut weights = Array2::<f64>::zeros((30, 20));
    WeightInitializer::XavierUniform.init(&mut weights, &mut rng);

    let factor = (6.0 / 50.0f64).sqrt();
    assert!(weights.iter().all(|w| w.abs() <= factor));
    assert!(weights.iter().any(|&w| w != 0.0));
}

#[test]
fn normal_initializers_have_expected_spread_test() {
    let mut rng = StdRng::seed_from_u64(3);
    let (rows, cols) = (200, 300);

    let cases = [
        (WeightInitializer::Gaussian, 1.0),
        (WeightInitializer::XavierNormal, (2.0 / (rows + cols) as f64).sqrt()),
        (WeightInitializer::HeNormal, (2.0 / rows as f64).sqrt()),
    ];

    for (initializer, expected_std) in cases {
        let mut weights = Array2::<f64>::zeros((rows, cols));
        initializer.init(&mut weights, &mut rng);
        let (mean, std) = mean_and_std(&weights);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.05 * expected_std);
        assert_relative_eq!(std, expected_std, max_relative = 0.05);
    }
}

#[test]
fn seeded_initialization_is_reproducible_test() {
    let mut a = Array2::<f64>::zeros((5, 4));
    let mut b = Array2::<f64>::zeros((5, 4));
    WeightInitializer::XavierNormal.init(&mut a, &mut StdRng::seed_from_u64(9));
    WeightInitializer::XavierNormal.init(&mut b, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}
