use super::*;

const SQUARED_COSTS: [CostFunction; 3] = [
    CostFunction::MeanSquaredError,
    CostFunction::Quadratic,
    CostFunction::HalfQuadratic,
];

#[test]
fn mse_of_identical_vectors_is_zero_test() {
    let ones = array![1.0, 1.0];
    assert_eq!(CostFunction::MeanSquaredError.apply(ones.view(), ones.view()), 0.0);
}

#[test]
fn derivative_vanishes_when_output_matches_test() {
    let expected = array![0.2, -1.0, 3.5];
    for cost in SQUARED_COSTS {
        let grad = cost.apply_derivative(expected.view(), expected.view());
        assert!(grad.iter().all(|&g| g == 0.0), "{} gradient: {:?}", cost.name(), grad);
    }
}

#[test]
fn squared_cost_values_test() {
    let expected = array![0.0, 0.0];
    let actual = array![1.0, 3.0];

    assert_relative_eq!(CostFunction::MeanSquaredError.apply(expected.view(), actual.view()), 5.0);
    assert_relative_eq!(CostFunction::Quadratic.apply(expected.view(), actual.view()), 10.0);
    assert_relative_eq!(CostFunction::HalfQuadratic.apply(expected.view(), actual.view()), 5.0);

    assert_eq!(
        CostFunction::MeanSquaredError.apply_derivative(expected.view(), actual.view()),
        array![1.0, 3.0]
    );
    assert_eq!(
        CostFunction::Quadratic.apply_derivative(expected.view(), actual.view()),
        array![2.0, 6.0]
    );
    assert_eq!(
        CostFunction::HalfQuadratic.apply_derivative(expected.view(), actual.view()),
        array![1.0, 3.0]
    );
}

#[test]
fn cross_entropy_values_test() {
    let expected = array![0.0, 1.0, 0.0];
    let actual = array![0.2, 0.5, 0.3];

    assert_relative_eq!(
        CostFunction::CrossEntropy.apply(expected.view(), actual.view()),
        2f64.ln(),
        epsilon = 1e-12
    );
    assert_eq!(
        CostFunction::CrossEntropy.apply_derivative(expected.view(), actual.view()),
        array![0.0, -2.0, 0.0]
    );
}

#[test]
fn cross_entropy_zero_actual_contributes_nothing_test() {
    let expected = array![1.0, 0.0];
    let actual = array![0.0, 1.0];

    let cost = CostFunction::CrossEntropy.apply(expected.view(), actual.view());
    assert!(cost.is_finite());
    assert_eq!(cost, 0.0);

    let grad = CostFunction::CrossEntropy.apply_derivative(expected.view(), actual.view());
    assert!(grad.iter().all(|g| g.is_finite()));
    assert_eq!(grad, array![0.0, 0.0]);
}

#[test]
fn derivative_matches_finite_differences_test() {
    let step = 1e-6;
    let expected = array![0.1, 0.6, 0.3];
    let actual = array![0.25, 0.4, 0.35];

    for cost in [
        CostFunction::MeanSquaredError,
        CostFunction::Quadratic,
        CostFunction::HalfQuadratic,
        CostFunction::CrossEntropy,
    ] {
        let analytic = cost.apply_derivative(expected.view(), actual.view());
        for k in 0..actual.len() {
            let mut plus = actual.clone();
            plus[k] += step;
            let mut minus = actual.clone();
            minus[k] -= step;
            let numeric = (cost.apply(expected.view(), plus.view())
                - cost.apply(expected.view(), minus.view()))
                / (2.0 * step);
            assert_abs_diff_eq!(analytic[k], numeric, epsilon = 1e-5);
        }
    }
}
