use super::*;

#[test]
fn expected_output_is_one_hot_test() {
    let example = LabeledExample::new(array![5.1, 3.5, 1.4, 0.2], 2);
    assert_eq!(example.label(), 2);
    assert_eq!(example.features(), &array![5.1, 3.5, 1.4, 0.2]);
    assert_eq!(example.expected_output(4).unwrap(), array![0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn out_of_range_label_is_rejected_test() {
    let example = LabeledExample::new(array![1.0], 3);
    assert!(matches!(
        example.expected_output(3),
        Err(ModelError::InputValidationError(_))
    ));
}
