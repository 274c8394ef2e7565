use super::*;

#[test]
fn linear_test() {
    let linear = Activation::Linear;

    for &x in &[-3.5f32, 0.0, 0.25, 7.0] {
        assert_eq!(linear.apply(x), x);
        assert_eq!(linear.derivative(x), 1.0);
        assert_eq!(linear.antiderivative(x), x);
    }
}

#[test]
fn sigmoid_values_test() {
    let sigmoid = Activation::Sigmoid;

    assert_relative_eq!(sigmoid.apply(0.0), 0.5);
    assert_relative_eq!(sigmoid.derivative(0.0), 0.25);
    assert_relative_eq!(sigmoid.antiderivative(0.0), 2.0f32.ln(), epsilon = 1e-6);

    // logistic function is increasing and bounded by (0, 1)
    assert!(sigmoid.apply(-2.0) < sigmoid.apply(2.0));
    assert!(sigmoid.apply(-50.0) >= 0.0);
    assert!(sigmoid.apply(50.0) <= 1.0);
}

#[test]
fn sigmoid_antiderivative_does_not_overflow_test() {
    let sigmoid = Activation::Sigmoid;

    let big = sigmoid.antiderivative(200.0);
    assert!(big.is_finite());
    assert_relative_eq!(big, 200.0, epsilon = 1e-3);

    let small = sigmoid.antiderivative(-200.0);
    assert!(small.is_finite());
    assert!(small >= 0.0 && small < 1e-6);
}

#[test]
fn sigmoid_derivative_matches_finite_difference_test() {
    let sigmoid = Activation::Sigmoid;
    let h = 1e-2f32;

    for &x in &[-2.0f32, -0.5, 0.0, 0.75, 3.0] {
        let numeric = (sigmoid.apply(x + h) - sigmoid.apply(x - h)) / (2.0 * h);
        assert_relative_eq!(sigmoid.derivative(x), numeric, epsilon = 1e-3);

        // the antiderivative's slope is the function itself
        let slope = (sigmoid.antiderivative(x + h) - sigmoid.antiderivative(x - h)) / (2.0 * h);
        assert_relative_eq!(sigmoid.apply(x), slope, epsilon = 1e-3);
    }
}

#[test]
fn threshold_test() {
    let threshold = Activation::threshold(-1.0, 0.5, 2.0).unwrap();

    assert_eq!(threshold.apply(0.49), -1.0);
    assert_eq!(threshold.apply(0.5), 2.0);
    assert_eq!(threshold.apply(10.0), 2.0);

    // derivative and antiderivative are the step itself
    assert_eq!(threshold.derivative(0.0), -1.0);
    assert_eq!(threshold.derivative(1.0), 2.0);
    assert_eq!(threshold.antiderivative(0.0), -1.0);
    assert_eq!(threshold.antiderivative(1.0), 2.0);
}

#[test]
fn threshold_invalid_parameters_test() {
    let result = Activation::threshold(0.0, f32::NAN, 1.0);
    assert!(matches!(result, Err(ModelError::ConfigurationError(_))));

    let result = Activation::threshold(f32::INFINITY, 0.0, 1.0);
    assert!(matches!(result, Err(ModelError::ConfigurationError(_))));

    let unchecked = Activation::Threshold {
        zero: 0.0,
        threshold: 0.0,
        one: f32::NEG_INFINITY,
    };
    assert!(unchecked.validate().is_err());
}

#[test]
fn activation_serde_test() {
    let threshold = Activation::threshold(0.0, 0.5, 1.0).unwrap();
    let json = serde_json::to_string(&threshold).unwrap();
    assert!(json.contains("\"type\":\"Threshold\""));

    let parsed: Activation = serde_json::from_str(r#"{"type":"Sigmoid"}"#).unwrap();
    assert_eq!(parsed, Activation::Sigmoid);
}
