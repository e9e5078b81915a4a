use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`.
///
/// Inputs are not clipped: for |x| beyond roughly 37 the result rounds to
/// exactly `0.0` or `1.0`, and the evaluation never produces NaN for finite x.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Sigmoid derivative expressed through the activation `a = sigmoid(z)`.
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}
