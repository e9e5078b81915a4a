use crate::math::matrix::Matrix;

/// Halved mean squared error over a batch.
pub struct MseLoss;

impl MseLoss {
    /// `sum((predicted - expected)²) / (2N)` where N is the number of rows.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.rows as f64;
        (predicted - expected).sum_of_squares() / (2.0 * n)
    }

    /// Output-layer error signal: `predicted - expected`, unscaled.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        predicted - expected
    }
}
