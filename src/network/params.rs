use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::math::matrix::Matrix;

/// Weights and biases of the two dense layers.
///
/// Shapes are fixed at construction:
/// - `weights_input_hidden`  — input × hidden
/// - `bias_hidden`           — hidden
/// - `weights_hidden_output` — hidden × output
/// - `bias_output`           — output
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub weights_input_hidden: Matrix,
    pub bias_hidden: Vec<f64>,
    pub weights_hidden_output: Matrix,
    pub bias_output: Vec<f64>,
}

impl Parameters {
    /// Standard-normal weights from a generator seeded with `seed`, zero biases.
    ///
    /// The input→hidden matrix is drawn first, then hidden→output, so equal
    /// seeds and sizes always give identical parameters.
    pub fn init(input_size: usize, hidden_size: usize, output_size: usize, seed: u64) -> Parameters {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights_input_hidden = Matrix::random_normal(input_size, hidden_size, &mut rng);
        let weights_hidden_output = Matrix::random_normal(hidden_size, output_size, &mut rng);
        Parameters {
            weights_input_hidden,
            bias_hidden: vec![0.0; hidden_size],
            weights_hidden_output,
            bias_output: vec![0.0; output_size],
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights_input_hidden.rows
    }

    pub fn hidden_size(&self) -> usize {
        self.weights_input_hidden.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights_hidden_output.cols
    }
}
